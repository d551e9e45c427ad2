use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: &'static str,
    qty: u32,
}

fn seeded() -> Repository<Row> {
    Repository::seeded(vec![
        Row { id: "W-01", qty: 3 },
        Row { id: "W-02", qty: 5 },
        Row { id: "W-03", qty: 8 },
    ])
}

#[test]
fn seeded_preserves_order() {
    let repo = seeded();
    assert_eq!(repo.len(), 3);
    assert_eq!(repo.items()[0].id, "W-01");
    assert_eq!(repo.items()[2].id, "W-03");
}

#[test]
fn default_is_empty() {
    let repo = Repository::<Row>::default();
    assert!(repo.is_empty());
}

#[test]
fn insert_appends_and_keeps_the_old_snapshot() {
    let before = seeded();
    let after = before.insert(Row { id: "W-04", qty: 1 });
    // Old snapshot untouched.
    assert_eq!(before.len(), 3);
    assert_eq!(after.len(), 4);
    assert_eq!(after.items()[3].id, "W-04");
}

#[test]
fn remove_where_drops_only_matches() {
    let before = seeded();
    let after = before.remove_where(|r| r.id == "W-02").expect("match");
    assert_eq!(before.len(), 3);
    assert_eq!(after.len(), 2);
    assert!(after.find(|r| r.id == "W-02").is_none());
    assert!(after.find(|r| r.id == "W-01").is_some());
}

#[test]
fn remove_where_reports_no_match() {
    let repo = seeded();
    assert_eq!(repo.remove_where(|r| r.id == "W-99"), Err(RepoError::NoMatch));
}

#[test]
fn update_where_applies_to_matches_only() {
    let before = seeded();
    let after = before
        .update_where(|r| r.qty >= 5, |r| r.qty += 100)
        .expect("match");
    assert_eq!(before.items()[1].qty, 5);
    let quantities: Vec<u32> = after.items().iter().map(|r| r.qty).collect();
    assert_eq!(quantities, vec![3, 105, 108]);
}

#[test]
fn update_where_reports_no_match() {
    let repo = seeded();
    let result = repo.update_where(|r| r.qty > 100, |r| r.qty = 0);
    assert_eq!(result, Err(RepoError::NoMatch));
}

#[test]
fn find_returns_first_match() {
    let repo = seeded();
    assert_eq!(repo.find(|r| r.qty > 4).map(|r| r.id), Some("W-02"));
}
