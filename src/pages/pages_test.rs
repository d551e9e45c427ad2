use super::*;

#[derive(Clone)]
struct Row {
    id: String,
}

fn rows(ids: &[&str]) -> Vec<Row> {
    ids.iter().map(|id| Row { id: (*id).to_owned() }).collect()
}

#[test]
fn next_id_is_one_past_the_highest_suffix() {
    let items = rows(&["INV-1001", "INV-1004", "INV-1002"]);
    assert_eq!(next_id(&items, |r: &Row| r.id.clone(), "INV-", 1000), "INV-1005");
}

#[test]
fn next_id_survives_deletions_without_colliding() {
    // INV-1002 was deleted; the next number must not reuse INV-1003.
    let items = rows(&["INV-1001", "INV-1003"]);
    assert_eq!(next_id(&items, |r: &Row| r.id.clone(), "INV-", 1000), "INV-1004");
}

#[test]
fn next_id_starts_from_the_floor_when_empty() {
    let items: Vec<Row> = Vec::new();
    assert_eq!(next_id(&items, |r: &Row| r.id.clone(), "C-", 1000), "C-1001");
}

#[test]
fn next_id_ignores_foreign_prefixes() {
    let items = rows(&["INV-1001", "C-9000"]);
    assert_eq!(next_id(&items, |r: &Row| r.id.clone(), "INV-", 1000), "INV-1002");
}
