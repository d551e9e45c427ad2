use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Doc {
    id: &'static str,
    name: &'static str,
    status: &'static str,
}

fn docs() -> Vec<Doc> {
    vec![
        Doc { id: "D-001", name: "Acme Industrial", status: "Open" },
        Doc { id: "D-002", name: "Borealis Freight", status: "Closed" },
        Doc { id: "D-003", name: "Cobalt Works", status: "Open" },
        Doc { id: "D-004", name: "Delta Machining", status: "Open" },
        Doc { id: "D-005", name: "Evergreen Supply", status: "Closed" },
        Doc { id: "D-006", name: "Fathom Marine", status: "Open" },
        Doc { id: "D-007", name: "Granite Tooling", status: "Open" },
    ]
}

fn spec() -> CollectionSpec<Doc> {
    let fields: Vec<Accessor<Doc>> = vec![|d| d.name.to_owned(), |d| d.id.to_owned()];
    CollectionSpec::new(fields).with_page_size(3)
}

fn status_filter() -> FilterSpec<Doc> {
    FilterSpec::new(
        "Status",
        vec!["Open".to_owned(), "Closed".to_owned()],
        |d| d.status.to_owned(),
    )
}

// =============================================================
// matches_search
// =============================================================

#[test]
fn search_is_case_insensitive_substring() {
    let records = docs();
    let fields: Vec<Accessor<Doc>> = vec![|d| d.name.to_owned()];
    assert!(matches_search(&records[0], &fields, "ACME"));
    assert!(matches_search(&records[0], &fields, "indus"));
    assert!(!matches_search(&records[0], &fields, "freight"));
}

#[test]
fn empty_search_matches_everything() {
    let records = docs();
    let fields: Vec<Accessor<Doc>> = vec![|d| d.name.to_owned()];
    assert!(records.iter().all(|d| matches_search(d, &fields, "")));
    assert!(records.iter().all(|d| matches_search(d, &fields, "   ")));
}

#[test]
fn search_checks_every_designated_field() {
    let records = docs();
    let fields: Vec<Accessor<Doc>> = vec![|d| d.name.to_owned(), |d| d.id.to_owned()];
    // "d-004" only appears in the id field.
    assert!(matches_search(&records[3], &fields, "d-004"));
}

#[test]
fn filtered_set_is_exactly_the_substring_matches() {
    let records = docs();
    let view = paged_view(&records, &spec().with_page_size(100), &[], &Query {
        search: "ma".to_owned(),
        selections: vec![],
    }, 1);
    // "Delta Machining" and "Fathom Marine" both contain "ma".
    let names: Vec<&str> = view.items.iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Delta Machining", "Fathom Marine"]);
}

// =============================================================
// matches_filters
// =============================================================

#[test]
fn inactive_filter_matches_everything() {
    let records = docs();
    let filters = [status_filter()];
    let selections = [String::new()];
    assert!(records.iter().all(|d| matches_filters(d, &filters, &selections)));
}

#[test]
fn active_filter_requires_exact_match() {
    let records = docs();
    let filters = [status_filter()];
    let selections = ["Closed".to_owned()];
    let matched: Vec<&str> = records
        .iter()
        .filter(|d| matches_filters(*d, &filters, &selections))
        .map(|d| d.id)
        .collect();
    assert_eq!(matched, vec!["D-002", "D-005"]);
}

#[test]
fn search_and_filter_intersect() {
    let records = docs();
    let query = Query { search: "e".to_owned(), selections: vec!["Closed".to_owned()] };
    let view = paged_view(&records, &spec().with_page_size(100), &[status_filter()], &query, 1);
    // Both closed docs contain an "e"; every open doc is excluded by the filter.
    let ids: Vec<&str> = view.items.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["D-002", "D-005"]);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn total_pages_is_ceiling_division() {
    assert_eq!(total_pages(0, 5), 0);
    assert_eq!(total_pages(1, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(7, 3), 3);
}

#[test]
fn pages_partition_the_filtered_set() {
    let records = docs();
    let s = spec();
    let query = Query::inactive(0);
    let mut collected = Vec::new();
    let pages = total_pages(records.len(), s.page_size);
    for page in 1..=pages {
        let view = paged_view(&records, &s, &[], &query, page);
        collected.extend(view.items);
    }
    assert_eq!(collected, records);
}

#[test]
fn page_past_the_end_is_empty() {
    let records = docs();
    let view = paged_view(&records, &spec(), &[], &Query::inactive(0), 99);
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.filtered_len, 7);
}

#[test]
fn page_zero_is_treated_as_page_one() {
    let records = docs();
    let view = paged_view(&records, &spec(), &[], &Query::inactive(0), 0);
    assert_eq!(view.page, 1);
    assert_eq!(view.items.len(), 3);
    assert_eq!(view.items[0].id, "D-001");
}

#[test]
fn last_page_holds_the_remainder() {
    let records = docs();
    let view = paged_view(&records, &spec(), &[], &Query::inactive(0), 3);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].id, "D-007");
}

#[test]
fn empty_filter_result_yields_empty_page() {
    let records = docs();
    let query = Query { search: "zzz".to_owned(), selections: vec![] };
    let view = paged_view(&records, &spec(), &[], &query, 1);
    assert!(view.items.is_empty());
    assert_eq!(view.filtered_len, 0);
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.total_len, 7);
}

// =============================================================
// Aggregates
// =============================================================

#[test]
fn count_where_counts_matching_records() {
    let records = docs();
    assert_eq!(count_where(&records, |d| d.status == "Open"), 5);
    assert_eq!(count_where(&records, |d| d.status == "Closed"), 2);
}

#[test]
fn sum_by_reduces_over_all_records() {
    let records = docs();
    let total = sum_by(&records, |d| if d.status == "Open" { 10.0 } else { 1.0 });
    assert!((total - 52.0).abs() < 1e-9);
}

#[test]
fn stat_value_display() {
    assert_eq!(StatValue::Count(42).display(), "42");
    assert_eq!(StatValue::Amount(1500.0).display(), "1,500.00");
}
