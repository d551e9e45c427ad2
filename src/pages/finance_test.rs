use records::collection::{CollectionSpec, Query, StatValue, paged_view};

use super::*;
use crate::domain::finance::seed_invoices;

const EPSILON: f64 = 1e-9;

#[test]
fn search_matches_vendor_name_and_number() {
    let config = invoices_config();
    let invoices = seed_invoices();
    let spec = CollectionSpec::new(config.search_fields.clone()).with_page_size(100);

    let by_vendor = paged_view(
        &invoices,
        &spec,
        &[],
        &Query { search: "abc".to_owned(), selections: vec![] },
        1,
    );
    let ids: Vec<&str> = by_vendor.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["INV-1001", "INV-1004"]);

    let by_number = paged_view(
        &invoices,
        &spec,
        &[],
        &Query { search: "1006".to_owned(), selections: vec![] },
        1,
    );
    assert_eq!(by_number.items.len(), 1);
    assert_eq!(by_number.items[0].id, "INV-1006");
}

#[test]
fn status_filter_intersects_with_search() {
    let config = invoices_config();
    let invoices = seed_invoices();
    let spec = CollectionSpec::new(config.search_fields.clone()).with_page_size(100);

    let view = paged_view(
        &invoices,
        &spec,
        &config.filters,
        &Query { search: "abc".to_owned(), selections: vec!["Paid".to_owned()] },
        1,
    );
    let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["INV-1004"]);
}

#[test]
fn outstanding_amount_sums_open_and_approved_invoices() {
    let config = invoices_config();
    let invoices = seed_invoices();
    // INV-1001 (1500.00) + INV-1002 (1940 + 407 tax) + INV-1006 (1560 + 31.20
    // withholding).
    let stat = config.stats.iter().find(|s| s.label == "Outstanding amount").expect("stat");
    match (stat.compute)(&invoices) {
        StatValue::Amount(amount) => assert!((amount - 5438.2).abs() < EPSILON),
        StatValue::Count(_) => panic!("expected an amount"),
    }
}

#[test]
fn grand_total_column_renders_formatted_amounts() {
    let config = invoices_config();
    let invoices = seed_invoices();
    let column = config.columns.iter().find(|c| c.header == "Grand total").expect("column");
    assert!(column.numeric);
    let rendered = (column.cell)(&invoices[0]);
    assert_eq!(rendered, "1,500.00");
}
