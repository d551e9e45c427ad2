#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// line_total
// =============================================================

#[test]
fn line_total_without_discount() {
    assert!(approx_eq(line_total(10.0, 150.0, 0.0), 1500.0));
}

#[test]
fn line_total_with_discount() {
    assert!(approx_eq(line_total(4.0, 25.0, 10.0), 90.0));
    assert!(approx_eq(line_total(1.0, 99.99, 50.0), 49.995));
}

#[test]
fn line_total_full_discount_is_zero() {
    assert!(approx_eq(line_total(7.0, 31.0, 100.0), 0.0));
}

#[test]
fn line_total_zero_quantity_is_zero() {
    assert!(approx_eq(line_total(0.0, 150.0, 0.0), 0.0));
}

// =============================================================
// DocumentTotals
// =============================================================

#[test]
fn subtotal_sums_line_totals() {
    let totals = DocumentTotals::compute(&[100.0, 250.5, 49.5], Adjustments::default());
    assert!(approx_eq(totals.subtotal, 400.0));
    assert!(approx_eq(totals.grand_total, 400.0));
}

#[test]
fn grand_total_applies_every_adjustment() {
    let adjustments = Adjustments {
        discount: 50.0,
        freight: 25.0,
        rounding: 0.4,
        tax: 84.0,
        withholding: 12.0,
    };
    let totals = DocumentTotals::compute(&[400.0], adjustments);
    assert!(approx_eq(totals.grand_total, 400.0 - 50.0 + 25.0 + 0.4 + 84.0 + 12.0));
}

#[test]
fn changing_one_adjustment_moves_the_grand_total() {
    let base = DocumentTotals::compute(&[400.0], Adjustments { tax: 10.0, ..Adjustments::default() });
    let bumped =
        DocumentTotals::compute(&[400.0], Adjustments { tax: 30.0, ..Adjustments::default() });
    assert!(approx_eq(bumped.grand_total - base.grand_total, 20.0));
}

#[test]
fn empty_document_totals_to_zero() {
    let totals = DocumentTotals::compute(&[], Adjustments::default());
    assert!(approx_eq(totals.subtotal, 0.0));
    assert!(approx_eq(totals.grand_total, 0.0));
}

// Scenario: ABC Suppliers, one line of 10 × 150.00 at 0% discount, no
// adjustments — the invoice totals to exactly 1500.00.
#[test]
fn ap_invoice_scenario_totals_to_1500() {
    let line = line_total(10.0, 150.0, 0.0);
    assert!(approx_eq(line, 1500.0));
    let totals = DocumentTotals::compute(&[line], Adjustments::default());
    assert!(approx_eq(totals.subtotal, 1500.0));
    assert!(approx_eq(totals.grand_total, 1500.0));
}

// =============================================================
// format_amount
// =============================================================

#[test]
fn format_groups_thousands() {
    assert_eq!(format_amount(1500.0), "1,500.00");
    assert_eq!(format_amount(1_234_567.89), "1,234,567.89");
    assert_eq!(format_amount(999.0), "999.00");
}

#[test]
fn format_small_amounts() {
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(12.34), "12.34");
    assert_eq!(format_amount(0.5), "0.50");
}

#[test]
fn format_rounds_to_cents() {
    assert_eq!(format_amount(1234.5), "1,234.50");
    assert_eq!(format_amount(10.239), "10.24");
}

#[test]
fn format_negative_amounts() {
    assert_eq!(format_amount(-1500.0), "-1,500.00");
    assert_eq!(format_amount(-0.0), "0.00");
}
