use super::*;

const EPSILON: f64 = 1e-9;

// The A/P scenario: ABC Suppliers, one line of 10 × 150.00 at 0% discount,
// no adjustments.
#[test]
fn abc_suppliers_invoice_totals_to_1500() {
    let invoices = seed_invoices();
    let inv = invoices.iter().find(|i| i.id == "INV-1001").expect("INV-1001 seeded");
    assert_eq!(inv.vendor_name, "ABC Suppliers");
    assert_eq!(inv.lines.len(), 1);
    assert!((inv.lines[0].total - 1500.0).abs() < EPSILON);
    assert!((inv.totals.subtotal - 1500.0).abs() < EPSILON);
    assert!((inv.totals.grand_total - 1500.0).abs() < EPSILON);
}

#[test]
fn line_item_new_derives_its_total() {
    let line = LineItem::new(1, "Safety gloves, pair", 120.0, 2.15, 10.0, "V1");
    assert!((line.total - 232.2).abs() < EPSILON);
}

#[test]
fn assemble_derives_totals_from_lines_and_adjustments() {
    let inv = Invoice::assemble(
        "INV-9000",
        "C-1001",
        "ABC Suppliers",
        "sales@abcsuppliers.example",
        "2025-07-01",
        "2025-07-31",
        InvoiceStatus::Open,
        vec![
            LineItem::new(1, "A", 2.0, 100.0, 0.0, "V0"),
            LineItem::new(2, "B", 1.0, 50.0, 0.0, "V0"),
        ],
        records::totals::Adjustments { freight: 10.0, tax: 52.5, ..Default::default() },
    );
    assert!((inv.totals.subtotal - 250.0).abs() < EPSILON);
    assert!((inv.totals.grand_total - 312.5).abs() < EPSILON);
}

#[test]
fn seed_invoice_ids_are_unique() {
    let invoices = seed_invoices();
    let mut ids: Vec<&str> = invoices.iter().map(|i| i.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), invoices.len());
}

#[test]
fn outstanding_covers_open_and_approved() {
    assert!(InvoiceStatus::Open.is_outstanding());
    assert!(InvoiceStatus::Approved.is_outstanding());
    assert!(!InvoiceStatus::Paid.is_outstanding());
    assert!(!InvoiceStatus::Closed.is_outstanding());
}
