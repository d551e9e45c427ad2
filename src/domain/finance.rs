//! Finance records: A/P invoices with line items and derived totals.

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

use records::totals::{Adjustments, DocumentTotals, line_total};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Open,
    Approved,
    Paid,
    Closed,
}

impl InvoiceStatus {
    pub const OPTIONS: &'static [&'static str] = &["Open", "Approved", "Paid", "Closed"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Approved => "Approved",
            Self::Paid => "Paid",
            Self::Closed => "Closed",
        }
    }

    /// Still awaiting payment.
    #[must_use]
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Open | Self::Approved)
    }
}

/// One invoice line. `total` is derived from the other fields and
/// recomputed whenever any of them changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_no: u32,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount_pct: f64,
    pub tax_code: String,
    pub total: f64,
}

impl LineItem {
    /// Build a line with its total derived from quantity, price, and
    /// discount.
    #[must_use]
    pub fn new(
        line_no: u32,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        discount_pct: f64,
        tax_code: impl Into<String>,
    ) -> Self {
        Self {
            line_no,
            description: description.into(),
            quantity,
            unit_price,
            discount_pct,
            tax_code: tax_code.into(),
            total: line_total(quantity, unit_price, discount_pct),
        }
    }
}

/// An A/P invoice header with its lines and derived totals block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub vendor_id: String,
    pub vendor_name: String,
    pub contact: String,
    pub posting_date: String,
    pub due_date: String,
    pub status: InvoiceStatus,
    pub lines: Vec<LineItem>,
    pub totals: DocumentTotals,
}

impl Invoice {
    /// Assemble an invoice, deriving the totals block from the lines and
    /// adjustments.
    #[must_use]
    pub fn assemble(
        id: impl Into<String>,
        vendor_id: impl Into<String>,
        vendor_name: impl Into<String>,
        contact: impl Into<String>,
        posting_date: impl Into<String>,
        due_date: impl Into<String>,
        status: InvoiceStatus,
        lines: Vec<LineItem>,
        adjustments: Adjustments,
    ) -> Self {
        let line_totals: Vec<f64> = lines.iter().map(|l| l.total).collect();
        Self {
            id: id.into(),
            vendor_id: vendor_id.into(),
            vendor_name: vendor_name.into(),
            contact: contact.into(),
            posting_date: posting_date.into(),
            due_date: due_date.into(),
            status,
            lines,
            totals: DocumentTotals::compute(&line_totals, adjustments),
        }
    }
}

#[must_use]
pub fn seed_invoices() -> Vec<Invoice> {
    vec![
        Invoice::assemble(
            "INV-1001",
            "C-1001",
            "ABC Suppliers",
            "sales@abcsuppliers.example",
            "2025-07-14",
            "2025-08-13",
            InvoiceStatus::Open,
            vec![LineItem::new(1, "Hex bolts M8, box of 500", 10.0, 150.0, 0.0, "V0")],
            Adjustments::default(),
        ),
        Invoice::assemble(
            "INV-1002",
            "C-1004",
            "Harbor Freight Lines",
            "dispatch@harborfreight.example",
            "2025-07-10",
            "2025-08-09",
            InvoiceStatus::Approved,
            vec![
                LineItem::new(1, "Container haulage, port to depot", 2.0, 840.0, 0.0, "V1"),
                LineItem::new(2, "Customs handling", 1.0, 260.0, 0.0, "V1"),
            ],
            Adjustments { tax: 407.0, ..Adjustments::default() },
        ),
        Invoice::assemble(
            "INV-1003",
            "C-1006",
            "Verde Packaging",
            "info@verdepack.example",
            "2025-06-28",
            "2025-07-28",
            InvoiceStatus::Paid,
            vec![
                LineItem::new(1, "Corrugated cartons 600x400", 400.0, 1.85, 5.0, "V1"),
                LineItem::new(2, "Stretch film rolls", 60.0, 7.4, 0.0, "V1"),
            ],
            Adjustments { freight: 48.0, tax: 236.0, ..Adjustments::default() },
        ),
        Invoice::assemble(
            "INV-1004",
            "C-1001",
            "ABC Suppliers",
            "sales@abcsuppliers.example",
            "2025-06-20",
            "2025-07-20",
            InvoiceStatus::Paid,
            vec![
                LineItem::new(1, "Angle grinder discs", 25.0, 3.9, 0.0, "V1"),
                LineItem::new(2, "Safety gloves, pair", 120.0, 2.15, 10.0, "V1"),
            ],
            Adjustments { discount: 15.0, tax: 70.0, ..Adjustments::default() },
        ),
        Invoice::assemble(
            "INV-1005",
            "C-1003",
            "Lumen Fixtures",
            "hello@lumenfixtures.example",
            "2025-07-01",
            "2025-07-31",
            InvoiceStatus::Closed,
            vec![LineItem::new(1, "LED panel 60x60 retrofit", 80.0, 21.5, 2.5, "V1")],
            Adjustments { rounding: 0.35, tax: 352.0, ..Adjustments::default() },
        ),
        Invoice::assemble(
            "INV-1006",
            "C-1004",
            "Harbor Freight Lines",
            "dispatch@harborfreight.example",
            "2025-07-18",
            "2025-08-17",
            InvoiceStatus::Open,
            vec![LineItem::new(1, "Weekly shuttle, flat rate", 4.0, 390.0, 0.0, "V0")],
            Adjustments { withholding: 31.2, ..Adjustments::default() },
        ),
    ]
}
