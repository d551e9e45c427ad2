//! Monetary derivations for documents with line items.
//!
//! Line totals and document totals are recomputed from scratch on every
//! edit; nothing here is cached or incremental. All amounts are `f64`,
//! matching how the screens hold them.

#[cfg(test)]
#[path = "totals_test.rs"]
mod totals_test;

use serde::{Deserialize, Serialize};

/// `quantity × unit_price × (1 − discount_pct/100)`.
#[must_use]
pub fn line_total(quantity: f64, unit_price: f64, discount_pct: f64) -> f64 {
    quantity * unit_price * (1.0 - discount_pct / 100.0)
}

/// Document-level adjustments applied on top of the line subtotal.
///
/// `withholding` stays zero on the forms that do not carry it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    pub discount: f64,
    pub freight: f64,
    pub rounding: f64,
    pub tax: f64,
    pub withholding: f64,
}

/// The derived totals block shown on every document form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub freight: f64,
    pub rounding: f64,
    pub tax: f64,
    pub withholding: f64,
    pub grand_total: f64,
}

impl DocumentTotals {
    /// `subtotal = Σ line totals`;
    /// `grand_total = subtotal − discount + freight + rounding + tax + withholding`.
    #[must_use]
    pub fn compute(line_totals: &[f64], adjustments: Adjustments) -> Self {
        let subtotal: f64 = line_totals.iter().sum();
        let Adjustments { discount, freight, rounding, tax, withholding } = adjustments;
        Self {
            subtotal,
            discount,
            freight,
            rounding,
            tax,
            withholding,
            grand_total: subtotal - discount + freight + rounding + tax + withholding,
        }
    }
}

/// Render an amount with two decimals and thousands grouping.
#[must_use]
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}
