//! Manufacturing records: production orders, quality checks, and BOMs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionStatus {
    #[default]
    Planned,
    Released,
    InProgress,
    Completed,
}

impl ProductionStatus {
    pub const OPTIONS: &'static [&'static str] =
        &["Planned", "Released", "In progress", "Completed"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Released => "Released",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// A production order on the shop-floor screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub id: String,
    pub product: String,
    pub quantity: f64,
    pub due_date: String,
    pub status: ProductionStatus,
}

#[must_use]
pub fn seed_production_orders() -> Vec<ProductionOrder> {
    let order = |id: &str, product: &str, quantity: f64, due_date: &str, status| ProductionOrder {
        id: id.to_owned(),
        product: product.to_owned(),
        quantity,
        due_date: due_date.to_owned(),
        status,
    };
    vec![
        order("PO-7001", "Steel shelving unit 180cm", 250.0, "2025-08-15", ProductionStatus::InProgress),
        order("PO-7002", "Workbench, oak top", 60.0, "2025-08-22", ProductionStatus::Released),
        order("PO-7003", "Pallet cage, folding", 400.0, "2025-09-05", ProductionStatus::Planned),
        order("PO-7004", "Steel shelving unit 120cm", 180.0, "2025-07-30", ProductionStatus::Completed),
        order("PO-7005", "Tool trolley, 5 drawer", 90.0, "2025-09-12", ProductionStatus::Planned),
        order("PO-7006", "Workbench, beech top", 45.0, "2025-08-08", ProductionStatus::InProgress),
    ]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckResult {
    #[default]
    Pass,
    Fail,
    Rework,
}

impl CheckResult {
    pub const OPTIONS: &'static [&'static str] = &["Pass", "Fail", "Rework"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Rework => "Rework",
        }
    }
}

/// An inspection result recorded against a production order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub id: String,
    pub order_id: String,
    pub inspector: String,
    pub date: String,
    pub result: CheckResult,
}

#[must_use]
pub fn seed_quality_checks() -> Vec<QualityCheck> {
    let check = |id: &str, order_id: &str, inspector: &str, date: &str, result| QualityCheck {
        id: id.to_owned(),
        order_id: order_id.to_owned(),
        inspector: inspector.to_owned(),
        date: date.to_owned(),
        result,
    };
    vec![
        check("QC-881", "PO-7004", "M. Dvořák", "2025-07-28", CheckResult::Pass),
        check("QC-882", "PO-7004", "G. Bauer", "2025-07-29", CheckResult::Pass),
        check("QC-883", "PO-7001", "M. Dvořák", "2025-08-01", CheckResult::Rework),
        check("QC-884", "PO-7006", "I. Njoroge", "2025-08-04", CheckResult::Pass),
        check("QC-885", "PO-7001", "M. Dvořák", "2025-08-05", CheckResult::Fail),
    ]
}

/// A bill of materials header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    pub id: String,
    pub product: String,
    pub revision: String,
    pub output_qty: f64,
    pub warehouse: String,
    pub component_count: u32,
}

#[must_use]
pub fn seed_boms() -> Vec<Bom> {
    let bom = |id: &str, product: &str, revision: &str, output_qty: f64, warehouse: &str, component_count: u32| Bom {
        id: id.to_owned(),
        product: product.to_owned(),
        revision: revision.to_owned(),
        output_qty,
        warehouse: warehouse.to_owned(),
        component_count,
    };
    vec![
        bom("BOM-120", "Steel shelving unit 180cm", "C", 1.0, "Central distribution", 14),
        bom("BOM-121", "Steel shelving unit 120cm", "B", 1.0, "Central distribution", 12),
        bom("BOM-122", "Workbench, oak top", "A", 1.0, "North hub", 9),
        bom("BOM-123", "Pallet cage, folding", "D", 1.0, "Central distribution", 7),
        bom("BOM-124", "Tool trolley, 5 drawer", "A", 1.0, "Spare parts", 18),
    ]
}
