//! Inventory records: warehouses.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseStatus {
    #[default]
    Active,
    Inactive,
}

impl WarehouseStatus {
    pub const OPTIONS: &'static [&'static str] = &["Active", "Inactive"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// A warehouse master record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub city: String,
    pub bins: u32,
    pub status: WarehouseStatus,
}

#[must_use]
pub fn seed_warehouses() -> Vec<Warehouse> {
    let warehouse = |id: &str, name: &str, city: &str, bins: u32, status| Warehouse {
        id: id.to_owned(),
        name: name.to_owned(),
        city: city.to_owned(),
        bins,
        status,
    };
    vec![
        warehouse("WH-01", "Central distribution", "Rotterdam", 1840, WarehouseStatus::Active),
        warehouse("WH-02", "North hub", "Hamburg", 920, WarehouseStatus::Active),
        warehouse("WH-03", "Spare parts", "Brno", 310, WarehouseStatus::Active),
        warehouse("WH-04", "Returns processing", "Lyon", 150, WarehouseStatus::Active),
        warehouse("WH-05", "Seasonal overflow", "Valencia", 480, WarehouseStatus::Inactive),
        warehouse("WH-06", "Quarantine", "Rotterdam", 64, WarehouseStatus::Active),
    ]
}
