//! Administration records: user roles.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    #[default]
    Active,
    Inactive,
}

impl RoleStatus {
    pub const OPTIONS: &'static [&'static str] = &["Active", "Inactive"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// A user role as shown on the admin screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: u32,
    pub status: RoleStatus,
}

#[must_use]
pub fn seed_roles() -> Vec<Role> {
    let role = |id: &str, name: &str, description: &str, members: u32, status| Role {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        members,
        status,
    };
    vec![
        role("R-01", "Administrator", "Full access to every module", 2, RoleStatus::Active),
        role("R-02", "Finance clerk", "A/P and banking screens", 5, RoleStatus::Active),
        role("R-03", "Sales agent", "CRM and sourcing screens", 11, RoleStatus::Active),
        role("R-04", "Warehouse operator", "Inventory screens, read-only finance", 9, RoleStatus::Active),
        role("R-05", "Auditor", "Read-only everywhere", 1, RoleStatus::Inactive),
    ]
}
