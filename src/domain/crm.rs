//! CRM records: companies and the communication log.

#[cfg(test)]
#[path = "crm_test.rs"]
mod crm_test;

use serde::{Deserialize, Serialize};

/// Whether a company buys from us, sells to us, or both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerKind {
    #[default]
    Customer,
    Vendor,
    Both,
}

impl PartnerKind {
    pub const OPTIONS: &'static [&'static str] = &["Customer", "Vendor", "Both"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Vendor => "Vendor",
            Self::Both => "Both",
        }
    }

    /// A company we can post vendor documents against.
    #[must_use]
    pub fn is_vendor(self) -> bool {
        matches!(self, Self::Vendor | Self::Both)
    }

    /// Inverse of [`PartnerKind::label`]; unknown labels fall back to the
    /// default, the way the screens treat a free-form status string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Vendor" => Self::Vendor,
            "Both" => Self::Both,
            _ => Self::Customer,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    #[default]
    Active,
    Inactive,
}

impl CompanyStatus {
    pub const OPTIONS: &'static [&'static str] = &["Active", "Inactive"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "Inactive" { Self::Inactive } else { Self::Active }
    }
}

/// A trading partner on the companies screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub kind: PartnerKind,
    pub industry: String,
    pub city: String,
    pub email: String,
    pub status: CompanyStatus,
}

/// Seed companies, including the vendors the A/P screens post against.
#[must_use]
pub fn seed_companies() -> Vec<Company> {
    let company = |id: &str,
                   name: &str,
                   kind: PartnerKind,
                   industry: &str,
                   city: &str,
                   email: &str,
                   status: CompanyStatus| Company {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        industry: industry.to_owned(),
        city: city.to_owned(),
        email: email.to_owned(),
        status,
    };
    vec![
        company("C-1001", "ABC Suppliers", PartnerKind::Vendor, "Industrial supplies", "Rotterdam", "sales@abcsuppliers.example", CompanyStatus::Active),
        company("C-1002", "Northwind Traders", PartnerKind::Customer, "Wholesale", "Copenhagen", "orders@northwind.example", CompanyStatus::Active),
        company("C-1003", "Lumen Fixtures", PartnerKind::Both, "Lighting", "Lyon", "hello@lumenfixtures.example", CompanyStatus::Active),
        company("C-1004", "Harbor Freight Lines", PartnerKind::Vendor, "Logistics", "Hamburg", "dispatch@harborfreight.example", CompanyStatus::Active),
        company("C-1005", "Quarry & Sons", PartnerKind::Customer, "Construction", "Leeds", "accounts@quarrysons.example", CompanyStatus::Inactive),
        company("C-1006", "Verde Packaging", PartnerKind::Vendor, "Packaging", "Valencia", "info@verdepack.example", CompanyStatus::Active),
        company("C-1007", "Atlas Components", PartnerKind::Both, "Electronics", "Brno", "support@atlascomponents.example", CompanyStatus::Active),
        company("C-1008", "Pioneer Textiles", PartnerKind::Customer, "Apparel", "Porto", "sales@pioneertextiles.example", CompanyStatus::Inactive),
    ]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Email,
    Call,
    Meeting,
}

impl Channel {
    pub const OPTIONS: &'static [&'static str] = &["Email", "Call", "Meeting"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Call => "Call",
            Self::Meeting => "Meeting",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommStatus {
    #[default]
    Open,
    Done,
}

impl CommStatus {
    pub const OPTIONS: &'static [&'static str] = &["Open", "Done"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Done => "Done",
        }
    }
}

/// One entry in the communication log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Communication {
    pub id: String,
    pub subject: String,
    pub channel: Channel,
    pub company: String,
    pub owner: String,
    pub date: String,
    pub status: CommStatus,
}

#[must_use]
pub fn seed_communications() -> Vec<Communication> {
    let comm = |id: &str,
                subject: &str,
                channel: Channel,
                company: &str,
                owner: &str,
                date: &str,
                status: CommStatus| Communication {
        id: id.to_owned(),
        subject: subject.to_owned(),
        channel,
        company: company.to_owned(),
        owner: owner.to_owned(),
        date: date.to_owned(),
        status,
    };
    vec![
        comm("CM-301", "Q3 price list follow-up", Channel::Email, "Northwind Traders", "D. Halvorsen", "2025-07-02", CommStatus::Done),
        comm("CM-302", "Freight surcharge query", Channel::Call, "Harbor Freight Lines", "P. Okafor", "2025-07-04", CommStatus::Open),
        comm("CM-303", "Annual contract review", Channel::Meeting, "ABC Suppliers", "D. Halvorsen", "2025-07-08", CommStatus::Open),
        comm("CM-304", "Damaged pallet claim", Channel::Email, "Verde Packaging", "S. Lindqvist", "2025-07-09", CommStatus::Done),
        comm("CM-305", "New fixture catalogue", Channel::Email, "Lumen Fixtures", "P. Okafor", "2025-07-11", CommStatus::Open),
        comm("CM-306", "Credit terms renegotiation", Channel::Meeting, "Quarry & Sons", "S. Lindqvist", "2025-07-15", CommStatus::Open),
        comm("CM-307", "Sample kit dispatch", Channel::Call, "Atlas Components", "D. Halvorsen", "2025-07-16", CommStatus::Done),
    ]
}
