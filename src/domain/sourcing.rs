//! Sourcing records: requests for quotation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfqStatus {
    #[default]
    Draft,
    Sent,
    Closed,
}

impl RfqStatus {
    pub const OPTIONS: &'static [&'static str] = &["Draft", "Sent", "Closed"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Closed => "Closed",
        }
    }
}

/// A request for quotation sent to one or more vendors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rfq {
    pub id: String,
    pub title: String,
    pub vendors_invited: u32,
    pub due_date: String,
    pub status: RfqStatus,
}

#[must_use]
pub fn seed_rfqs() -> Vec<Rfq> {
    let rfq = |id: &str, title: &str, vendors_invited: u32, due_date: &str, status| Rfq {
        id: id.to_owned(),
        title: title.to_owned(),
        vendors_invited,
        due_date: due_date.to_owned(),
        status,
    };
    vec![
        rfq("RFQ-045", "Sheet steel, Q4 volume", 4, "2025-08-29", RfqStatus::Sent),
        rfq("RFQ-046", "Pallet wrap annual contract", 3, "2025-09-12", RfqStatus::Sent),
        rfq("RFQ-047", "Forklift fleet maintenance", 2, "2025-09-30", RfqStatus::Draft),
        rfq("RFQ-048", "LED retrofit, north hub", 5, "2025-07-18", RfqStatus::Closed),
        rfq("RFQ-049", "Packaging foam inserts", 3, "2025-10-03", RfqStatus::Draft),
    ]
}
