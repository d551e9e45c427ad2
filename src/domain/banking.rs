//! Banking records: house bank accounts and statement reconciliations.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Dormant,
    Closed,
}

impl AccountStatus {
    pub const OPTIONS: &'static [&'static str] = &["Active", "Dormant", "Closed"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Dormant => "Dormant",
            Self::Closed => "Closed",
        }
    }

    /// Inverse of [`AccountStatus::label`]; unknown labels fall back to the
    /// default, the way the screens treat a free-form status string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Dormant" => Self::Dormant,
            "Closed" => Self::Closed,
            _ => Self::Active,
        }
    }
}

/// A house bank account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub name: String,
    pub bank: String,
    pub number: String,
    pub currency: String,
    pub status: AccountStatus,
}

pub const CURRENCIES: &[&str] = &["EUR", "USD", "GBP", "SEK"];

#[must_use]
pub fn seed_accounts() -> Vec<BankAccount> {
    let account = |id: &str, name: &str, bank: &str, number: &str, currency: &str, status| {
        BankAccount {
            id: id.to_owned(),
            name: name.to_owned(),
            bank: bank.to_owned(),
            number: number.to_owned(),
            currency: currency.to_owned(),
            status,
        }
    };
    vec![
        account("BA-101", "Operating EUR", "Rabobank", "NL21RABO0312487659", "EUR", AccountStatus::Active),
        account("BA-102", "Payroll EUR", "Rabobank", "NL56RABO0318821104", "EUR", AccountStatus::Active),
        account("BA-103", "Export USD", "Citibank", "3714-220195-08", "USD", AccountStatus::Active),
        account("BA-104", "UK collections", "Barclays", "GB29BARC20031858114290", "GBP", AccountStatus::Dormant),
        account("BA-105", "Legacy savings", "ING", "NL02INGB0009337711", "EUR", AccountStatus::Closed),
    ]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconStatus {
    #[default]
    Pending,
    Matched,
}

impl ReconStatus {
    pub const OPTIONS: &'static [&'static str] = &["Pending", "Matched"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Matched => "Matched",
        }
    }
}

/// A statement-vs-ledger reconciliation row. `difference` is statement
/// minus ledger, carried on the record the way the screen displays it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub id: String,
    pub account: String,
    pub statement_date: String,
    pub statement_balance: f64,
    pub ledger_balance: f64,
    pub difference: f64,
    pub status: ReconStatus,
}

#[must_use]
pub fn seed_reconciliations() -> Vec<Reconciliation> {
    let recon = |id: &str, account: &str, date: &str, statement: f64, ledger: f64, status| {
        Reconciliation {
            id: id.to_owned(),
            account: account.to_owned(),
            statement_date: date.to_owned(),
            statement_balance: statement,
            ledger_balance: ledger,
            difference: statement - ledger,
            status,
        }
    };
    vec![
        recon("RC-118", "Operating EUR", "2025-06-30", 412_907.44, 412_907.44, ReconStatus::Matched),
        recon("RC-119", "Payroll EUR", "2025-06-30", 88_210.00, 88_110.00, ReconStatus::Pending),
        recon("RC-120", "Export USD", "2025-06-30", 152_664.12, 152_889.62, ReconStatus::Pending),
        recon("RC-121", "UK collections", "2025-06-30", 9_312.50, 9_312.50, ReconStatus::Matched),
        recon("RC-122", "Operating EUR", "2025-07-31", 436_118.09, 435_910.59, ReconStatus::Pending),
        recon("RC-123", "Payroll EUR", "2025-07-31", 91_004.75, 91_004.75, ReconStatus::Matched),
    ]
}
