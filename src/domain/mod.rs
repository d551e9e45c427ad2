//! Record shapes and seed data for every business area.
//!
//! DESIGN
//! ======
//! Records are split by business module (`crm`, `finance`, `hr`, etc.) so
//! individual screens depend on small focused models. The structs are
//! wire-shaped serde types even though nothing leaves the browser: each is
//! the row a future backend would return, seeded here from mock arrays.

pub mod admin;
pub mod banking;
pub mod crm;
pub mod finance;
pub mod hr;
pub mod inventory;
pub mod manufacturing;
pub mod sourcing;

/// Owned option list for a select filter, from a status enum's `OPTIONS`.
#[must_use]
pub fn option_list(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| (*o).to_owned()).collect()
}
