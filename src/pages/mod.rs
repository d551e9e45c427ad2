//! Page modules, one per business area.
//!
//! DESIGN
//! ======
//! Every page is a thin configuration over the generic `ListScreen` /
//! `FormScreen` components. The per-entity differences (searchable fields,
//! filters, columns, aggregates, form schemas) live in plain config
//! functions so they stay testable without a DOM.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

pub mod admin;
pub mod banking;
pub mod crm;
pub mod dashboard;
pub mod finance;
pub mod hr;
pub mod inventory;
pub mod manufacturing;
pub mod sourcing;

/// Next document number for a prefix: one past the highest numeric suffix
/// already in use, so deletions never cause a collision.
pub(crate) fn next_id<T>(
    items: &[T],
    id_of: fn(&T) -> String,
    prefix: &str,
    floor: u32,
) -> String {
    let max = items
        .iter()
        .filter_map(|item| {
            let id = id_of(item);
            id.strip_prefix(prefix).and_then(|suffix| suffix.parse::<u32>().ok())
        })
        .max()
        .unwrap_or(floor);
    format!("{prefix}{}", max + 1)
}
