//! Filter, paginate, and aggregate a record slice for a list screen.
//!
//! Every list screen in the suite is the same shape: a search box matched
//! against one to three designated fields, zero or more exact-match select
//! filters, a fixed-size page slice over the filtered subset, and summary
//! numbers reduced over the entire unfiltered array. This module computes
//! all of that as plain functions over slices so the behavior is testable
//! without any rendering framework.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::totals::format_amount;

/// Projection of a designated record field to displayable text.
pub type Accessor<T> = fn(&T) -> String;

/// Fixed page size used by list screens unless a config overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Which fields a list screen searches, and how it pages.
#[derive(Clone, Debug)]
pub struct CollectionSpec<T> {
    /// Fields the search string is matched against.
    pub search_fields: Vec<Accessor<T>>,
    /// Records per page.
    pub page_size: usize,
}

impl<T> CollectionSpec<T> {
    #[must_use]
    pub fn new(search_fields: Vec<Accessor<T>>) -> Self {
        Self { search_fields, page_size: DEFAULT_PAGE_SIZE }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// An exact-match select filter over one designated field.
#[derive(Clone, Debug)]
pub struct FilterSpec<T> {
    /// Label shown next to the select control.
    pub label: &'static str,
    /// Options offered by the select control.
    pub options: Vec<String>,
    /// Field the selected option is compared against.
    pub accessor: Accessor<T>,
}

impl<T> FilterSpec<T> {
    #[must_use]
    pub fn new(label: &'static str, options: Vec<String>, accessor: Accessor<T>) -> Self {
        Self { label, options, accessor }
    }
}

/// The user's current search string and select-filter choices.
///
/// `selections` is positional, one entry per [`FilterSpec`]; an empty string
/// means that filter is inactive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub selections: Vec<String>,
}

impl Query {
    /// A query with no search text and every filter inactive.
    #[must_use]
    pub fn inactive(filter_count: usize) -> Self {
        Self { search: String::new(), selections: vec![String::new(); filter_count] }
    }
}

/// One page of filtered records plus the numbers the chrome around the
/// table needs.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<T> {
    /// Records on the requested page, in source order.
    pub items: Vec<T>,
    /// The requested page, clamped to at least 1.
    pub page: usize,
    /// `ceil(filtered_len / page_size)`.
    pub total_pages: usize,
    /// How many records survived the filter.
    pub filtered_len: usize,
    /// How many records exist before filtering.
    pub total_len: usize,
}

/// Case-insensitive substring match of `search` against the designated
/// fields. An empty (or all-whitespace) search matches everything.
#[must_use]
pub fn matches_search<T>(record: &T, fields: &[Accessor<T>], search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field(record).to_lowercase().contains(&needle))
}

/// Exact-match equality against each active select filter, AND-combined.
#[must_use]
pub fn matches_filters<T>(record: &T, filters: &[FilterSpec<T>], selections: &[String]) -> bool {
    filters.iter().zip(selections).all(|(filter, selected)| {
        selected.is_empty() || (filter.accessor)(record) == *selected
    })
}

/// `ceil(filtered_len / page_size)`; zero pages for an empty result.
#[must_use]
pub fn total_pages(filtered_len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    filtered_len.div_ceil(page_size)
}

/// Filter `records` by `query` and slice out page `page` (1-based).
///
/// A page past the last yields an empty slice rather than clamping back,
/// matching how the screens behave when a filter shrinks the result while
/// the page number is still high.
#[must_use]
pub fn paged_view<T: Clone>(
    records: &[T],
    spec: &CollectionSpec<T>,
    filters: &[FilterSpec<T>],
    query: &Query,
    page: usize,
) -> PageView<T> {
    let filtered: Vec<T> = records
        .iter()
        .filter(|r| matches_search(*r, &spec.search_fields, &query.search))
        .filter(|r| matches_filters(*r, filters, &query.selections))
        .cloned()
        .collect();

    let page = page.max(1);
    let pages = total_pages(filtered.len(), spec.page_size);
    let start = (page - 1).saturating_mul(spec.page_size);
    let items: Vec<T> = filtered.iter().skip(start).take(spec.page_size).cloned().collect();

    PageView {
        items,
        page,
        total_pages: pages,
        filtered_len: filtered.len(),
        total_len: records.len(),
    }
}

/// A summary number shown above a list, reduced over the entire unfiltered
/// array on every call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue {
    Count(usize),
    Amount(f64),
}

impl StatValue {
    /// Render the value for a stat card.
    #[must_use]
    pub fn display(self) -> String {
        match self {
            Self::Count(n) => n.to_string(),
            Self::Amount(a) => format_amount(a),
        }
    }
}

/// A labelled aggregate reducer for a list screen's stat cards.
pub struct StatSpec<T> {
    pub label: &'static str,
    pub compute: fn(&[T]) -> StatValue,
}

// Manual impls: the derives would bound `T`, but both fields are `Copy`
// regardless of the record type.
impl<T> Clone for StatSpec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StatSpec<T> {}

/// Count the records matching `pred`.
#[must_use]
pub fn count_where<T>(records: &[T], pred: fn(&T) -> bool) -> usize {
    records.iter().filter(|r| pred(r)).count()
}

/// Sum `amount` over all records.
#[must_use]
pub fn sum_by<T>(records: &[T], amount: fn(&T) -> f64) -> f64 {
    records.iter().map(amount).sum()
}
