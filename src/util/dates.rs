//! Dates for newly created documents.

/// Today as `YYYY-MM-DD` from the browser clock; empty on the server,
/// where the field is filled in after hydration.
#[must_use]
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
