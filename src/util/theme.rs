//! Theme override persistence and document-level application.
//!
//! Reads an environment-provided override from `localStorage` and applies
//! the accent colors as CSS custom properties on the `<html>` element.
//! Writing back persists the override. Requires a browser environment.

use crate::state::theme::ThemeState;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "meridian_theme";

/// Read the stored theme override from localStorage, if any.
#[must_use]
pub fn read_override() -> Option<ThemeState> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        let stored = storage.get_item(STORAGE_KEY).ok().flatten()?;
        ThemeState::from_stored(&stored)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Apply the accent colors as custom properties on the `<html>` element.
pub fn apply(theme: &ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let style = format!(
                    "--accent-primary: {}; --accent-secondary: {}",
                    theme.primary, theme.secondary
                );
                let _ = el.set_attribute("style", &style);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist a theme override to localStorage.
pub fn save(theme: &ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, &theme.to_stored());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
