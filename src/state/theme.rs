//! Theming values shared across the suite.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Primary/secondary accent colors, provided via context and applied as
/// inline styles by the components that use them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub primary: String,
    pub secondary: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { primary: "#2456a4".to_owned(), secondary: "#1a7f6b".to_owned() }
    }
}

impl ThemeState {
    /// Parse the `primary|secondary` form the override is stored in.
    #[must_use]
    pub fn from_stored(stored: &str) -> Option<Self> {
        let (primary, secondary) = stored.split_once('|')?;
        if primary.is_empty() || secondary.is_empty() {
            return None;
        }
        Some(Self { primary: primary.to_owned(), secondary: secondary.to_owned() })
    }

    /// Serialize for storage, inverse of [`ThemeState::from_stored`].
    #[must_use]
    pub fn to_stored(&self) -> String {
        format!("{}|{}", self.primary, self.secondary)
    }
}
