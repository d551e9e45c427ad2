use super::*;

#[test]
fn default_theme_has_both_colors() {
    let theme = ThemeState::default();
    assert!(theme.primary.starts_with('#'));
    assert!(theme.secondary.starts_with('#'));
    assert_ne!(theme.primary, theme.secondary);
}

#[test]
fn stored_form_round_trips() {
    let theme = ThemeState { primary: "#123456".to_owned(), secondary: "#abcdef".to_owned() };
    let parsed = ThemeState::from_stored(&theme.to_stored());
    assert_eq!(parsed, Some(theme));
}

#[test]
fn malformed_stored_values_are_rejected() {
    assert_eq!(ThemeState::from_stored(""), None);
    assert_eq!(ThemeState::from_stored("#123456"), None);
    assert_eq!(ThemeState::from_stored("|#abcdef"), None);
    assert_eq!(ThemeState::from_stored("#123456|"), None);
}
