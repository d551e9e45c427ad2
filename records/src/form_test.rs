use super::*;

fn company_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("name", "Company name", FieldKind::Text),
        FieldSpec::required("email", "Contact email", FieldKind::Email),
        FieldSpec::optional("city", "City", FieldKind::Text),
        FieldSpec::required(
            "status",
            "Status",
            FieldKind::Select(vec!["Active".to_owned(), "Inactive".to_owned()]),
        ),
        FieldSpec::optional("credit", "Credit limit", FieldKind::Amount),
        FieldSpec::optional("since", "Customer since", FieldKind::Date),
    ]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn selects_default_to_first_option() {
    let state = FormState::for_fields(&company_fields());
    assert_eq!(state.value("status"), "Active");
}

#[test]
fn text_fields_default_empty() {
    let state = FormState::for_fields(&company_fields());
    assert_eq!(state.value("name"), "");
    assert_eq!(state.value("email"), "");
}

#[test]
fn unknown_field_reads_empty() {
    let state = FormState::for_fields(&company_fields());
    assert_eq!(state.value("nope"), "");
    assert!(state.error("nope").is_none());
}

// =============================================================
// Required and format checks
// =============================================================

#[test]
fn missing_required_fields_block_submit() {
    let fields = company_fields();
    let mut state = FormState::for_fields(&fields);
    assert!(!state.validate(&fields));
    assert_eq!(state.error("name").as_deref(), Some("Company name is required"));
    assert_eq!(state.error("email").as_deref(), Some("Contact email is required"));
    // Optional empty fields are not flagged.
    assert!(state.error("city").is_none());
    assert!(state.error("credit").is_none());
}

#[test]
fn malformed_email_is_flagged() {
    let fields = company_fields();
    let mut state = FormState::for_fields(&fields);
    state.set("name", "Acme");
    state.set("email", "not-an-email");
    assert!(!state.validate(&fields));
    assert_eq!(state.error("email").as_deref(), Some("Enter a valid email address"));
}

#[test]
fn malformed_amount_is_flagged() {
    let fields = company_fields();
    let mut state = FormState::for_fields(&fields);
    state.set("name", "Acme");
    state.set("email", "ops@acme.test");
    state.set("credit", "lots");
    assert!(!state.validate(&fields));
    assert_eq!(
        state.error("credit").as_deref(),
        Some("Credit limit must be a non-negative number")
    );
}

#[test]
fn malformed_date_is_flagged() {
    let fields = company_fields();
    let mut state = FormState::for_fields(&fields);
    state.set("name", "Acme");
    state.set("email", "ops@acme.test");
    state.set("since", "July 4th");
    assert!(!state.validate(&fields));
    assert_eq!(
        state.error("since").as_deref(),
        Some("Customer since must be a date (YYYY-MM-DD)")
    );
}

#[test]
fn complete_form_validates() {
    let fields = company_fields();
    let mut state = FormState::for_fields(&fields);
    state.set("name", "Acme Industrial");
    state.set("email", "ops@acme.test");
    state.set("city", "Rotterdam");
    state.set("credit", "12,500.00");
    state.set("since", "2024-03-01");
    assert!(state.validate(&fields));
    assert!(!state.has_errors());
}

#[test]
fn setting_a_field_clears_its_error() {
    let fields = company_fields();
    let mut state = FormState::for_fields(&fields);
    assert!(!state.validate(&fields));
    assert!(state.error("name").is_some());
    state.set("name", "Acme");
    assert!(state.error("name").is_none());
    // The other error is untouched until the next validate.
    assert!(state.error("email").is_some());
}

#[test]
fn revalidation_clears_stale_errors() {
    let fields = company_fields();
    let mut state = FormState::for_fields(&fields);
    assert!(!state.validate(&fields));
    state.set("name", "Acme");
    state.set("email", "ops@acme.test");
    assert!(state.validate(&fields));
    assert!(!state.has_errors());
}

// =============================================================
// email_valid
// =============================================================

#[test]
fn email_shapes() {
    assert!(email_valid("a@b.co"));
    assert!(email_valid("first.last@sub.domain.example"));
    assert!(!email_valid("plain"));
    assert!(!email_valid("@domain.example"));
    assert!(!email_valid("user@nodot"));
    assert!(!email_valid("user@.leading"));
    assert!(!email_valid("user@trailing."));
    assert!(!email_valid("spaced user@domain.example"));
}

// =============================================================
// date_valid
// =============================================================

#[test]
fn date_shapes() {
    assert!(date_valid("2025-07-14"));
    assert!(date_valid("1999-01-01"));
    assert!(!date_valid("2025-13-01"));
    assert!(!date_valid("2025-00-10"));
    assert!(!date_valid("2025-06-32"));
    assert!(!date_valid("25-06-01"));
    assert!(!date_valid("2025/06/01"));
    assert!(!date_valid(""));
}

// =============================================================
// parse_amount
// =============================================================

#[test]
fn amounts_parse_with_separators() {
    assert_eq!(parse_amount("1500"), Ok(1500.0));
    assert_eq!(parse_amount("1,500.25"), Ok(1500.25));
    assert_eq!(parse_amount("  0  "), Ok(0.0));
}

#[test]
fn bad_amounts_are_errors() {
    assert_eq!(
        parse_amount("abc"),
        Err(AmountError::NotANumber("abc".to_owned()))
    );
    assert_eq!(parse_amount("-5"), Err(AmountError::Negative));
    assert!(matches!(parse_amount("NaN"), Err(AmountError::NotANumber(_))));
    assert!(matches!(parse_amount("inf"), Err(AmountError::NotANumber(_))));
}
