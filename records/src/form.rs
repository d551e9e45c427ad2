//! Declarative field schema and form state for create/edit screens.
//!
//! A form is described by a list of [`FieldSpec`]s. [`FormState`] holds the
//! collected values plus an error map keyed by field name, populated by a
//! synchronous [`FormState::validate`] pass on submit. There is no
//! cross-field validation and no server-side validation; once the local
//! pass succeeds, the submit side effect is assumed to succeed.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use thiserror::Error;

/// What kind of control a field renders as and which format check applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Non-negative decimal amount.
    Amount,
    /// `YYYY-MM-DD`.
    Date,
    /// Fixed option list; the first option is the default value.
    Select(Vec<String>),
    TextArea,
}

/// One field of a form schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used in the value and error maps.
    pub name: &'static str,
    /// Label shown next to the control and used in error messages.
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    #[must_use]
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, required: true, kind }
    }

    #[must_use]
    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, required: false, kind }
    }
}

/// Error from [`parse_amount`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("amount must not be negative")]
    Negative,
}

/// Parse a user-entered amount. Accepts thousands separators the way the
/// screens render them; rejects negatives and non-finite values.
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let cleaned = input.trim().replace(',', "");
    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountError::NotANumber(input.trim().to_owned()))?;
    if !value.is_finite() {
        return Err(AmountError::NotANumber(input.trim().to_owned()));
    }
    if value < 0.0 {
        return Err(AmountError::Negative);
    }
    Ok(value)
}

/// Shape check for an email address: one `@`, a non-empty local part, and a
/// dotted, non-empty domain. Deliberately no stricter than the screens were.
#[must_use]
pub fn email_valid(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !input.contains(char::is_whitespace)
}

/// Shape check for a `YYYY-MM-DD` date.
#[must_use]
pub fn date_valid(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    const DIGIT_POSITIONS: [usize; 8] = [0, 1, 2, 3, 5, 6, 8, 9];
    if !DIGIT_POSITIONS.iter().all(|&i| bytes[i].is_ascii_digit()) {
        return false;
    }
    let month = u32::from(bytes[5] - b'0') * 10 + u32::from(bytes[6] - b'0');
    let day = u32::from(bytes[8] - b'0') * 10 + u32::from(bytes[9] - b'0');
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Collected field values and the error map produced by validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
}

impl FormState {
    /// Seed defaults for a schema: selects start on their first option,
    /// everything else starts empty.
    #[must_use]
    pub fn for_fields(fields: &[FieldSpec]) -> Self {
        let mut values = BTreeMap::new();
        for field in fields {
            let default = match &field.kind {
                FieldKind::Select(options) => options.first().cloned().unwrap_or_default(),
                _ => String::new(),
            };
            values.insert(field.name.to_owned(), default);
        }
        Self { values, errors: BTreeMap::new() }
    }

    /// Record a value and clear any stale error for that field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), value.into());
        self.errors.remove(name);
    }

    /// Current value of a field; empty if never set.
    #[must_use]
    pub fn value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Current error for a field, if the last validation flagged it.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.get(name).cloned()
    }

    /// Snapshot of all values, for the submit handler.
    #[must_use]
    pub fn values(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }

    /// Validate every field against the schema. Returns `true` when the
    /// form may be submitted; otherwise the error map holds one message
    /// per failing field.
    pub fn validate(&mut self, fields: &[FieldSpec]) -> bool {
        self.errors.clear();
        for field in fields {
            let value = self.value(field.name);
            let trimmed = value.trim();
            if trimmed.is_empty() {
                if field.required {
                    self.errors
                        .insert(field.name.to_owned(), format!("{} is required", field.label));
                }
                continue;
            }
            let format_error = match &field.kind {
                FieldKind::Email if !email_valid(trimmed) => {
                    Some("Enter a valid email address".to_owned())
                }
                FieldKind::Amount if parse_amount(trimmed).is_err() => {
                    Some(format!("{} must be a non-negative number", field.label))
                }
                FieldKind::Date if !date_valid(trimmed) => {
                    Some(format!("{} must be a date (YYYY-MM-DD)", field.label))
                }
                _ => None,
            };
            if let Some(message) = format_error {
                self.errors.insert(field.name.to_owned(), message);
            }
        }
        self.errors.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
