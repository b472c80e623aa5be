//! Field-level form validation.
//!
//! DESIGN
//! ======
//! Rules are plain functions returning `Result<(), ValidationError>`. A
//! [`FormValidator`] keeps the visible state of each field:
//!
//! - blur/submit moves a field to `Error` or `Success` depending on the rule,
//! - any edit moves it back to `Neutral`, forcing re-validation on next blur.
//!
//! Submission checks every field before reporting, so all failing fields are
//! annotated at once.

pub mod forms;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Why a field (or the terms checkbox) rejected its value.
///
/// `Display` yields the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    MissingValue { label: String },
    #[error("Please enter a valid email address")]
    InvalidFormat,
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Please accept the terms and conditions")]
    NotAccepted,
}

// =============================================================================
// RULES
// =============================================================================

/// Fails with `MissingValue` when `value` is blank after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::MissingValue`] naming `label`.
pub fn required(label: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingValue { label: label.to_owned() });
    }
    Ok(())
}

/// Fails with `InvalidFormat` when a non-empty value is not `local@domain.tld`.
/// Blank values pass; combine with [`required`] to reject them.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFormat`].
pub fn email_format(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if !value.is_empty() && !EMAIL_RE.is_match(value) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Fails with `TooShort` when a non-empty value has fewer than six characters.
///
/// # Errors
///
/// Returns [`ValidationError::TooShort`].
pub fn password_length(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

/// Fails with `Mismatch` when both values are present and differ.
///
/// # Errors
///
/// Returns [`ValidationError::Mismatch`].
pub fn password_match(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if !password.is_empty() && !confirm.is_empty() && password != confirm {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Fails with `NotAccepted` when the terms checkbox is unchecked.
///
/// # Errors
///
/// Returns [`ValidationError::NotAccepted`].
pub fn terms_accepted(checked: bool) -> Result<(), ValidationError> {
    if checked { Ok(()) } else { Err(ValidationError::NotAccepted) }
}

/// Email field: required, then shape.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    required("Email", value)?;
    email_format(value)
}

/// Password field: required, then length. The value is not trimmed.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingValue { label: "Password".into() });
    }
    password_length(value)
}

// =============================================================================
// FIELD STATE
// =============================================================================

/// Visible validation state of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Neutral,
    Error(ValidationError),
    Success,
}

impl FieldState {
    /// Message rendered beneath the field, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Error(e) => Some(e.to_string()),
            Self::Neutral | Self::Success => None,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Per-form map of field name to visible state.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: BTreeMap<String, FieldState>,
}

impl FormValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `field`. Untouched fields are neutral.
    #[must_use]
    pub fn state(&self, field: &str) -> FieldState {
        self.fields.get(field).cloned().unwrap_or_default()
    }

    /// Record a rule outcome for `field` (blur or submit). Returns whether it passed.
    pub fn apply(&mut self, field: &str, outcome: Result<(), ValidationError>) -> bool {
        let (state, ok) = match outcome {
            Ok(()) => (FieldState::Success, true),
            Err(e) => (FieldState::Error(e), false),
        };
        self.fields.insert(field.to_owned(), state);
        ok
    }

    /// Mark `field` as failed without touching other fields.
    pub fn fail(&mut self, field: &str, error: ValidationError) {
        self.fields.insert(field.to_owned(), FieldState::Error(error));
    }

    /// The user edited `field`: clear any error or success marker.
    pub fn input(&mut self, field: &str) {
        self.fields.remove(field);
    }

    /// Fields currently in the error state, in name order.
    #[must_use]
    pub fn errors(&self) -> Vec<(&str, &ValidationError)> {
        self.fields
            .iter()
            .filter_map(|(name, state)| match state {
                FieldState::Error(e) => Some((name.as_str(), e)),
                FieldState::Neutral | FieldState::Success => None,
            })
            .collect()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(FieldState::is_error)
    }

    /// Reset every field to neutral.
    pub fn reset(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
