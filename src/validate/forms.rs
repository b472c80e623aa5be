//! Login and registration forms and their validation wiring.

use serde::{Deserialize, Serialize};

use super::{
    FormValidator, ValidationError, password_match, required, terms_accepted, validate_email, validate_password,
};

/// Field names as submitted by the login and registration forms.
pub mod field {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const ROLE: &str = "role";
}

// =============================================================================
// ERRORS
// =============================================================================

/// One failing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

/// Everything wrong with a submission.
///
/// `fields` are shown inline; `notice` (terms not accepted) is shown as a
/// notification instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("form has {} invalid field(s)", .fields.len())]
pub struct FormErrors {
    pub fields: Vec<FieldError>,
    pub notice: Option<ValidationError>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.notice.is_none()
    }

    /// Error recorded for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.fields.iter().find(|f| f.field == field).map(|f| &f.error)
    }

    fn check(&mut self, validator: &mut FormValidator, field: &'static str, outcome: Result<(), ValidationError>) {
        if let Err(error) = &outcome {
            self.fields.push(FieldError { field, error: error.clone() });
        }
        validator.apply(field, outcome);
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: String,
    pub remember: bool,
}

impl LoginForm {
    fn rule(&self, name: &str) -> Option<(&'static str, Result<(), ValidationError>)> {
        match name {
            field::EMAIL => Some((field::EMAIL, validate_email(&self.email))),
            field::PASSWORD => Some((field::PASSWORD, validate_password(&self.password))),
            field::ROLE => Some((field::ROLE, required("Role", &self.role))),
            _ => None,
        }
    }

    /// Validate one field when it loses focus. Unknown fields pass untouched.
    pub fn blur(&self, name: &str, validator: &mut FormValidator) -> bool {
        match self.rule(name) {
            Some((field, outcome)) => validator.apply(field, outcome),
            None => true,
        }
    }

    /// Validate every field, annotating all failures.
    ///
    /// # Errors
    ///
    /// Returns every failing field when the form must not be submitted.
    pub fn submit(&self, validator: &mut FormValidator) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        for name in [field::EMAIL, field::PASSWORD, field::ROLE] {
            if let Some((field, outcome)) = self.rule(name) {
                errors.check(validator, field, outcome);
            }
        }
        errors.into_result()
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub terms: bool,
}

impl RegistrationForm {
    fn rule(&self, name: &str) -> Option<(&'static str, Result<(), ValidationError>)> {
        let checked = match name {
            field::FIRST_NAME => (field::FIRST_NAME, required("First name", &self.first_name)),
            field::LAST_NAME => (field::LAST_NAME, required("Last name", &self.last_name)),
            field::EMAIL => (field::EMAIL, validate_email(&self.email)),
            field::PHONE => (field::PHONE, required("Phone", &self.phone)),
            field::PASSWORD => (field::PASSWORD, validate_password(&self.password)),
            field::CONFIRM_PASSWORD => (
                field::CONFIRM_PASSWORD,
                required("Confirm password", &self.confirm_password)
                    .and_then(|()| password_match(&self.password, &self.confirm_password)),
            ),
            field::ROLE => (field::ROLE, required("Role", &self.role)),
            _ => return None,
        };
        Some(checked)
    }

    /// Validate one field when it loses focus.
    ///
    /// A blank confirmation is left neutral on blur; it is only reported as
    /// missing at submit time.
    pub fn blur(&self, name: &str, validator: &mut FormValidator) -> bool {
        if name == field::CONFIRM_PASSWORD && self.confirm_password.is_empty() {
            return true;
        }
        match self.rule(name) {
            Some((field, outcome)) => validator.apply(field, outcome),
            None => true,
        }
    }

    /// Validate every field and the terms checkbox, annotating all failures.
    ///
    /// # Errors
    ///
    /// Returns every failing field, plus the terms notice if unchecked.
    pub fn submit(&self, validator: &mut FormValidator) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        for name in [
            field::FIRST_NAME,
            field::LAST_NAME,
            field::EMAIL,
            field::PHONE,
            field::PASSWORD,
            field::CONFIRM_PASSWORD,
            field::ROLE,
        ] {
            if let Some((field, outcome)) = self.rule(name) {
                errors.check(validator, field, outcome);
            }
        }
        errors.notice = terms_accepted(self.terms).err();
        errors.into_result()
    }

    /// "First Last", or the email when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() { self.email.trim().to_owned() } else { name.to_owned() }
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
