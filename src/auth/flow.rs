//! Login, registration and logout as the pages drive them.
//!
//! Each submission runs full-form validation first; a blocked form never
//! reaches the backend. Backend rejections become an error notification at
//! this layer and are not retried. Storage failures propagate.

use tracing::{info, warn};

use super::session::Session;
use super::{AuthBackend, AuthError, Destination};
use crate::notify::Severity;
use crate::state::AppContext;
use crate::storage::StorageError;
use crate::validate::FormValidator;
use crate::validate::forms::{FormErrors, LoginForm, RegistrationForm};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const REGISTER_SUCCEEDED: &str = "Account created successfully! Redirecting...";

/// Outcome of submitting a login or registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed; fields are annotated and nothing was sent.
    Blocked(FormErrors),
    /// The backend refused the request; an error notification is showing.
    Rejected,
    /// Session stored; navigate to `destination`.
    Redirect { destination: Destination, session: Session },
}

pub struct AuthFlow<B> {
    ctx: AppContext,
    backend: B,
}

impl<B: AuthBackend> AuthFlow<B> {
    pub fn new(ctx: AppContext, backend: B) -> Self {
        Self { ctx, backend }
    }

    /// Validate, authenticate and start a session.
    ///
    /// # Errors
    ///
    /// Returns an error only if the session cannot be persisted.
    pub async fn submit_login(&self, form: &LoginForm, validator: &mut FormValidator) -> Result<Submission, StorageError> {
        if let Err(errors) = form.submit(validator) {
            return Ok(Submission::Blocked(errors));
        }

        let user = match self.backend.login(form).await {
            Ok(user) => user,
            Err(AuthError::InvalidCredentials) => {
                warn!(email = %form.email, role = %form.role, "login rejected");
                self.ctx.notify(LOGIN_FAILED, Severity::Error);
                return Ok(Submission::Rejected);
            }
            Err(AuthError::Storage(e)) => return Err(e),
        };

        let sessions = self.ctx.sessions();
        let session = sessions.start(&user)?;
        sessions.remember_email(form.remember.then_some(form.email.as_str()))?;

        let destination = Destination::after_login(&session.role);
        info!(email = %session.email, target = destination.path(), "login succeeded");
        Ok(Submission::Redirect { destination, session })
    }

    /// Validate, register and start a session.
    ///
    /// An unchecked terms box is reported as an error notification in
    /// addition to blocking the form.
    ///
    /// # Errors
    ///
    /// Returns an error only if the session cannot be persisted.
    pub async fn submit_registration(
        &self,
        form: &RegistrationForm,
        validator: &mut FormValidator,
    ) -> Result<Submission, StorageError> {
        if let Err(errors) = form.submit(validator) {
            if let Some(notice) = &errors.notice {
                self.ctx.notify(notice.to_string(), Severity::Error);
            }
            return Ok(Submission::Blocked(errors));
        }

        let user = match self.backend.register(form).await {
            Ok(user) => user,
            Err(AuthError::InvalidCredentials) => {
                warn!(email = %form.email, "registration rejected");
                self.ctx.notify(REGISTER_FAILED, Severity::Error);
                return Ok(Submission::Rejected);
            }
            Err(AuthError::Storage(e)) => return Err(e),
        };

        let session = self.ctx.sessions().start(&user)?;
        self.ctx.notify(REGISTER_SUCCEEDED, Severity::Success);

        let destination = Destination::after_login(&session.role);
        info!(email = %session.email, target = destination.path(), "registration succeeded");
        Ok(Submission::Redirect { destination, session })
    }

    /// Clear the session and return the login page destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the session keys cannot be removed.
    pub fn logout(&self) -> Result<Destination, StorageError> {
        self.ctx.sessions().end()
    }
}

#[cfg(test)]
#[path = "flow_test.rs"]
mod tests;
