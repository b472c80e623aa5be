//! Mock authentication: roles, navigation targets and the demo backend.
//!
//! DESIGN
//! ======
//! The credential table below is a placeholder for a real identity service
//! and is not a security boundary. It lives behind [`AuthBackend`] so a real
//! implementation can replace [`MockAuthBackend`] without touching the login
//! flow or session handling.

pub mod flow;
pub mod session;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::storage::StorageError;
use crate::validate::forms::{LoginForm, RegistrationForm};

/// Simulated latency of the mock login call.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);
/// Simulated latency of the mock registration call.
pub const REGISTER_DELAY: Duration = Duration::from_millis(2000);

// =============================================================================
// ROLES AND DESTINATIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Doctor, Role::Patient];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "patient" => Ok(Self::Patient),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Where the browser goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard(Role),
    Landing,
    Login,
}

impl Destination {
    /// Relative page URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard(Role::Admin) => "dashboards/admin.html",
            Self::Dashboard(Role::Doctor) => "dashboards/doctor.html",
            Self::Dashboard(Role::Patient) => "dashboards/patient.html",
            Self::Landing => "index.html",
            Self::Login => "login.html",
        }
    }

    /// Target after a successful login or registration. Unknown roles land
    /// on the landing page.
    #[must_use]
    pub fn after_login(role: &str) -> Self {
        role.parse().map_or(Self::Landing, Self::Dashboard)
    }

    /// Target of a "back to dashboard" link given the stored role. Without a
    /// usable role the user is sent to log in.
    #[must_use]
    pub fn back_to_dashboard(stored_role: Option<&str>) -> Self {
        stored_role
            .and_then(|role| role.parse().ok())
            .map_or(Self::Login, Self::Dashboard)
    }
}

// =============================================================================
// ERRORS AND USERS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Identity returned by the backend after login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

// =============================================================================
// MOCK CREDENTIALS
// =============================================================================

pub struct MockAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Demo accounts accepted by [`MockAuthBackend`].
pub const MOCK_ACCOUNTS: [MockAccount; 3] = [
    MockAccount { email: "admin@panchsutra.com", password: "admin123", role: Role::Admin },
    MockAccount { email: "doctor@panchsutra.com", password: "doctor123", role: Role::Doctor },
    MockAccount { email: "patient@panchsutra.com", password: "patient123", role: Role::Patient },
];

/// Match an (email, password, role) triple against the demo table.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] if any of the three differs.
pub fn check_credentials(email: &str, password: &str, role: &str) -> Result<Role, AuthError> {
    let account = MOCK_ACCOUNTS
        .iter()
        .find(|account| account.email == email)
        .ok_or(AuthError::InvalidCredentials)?;
    if account.password != password || account.role.as_str() != role {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(account.role)
}

// =============================================================================
// BACKEND
// =============================================================================

/// Identity backend used by the login and registration flows.
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, form: &LoginForm) -> Result<AuthUser, AuthError>;
    async fn register(&self, form: &RegistrationForm) -> Result<AuthUser, AuthError>;
}

/// In-process backend answering from [`MOCK_ACCOUNTS`] after a fixed delay.
///
/// Registration always succeeds. Nothing is cancelled once started.
#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    login_delay: Duration,
    register_delay: Duration,
}

impl MockAuthBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delays(LOGIN_DELAY, REGISTER_DELAY)
    }

    /// Backend that answers without simulated latency.
    #[must_use]
    pub fn instant() -> Self {
        Self::with_delays(Duration::ZERO, Duration::ZERO)
    }

    #[must_use]
    pub fn with_delays(login_delay: Duration, register_delay: Duration) -> Self {
        Self { login_delay, register_delay }
    }
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, form: &LoginForm) -> Result<AuthUser, AuthError> {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }
        let role = check_credentials(&form.email, &form.password, &form.role)?;
        Ok(AuthUser {
            email: form.email.clone(),
            role: role.as_str().to_owned(),
            first_name: String::new(),
            last_name: String::new(),
        })
    }

    async fn register(&self, form: &RegistrationForm) -> Result<AuthUser, AuthError> {
        if !self.register_delay.is_zero() {
            tokio::time::sleep(self.register_delay).await;
        }
        Ok(AuthUser {
            email: form.email.trim().to_owned(),
            role: form.role.clone(),
            first_name: form.first_name.trim().to_owned(),
            last_name: form.last_name.trim().to_owned(),
        })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
