//! Persisted "logged in" state.
//!
//! A session is three keys in the shared store: the user record, an
//! `active` marker and the bare role string read by navigation. Logout
//! clears all of them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{AuthUser, Destination};
use crate::storage::record::now_iso;
use crate::storage::{KeyValueStore, StorageError, load_json, save_json};

pub const USER_KEY: &str = "panchsutra_user";
pub const SESSION_KEY: &str = "panchsutra_session";
pub const ROLE_KEY: &str = "userRole";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const REMEMBERED_EMAIL_KEY: &str = "panchsutra_remembered_email";

const SESSION_ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub display_name: String,
    pub login_time: String,
}

impl Session {
    fn for_user(user: &AuthUser) -> Self {
        let full = format!("{} {}", user.first_name, user.last_name);
        let full = full.trim();
        Self {
            email: user.email.clone(),
            role: user.role.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            display_name: if full.is_empty() { user.email.clone() } else { full.to_owned() },
            login_time: now_iso(),
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Persist a session for `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the session keys cannot be written.
    pub fn start(&self, user: &AuthUser) -> Result<Session, StorageError> {
        let session = Session::for_user(user);
        save_json(self.storage.as_ref(), USER_KEY, &session)?;
        self.storage.set_item(SESSION_KEY, SESSION_ACTIVE)?;
        self.storage.set_item(ROLE_KEY, &session.role)?;
        info!(email = %session.email, role = %session.role, "session started");
        Ok(session)
    }

    /// The stored session, if one exists and is readable.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        load_json(self.storage.as_ref(), USER_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "stored session unreadable");
            None
        })
    }

    /// Role string stored for navigation.
    #[must_use]
    pub fn role(&self) -> Option<String> {
        self.storage.get_item(ROLE_KEY).ok().flatten().filter(|role| !role.is_empty())
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.storage.get_item(SESSION_KEY), Ok(Some(marker)) if marker == SESSION_ACTIVE)
    }

    /// Clear every session key and return the logout destination.
    ///
    /// # Errors
    ///
    /// Returns an error if a key cannot be removed.
    pub fn end(&self) -> Result<Destination, StorageError> {
        for key in [USER_KEY, SESSION_KEY, ROLE_KEY, CURRENT_USER_KEY] {
            self.storage.remove_item(key)?;
        }
        info!("session ended");
        Ok(Destination::Login)
    }

    /// Store the email for prefill when `email` is `Some`, forget it otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn remember_email(&self, email: Option<&str>) -> Result<(), StorageError> {
        match email {
            Some(email) => self.storage.set_item(REMEMBERED_EMAIL_KEY, email),
            None => self.storage.remove_item(REMEMBERED_EMAIL_KEY),
        }
    }

    /// Email saved by "remember me", for prefilling the login form.
    #[must_use]
    pub fn remembered_email(&self) -> Option<String> {
        self.storage.get_item(REMEMBERED_EMAIL_KEY).ok().flatten()
    }

    /// "Back to dashboard" target for the stored role.
    #[must_use]
    pub fn dashboard(&self) -> Destination {
        Destination::back_to_dashboard(self.role().as_deref())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
