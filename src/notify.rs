//! Transient user-facing notifications with automatic expiry.
//!
//! DESIGN
//! ======
//! Notifications live in a shared queue behind a mutex. Each entry records
//! the instant it stops being visible; reads prune expired entries first, so
//! there is no background timer to cancel. Explicit dismissal removes an
//! entry immediately.
//!
//! Dashboards use a 5-second lifetime, the landing page 3 seconds.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DASHBOARD_TIMEOUT: Duration = Duration::from_secs(5);
pub const LANDING_TIMEOUT: Duration = Duration::from_secs(3);

// =============================================================================
// TYPES
// =============================================================================

/// Visual classification of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Handle for dismissing a live notification. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

/// A message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Anything that can show a notification. Components depend on this rather
/// than on a concrete queue.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity) -> NotificationId;
}

// =============================================================================
// NOTIFICATION CENTER
// =============================================================================

#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<Queue>>,
    timeout: Duration,
}

struct Queue {
    next_id: u64,
    /// Oldest first.
    entries: Vec<Entry>,
}

struct Entry {
    notification: Notification,
    expires_at: Instant,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(Queue { next_id: 1, entries: Vec::new() })), timeout }
    }

    /// Center with the dashboard lifetime.
    #[must_use]
    pub fn dashboard() -> Self {
        Self::new(DASHBOARD_TIMEOUT)
    }

    /// Center with the landing-page lifetime.
    #[must_use]
    pub fn landing() -> Self {
        Self::new(LANDING_TIMEOUT)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Show a message now. It disappears after the configured timeout.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.push_at(message.into(), severity, Instant::now())
    }

    /// Remove a notification before its timeout. Returns `false` if it was
    /// already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut queue = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = queue.entries.len();
        queue.entries.retain(|entry| entry.notification.id != id);
        queue.entries.len() < before
    }

    /// Live notifications, newest first.
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.visible_at(Instant::now())
    }

    /// Remove every notification.
    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).entries.clear();
    }

    /// Internal: push with explicit timestamp (for testing).
    fn push_at(&self, message: String, severity: Severity, now: Instant) -> NotificationId {
        let mut queue = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = NotificationId(queue.next_id);
        queue.next_id += 1;

        debug!(id = id.0, severity = severity.as_str(), %message, "notification shown");
        queue.entries.push(Entry {
            notification: Notification { id, message, severity },
            expires_at: now + self.timeout,
        });
        id
    }

    /// Internal: prune + read with explicit timestamp (for testing).
    fn visible_at(&self, now: Instant) -> Vec<Notification> {
        let mut queue = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        queue.entries.retain(|entry| entry.expires_at > now);
        queue.entries.iter().rev().map(|entry| entry.notification.clone()).collect()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&self, message: &str, severity: Severity) -> NotificationId {
        self.push(message, severity)
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
