//! Shared application context.
//!
//! DESIGN
//! ======
//! `AppContext` is built once at startup and handed to every component that
//! needs persistence or notifications. It replaces page-global singletons:
//! nothing in the crate reaches for ambient state. Cloning is cheap, every
//! field is `Arc`-backed.

use std::sync::Arc;

use crate::auth::session::SessionManager;
use crate::notify::{NotificationCenter, NotificationId, Severity};
use crate::storage::crud::LocalCrudStore;
use crate::storage::{KeyValueStore, MemoryStorage};

#[derive(Clone)]
pub struct AppContext {
    storage: Arc<dyn KeyValueStore>,
    notifications: NotificationCenter,
}

impl AppContext {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, notifications: NotificationCenter) -> Self {
        Self { storage, notifications }
    }

    /// Context over a fresh [`MemoryStorage`] with dashboard notifications.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), NotificationCenter::dashboard())
    }

    #[must_use]
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Shorthand for pushing onto the shared notification center.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notifications.push(message, severity)
    }

    #[must_use]
    pub fn crud(&self) -> LocalCrudStore {
        LocalCrudStore::new(self.storage.clone())
    }

    #[must_use]
    pub fn sessions(&self) -> SessionManager {
        SessionManager::new(self.storage.clone())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
