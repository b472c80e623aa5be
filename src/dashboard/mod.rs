//! Role dashboards: section titles and the record-backed actions behind
//! each table or card button.
//!
//! ARCHITECTURE
//! ============
//! Every action takes the [`AppContext`], performs at most one store
//! mutation and reports the outcome through the shared notification center.
//! Callers re-render from the store afterwards; nothing here holds view
//! state.
//!
//! ERROR HANDLING
//! ==============
//! A missing record is shown to the user as an error notification and
//! returned as [`DashboardError::NotFound`]. Storage failures propagate
//! without a notification.

pub mod admin;
pub mod doctor;
pub mod patient;

use crate::auth::Role;
use crate::notify::Severity;
use crate::state::AppContext;
use crate::storage::StorageError;
use crate::storage::record::Record;

/// Title shown when a section has no entry in the role's table.
pub const DEFAULT_TITLE: &str = "Dashboard";

const ADMIN_TITLES: &[(&str, &str)] = &[
    ("dashboard", "Admin Dashboard"),
    ("doctors", "Manage Doctors"),
    ("patients", "Manage Patients"),
    ("analytics", "Analytics & Reports"),
    ("reports", "System Reports"),
    ("settings", "System Settings"),
];

const DOCTOR_TITLES: &[(&str, &str)] = &[
    ("dashboard", "Doctor Dashboard"),
    ("appointments", "Appointment Management"),
    ("patients", "My Patients"),
    ("consultations", "Patient Consultations"),
    ("progress", "Patient Progress"),
    ("meetings", "Video Consultations"),
    ("profile", "My Profile"),
];

const PATIENT_TITLES: &[(&str, &str)] = &[
    ("dashboard", "Welcome Back, Priya!"),
    ("appointments", "My Appointments"),
    ("progress", "My Progress"),
    ("exercises", "My Exercises"),
    ("community", "Patient Community"),
    ("library", "E-Library"),
    ("ai-assistant", "AI Health Assistant"),
    ("feedback", "Share Your Feedback"),
];

/// Page title for `section` on `role`'s dashboard.
#[must_use]
pub fn section_title(role: Role, section: &str) -> &'static str {
    let table = match role {
        Role::Admin => ADMIN_TITLES,
        Role::Doctor => DOCTOR_TITLES,
        Role::Patient => PATIENT_TITLES,
    };
    table
        .iter()
        .find(|(id, _)| *id == section)
        .map_or(DEFAULT_TITLE, |&(_, title)| title)
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("{collection} record not found: {id}")]
    NotFound { collection: &'static str, id: String },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Button label that maps to no known action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

/// Look up `id`, announcing a miss as an error notification.
fn find_or_notify(ctx: &AppContext, collection: &'static str, id: &str, label: &str) -> Result<Record, DashboardError> {
    ctx.crud().get_by_id(collection, id).ok_or_else(|| {
        ctx.notify(format!("{label} not found"), Severity::Error);
        DashboardError::NotFound { collection, id: id.to_owned() }
    })
}

/// Seed `collection` with `rows` unless it already holds records.
///
/// Returns the number of records created.
fn seed_collection(
    ctx: &AppContext,
    collection: &str,
    rows: impl IntoIterator<Item = serde_json::Value>,
) -> Result<usize, StorageError> {
    let crud = ctx.crud();
    if !crud.get_all(collection).is_empty() {
        return Ok(0);
    }
    let mut created = 0;
    for row in rows {
        if let serde_json::Value::Object(fields) = row {
            crud.create(collection, fields)?;
            created += 1;
        }
    }
    tracing::info!(collection, created, "seeded fixture collection");
    Ok(created)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
