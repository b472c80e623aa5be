//! Admin dashboard: doctor and patient management tables.

use std::str::FromStr;

use serde_json::{Map, Value, json};
use tracing::info;

use super::{DashboardError, UnknownAction, find_or_notify, seed_collection};
use crate::notify::{NotificationId, Severity};
use crate::state::AppContext;
use crate::storage::StorageError;
use crate::storage::record::Record;

pub const DOCTORS: &str = "doctors";
pub const PATIENTS: &str = "patients";

/// Which management table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Doctors,
    Patients,
}

impl Table {
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Doctors => DOCTORS,
            Self::Patients => PATIENTS,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Doctors => "Doctor",
            Self::Patients => "Patient",
        }
    }
}

/// Per-row buttons in the management tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    View,
    Delete,
}

impl FromStr for RowAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "edit" => Ok(Self::Edit),
            "view" => Ok(Self::View),
            "delete" => Ok(Self::Delete),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

fn doctor_fixtures() -> [Value; 3] {
    [
        json!({
            "name": "Dr. Rajesh Sharma",
            "email": "rajesh@panchsutra.com",
            "specialization": "Ayurveda Specialist",
            "experience": "15 years",
            "patients": 156,
            "status": "active",
        }),
        json!({
            "name": "Dr. Priya Patel",
            "email": "priya@panchsutra.com",
            "specialization": "Panchakarma Expert",
            "experience": "12 years",
            "patients": 134,
            "status": "active",
        }),
        json!({
            "name": "Dr. Amit Kumar",
            "email": "amit@panchsutra.com",
            "specialization": "Yoga Therapist",
            "experience": "8 years",
            "patients": 89,
            "status": "inactive",
        }),
    ]
}

fn patient_fixtures() -> [Value; 2] {
    [
        json!({
            "name": "Priya Patel",
            "email": "priya@email.com",
            "age": 32,
            "treatment": "Stress Relief Therapy",
            "doctor": "Dr. Sharma",
            "lastVisit": "2024-01-15",
            "status": "active",
        }),
        json!({
            "name": "Rahul Singh",
            "email": "rahul@email.com",
            "age": 45,
            "treatment": "Panchakarma",
            "doctor": "Dr. Patel",
            "lastVisit": "2024-01-12",
            "status": "active",
        }),
    ]
}

/// Populate empty doctor and patient tables with the demo rows.
///
/// # Errors
///
/// Returns an error if a fixture record cannot be written.
pub fn seed(ctx: &AppContext) -> Result<(), StorageError> {
    seed_collection(ctx, DOCTORS, doctor_fixtures())?;
    seed_collection(ctx, PATIENTS, patient_fixtures())?;
    Ok(())
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Rows of `table` matching the search box (blank shows everything).
#[must_use]
pub fn filter(ctx: &AppContext, table: Table, term: &str) -> Vec<Record> {
    ctx.crud().search(table.collection(), term)
}

/// Save the add-doctor modal's fields as a new record.
///
/// # Errors
///
/// Returns an error if the record cannot be stored.
pub fn add_doctor(ctx: &AppContext, form: Map<String, Value>) -> Result<Record, StorageError> {
    let record = ctx.crud().create(DOCTORS, form)?;
    info!(id = %record.id, "doctor added");
    ctx.notify("Doctor added successfully!", Severity::Success);
    Ok(record)
}

/// Remove a row from `table` after the caller's confirmation.
///
/// # Errors
///
/// Returns [`DashboardError::NotFound`] (with an error notification) when
/// no row has `id`, or a storage error.
pub fn delete(ctx: &AppContext, table: Table, id: &str) -> Result<NotificationId, DashboardError> {
    if !ctx.crud().delete(table.collection(), id)? {
        ctx.notify(format!("{} not found", table.label()), Severity::Error);
        return Err(DashboardError::NotFound { collection: table.collection(), id: id.to_owned() });
    }
    info!(collection = table.collection(), id, "row deleted");
    Ok(ctx.notify(format!("{} deleted successfully!", table.label()), Severity::Success))
}

/// Dispatch a row button.
///
/// Edit and view are placeholders that only announce themselves.
///
/// # Errors
///
/// Returns [`DashboardError::NotFound`] when no row has `id`, or a storage
/// error from delete.
pub fn row_action(ctx: &AppContext, table: Table, action: RowAction, id: &str) -> Result<NotificationId, DashboardError> {
    match action {
        RowAction::Edit => {
            find_or_notify(ctx, table.collection(), id, table.label())?;
            Ok(ctx.notify("Edit functionality will be implemented", Severity::Info))
        }
        RowAction::View => {
            find_or_notify(ctx, table.collection(), id, table.label())?;
            Ok(ctx.notify("View functionality will be implemented", Severity::Info))
        }
        RowAction::Delete => delete(ctx, table, id),
    }
}

/// Counter formatting for the stat cards.
///
/// Lakh amounts render as rupees (`₹1.5L`), thousands as `K`, smaller
/// numbers unchanged.
#[must_use]
pub fn format_number(n: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = n as f64;
    if n >= 100_000 {
        format!("₹{:.1}L", value / 100_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
