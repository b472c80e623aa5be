//! Doctor dashboard: appointment cards, patient cards and the video
//! consultation controls.
//!
//! Card buttons are identified by their label. Each action takes the id of
//! the card's record and names the patient from it in the notification.

use std::str::FromStr;

use serde_json::{Map, Value, json};
use tracing::info;

use super::{DashboardError, UnknownAction, find_or_notify, seed_collection};
use crate::notify::{NotificationId, Severity};
use crate::state::AppContext;
use crate::storage::StorageError;
use crate::storage::record::Record;

pub const APPOINTMENTS: &str = "appointments";
pub const MY_PATIENTS: &str = "myPatients";

/// Appointment status values written by the card actions.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const IN_PROGRESS: &str = "in-progress";
    pub const CANCELLED: &str = "cancelled";
}

// =============================================================================
// ACTION LABELS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    StartConsultation,
    Confirm,
    Reschedule,
    Cancel,
}

impl FromStr for AppointmentAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start consultation" => Ok(Self::StartConsultation),
            "confirm" => Ok(Self::Confirm),
            "reschedule" => Ok(Self::Reschedule),
            "cancel" => Ok(Self::Cancel),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientAction {
    ViewDetails,
    SendMessage,
    Schedule,
    AddNote,
}

impl FromStr for PatientAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "view details" => Ok(Self::ViewDetails),
            "send message" => Ok(Self::SendMessage),
            "schedule" => Ok(Self::Schedule),
            "add note" => Ok(Self::AddNote),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingControl {
    Mute,
    Video,
    Screen,
    End,
}

impl FromStr for MeetingControl {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mute" => Ok(Self::Mute),
            "video" => Ok(Self::Video),
            "screen" => Ok(Self::Screen),
            "end" => Ok(Self::End),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

/// Populate empty appointment and patient lists with demo cards.
///
/// # Errors
///
/// Returns an error if a fixture record cannot be written.
pub fn seed(ctx: &AppContext) -> Result<(), StorageError> {
    seed_collection(
        ctx,
        APPOINTMENTS,
        [
            json!({"patientName": "Priya Patel", "time": "10:00 AM", "type": "Follow-up", "status": status::CONFIRMED}),
            json!({"patientName": "Rahul Singh", "time": "11:30 AM", "type": "Panchakarma", "status": status::PENDING}),
            json!({"patientName": "Anita Desai", "time": "02:00 PM", "type": "Consultation", "status": status::PENDING}),
        ],
    )?;
    seed_collection(
        ctx,
        MY_PATIENTS,
        [
            json!({"name": "Priya Patel", "treatment": "Stress Relief Therapy", "progress": 75}),
            json!({"name": "Rahul Singh", "treatment": "Panchakarma", "progress": 40}),
        ],
    )?;
    Ok(())
}

// =============================================================================
// ACTIONS
// =============================================================================

fn patient_name(record: &Record, field: &str) -> String {
    record.text(field).unwrap_or("patient").to_owned()
}

fn set_status(ctx: &AppContext, id: &str, value: &str) -> Result<Option<Record>, StorageError> {
    let mut patch = Map::new();
    patch.insert("status".into(), Value::from(value));
    ctx.crud().update(APPOINTMENTS, id, patch)
}

/// Run an appointment card button and return the card's current record.
///
/// Cancelling assumes the caller already confirmed with the user.
///
/// # Errors
///
/// Returns [`DashboardError::NotFound`] when no appointment has `id`, or a
/// storage error.
pub fn appointment_action(ctx: &AppContext, action: AppointmentAction, id: &str) -> Result<Record, DashboardError> {
    let record = find_or_notify(ctx, APPOINTMENTS, id, "Appointment")?;
    let name = patient_name(&record, "patientName");

    let (new_status, message, severity) = match action {
        AppointmentAction::StartConsultation => {
            (Some(status::IN_PROGRESS), format!("Starting consultation with {name}"), Severity::Success)
        }
        AppointmentAction::Confirm => {
            (Some(status::CONFIRMED), format!("Appointment confirmed for {name}"), Severity::Success)
        }
        AppointmentAction::Reschedule => (None, format!("Reschedule appointment for {name}"), Severity::Info),
        AppointmentAction::Cancel => {
            (Some(status::CANCELLED), format!("Appointment cancelled for {name}"), Severity::Success)
        }
    };

    let record = match new_status {
        Some(value) => {
            let updated = set_status(ctx, id, value)?;
            info!(id, status = value, "appointment updated");
            updated.unwrap_or(record)
        }
        None => record,
    };
    ctx.notify(message, severity);
    Ok(record)
}

/// Run a patient card button.
///
/// # Errors
///
/// Returns [`DashboardError::NotFound`] when no patient has `id`.
pub fn patient_action(ctx: &AppContext, action: PatientAction, id: &str) -> Result<NotificationId, DashboardError> {
    let record = find_or_notify(ctx, MY_PATIENTS, id, "Patient")?;
    let name = patient_name(&record, "name");
    let message = match action {
        PatientAction::ViewDetails => format!("Opening details for {name}"),
        PatientAction::SendMessage => format!("Opening message composer for {name}"),
        PatientAction::Schedule => format!("Scheduling appointment for {name}"),
        PatientAction::AddNote => format!("Adding note for {name}"),
    };
    Ok(ctx.notify(message, Severity::Info))
}

/// Placeholder for the "schedule appointment" header button.
pub fn schedule_appointment(ctx: &AppContext) -> NotificationId {
    ctx.notify("Schedule appointment functionality will be implemented", Severity::Info)
}

pub fn start_meeting(ctx: &AppContext) -> NotificationId {
    ctx.notify("Starting new video meeting", Severity::Success)
}

/// Video consultation control buttons. Ending assumes prior confirmation.
pub fn meeting_control(ctx: &AppContext, control: MeetingControl) -> NotificationId {
    match control {
        MeetingControl::Mute => ctx.notify("Microphone toggled", Severity::Info),
        MeetingControl::Video => ctx.notify("Camera toggled", Severity::Info),
        MeetingControl::Screen => ctx.notify("Screen sharing toggled", Severity::Info),
        MeetingControl::End => ctx.notify("Meeting ended", Severity::Success),
    }
}

/// Cards in `collection` matching the section search box.
#[must_use]
pub fn filter(ctx: &AppContext, collection: &str, term: &str) -> Vec<Record> {
    ctx.crud().search(collection, term)
}

#[cfg(test)]
#[path = "doctor_test.rs"]
mod tests;
