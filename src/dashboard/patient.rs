//! Patient dashboard: daily activity checklist, treatment progress,
//! exercise filter, e-library and community buttons.

use std::str::FromStr;

use serde_json::{Map, Value, json};
use tracing::info;

use super::{DashboardError, UnknownAction, find_or_notify, seed_collection};
use crate::notify::{NotificationId, Severity};
use crate::state::AppContext;
use crate::storage::StorageError;
use crate::storage::record::{Record, now_iso};

pub const ACTIVITIES: &str = "activities";
pub const EXERCISES: &str = "exercises";

/// Exercise filter value that passes every category.
pub const ALL_CATEGORIES: &str = "all";

const PENDING_LABEL: &str = "Pending";

/// Populate the empty checklist and exercise list with demo entries.
///
/// # Errors
///
/// Returns an error if a fixture record cannot be written.
pub fn seed(ctx: &AppContext) -> Result<(), StorageError> {
    seed_collection(
        ctx,
        ACTIVITIES,
        [
            json!({"name": "Morning Meditation (20 min)", "completed": true, "completedAt": "2024-01-15T07:30:00.000Z"}),
            json!({"name": "Herbal Tea (Evening)", "completed": false}),
            json!({"name": "Breathing Exercise (15 min)", "completed": false}),
        ],
    )?;
    seed_collection(
        ctx,
        EXERCISES,
        [
            json!({"title": "Surya Namaskar", "category": "yoga", "duration": "15 min"}),
            json!({"title": "Anulom Vilom", "category": "breathing", "duration": "10 min"}),
            json!({"title": "Guided Body Scan", "category": "meditation", "duration": "20 min"}),
            json!({"title": "Vrikshasana", "category": "yoga", "duration": "5 min"}),
        ],
    )?;
    Ok(())
}

// =============================================================================
// ACTIVITY CHECKLIST
// =============================================================================

#[must_use]
pub fn is_completed(activity: &Record) -> bool {
    activity.get("completed").and_then(Value::as_bool).unwrap_or(false)
}

/// Status line under a checklist entry: `Completed at HH:MM` or `Pending`.
#[must_use]
pub fn activity_status(activity: &Record) -> String {
    if !is_completed(activity) {
        return PENDING_LABEL.to_owned();
    }
    match activity.text("completedAt").and_then(|at| at.get(11..16)) {
        Some(clock) => format!("Completed at {clock}"),
        None => "Completed".to_owned(),
    }
}

/// Tick or untick a checklist entry.
///
/// Ticking stamps the completion time and congratulates the patient.
/// Unticking returns the entry to pending without a notification.
///
/// # Errors
///
/// Returns [`DashboardError::NotFound`] when no activity has `id`, or a
/// storage error.
pub fn set_activity_completed(ctx: &AppContext, id: &str, completed: bool) -> Result<Record, DashboardError> {
    let activity = find_or_notify(ctx, ACTIVITIES, id, "Activity")?;

    let mut patch = Map::new();
    patch.insert("completed".into(), Value::Bool(completed));
    patch.insert("completedAt".into(), if completed { Value::String(now_iso()) } else { Value::Null });
    let updated = ctx.crud().update(ACTIVITIES, id, patch)?.unwrap_or(activity);

    if completed {
        let name = updated.text("name").unwrap_or_default();
        info!(id, "activity completed");
        ctx.notify(format!("Great job! You completed: {name}"), Severity::Success);
    }
    Ok(updated)
}

/// Whole-percent share of completed activities; zero for an empty list.
#[must_use]
pub fn progress(activities: &[Record]) -> u8 {
    if activities.is_empty() {
        return 0;
    }
    let done = activities.iter().filter(|a| is_completed(a)).count();
    u8::try_from(done * 100 / activities.len()).unwrap_or(100)
}

// =============================================================================
// EXERCISES
// =============================================================================

/// Exercises in `category`; [`ALL_CATEGORIES`] passes everything.
#[must_use]
pub fn filter_exercises<'a>(exercises: &'a [Record], category: &str) -> Vec<&'a Record> {
    exercises
        .iter()
        .filter(|e| category == ALL_CATEGORIES || e.text("category") == Some(category))
        .collect()
}

// =============================================================================
// LIBRARY / COMMUNITY / QUICK ACTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryAction {
    Download,
    Preview,
    Watch,
    Save,
}

impl FromStr for LibraryAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "download" => Ok(Self::Download),
            "preview" => Ok(Self::Preview),
            "watch" => Ok(Self::Watch),
            "save" => Ok(Self::Save),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

pub fn library_action(ctx: &AppContext, action: LibraryAction, title: &str) -> NotificationId {
    match action {
        LibraryAction::Download => ctx.notify(format!("Downloading: {title}"), Severity::Success),
        LibraryAction::Preview => ctx.notify(format!("Opening preview: {title}"), Severity::Info),
        LibraryAction::Watch => ctx.notify(format!("Starting video: {title}"), Severity::Success),
        LibraryAction::Save => ctx.notify(format!("Saved to library: {title}"), Severity::Success),
    }
}

/// Community post buttons carry counters in their label ("👍 Like (12)"),
/// so they are matched by keyword. Unrecognized labels do nothing.
pub fn community_action(ctx: &AppContext, label: &str) -> Option<NotificationId> {
    let label = label.to_lowercase();
    if label.contains("like") {
        Some(ctx.notify("Post liked!", Severity::Success))
    } else if label.contains("comment") {
        Some(ctx.notify("Comment feature coming soon!", Severity::Info))
    } else if label.contains("share") {
        Some(ctx.notify("Post shared!", Severity::Success))
    } else {
        None
    }
}

/// Where a quick-action tile leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Notified(NotificationId),
    Section(&'static str),
}

/// Dispatch a quick-action tile by its label.
///
/// # Errors
///
/// Returns [`UnknownAction`] for a label with no tile.
pub fn quick_action(ctx: &AppContext, label: &str) -> Result<QuickAction, UnknownAction> {
    match label.trim().to_lowercase().as_str() {
        "book appointment" => Ok(QuickAction::Notified(book_appointment(ctx))),
        "message doctor" => Ok(QuickAction::Notified(ctx.notify("Opening message composer...", Severity::Info))),
        "view progress" => Ok(QuickAction::Section("progress")),
        "ai assistant" => Ok(QuickAction::Section("ai-assistant")),
        other => Err(UnknownAction(other.to_owned())),
    }
}

pub fn book_appointment(ctx: &AppContext) -> NotificationId {
    ctx.notify("Opening appointment booking form...", Severity::Info)
}

pub fn new_post(ctx: &AppContext) -> NotificationId {
    ctx.notify("Opening post composer...", Severity::Info)
}

#[cfg(test)]
#[path = "patient_test.rs"]
mod tests;
