//! Cross-page helpers: theme, page-view tracking, quick search and the
//! small status messages every dashboard shares.
//!
//! Theme and analytics writes are best-effort. A failing store is logged and
//! the page keeps working with in-memory defaults.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::session::ROLE_KEY;
use crate::auth::{Destination, Role};
use crate::notify::{NotificationId, Severity};
use crate::state::AppContext;
use crate::storage::record::now_iso;
use crate::storage::{load_json, save_json};

pub const THEME_KEY: &str = "theme";
pub const PAGE_VIEWS_KEY: &str = "pageViews";
pub const LAST_SYNC_KEY: &str = "lastSync";

/// Page views kept in storage; older entries are dropped first.
pub const MAX_PAGE_VIEWS: usize = 100;
/// Shortest query the quick search reacts to.
pub const MIN_SEARCH_LEN: usize = 2;

/// Destinations offered by the header search box.
pub const SEARCH_DESTINATIONS: [&str; 6] = [
    "Patient Management",
    "Appointment Scheduling",
    "Therapy Sessions",
    "Progress Reports",
    "Billing Information",
    "User Settings",
];

// =============================================================================
// THEME
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored theme, `Light` when unset or unrecognized.
#[must_use]
pub fn current_theme(ctx: &AppContext) -> Theme {
    match ctx.storage().get_item(THEME_KEY) {
        Ok(Some(value)) if value == "dark" => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Flip the theme, persist it and announce the switch.
pub fn toggle_theme(ctx: &AppContext) -> Theme {
    let next = current_theme(ctx).toggled();
    if let Err(e) = ctx.storage().set_item(THEME_KEY, next.as_str()) {
        warn!(error = %e, "theme preference not saved");
    }
    ctx.notify(format!("Switched to {} theme", next.as_str()), Severity::Success);
    next
}

// =============================================================================
// ANALYTICS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub page: String,
    pub timestamp: String,
    pub user_role: Option<String>,
}

/// Stored page views, oldest first.
#[must_use]
pub fn page_views(ctx: &AppContext) -> Vec<PageView> {
    load_json(ctx.storage(), PAGE_VIEWS_KEY).unwrap_or_else(|e| {
        warn!(error = %e, "page view log unreadable");
        None
    })
    .unwrap_or_default()
}

/// Append a view of `page`, keeping only the newest [`MAX_PAGE_VIEWS`].
pub fn track_page_view(ctx: &AppContext, page: &str) {
    let mut views = page_views(ctx);
    views.push(PageView {
        page: page.to_owned(),
        timestamp: now_iso(),
        user_role: ctx.sessions().role(),
    });
    if views.len() > MAX_PAGE_VIEWS {
        views.drain(..views.len() - MAX_PAGE_VIEWS);
    }
    if let Err(e) = save_json(ctx.storage(), PAGE_VIEWS_KEY, &views) {
        warn!(error = %e, page, "page view not recorded");
    }
}

/// Stamp the current time as the last successful sync.
pub fn record_sync(ctx: &AppContext) -> String {
    let now = now_iso();
    match ctx.storage().set_item(LAST_SYNC_KEY, &now) {
        Ok(()) => debug!(at = %now, "data synced"),
        Err(e) => warn!(error = %e, "sync timestamp not saved"),
    }
    now
}

/// Last recorded sync timestamp.
#[must_use]
pub fn last_sync(ctx: &AppContext) -> Option<String> {
    ctx.storage().get_item(LAST_SYNC_KEY).ok().flatten()
}

/// Announce a connectivity change.
pub fn connectivity_changed(ctx: &AppContext, online: bool) -> NotificationId {
    if online {
        record_sync(ctx);
        ctx.notify("Connection restored. Syncing data...", Severity::Success)
    } else {
        ctx.notify("Working offline. Changes will sync when connected.", Severity::Info)
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Destinations whose name contains `query`, case-insensitively.
///
/// Queries shorter than [`MIN_SEARCH_LEN`] characters return nothing.
#[must_use]
pub fn global_search(query: &str) -> Vec<&'static str> {
    if query.chars().count() < MIN_SEARCH_LEN {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    SEARCH_DESTINATIONS
        .into_iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .collect()
}

/// Picking a search result only announces it; there is no routing behind it.
pub fn select_search_result(ctx: &AppContext, result: &str) -> NotificationId {
    ctx.notify(format!("Navigating to {result}"), Severity::Info)
}

// =============================================================================
// ROLE SWITCHER / PROGRESS / GREETING
// =============================================================================

/// Demo role switcher target.
///
/// `landing` goes to the landing page. A role is stored and its dashboard
/// returned. Anything else stays put.
///
/// # Errors
///
/// Returns an error if the role cannot be stored.
pub fn switch_role(ctx: &AppContext, choice: &str) -> Result<Option<Destination>, crate::storage::StorageError> {
    if choice == "landing" {
        return Ok(Some(Destination::Landing));
    }
    let Ok(role) = choice.parse::<Role>() else {
        return Ok(None);
    };
    ctx.storage().set_item(ROLE_KEY, role.as_str())?;
    Ok(Some(Destination::Dashboard(role)))
}

/// Share of required values that are non-blank, as a percentage.
///
/// A form with no required inputs counts as complete.
#[must_use]
pub fn form_progress<S: AsRef<str>>(required_values: &[S]) -> f64 {
    if required_values.is_empty() {
        return 100.0;
    }
    let filled = required_values.iter().filter(|v| !v.as_ref().trim().is_empty()).count();
    #[allow(clippy::cast_precision_loss)]
    let pct = filled as f64 / required_values.len() as f64 * 100.0;
    pct
}

/// Greeting shown shortly after any page loads with a stored role.
#[must_use]
pub fn welcome_message(ctx: &AppContext) -> Option<String> {
    ctx.sessions().role().map(|role| format!("Welcome back! You're logged in as {role}."))
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
