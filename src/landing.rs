//! Landing page newsletter form.
//!
//! The landing page runs its own [`AppContext`] built with
//! [`NotificationCenter::landing`](crate::notify::NotificationCenter::landing),
//! so its notices expire sooner than the dashboards'.

use std::time::Duration;

use tracing::info;

use crate::notify::Severity;
use crate::state::AppContext;
use crate::validate::validate_email;

/// Simulated latency of the subscription call.
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1500);

pub const SUBSCRIBED: &str = "Thank you for subscribing to our newsletter!";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Newsletter subscription with a mocked backend call.
#[derive(Clone)]
pub struct Newsletter {
    ctx: AppContext,
    delay: Duration,
}

impl Newsletter {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self::with_delay(ctx, SUBSCRIBE_DELAY)
    }

    #[must_use]
    pub fn with_delay(ctx: AppContext, delay: Duration) -> Self {
        Self { ctx, delay }
    }

    /// Subscribe `email`. Returns whether the form should be cleared.
    ///
    /// Invalid or blank addresses are rejected immediately with an error
    /// notice; valid ones succeed after the simulated delay.
    pub async fn subscribe(&self, email: &str) -> bool {
        if validate_email(email).is_err() {
            self.ctx.notify(INVALID_EMAIL, Severity::Error);
            return false;
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        info!(email, "newsletter subscription");
        self.ctx.notify(SUBSCRIBED, Severity::Success);
        true
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
