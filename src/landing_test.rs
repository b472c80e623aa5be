use std::sync::Arc;

use super::*;
use crate::notify::{LANDING_TIMEOUT, NotificationCenter};
use crate::state::test_helpers::last_notice;
use crate::storage::MemoryStorage;

fn landing_ctx() -> AppContext {
    AppContext::new(Arc::new(MemoryStorage::new()), NotificationCenter::landing())
}

#[tokio::test(start_paused = true)]
async fn valid_email_subscribes_after_delay() {
    let ctx = landing_ctx();
    let newsletter = Newsletter::new(ctx.clone());

    let started = tokio::time::Instant::now();
    assert!(newsletter.subscribe("asha@example.com").await);

    assert!(started.elapsed() >= SUBSCRIBE_DELAY);
    assert_eq!(last_notice(&ctx), Some((SUBSCRIBED.into(), Severity::Success)));
    assert_eq!(ctx.notifications().timeout(), LANDING_TIMEOUT);
}

#[tokio::test]
async fn invalid_email_is_rejected_immediately() {
    let ctx = landing_ctx();
    let newsletter = Newsletter::with_delay(ctx.clone(), Duration::ZERO);

    assert!(!newsletter.subscribe("asha@example").await);
    assert_eq!(last_notice(&ctx), Some((INVALID_EMAIL.into(), Severity::Error)));
}

#[tokio::test]
async fn blank_email_is_rejected() {
    let ctx = landing_ctx();
    let newsletter = Newsletter::with_delay(ctx.clone(), Duration::ZERO);

    assert!(!newsletter.subscribe("   ").await);
    assert_eq!(last_notice(&ctx).unwrap().1, Severity::Error);
}
