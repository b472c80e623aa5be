use super::*;
use crate::state::test_helpers::last_notice;

fn seeded() -> AppContext {
    let ctx = AppContext::in_memory();
    seed(&ctx).unwrap();
    ctx
}

fn activity(ctx: &AppContext, index: usize) -> Record {
    ctx.crud().get_all(ACTIVITIES).swap_remove(index)
}

#[test]
fn seeded_checklist_status_lines() {
    let ctx = seeded();
    assert_eq!(activity_status(&activity(&ctx, 0)), "Completed at 07:30");
    assert_eq!(activity_status(&activity(&ctx, 1)), "Pending");
}

#[test]
fn completing_activity_congratulates() {
    let ctx = seeded();
    let id = activity(&ctx, 1).id;

    let updated = set_activity_completed(&ctx, &id, true).unwrap();

    assert!(is_completed(&updated));
    assert!(activity_status(&updated).starts_with("Completed at "));
    assert_eq!(
        last_notice(&ctx),
        Some(("Great job! You completed: Herbal Tea (Evening)".into(), Severity::Success))
    );
}

#[test]
fn unchecking_returns_to_pending_quietly() {
    let ctx = seeded();
    let id = activity(&ctx, 0).id;

    let updated = set_activity_completed(&ctx, &id, false).unwrap();

    assert!(!is_completed(&updated));
    assert_eq!(activity_status(&updated), "Pending");
    assert!(last_notice(&ctx).is_none());
}

#[test]
fn unknown_activity_is_not_found() {
    let ctx = seeded();
    assert!(matches!(
        set_activity_completed(&ctx, "gone", true),
        Err(DashboardError::NotFound { collection: ACTIVITIES, .. })
    ));
}

#[test]
fn progress_tracks_checklist() {
    let ctx = seeded();
    assert_eq!(progress(&ctx.crud().get_all(ACTIVITIES)), 33);

    let id = activity(&ctx, 2).id;
    set_activity_completed(&ctx, &id, true).unwrap();
    assert_eq!(progress(&ctx.crud().get_all(ACTIVITIES)), 66);

    assert_eq!(progress(&[]), 0);
}

#[test]
fn exercise_filter_by_category() {
    let ctx = seeded();
    let exercises = ctx.crud().get_all(EXERCISES);

    assert_eq!(filter_exercises(&exercises, ALL_CATEGORIES).len(), 4);
    let yoga = filter_exercises(&exercises, "yoga");
    assert_eq!(yoga.len(), 2);
    assert!(yoga.iter().all(|e| e.text("category") == Some("yoga")));
    assert!(filter_exercises(&exercises, "pilates").is_empty());
}

#[test]
fn library_buttons() {
    let ctx = AppContext::in_memory();
    library_action(&ctx, "Download".parse().unwrap(), "Ayurveda Basics");
    assert_eq!(last_notice(&ctx), Some(("Downloading: Ayurveda Basics".into(), Severity::Success)));

    library_action(&ctx, LibraryAction::Preview, "Dosha Guide");
    assert_eq!(last_notice(&ctx), Some(("Opening preview: Dosha Guide".into(), Severity::Info)));
}

#[test]
fn community_buttons_match_keywords() {
    let ctx = AppContext::in_memory();
    assert!(community_action(&ctx, "👍 Like (12)").is_some());
    assert_eq!(last_notice(&ctx).unwrap().0, "Post liked!");

    community_action(&ctx, "💬 Comment");
    assert_eq!(last_notice(&ctx), Some(("Comment feature coming soon!".into(), Severity::Info)));

    assert!(community_action(&ctx, "Report").is_none());
}

#[test]
fn quick_actions_route_or_notify() {
    let ctx = AppContext::in_memory();
    assert_eq!(quick_action(&ctx, "View Progress"), Ok(QuickAction::Section("progress")));
    assert_eq!(quick_action(&ctx, "AI Assistant"), Ok(QuickAction::Section("ai-assistant")));

    assert!(matches!(quick_action(&ctx, "Book Appointment"), Ok(QuickAction::Notified(_))));
    assert_eq!(last_notice(&ctx).unwrap().0, "Opening appointment booking form...");

    assert!(quick_action(&ctx, "Dance").is_err());
}
