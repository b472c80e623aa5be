use super::*;
use crate::state::test_helpers::last_notice;

#[test]
fn theme_defaults_to_light() {
    let ctx = AppContext::in_memory();
    assert_eq!(current_theme(&ctx), Theme::Light);
}

#[test]
fn toggle_theme_persists_and_notifies() {
    let ctx = AppContext::in_memory();

    assert_eq!(toggle_theme(&ctx), Theme::Dark);
    assert_eq!(ctx.storage().get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(last_notice(&ctx), Some(("Switched to dark theme".into(), Severity::Success)));

    assert_eq!(toggle_theme(&ctx), Theme::Light);
    assert_eq!(current_theme(&ctx), Theme::Light);
}

#[test]
fn page_views_record_role() {
    let ctx = AppContext::in_memory();
    ctx.storage().set_item(ROLE_KEY, "doctor").unwrap();

    track_page_view(&ctx, "/dashboards/doctor.html");

    let views = page_views(&ctx);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].page, "/dashboards/doctor.html");
    assert_eq!(views[0].user_role.as_deref(), Some("doctor"));
}

#[test]
fn page_views_keep_newest_hundred() {
    let ctx = AppContext::in_memory();
    for i in 0..105 {
        track_page_view(&ctx, &format!("/page/{i}"));
    }

    let views = page_views(&ctx);
    assert_eq!(views.len(), MAX_PAGE_VIEWS);
    assert_eq!(views[0].page, "/page/5");
    assert_eq!(views[99].page, "/page/104");
}

#[test]
fn corrupt_page_views_start_over() {
    let ctx = AppContext::in_memory();
    ctx.storage().set_item(PAGE_VIEWS_KEY, "{oops").unwrap();
    track_page_view(&ctx, "/index.html");
    assert_eq!(page_views(&ctx).len(), 1);
}

#[test]
fn record_sync_stores_timestamp() {
    let ctx = AppContext::in_memory();
    assert!(last_sync(&ctx).is_none());
    let at = record_sync(&ctx);
    assert_eq!(last_sync(&ctx), Some(at));
}

#[test]
fn going_offline_and_online_notifies() {
    let ctx = AppContext::in_memory();
    connectivity_changed(&ctx, false);
    assert_eq!(last_notice(&ctx).unwrap().1, Severity::Info);

    connectivity_changed(&ctx, true);
    assert_eq!(
        last_notice(&ctx),
        Some(("Connection restored. Syncing data...".into(), Severity::Success))
    );
    assert!(last_sync(&ctx).is_some());
}

#[test]
fn search_needs_two_characters() {
    assert!(global_search("").is_empty());
    assert!(global_search("p").is_empty());
    assert_eq!(global_search("pa"), vec!["Patient Management"]);
}

#[test]
fn search_is_case_insensitive() {
    assert_eq!(global_search("SESSION"), vec!["Therapy Sessions"]);
    assert_eq!(global_search("in"), vec!["Appointment Scheduling", "Billing Information", "User Settings"]);
    assert!(global_search("xyz").is_empty());
}

#[test]
fn selecting_result_announces_it() {
    let ctx = AppContext::in_memory();
    select_search_result(&ctx, "Progress Reports");
    assert_eq!(last_notice(&ctx), Some(("Navigating to Progress Reports".into(), Severity::Info)));
}

#[test]
fn switch_role_stores_role() {
    let ctx = AppContext::in_memory();
    assert_eq!(switch_role(&ctx, "patient").unwrap(), Some(Destination::Dashboard(Role::Patient)));
    assert_eq!(ctx.sessions().role().as_deref(), Some("patient"));
}

#[test]
fn switch_role_landing_and_placeholder() {
    let ctx = AppContext::in_memory();
    assert_eq!(switch_role(&ctx, "landing").unwrap(), Some(Destination::Landing));
    assert_eq!(switch_role(&ctx, "").unwrap(), None);
    assert!(ctx.sessions().role().is_none());
}

#[test]
fn form_progress_counts_non_blank_values() {
    assert!((form_progress(&["a", " ", "", "b"]) - 50.0).abs() < f64::EPSILON);
    assert!((form_progress(&["x"]) - 100.0).abs() < f64::EPSILON);
    assert!((form_progress::<&str>(&[]) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn welcome_message_needs_role() {
    let ctx = AppContext::in_memory();
    assert!(welcome_message(&ctx).is_none());
    ctx.storage().set_item(ROLE_KEY, "admin").unwrap();
    assert_eq!(welcome_message(&ctx).as_deref(), Some("Welcome back! You're logged in as admin."));
}
