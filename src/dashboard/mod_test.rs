use super::*;
use crate::state::test_helpers::last_notice;

#[test]
fn section_titles_per_role() {
    assert_eq!(section_title(Role::Admin, "doctors"), "Manage Doctors");
    assert_eq!(section_title(Role::Doctor, "meetings"), "Video Consultations");
    assert_eq!(section_title(Role::Patient, "ai-assistant"), "AI Health Assistant");
}

#[test]
fn unknown_section_falls_back() {
    assert_eq!(section_title(Role::Admin, "billing"), DEFAULT_TITLE);
    assert_eq!(section_title(Role::Patient, "meetings"), DEFAULT_TITLE);
}

#[test]
fn seeding_skips_populated_collection() {
    let ctx = AppContext::in_memory();
    let rows = || [serde_json::json!({"name": "a"}), serde_json::json!({"name": "b"})];

    assert_eq!(seed_collection(&ctx, "things", rows()).unwrap(), 2);
    assert_eq!(seed_collection(&ctx, "things", rows()).unwrap(), 0);
    assert_eq!(ctx.crud().get_all("things").len(), 2);
}

#[test]
fn seeding_ignores_non_object_rows() {
    let ctx = AppContext::in_memory();
    let created = seed_collection(&ctx, "things", [serde_json::json!(1), serde_json::json!({"x": 1})]).unwrap();
    assert_eq!(created, 1);
}

#[test]
fn missing_record_notifies_and_errors() {
    let ctx = AppContext::in_memory();
    let err = find_or_notify(&ctx, "doctors", "42", "Doctor").unwrap_err();

    assert!(matches!(err, DashboardError::NotFound { collection: "doctors", ref id } if id == "42"));
    assert_eq!(last_notice(&ctx), Some(("Doctor not found".into(), Severity::Error)));
}
