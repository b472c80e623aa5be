use super::*;

#[test]
fn clones_share_storage_and_notifications() {
    let ctx = AppContext::in_memory();
    let other = ctx.clone();

    other.storage().set_item("theme", "dark").unwrap();
    other.notify("hello", Severity::Info);

    assert_eq!(ctx.storage().get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(test_helpers::last_notice(&ctx), Some(("hello".into(), Severity::Info)));
}

#[test]
fn crud_and_sessions_use_context_storage() {
    let ctx = AppContext::in_memory();
    let record = ctx.crud().create("notes", serde_json::Map::new()).unwrap();
    assert!(ctx.storage().get_item("notes").unwrap().unwrap().contains(&record.id));
    assert!(ctx.sessions().current().is_none());
}
