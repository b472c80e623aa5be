use super::*;
use crate::auth::Role;
use crate::storage::MemoryStorage;

fn manager() -> (Arc<MemoryStorage>, SessionManager) {
    let storage = Arc::new(MemoryStorage::new());
    (storage.clone(), SessionManager::new(storage))
}

fn user(role: &str) -> AuthUser {
    AuthUser {
        email: "doctor@panchsutra.com".into(),
        role: role.into(),
        first_name: "Rajesh".into(),
        last_name: "Sharma".into(),
    }
}

#[test]
fn start_writes_all_session_keys() {
    let (storage, sessions) = manager();
    let session = sessions.start(&user("doctor")).unwrap();

    assert_eq!(session.display_name, "Rajesh Sharma");
    assert!(!session.login_time.is_empty());
    assert_eq!(storage.get_item(SESSION_KEY).unwrap().as_deref(), Some("active"));
    assert_eq!(storage.get_item(ROLE_KEY).unwrap().as_deref(), Some("doctor"));

    let raw = storage.get_item(USER_KEY).unwrap().unwrap();
    assert!(raw.contains("\"loginTime\""));
    assert!(raw.contains("\"firstName\":\"Rajesh\""));
}

#[test]
fn current_reads_back_started_session() {
    let (_, sessions) = manager();
    let started = sessions.start(&user("doctor")).unwrap();
    assert_eq!(sessions.current(), Some(started));
    assert!(sessions.is_active());
    assert_eq!(sessions.role().as_deref(), Some("doctor"));
    assert_eq!(sessions.dashboard(), Destination::Dashboard(Role::Doctor));
}

#[test]
fn display_name_falls_back_to_email() {
    let (_, sessions) = manager();
    let nameless = AuthUser { first_name: String::new(), last_name: String::new(), ..user("admin") };
    assert_eq!(sessions.start(&nameless).unwrap().display_name, "doctor@panchsutra.com");
}

#[test]
fn no_session_by_default() {
    let (_, sessions) = manager();
    assert!(sessions.current().is_none());
    assert!(!sessions.is_active());
    assert_eq!(sessions.dashboard(), Destination::Login);
}

#[test]
fn unreadable_session_is_none() {
    let (storage, sessions) = manager();
    storage.set_item(USER_KEY, "not json").unwrap();
    assert!(sessions.current().is_none());
}

#[test]
fn end_clears_keys_and_goes_to_login() {
    let (storage, sessions) = manager();
    sessions.start(&user("patient")).unwrap();
    storage.set_item(CURRENT_USER_KEY, "{}").unwrap();

    assert_eq!(sessions.end().unwrap(), Destination::Login);
    assert!(sessions.current().is_none());
    assert!(sessions.role().is_none());
    assert!(!sessions.is_active());
    assert!(storage.get_item(CURRENT_USER_KEY).unwrap().is_none());
}

#[test]
fn end_keeps_remembered_email() {
    let (_, sessions) = manager();
    sessions.remember_email(Some("admin@panchsutra.com")).unwrap();
    sessions.end().unwrap();
    assert_eq!(sessions.remembered_email().as_deref(), Some("admin@panchsutra.com"));
}

#[test]
fn remember_none_forgets_email() {
    let (_, sessions) = manager();
    sessions.remember_email(Some("admin@panchsutra.com")).unwrap();
    sessions.remember_email(None).unwrap();
    assert!(sessions.remembered_email().is_none());
}
