use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    assert_eq!(cfg.rules_path, PathBuf::from(DEFAULT_RULES_PATH));
    assert_eq!(cfg.fallback_reply, DEFAULT_FALLBACK_REPLY);
    assert_eq!(cfg.listen_addr().to_string(), "127.0.0.1:5000");
}

#[test]
fn overrides_are_applied() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("BIND_ADDR", "0.0.0.0"),
        ("PORT", " 8080 "),
        ("STATIC_DIR", "/srv/www"),
        ("CHAT_RULES_PATH", "/etc/panchsutra/rules.json"),
        ("CHAT_FALLBACK_REPLY", "Please call the clinic."),
    ]))
    .unwrap();

    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
    assert_eq!(cfg.rules_path, PathBuf::from("/etc/panchsutra/rules.json"));
    assert_eq!(cfg.fallback_reply, "Please call the clinic.");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("CHAT_FALLBACK_REPLY", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.fallback_reply, DEFAULT_FALLBACK_REPLY);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", ref value } if value == "eighty"));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
}
