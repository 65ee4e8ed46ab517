use super::*;

#[test]
fn from_values_defaults() {
    let cfg = HostConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, HostConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_values_parses_overrides() {
    let cfg = HostConfig::from_values(Some(" 127.0.0.1 "), Some("8080")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn from_values_treats_blank_port_as_default() {
    assert_eq!(HostConfig::from_values(None, Some("  ")).unwrap().port, DEFAULT_PORT);
}

#[test]
fn from_values_rejects_bad_port_and_host() {
    assert_eq!(HostConfig::from_values(None, Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(HostConfig::from_values(None, Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
    assert_eq!(HostConfig::from_values(Some(""), None), Err(ConfigError::EmptyHost));
}
