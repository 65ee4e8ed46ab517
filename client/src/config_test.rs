use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "/api");
    assert_eq!(cfg.token_storage_key, "token");
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("https://shop.example.com/api/"), Some(" bagvo_token ")).unwrap();
    assert_eq!(cfg.api_base_url, "https://shop.example.com/api");
    assert_eq!(cfg.token_storage_key, "bagvo_token");
}

#[test]
fn from_values_allows_root_relative_base() {
    let cfg = ClientConfig::from_values(Some("/"), None).unwrap();
    assert_eq!(cfg.api_base_url, "");
}

#[test]
fn from_values_rejects_bad_urls() {
    assert_eq!(
        ClientConfig::from_values(Some("shop.example.com"), None),
        Err(ConfigError::InvalidApiBaseUrl("shop.example.com".to_owned()))
    );
    assert!(ClientConfig::from_values(Some("https://"), None).is_err());
    assert!(ClientConfig::from_values(Some("/a b"), None).is_err());
}

#[test]
fn from_values_rejects_blank_token_key() {
    assert_eq!(ClientConfig::from_values(None, Some("  ")), Err(ConfigError::EmptyTokenKey));
}
