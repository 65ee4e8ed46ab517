use super::*;
use crate::net::types::UserProfile;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let session = Session { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_while_loading() {
    let session = Session { user: None, token: Some("tok".to_owned()), loading: true };
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let session = Session {
        user: Some(UserProfile {
            id: "u1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: None,
            role: None,
            extra: serde_json::Map::new(),
        }),
        token: Some("tok".to_owned()),
        loading: false,
    };
    assert!(!should_redirect_unauth(&session));
}
