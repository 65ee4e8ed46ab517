use super::*;

#[test]
fn validate_email_trims_and_requires_value() {
    assert_eq!(validate_email("  ada@example.com "), Ok("ada@example.com".to_owned()));
    assert_eq!(validate_email("   "), Err(EMAIL_REQUIRED));
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    assert_eq!(validate_email("ada.example.com"), Err(EMAIL_INVALID));
    assert_eq!(validate_email("@example.com"), Err(EMAIL_INVALID));
    assert_eq!(validate_email("ada@"), Err(EMAIL_INVALID));
    assert_eq!(validate_email("a@b@c"), Err(EMAIL_INVALID));
    assert_eq!(validate_email("a da@b.com"), Err(EMAIL_INVALID));
}

#[test]
fn validate_new_password_enforces_length_then_match() {
    assert_eq!(validate_new_password("", ""), Err(PASSWORD_REQUIRED));
    assert_eq!(validate_new_password("abc", "abc"), Err(PASSWORD_TOO_SHORT));
    assert_eq!(validate_new_password("abcdef", "abcdeg"), Err(PASSWORDS_MISMATCH));
    assert_eq!(validate_new_password("abcdef", "abcdef"), Ok(()));
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let creds = validate_credentials(" ada@example.com ", " pass ").unwrap();
    assert_eq!(creds.email, "ada@example.com");
    assert_eq!(creds.password, " pass ");
    assert_eq!(validate_credentials("ada@example.com", ""), Err(PASSWORD_REQUIRED));
}

#[test]
fn validate_registration_normalizes_name_and_email() {
    let form = Registration {
        name: "  Ada Lovelace ".to_owned(),
        email: " ADA@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    };
    let normalized = validate_registration(&form).unwrap();
    assert_eq!(normalized.name, "Ada Lovelace");
    assert_eq!(normalized.email, "ADA@example.com");
}

#[test]
fn validate_registration_requires_name_first() {
    let form = Registration { email: "bad".to_owned(), ..Registration::default() };
    assert_eq!(validate_registration(&form), Err(NAME_REQUIRED));
}

#[test]
fn validate_password_reset_rejects_bad_tokens_and_mismatch() {
    let form = PasswordReset { password: "abcdef".to_owned(), confirm_password: "abcdef".to_owned() };
    assert_eq!(validate_password_reset("  ", &form), Err(RESET_TOKEN_INVALID));
    assert_eq!(validate_password_reset("a/b", &form), Err(RESET_TOKEN_INVALID));
    assert_eq!(validate_password_reset(" tok ", &form), Ok("tok".to_owned()));

    let mismatched = PasswordReset { password: "abcdef".to_owned(), confirm_password: "zzzzzz".to_owned() };
    assert_eq!(validate_password_reset("tok", &mismatched), Err(PASSWORDS_MISMATCH));
}

#[test]
fn validate_password_change_requires_current_password() {
    let form = PasswordChange {
        current_password: String::new(),
        new_password: "abcdef".to_owned(),
        confirm_password: "abcdef".to_owned(),
    };
    assert_eq!(validate_password_change(&form), Err(CURRENT_PASSWORD_REQUIRED));
}
