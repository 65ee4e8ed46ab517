//! Client-side form validation for the auth flows.
//!
//! Every check runs before the session store touches the network, so a
//! rejected form never produces a request.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Credentials, PasswordChange, PasswordReset, Registration};

pub const MIN_PASSWORD_LEN: usize = 6;

pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const NAME_REQUIRED: &str = "Please enter your name";
pub const PASSWORD_REQUIRED: &str = "Please enter your password";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const CURRENT_PASSWORD_REQUIRED: &str = "Please enter your current password";
pub const RESET_TOKEN_INVALID: &str = "Reset link is invalid or incomplete";

/// Trim and sanity-check an email address.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(EMAIL_INVALID);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(EMAIL_INVALID);
    }
    Ok(email.to_owned())
}

/// Check a new password against the length rule and its confirmation.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        return Err(PASSWORDS_MISMATCH);
    }
    Ok(())
}

/// Normalize login input. Passwords are never trimmed.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok(Credentials { email, password: password.to_owned() })
}

pub fn validate_registration(form: &Registration) -> Result<Registration, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    let email = validate_email(&form.email)?;
    validate_new_password(&form.password, &form.confirm_password)?;
    Ok(Registration {
        name: name.to_owned(),
        email,
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
    })
}

/// Returns the trimmed reset token on success.
pub fn validate_password_reset(reset_token: &str, form: &PasswordReset) -> Result<String, &'static str> {
    let token = reset_token.trim();
    if token.is_empty() || token.contains('/') {
        return Err(RESET_TOKEN_INVALID);
    }
    validate_new_password(&form.password, &form.confirm_password)?;
    Ok(token.to_owned())
}

pub fn validate_password_change(form: &PasswordChange) -> Result<(), &'static str> {
    if form.current_password.is_empty() {
        return Err(CURRENT_PASSWORD_REQUIRED);
    }
    validate_new_password(&form.new_password, &form.confirm_password)
}
