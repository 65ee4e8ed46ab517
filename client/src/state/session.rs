//! Auth-session state and the operations that mutate it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into [`SessionStore`]; the store validates input, talks to the
//! API through a [`Gateway`] and keeps the persisted token in step with the
//! in-memory [`Session`]. Route guards read the session to decide on login
//! redirects.
//!
//! DESIGN
//! ======
//! The browser runs everything on one thread, so the session lives in a
//! `RefCell` that is only borrowed between awaits, never across one. Every
//! operation reports failure as a user-facing message string; the store
//! never retries.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use crate::net::api;
use crate::net::gateway::{ApiError, Gateway};
use crate::net::types::{
    AuthResponse, Credentials, ForgotPasswordReply, Order, OrderSummary, PasswordChange, PasswordReset, Registration,
    UserProfile,
};
use crate::util::token_storage::TokenStorage;
use crate::util::validation;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const FORGOT_PASSWORD_FAILED: &str = "Failed to send reset email";
pub const RESET_PASSWORD_FAILED: &str = "Password reset failed";
pub const CHANGE_PASSWORD_FAILED: &str = "Password change failed";
pub const ORDER_FETCH_FAILED: &str = "Failed to load order";
pub const ORDERS_FETCH_FAILED: &str = "Failed to load orders";
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

const RESET_PASSWORD_DONE: &str = "Password reset successful";
const CHANGE_PASSWORD_DONE: &str = "Password updated successfully";

/// Current authenticated identity, bearer token and hydration status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Owns the session and the collaborators needed to change it.
#[derive(Debug)]
pub struct SessionStore<G, S> {
    gateway: G,
    storage: S,
    session: RefCell<Session>,
}

impl<G: Gateway, S: TokenStorage> SessionStore<G, S> {
    /// Build a store around the persisted token, if any.
    ///
    /// The session starts in `loading` state; call [`Self::hydrate`] to
    /// resolve it against the server.
    pub fn new(gateway: G, storage: S) -> Self {
        let token = storage.load();
        Self { gateway, storage, session: RefCell::new(Session { user: None, token, loading: true }) }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Restore the user from the persisted token.
    ///
    /// Any failure discards the token from memory and storage. A login that
    /// lands while the check is in flight wins over the stale result.
    pub async fn hydrate(&self) {
        let stored = self.session.borrow().token.clone();
        let Some(token) = stored else {
            self.session.borrow_mut().loading = false;
            return;
        };

        let result = api::fetch_current_user(&self.gateway, &token).await;

        let mut session = self.session.borrow_mut();
        session.loading = false;
        if session.token.as_deref() != Some(token.as_str()) {
            log::debug!("session changed during hydration; discarding stale result");
            return;
        }
        match result {
            Ok(user) => {
                log::info!("session restored for {}", user.email);
                session.user = Some(user);
            }
            Err(e) => {
                log::info!("stored session rejected: {e}");
                self.storage.clear();
                session.token = None;
                session.user = None;
            }
        }
    }

    /// Sign in. On success the token is persisted and the user cached.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message; the session is left untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, String> {
        let credentials =
            validation::validate_credentials(&credentials.email, &credentials.password).map_err(str::to_owned)?;
        let resp = api::login(&self.gateway, &credentials)
            .await
            .map_err(|e| failure(&e, LOGIN_FAILED))?;
        self.establish(resp, LOGIN_FAILED)
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message; the session is left untouched.
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile, String> {
        let registration = validation::validate_registration(registration).map_err(str::to_owned)?;
        let resp = api::register(&self.gateway, &registration)
            .await
            .map_err(|e| failure(&e, REGISTRATION_FAILED))?;
        self.establish(resp, REGISTRATION_FAILED)
    }

    /// Forget the token and user locally. The server is not contacted.
    pub fn logout(&self) {
        self.storage.clear();
        let mut session = self.session.borrow_mut();
        session.token = None;
        session.user = None;
        session.loading = false;
        log::info!("signed out");
    }

    /// Request a password-reset email.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message on invalid input or request failure.
    pub async fn forgot_password(&self, email: &str) -> Result<ForgotPasswordReply, String> {
        let email = validation::validate_email(email).map_err(str::to_owned)?;
        api::forgot_password(&self.gateway, &email)
            .await
            .map_err(|e| failure(&e, FORGOT_PASSWORD_FAILED))
    }

    /// Set a new password using the token from a reset link.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message. Mismatched passwords are rejected
    /// before any request is made.
    pub async fn reset_password(&self, reset_token: &str, passwords: &PasswordReset) -> Result<String, String> {
        let reset_token = validation::validate_password_reset(reset_token, passwords).map_err(str::to_owned)?;
        let resp = api::reset_password(&self.gateway, &reset_token, passwords)
            .await
            .map_err(|e| failure(&e, RESET_PASSWORD_FAILED))?;
        Ok(success_message(resp.message, RESET_PASSWORD_DONE))
    }

    /// Change the password of the signed-in user. The token is kept.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message; without a token no request is made.
    pub async fn change_password(&self, passwords: &PasswordChange) -> Result<String, String> {
        let token = self.current_token()?;
        validation::validate_password_change(passwords).map_err(str::to_owned)?;
        let resp = api::change_password(&self.gateway, &token, passwords)
            .await
            .map_err(|e| failure(&e, CHANGE_PASSWORD_FAILED))?;
        Ok(success_message(resp.message, CHANGE_PASSWORD_DONE))
    }

    /// Load one of the signed-in user's orders.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message; without a token no request is made.
    pub async fn fetch_order(&self, order_id: &str) -> Result<Order, String> {
        let token = self.current_token()?;
        api::fetch_order(&self.gateway, &token, order_id.trim())
            .await
            .map_err(|e| failure(&e, ORDER_FETCH_FAILED))
    }

    /// List the signed-in user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message; without a token no request is made.
    pub async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, String> {
        let token = self.current_token()?;
        let mut orders = api::fetch_my_orders(&self.gateway, &token)
            .await
            .map_err(|e| failure(&e, ORDERS_FETCH_FAILED))?;
        // RFC 3339 timestamps in one zone order lexicographically.
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    fn current_token(&self) -> Result<String, String> {
        self.session.borrow().token.clone().ok_or_else(|| NOT_AUTHENTICATED.to_owned())
    }

    fn establish(&self, resp: AuthResponse, fallback: &str) -> Result<UserProfile, String> {
        if !resp.success {
            return Err(success_message(resp.message, fallback));
        }
        let token = resp.token.filter(|t| !t.trim().is_empty());
        let (Some(token), Some(user)) = (token, resp.data) else {
            log::warn!("{fallback}: response missing token or user");
            return Err(fallback.to_owned());
        };

        self.storage.save(&token);
        let mut session = self.session.borrow_mut();
        session.token = Some(token);
        session.user = Some(user.clone());
        session.loading = false;
        log::info!("signed in as {}", user.email);
        Ok(user)
    }
}

fn failure(error: &ApiError, fallback: &str) -> String {
    log::warn!("{fallback}: {error}");
    error.user_message(fallback)
}

fn success_message(message: Option<String>, fallback: &str) -> String {
    message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
