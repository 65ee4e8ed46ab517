//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Account routes should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// True once hydration has finished and no user is signed in.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.loading && session.user.is_none()
}

/// Redirect to `/login` whenever the session has loaded without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
