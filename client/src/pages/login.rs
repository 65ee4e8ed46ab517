//! Login page with email + password sign-in.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::context::AuthContext;
use crate::util::validation::validate_credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if auth.session.with(|s| s.user.is_some()) {
                navigate("/account", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let store = auth.store();
                let result = store.login(&credentials).await;
                auth.sync(&store);
                busy.set(false);
                match result {
                    Ok(_) => {
                        info.set(String::new());
                        navigate("/account", NavigateOptions::default());
                    }
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, auth);
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign in to Bagvo"</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    <a href="/forgot-password">"Forgot your password?"</a>
                </p>
                <p class="auth-links">
                    "New to Bagvo? "
                    <a href="/register">"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
