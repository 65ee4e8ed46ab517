//! Forgot-password page: requests a reset email.

use leptos::prelude::*;

use crate::state::context::AuthContext;
use crate::util::validation::validate_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    // Servers without outbound mail echo the token back; surface it as a link.
    let echoed_token = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending reset link...".to_owned());
        echoed_token.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.store().forgot_password(&email_value).await {
                Ok(reply) => {
                    let message = if reply.message.is_empty() {
                        "If that email is registered, a reset link is on its way.".to_owned()
                    } else {
                        reply.message
                    };
                    info.set(message);
                    echoed_token.set(reply.reset_token);
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, auth);
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Reset your password"</h1>
                <p class="auth-form__subtitle">"We'll email you a link to choose a new one."</p>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Send Reset Link"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_token.get().is_some()>
                    <p class="auth-message auth-message--token">
                        <a href=move || {
                            format!("/reset-password/{}", echoed_token.get().unwrap_or_default())
                        }>"Continue to reset"</a>
                    </p>
                </Show>
                <p class="auth-links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </form>
        </div>
    }
}
