//! Reset-password page reached from the emailed link `/reset-password/:token`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::PasswordReset;
use crate::state::context::AuthContext;
use crate::util::validation::validate_password_reset;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        let reset_token = params.with(|p| p.get("token")).unwrap_or_default();
        let form = PasswordReset { password: password.get(), confirm_password: confirm.get() };
        if let Err(msg) = validate_password_reset(&reset_token, &form) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.store().reset_password(&reset_token, &form).await {
                Ok(message) => {
                    info.set(message);
                    done.set(true);
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (reset_token, form, auth);
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Choose a new password"</h1>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="New password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm new password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get() || done.get()>
                    "Reset Password"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || done.get()>
                    <p class="auth-links">
                        <a href="/login">"Sign in with your new password"</a>
                    </p>
                </Show>
            </form>
        </div>
    }
}
