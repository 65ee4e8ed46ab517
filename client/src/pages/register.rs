//! Registration page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Registration;
use crate::state::context::AuthContext;
use crate::util::validation::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = Registration {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        let form = match validate_registration(&form) {
            Ok(form) => form,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let store = auth.store();
                let result = store.register(&form).await;
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
        let _ = (form, auth);
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Create your account"</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                    placeholder="Password (6+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
