//! Account dashboard: profile summary, order history with invoice links,
//! password change and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It waits for session hydration
//! and redirects to `/login` if no user is restored.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::invoice::{invoice_number, invoice_path};
use crate::net::types::{OrderSummary, PasswordChange};
use crate::state::context::AuthContext;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{format_currency, format_date};
use crate::util::validation::validate_password_change;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_unauth_redirect(auth.session, use_navigate());

    let loading = move || auth.session.with(|s| s.loading);
    let name = move || auth.session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = move || auth.session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="account-page">
            <Show
                when=move || !loading()
                fallback=|| view! { <p class="account-loading">"Loading your account..."</p> }
            >
                <section class="account-card">
                    <h1>"My Account"</h1>
                    <p>
                        <strong>"Name: "</strong>
                        {name}
                    </p>
                    <p>
                        <strong>"Email: "</strong>
                        {email}
                    </p>
                    <button class="account-button" on:click=move |_| auth.logout()>
                        "Sign Out"
                    </button>
                </section>
                <OrderHistory/>
                <ChangePasswordForm/>
            </Show>
        </div>
    }
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let current = RwSignal::new(String::new());
    let next = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = PasswordChange {
            current_password: current.get(),
            new_password: next.get(),
            confirm_password: confirm.get(),
        };
        if let Err(msg) = validate_password_change(&form) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.store().change_password(&form).await {
                Ok(message) => {
                    current.set(String::new());
                    next.set(String::new());
                    confirm.set(String::new());
                    info.set(message);
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, auth);
    };

    view! {
        <form class="account-card account-form" on:submit=on_submit>
            <h2>"Change Password"</h2>
            <input
                class="account-input"
                type="password"
                placeholder="Current password"
                prop:value=move || current.get()
                on:input=move |ev| current.set(event_target_value(&ev))
            />
            <input
                class="account-input"
                type="password"
                placeholder="New password"
                prop:value=move || next.get()
                on:input=move |ev| next.set(event_target_value(&ev))
            />
            <input
                class="account-input"
                type="password"
                placeholder="Confirm new password"
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
            <button class="account-button" type="submit" disabled=move || busy.get()>
                "Update Password"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="account-message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

#[component]
fn OrderHistory() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let orders = RwSignal::new(None::<Vec<OrderSummary>>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        Effect::new(move || {
            let ready = auth.session.with(|s| !s.loading && s.token.is_some());
            if !ready || requested.get_untracked() {
                return;
            }
            requested.set(true);
            leptos::task::spawn_local(async move {
                match auth.store().fetch_orders().await {
                    Ok(list) => orders.set(Some(list)),
                    Err(e) => error.set(e),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <section class="account-card">
            <h2>"Order History"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="account-message">{move || error.get()}</p>
            </Show>
            {move || match orders.get() {
                None if error.with(String::is_empty) => {
                    view! { <p class="account-loading">"Loading orders..."</p> }.into_any()
                }
                None => ().into_any(),
                Some(list) if list.is_empty() => {
                    view! { <p class="account-message">"You have not placed any orders yet."</p> }.into_any()
                }
                Some(list) => {
                    view! {
                        <table class="order-table">
                            <thead>
                                <tr>
                                    <th>"Order"</th>
                                    <th>"Date"</th>
                                    <th>"Total"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|order| {
                                        let paid = if order.is_paid { "Paid" } else { "Unpaid" };
                                        let status = if order.status.is_empty() {
                                            paid.to_owned()
                                        } else {
                                            format!("{} ({paid})", order.status)
                                        };
                                        view! {
                                            <tr>
                                                <td class="order-table__mono">{invoice_number(&order.id, &order.created_at)}</td>
                                                <td>{format_date(&order.created_at)}</td>
                                                <td>{format_currency(order.total_price)}</td>
                                                <td>{status}</td>
                                                <td>
                                                    <a href=invoice_path(&order.id)>"Invoice"</a>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
