//! Invoice view for a single order: preview plus print.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::invoice::{invoice_number, print_invoice, render_invoice_html};
use crate::net::types::Order;
use crate::state::context::AuthContext;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn InvoicePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_unauth_redirect(auth.session, use_navigate());

    let params = use_params_map();
    let order = RwSignal::new(None::<Order>);
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
            let order_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
            leptos::task::spawn_local(async move {
                match auth.store().fetch_order(&order_id).await {
                    Ok(fetched) => order.set(Some(fetched)),
                    Err(e) => error.set(e),
                }
            });
        });
    }

    let document = move || {
        let user = auth.session.with(|s| s.user.clone())?;
        order.with(|o| o.as_ref().map(|o| render_invoice_html(o, &user)))
    };
    let title = move || {
        order.with(|o| o.as_ref().map(|o| invoice_number(&o.id, &o.created_at))).unwrap_or_else(|| {
            format!("Order {}", params.with(|p| p.get("id")).unwrap_or_default())
        })
    };

    let on_print = move |_| {
        let Some(html) = document() else {
            return;
        };
        if let Err(e) = print_invoice(&html) {
            log::warn!("invoice print failed: {e}");
            error.set(e);
        }
    };

    view! {
        <div class="invoice-page">
            <header class="invoice-page__header">
                <a href="/account">"Back to account"</a>
                <h1>{title}</h1>
                <button class="account-button" on:click=on_print disabled=move || order.with(Option::is_none)>
                    "Print Invoice"
                </button>
            </header>
            <Show when=move || !error.get().is_empty()>
                <p class="account-message">{move || error.get()}</p>
            </Show>
            <Show
                when=move || order.with(Option::is_some)
                fallback=move || {
                    view! {
                        <Show when=move || error.get().is_empty()>
                            <p class="account-loading">"Loading invoice..."</p>
                        </Show>
                    }
                }
            >
                <iframe
                    class="invoice-page__preview"
                    title="Invoice preview"
                    srcdoc=move || document().unwrap_or_default()
                ></iframe>
            </Show>
        </div>
    }
}
