//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    account::AccountPage, forgot_password::ForgotPasswordPage, invoice::InvoicePage, login::LoginPage,
    register::RegisterPage, reset_password::ResetPasswordPage,
};
use crate::state::context::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, starts session hydration in the browser and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("invalid build configuration, using defaults: {e}");
        ClientConfig::default()
    });
    let auth = AuthContext::new(&config);
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let store = auth.store();
        store.hydrate().await;
        auth.sync(&store);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Bagvo"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                <Route path=StaticSegment("") view=AccountPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
                <Route
                    path=(StaticSegment("account"), StaticSegment("orders"), ParamSegment("id"), StaticSegment("invoice"))
                    view=InvoicePage
                />
            </Routes>
        </Router>
    }
}
