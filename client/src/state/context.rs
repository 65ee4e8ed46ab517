//! Leptos context wiring for the session store.
//!
//! DESIGN
//! ======
//! The store holds `RefCell` state and browser handles, so it lives in a
//! local `StoredValue`. Pages clone the `Rc` out, await an operation, then
//! call [`AuthContext::sync`] to publish the new session to the reactive
//! signal that views read.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::gateway::HttpGateway;
use crate::state::session::{Session, SessionStore};
use crate::util::token_storage::LocalTokenStorage;

pub type AppSessionStore = SessionStore<HttpGateway, LocalTokenStorage>;

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
    store: StoredValue<Rc<AppSessionStore>, LocalStorage>,
}

impl AuthContext {
    pub fn new(config: &ClientConfig) -> Self {
        let store = SessionStore::new(
            HttpGateway::new(config.api_base_url.clone()),
            LocalTokenStorage::new(config.token_storage_key.clone()),
        );
        let session = RwSignal::new(store.session());
        Self { session, store: StoredValue::new_local(Rc::new(store)) }
    }

    pub fn store(&self) -> Rc<AppSessionStore> {
        self.store.get_value()
    }

    /// Publish the store's current session to the reactive signal.
    pub fn sync(&self, store: &AppSessionStore) {
        self.session.set(store.session());
    }

    pub fn logout(&self) {
        let store = self.store();
        store.logout();
        self.sync(&store);
    }
}
