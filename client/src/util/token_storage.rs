//! Persisted bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only sees the [`TokenStorage`] trait. The browser build
//! persists to `localStorage`; SSR and tests use the in-memory variant.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort: a full or disabled `localStorage` leaves the
//! session working for the current page load only.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Durable home for the session token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed token storage under a fixed key.
#[derive(Clone, Debug)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; token kept in memory only");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-memory token storage. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
