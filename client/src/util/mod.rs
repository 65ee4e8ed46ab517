//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! session logic to improve reuse and testability.

pub mod auth;
pub mod format;
pub mod token_storage;
pub mod validation;
