//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns auth state and its operations; `context` exposes it to
//! components through Leptos context.

pub mod context;
pub mod session;
