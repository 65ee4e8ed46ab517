//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and delegates session changes to the
//! `AuthContext` store.

pub mod account;
pub mod forgot_password;
pub mod invoice;
pub mod login;
pub mod register;
pub mod reset_password;
