//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` issues requests and normalizes failures, `api` wraps each
//! endpoint with typed request/response handling, and `types` defines the
//! shared wire schema.

pub mod api;
pub mod gateway;
#[cfg(test)]
pub(crate) mod scripted;
pub mod types;
