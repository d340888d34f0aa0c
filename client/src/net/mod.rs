//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the facade every page calls through, `error` is its failure type,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
