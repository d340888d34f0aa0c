//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gate decisions and storage glue live here as plain functions so pages and
//! components stay thin and the logic is testable without a browser.

pub mod auth;
pub mod persist;
pub mod profile_gate;
pub mod storage;
