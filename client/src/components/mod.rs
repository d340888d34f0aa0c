//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gates and section chrome read the session and query cache from Leptos
//! context; pages compose them around their own content.

pub mod profile_gate;
pub mod role_gate;
pub mod section_layout;
