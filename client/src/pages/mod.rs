//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates gating and chrome
//! to `components`.

pub mod admin;
pub mod client;
pub mod complete_profile;
pub mod home;
pub mod influencer;
pub mod login;
