//! Fixed route paths produced and consumed by the auth gates.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const ADMIN: &str = "/admin";
pub const CLIENT: &str = "/client";
pub const INFLUENCER: &str = "/influencer";
pub const COMPLETE_PROFILE: &str = "/influencer/complete-profile";
