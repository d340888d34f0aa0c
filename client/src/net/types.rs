//! Shared wire DTOs for the dashboard/API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. `User` keeps unrecognised
//! profile fields in `extra` so a cached copy written back to storage stays
//! byte-compatible with what the API originally returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Account role. Only these three strings are accepted on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Influencer,
}

impl Role {
    /// Landing route for the role's section.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => paths::ADMIN,
            Self::Client => paths::CLIENT,
            Self::Influencer => paths::INFLUENCER,
        }
    }

    /// Human-readable section label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Client => "Client",
            Self::Influencer => "Influencer",
        }
    }
}

/// Account approval status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// The authenticated user as returned by login and cached in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    /// Whether the influencer onboarding form has been submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Remaining contact/profile fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Live subset of the influencer profile used by the completion gate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatus {
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub profile_completed: Option<bool>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Body of `PUT /influencer/profile`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfileRequest {
    pub phone: String,
    pub bio: String,
    pub social_handle: String,
    pub follower_count: u64,
}
