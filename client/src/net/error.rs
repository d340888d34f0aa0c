//! Errors surfaced by the API facade.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Maximum number of error-body characters kept for display.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No browser transport (server-side render).
    #[error("API unavailable outside the browser")]
    Unavailable,

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    /// The API answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("response decode failed: {0}")]
    Parse(String),

    #[error("request encode failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build an HTTP error from a raw response body.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http { status, message: sanitize_body(body) }
    }

    /// Short message suitable for inline form errors.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { status: 401, .. } => "Invalid email or password.".to_owned(),
            Self::Http { message, .. } => message.clone(),
            Self::Timeout => "Request timed out. Please try again.".to_owned(),
            Self::Network(_) | Self::Unavailable => "Unable to reach the server.".to_owned(),
            Self::Parse(_) | Self::Serialization(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}

/// Trim and truncate an error body; empty bodies get a generic message.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
