//! Build-time frontend configuration.
//!
//! `NEXT_PUBLIC_API_URL` is inlined when the WASM bundle is compiled. Values
//! end up in the public bundle; never put secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `NEXT_PUBLIC_API_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:6004";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Load config from build-time environment variables.
    pub fn load() -> Self {
        Self::from_values(option_env!("NEXT_PUBLIC_API_URL"))
    }

    fn from_values(api_url: Option<&str>) -> Self {
        let api_base_url = api_url
            .and_then(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Self { api_base_url }
    }
}

/// Trim whitespace and trailing slashes; blank values count as unset.
fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
