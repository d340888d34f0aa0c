//! REST API facade.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since the
//! API is only reachable from the browser with the user's token.
//!
//! DESIGN
//! ======
//! One process-wide `ApiClient` holds the base URL and a token supplier. The
//! supplier re-reads the persisted `auth-storage` record on every request, so
//! a login or logout is picked up without reconfiguring the client. A missing
//! or unreadable record yields no token and the request goes out
//! unauthenticated.
//!
//! ERROR HANDLING
//! ==============
//! No retries or backoff. Every request is aborted after a fixed timeout and
//! failures are returned to the caller as `ApiError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{CompleteProfileRequest, LoginRequest, LoginResponse, ProfileStatus};
use crate::config::AppConfig;
use crate::util::persist::{self, AUTH_STORAGE_KEY};
use crate::util::storage::{self, KeyValueStore};

/// Request timeout (milliseconds) applied to every call.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

const LOGIN_PATH: &str = "/auth/login";
const PROFILE_PATH: &str = "/influencer/profile";

/// Produces the current bearer token, or `""` when signed out.
pub type TokenSupplier = Arc<dyn Fn() -> String + Send + Sync>;

static API_CLIENT: OnceLock<ApiClient> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: TokenSupplier,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, token: TokenSupplier) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned(), token }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    /// Headers attached to every outbound request.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        bearer_header(&(self.token)()).map(|value| ("Authorization", value)).into_iter().collect()
    }

    async fn request_json<T: DeserializeOwned>(&self, verb: Verb, path: &str, body: Option<String>) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send(verb, path, body).await?;
            if !response.ok() {
                return Err(error_from_response(response).await);
            }
            response.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn request_empty(&self, verb: Verb, path: &str, body: Option<String>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send(verb, path, body).await?;
            if response.ok() { Ok(()) } else { Err(error_from_response(response).await) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(&self, verb: Verb, path: &str, body: Option<String>) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let controller = web_sys::AbortController::new()
            .map_err(|_| ApiError::Network("failed to initialize request timeout".to_owned()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = gloo_timers::callback::Timeout::new(REQUEST_TIMEOUT_MS, move || timeout_controller.abort());

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
        };
        let mut builder = RequestBuilder::new(&self.url(path)).method(method).abort_signal(Some(&signal));
        for (name, value) in self.auth_headers() {
            builder = builder.header(name, &value);
        }
        let request = match body {
            Some(payload) => builder.header("Content-Type", "application/json").body(payload),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Serialization(format!("failed to build request: {e}")))?;

        request.send().await.map_err(map_request_error)
    }
}

/// Install the process-wide client. The first call wins.
pub fn configure(config: &AppConfig, storage: Arc<dyn KeyValueStore>) -> &'static ApiClient {
    API_CLIENT.get_or_init(|| ApiClient::new(&config.api_base_url, storage_token_supplier(storage)))
}

/// The process-wide client, configured from defaults if `configure` never ran.
pub fn api_client() -> &'static ApiClient {
    API_CLIENT.get_or_init(|| ApiClient::new(&AppConfig::load().api_base_url, storage_token_supplier(storage::default_store())))
}

/// Token supplier that reads the persisted session record on each call.
pub fn storage_token_supplier(storage: Arc<dyn KeyValueStore>) -> TokenSupplier {
    Arc::new(move || persist::token_from_record(storage.load(AUTH_STORAGE_KEY).as_deref()))
}

/// `Bearer <token>` for a non-empty token.
pub fn bearer_header(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() { None } else { Some(format!("Bearer {token}")) }
}

/// Join a base URL and a path with exactly one slash.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn map_request_error(err: gloo_net::Error) -> ApiError {
    let message = err.to_string();
    let lowered = message.to_lowercase();
    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout
    } else {
        ApiError::Network(message)
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::http(status, &body)
}

/// `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = encode_body(&LoginRequest { email: email.to_owned(), password: password.to_owned() })?;
    api_client().request_json(Verb::Post, LOGIN_PATH, Some(body)).await
}

/// `GET /influencer/profile`: live status and completion flag for the current user.
pub async fn fetch_profile() -> Result<ProfileStatus, ApiError> {
    api_client().request_json(Verb::Get, PROFILE_PATH, None).await
}

/// `PUT /influencer/profile`: submit the onboarding form.
pub async fn complete_profile(request: &CompleteProfileRequest) -> Result<(), ApiError> {
    let body = encode_body(request)?;
    api_client().request_empty(Verb::Put, PROFILE_PATH, Some(body)).await
}
