//! Live backend implementation speaking the managed backend's HTTP APIs:
//! the auth endpoints under `/auth/v1` and the table API under `/rest/v1`.

mod auth;
mod store;

use cellhub_core::error::{AppError, ErrorKind};
use cellhub_core::result::AppResult;

/// HTTP client for the live backend. Implements both [`crate::AuthProvider`]
/// and [`crate::DataStore`] against a single project URL and anonymous key.
#[derive(Debug, Clone)]
pub struct LiveBackend {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl LiveBackend {
    /// Build the client. `base_url` must already have any trailing slash
    /// stripped (see `BackendConfig::base_url`).
    pub fn new(base_url: String, anon_key: String, timeout_seconds: u64) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url,
            anon_key,
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    fn rest_url(&self, path_and_query: &str) -> String {
        format!("{}/rest/v1{}", self.base_url, path_and_query)
    }

    /// The bearer value for a request: the caller's access token when
    /// present, the anonymous key otherwise.
    fn bearer<'a>(&'a self, access_token: Option<&'a str>) -> &'a str {
        access_token.unwrap_or(&self.anon_key)
    }

    fn anon_key(&self) -> &str {
        &self.anon_key
    }

    fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Map a transport-level failure (connect, timeout, body read).
fn transport_error(context: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Backend request failed: {context}"),
        err,
    )
}

/// Extract the most specific message from a provider error body.
///
/// The auth API answers with `error_description`, `msg`, or `message`
/// depending on the endpoint; the table API uses `message`.
fn provider_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    "Erro inesperado do backend".to_string()
}

/// Convert a non-success provider response into an `AppError`.
fn provider_error(status: reqwest::StatusCode, body: &str) -> AppError {
    let message = provider_message(body);
    let kind = match status.as_u16() {
        400 | 401 | 403 | 422 => ErrorKind::Authentication,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        _ => ErrorKind::ExternalService,
    };
    AppError::new(kind, message)
}
