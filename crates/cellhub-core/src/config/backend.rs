//! External backend (auth provider + data store) connection configuration.

use serde::{Deserialize, Serialize};

/// Connection parameters for the managed backend that owns authentication
/// and the relational store.
///
/// Both parameters are required for live operation. When either is absent
/// the application selects the inert backend and runs fail-open in an
/// unauthenticated state. Call sites never test these fields directly;
/// backend selection happens once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    /// Base URL of the backend project (e.g. `https://xyz.supabase.co`).
    #[serde(default)]
    pub url: Option<String>,
    /// Anonymous/publishable API key.
    #[serde(default)]
    pub anon_key: Option<String>,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl BackendConfig {
    /// Fall back to the conventional environment variables when the TOML
    /// sections left the connection parameters unset.
    pub fn apply_env_fallback(&mut self) {
        if !has_value(&self.url) {
            self.url = non_empty_env("SUPABASE_URL");
        }
        if !has_value(&self.anon_key) {
            self.anon_key = non_empty_env("SUPABASE_ANON_KEY");
        }
    }

    /// Whether both connection parameters are present and non-empty.
    pub fn is_configured(&self) -> bool {
        has_value(&self.url) && has_value(&self.anon_key)
    }

    /// The base URL with any trailing slash removed.
    pub fn base_url(&self) -> Option<String> {
        self.url
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| u.trim_end_matches('/').to_string())
    }
}

fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn default_request_timeout() -> u64 {
    10
}
