//! `AuthProvider` implementation over the backend's auth endpoints.

use async_trait::async_trait;
use serde_json::json;

use cellhub_core::result::AppResult;

use crate::provider::AuthProvider;
use crate::session::{AuthUser, Session, SignUpOutcome};

use super::{LiveBackend, provider_error, transport_error};

impl LiveBackend {
    /// POST to a token-grant endpoint and parse the resulting session.
    async fn token_grant(&self, grant_type: &str, body: serde_json::Value) -> AppResult<Session> {
        let url = self.auth_url(&format!("/token?grant_type={grant_type}"));
        let response = self
            .http()
            .post(&url)
            .header("apikey", self.anon_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("token grant", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error("token grant body", e))?;

        if !status.is_success() {
            return Err(provider_error(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AuthProvider for LiveBackend {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        self.token_grant("password", json!({ "email": email, "password": password }))
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> AppResult<SignUpOutcome> {
        let url = self.auth_url("/signup");
        let response = self
            .http()
            .post(&url)
            .header("apikey", self.anon_key())
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| transport_error("signup", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error("signup body", e))?;

        if !status.is_success() {
            return Err(provider_error(status, &text));
        }

        let value: serde_json::Value = serde_json::from_str(&text)?;
        Ok(parse_signup(value)?)
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let url = self.auth_url("/logout");
        let response = self
            .http()
            .post(&url)
            .header("apikey", self.anon_key())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| transport_error("logout", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(provider_error(status, &text));
        }
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> AppResult<Option<AuthUser>> {
        let url = self.auth_url("/user");
        let response = self
            .http()
            .get(&url)
            .header("apikey", self.anon_key())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| transport_error("user lookup", e))?;

        let status = response.status();
        // A rejected or expired token is "no user", not a fault.
        if matches!(status.as_u16(), 400 | 401 | 403) {
            return Ok(None);
        }
        let text = response
            .text()
            .await
            .map_err(|e| transport_error("user lookup body", e))?;
        if !status.is_success() {
            return Err(provider_error(status, &text));
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn refresh_session(&self, refresh_token: &str) -> AppResult<Session> {
        self.token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await
    }

    async fn exchange_code(&self, code: &str) -> AppResult<Session> {
        self.token_grant("pkce", json!({ "auth_code": code })).await
    }
}

/// Interpret a signup response, which is either a full session (when the
/// provider auto-confirms) or a bare user object pending confirmation.
fn parse_signup(value: serde_json::Value) -> Result<SignUpOutcome, serde_json::Error> {
    if value.get("access_token").is_some() {
        let session: Session = serde_json::from_value(value)?;
        Ok(SignUpOutcome {
            user: session.user.clone(),
            session: Some(session),
        })
    } else {
        let user: AuthUser = serde_json::from_value(value)?;
        Ok(SignUpOutcome {
            user: Some(user),
            session: None,
        })
    }
}
