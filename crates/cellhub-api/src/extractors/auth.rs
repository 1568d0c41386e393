//! `CurrentUser` extractor — resolves the session token into the
//! authenticated identity row before a handler runs.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use serde_json::json;

use cellhub_backend::AuthUser;
use cellhub_entity::user::Identity;

use crate::cookies;
use crate::middleware::session_gate::{LOGIN_PATH, RefreshedSession};
use crate::state::AppState;

/// The authenticated caller: provider-side user, store-side identity row,
/// and the access token to forward on store calls.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub auth: AuthUser,
    pub identity: Identity,
    pub access_token: String,
}

/// Why the extractor could not produce a `CurrentUser`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// Backend connection parameters absent; the page renders a setup
    /// notice instead of failing.
    NotConfigured,
    /// No resolvable session or identity row behind the request.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::NotConfigured => (
                StatusCode::OK,
                Json(json!({
                    "view": "configuration_required",
                    "message": "Backend não configurado. Defina SUPABASE_URL e SUPABASE_ANON_KEY para conectar.",
                })),
            )
                .into_response(),
            AuthRejection::Unauthenticated => Redirect::to(LOGIN_PATH).into_response(),
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.backend.is_configured() {
            return Err(AuthRejection::NotConfigured);
        }

        // A pair rotated by the session gate supersedes the cookie value.
        let refreshed = parts.extensions.get::<RefreshedSession>().cloned();
        let access_token = refreshed
            .as_ref()
            .map(|r| r.0.access_token.clone())
            .or_else(|| cookies::extract_access_token(&parts.headers))
            .ok_or(AuthRejection::Unauthenticated)?;

        let auth = match refreshed.and_then(|r| r.0.user) {
            Some(user) => user,
            None => match state.backend.auth().get_user(&access_token).await {
                Ok(Some(user)) => user,
                Ok(None) => return Err(AuthRejection::Unauthenticated),
                Err(err) => {
                    tracing::warn!(error = %err, "User lookup failed during extraction");
                    return Err(AuthRejection::Unauthenticated);
                }
            },
        };

        let identity = match state
            .backend
            .store()
            .fetch_identity(Some(&access_token), auth.id)
            .await
        {
            Ok(Some(identity)) => identity,
            Ok(None) => return Err(AuthRejection::Unauthenticated),
            Err(err) => {
                tracing::warn!(error = %err, "Identity fetch failed during extraction");
                return Err(AuthRejection::Unauthenticated);
            }
        };

        Ok(CurrentUser {
            auth,
            identity,
            access_token,
        })
    }
}
