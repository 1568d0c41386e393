//! Session gate middleware.
//!
//! Runs on every request before routing-level handlers. Decides between
//! continuing the request and redirecting, and carries the token-refresh
//! side effect: whenever the access token no longer resolves but the
//! refresh token still rotates, the rotated pair is applied to the
//! outgoing response cookies and handed to downstream extractors.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use cellhub_backend::{AuthUser, Backend, Session};

use crate::cookies;
use crate::state::AppState;

/// Protected path prefix requiring a resolvable session.
pub const PROTECTED_PREFIX: &str = "/dashboard";
/// Landing path, always public.
pub const LANDING_PATH: &str = "/";
/// Login page the gate redirects unauthenticated dashboard requests to.
pub const LOGIN_PATH: &str = "/auth/login";
/// Destination after a successful authorization-code exchange.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// The gate's decision for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Let the request proceed to its handler.
    Continue,
    /// Short-circuit with a redirect to the given path.
    Redirect(&'static str),
}

/// Decision plus the refresh side effect, if any.
#[derive(Debug, Clone)]
pub struct GateOutcome {
    pub action: GateAction,
    /// A rotated token pair to apply to the response cookies.
    pub refreshed: Option<Session>,
}

impl GateOutcome {
    fn proceed(refreshed: Option<Session>) -> Self {
        Self {
            action: GateAction::Continue,
            refreshed,
        }
    }

    fn redirect(path: &'static str, refreshed: Option<Session>) -> Self {
        Self {
            action: GateAction::Redirect(path),
            refreshed,
        }
    }
}

/// Rotated session inserted into request extensions so downstream
/// extractors see the fresh access token instead of the stale cookie.
#[derive(Debug, Clone)]
pub struct RefreshedSession(pub Session);

struct ResolvedSession {
    user: Option<AuthUser>,
    refreshed: Option<Session>,
}

/// Resolve the caller's session from the token pair.
///
/// Tries the access token first; when it no longer resolves, rotates the
/// refresh token. Provider errors during resolution count as "no session".
async fn resolve_session(
    backend: &Backend,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> ResolvedSession {
    if let Some(token) = access_token {
        match backend.auth().get_user(token).await {
            Ok(Some(user)) => {
                return ResolvedSession {
                    user: Some(user),
                    refreshed: None,
                };
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "Session lookup failed; treating as unauthenticated");
            }
        }
    }

    if let Some(token) = refresh_token {
        match backend.auth().refresh_session(token).await {
            Ok(session) => {
                let user = session.user.clone();
                return ResolvedSession {
                    user,
                    refreshed: Some(session),
                };
            }
            Err(err) => {
                tracing::warn!(error = %err, "Session refresh failed; treating as unauthenticated");
            }
        }
    }

    ResolvedSession {
        user: None,
        refreshed: None,
    }
}

/// The gate decision, independent of the HTTP plumbing.
///
/// 1. Unconfigured backend: continue (fail-open; protected data reads are
///    independently inert).
/// 2. Landing path: continue without any auth check.
/// 3. Authorization exchange code: exchange it and redirect to the
///    dashboard; the rotated pair lands in cookies only when the
///    exchange succeeds.
/// 4. Protected prefix without a resolvable session: redirect to login.
///    Lookup errors count as "no session".
/// 5. Otherwise continue, keeping the session alive via refresh.
pub async fn authorize(
    backend: &Backend,
    path: &str,
    exchange_code: Option<&str>,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> GateOutcome {
    if !backend.is_configured() {
        return GateOutcome::proceed(None);
    }

    if path == LANDING_PATH {
        return GateOutcome::proceed(None);
    }

    if let Some(code) = exchange_code {
        let refreshed = match backend.auth().exchange_code(code).await {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "Authorization code exchange failed");
                None
            }
        };
        return GateOutcome::redirect(DASHBOARD_PATH, refreshed);
    }

    let resolved = resolve_session(backend, access_token, refresh_token).await;

    if path.starts_with(PROTECTED_PREFIX) && resolved.user.is_none() {
        return GateOutcome::redirect(LOGIN_PATH, resolved.refreshed);
    }

    GateOutcome::proceed(resolved.refreshed)
}

/// Extract a single query parameter without decoding plus-signs; the
/// exchange code is URL-safe by construction.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some(name) {
            return parts.next().filter(|v| !v.is_empty()).map(String::from);
        }
    }
    None
}

/// Axum middleware wrapper around [`authorize`].
pub async fn session_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let code = query_param(request.uri().query(), "code");
    let access_token = cookies::extract_access_token(request.headers());
    let refresh_token = cookies::extract_refresh_token(request.headers());

    let outcome = authorize(
        &state.backend,
        &path,
        code.as_deref(),
        access_token.as_deref(),
        refresh_token.as_deref(),
    )
    .await;

    match outcome.action {
        GateAction::Redirect(target) => {
            let mut response = Redirect::to(target).into_response();
            if let Some(session) = &outcome.refreshed {
                cookies::set_session_cookies(response.headers_mut(), session);
            }
            response
        }
        GateAction::Continue => {
            let mut request = request;
            if let Some(session) = outcome.refreshed.clone() {
                request
                    .extensions_mut()
                    .insert(RefreshedSession(session));
            }
            let mut response = next.run(request).await;
            if let Some(session) = &outcome.refreshed {
                cookies::set_session_cookies(response.headers_mut(), session);
            }
            response
        }
    }
}
