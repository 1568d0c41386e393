//! Auth handlers — login, cadastro, logout.
//!
//! The GET routes return form descriptors; the POST routes run the
//! credential action, set or clear the session cookie pair, and answer
//! with an inline message plus the path the client should navigate to.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use cellhub_core::error::AppError;
use cellhub_entity::user::Role;
use cellhub_service::SignUpData;

use crate::cookies;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/login body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /auth/cadastro body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CadastroRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub role: String,
}

/// Inline outcome of an auth action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthActionResponse {
    pub message: String,
    /// Where the client navigates next.
    pub redirect: &'static str,
}

/// GET /auth/login
pub async fn login_form() -> Json<Value> {
    Json(json!({
        "form": "login",
        "action": "/auth/login",
        "fields": ["email", "password"],
        "cadastro_url": "/auth/cadastro",
    }))
}

/// GET /auth/cadastro
pub async fn cadastro_form() -> Json<Value> {
    let roles: Vec<Value> = Role::ASSIGNABLE
        .iter()
        .map(|role| json!({ "value": role.as_str(), "label": role.label() }))
        .collect();

    Json(json!({
        "form": "cadastro",
        "action": "/auth/cadastro",
        "fields": ["full_name", "username", "email", "password", "role"],
        "roles": roles,
        "login_url": "/auth/login",
    }))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthActionResponse>), ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email e senha são obrigatórios"))?;

    let session = state.auth_service.sign_in(&req.email, &req.password).await?;

    let mut headers = HeaderMap::new();
    cookies::set_session_cookies(&mut headers, &session);

    Ok((
        headers,
        Json(AuthActionResponse {
            message: "Login realizado com sucesso!".to_string(),
            redirect: "/dashboard",
        }),
    ))
}

/// POST /auth/cadastro
pub async fn cadastro(
    State(state): State<AppState>,
    Json(req): Json<CadastroRequest>,
) -> Result<(HeaderMap, Json<AuthActionResponse>), ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Todos os campos são obrigatórios"))?;

    let session = state
        .auth_service
        .sign_up(SignUpData {
            email: req.email,
            password: req.password,
            username: req.username,
            full_name: req.full_name,
            role: req.role,
        })
        .await?;

    let mut headers = HeaderMap::new();
    let response = match session {
        Some(session) => {
            cookies::set_session_cookies(&mut headers, &session);
            AuthActionResponse {
                message: "Cadastro realizado com sucesso! Redirecionando...".to_string(),
                redirect: "/dashboard",
            }
        }
        None => AuthActionResponse {
            message: "Cadastro realizado! Verifique seu email para confirmar a conta."
                .to_string(),
            redirect: "/auth/login",
        },
    };

    Ok((headers, Json(response)))
}

/// POST /auth/logout
///
/// Cookies are cleared regardless of the provider's answer.
pub async fn logout(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> (HeaderMap, Json<AuthActionResponse>) {
    if let Some(token) = cookies::extract_access_token(&request_headers) {
        if let Err(err) = state.auth_service.sign_out(&token).await {
            tracing::warn!(error = %err, "Provider sign-out failed; clearing cookies anyway");
        }
    }

    let mut headers = HeaderMap::new();
    cookies::clear_session_cookies(&mut headers);

    (
        headers,
        Json(AuthActionResponse {
            message: "Sessão encerrada".to_string(),
            redirect: "/",
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_both_fields() {
        let req = LoginRequest {
            email: "a@b.c".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_cadastro_request_rejects_bad_email() {
        let req = CadastroRequest {
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            username: "ana".to_string(),
            full_name: "Ana Souza".to_string(),
            role: "membro".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[tokio::test]
    async fn test_cadastro_form_offers_six_roles() {
        let Json(form) = cadastro_form().await;
        assert_eq!(form["roles"].as_array().map(Vec::len), Some(6));
    }
}
