#![allow(dead_code)]
//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use cellhub_api::{AppState, build_router};
use cellhub_backend::{AuthProvider, AuthUser, Backend, DataStore, Session, SignUpOutcome};
use cellhub_core::config::AppConfig;
use cellhub_core::error::AppError;
use cellhub_core::result::AppResult;
use cellhub_entity::celula::{Celula, LeaderRef};
use cellhub_entity::user::{Identity, NewIdentity, Role};

pub const VALID_ACCESS: &str = "valid-token";
pub const VALID_REFRESH: &str = "valid-refresh";
pub const VALID_CODE: &str = "code-ok";
pub const TEST_EMAIL: &str = "ana@igreja.test";
pub const TEST_PASSWORD: &str = "senha123";

/// Scripted auth provider keyed to a single signed-in user.
#[derive(Debug)]
pub struct StubAuth {
    pub user: AuthUser,
}

impl StubAuth {
    fn session(&self) -> Session {
        Session {
            access_token: VALID_ACCESS.to_string(),
            refresh_token: VALID_REFRESH.to_string(),
            expires_in: Some(3600),
            user: Some(self.user.clone()),
        }
    }
}

#[async_trait]
impl AuthProvider for StubAuth {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        if email == TEST_EMAIL && password == TEST_PASSWORD {
            Ok(self.session())
        } else {
            Err(AppError::authentication("Credenciais inválidas"))
        }
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> AppResult<SignUpOutcome> {
        Ok(SignUpOutcome {
            user: Some(self.user.clone()),
            session: Some(self.session()),
        })
    }

    async fn sign_out(&self, _access_token: &str) -> AppResult<()> {
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> AppResult<Option<AuthUser>> {
        if access_token == VALID_ACCESS {
            Ok(Some(self.user.clone()))
        } else {
            Ok(None)
        }
    }

    async fn refresh_session(&self, refresh_token: &str) -> AppResult<Session> {
        if refresh_token == VALID_REFRESH {
            Ok(self.session())
        } else {
            Err(AppError::authentication("Sessão expirada"))
        }
    }

    async fn exchange_code(&self, code: &str) -> AppResult<Session> {
        if code == VALID_CODE {
            Ok(self.session())
        } else {
            Err(AppError::authentication("Código inválido"))
        }
    }
}

/// In-memory data store scripted per test.
#[derive(Debug, Default)]
pub struct StubStore {
    pub identities: Mutex<Vec<Identity>>,
    pub celulas: Mutex<Vec<Celula>>,
    pub member_cell: Mutex<Option<Celula>>,
}

#[async_trait]
impl DataStore for StubStore {
    async fn fetch_identity(
        &self,
        _access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Option<Identity>> {
        Ok(self
            .identities
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn list_identities(&self, _access_token: Option<&str>) -> AppResult<Vec<Identity>> {
        Ok(self.identities.lock().unwrap().clone())
    }

    async fn list_celulas(&self, _access_token: Option<&str>) -> AppResult<Vec<Celula>> {
        Ok(self.celulas.lock().unwrap().clone())
    }

    async fn celulas_overseen_by(
        &self,
        _access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Vec<Celula>> {
        Ok(self
            .celulas
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.lider_id == Some(id) || c.supervisor_id == Some(id))
            .cloned()
            .collect())
    }

    async fn celula_for_member(
        &self,
        _access_token: Option<&str>,
        _id: Uuid,
    ) -> AppResult<Option<Celula>> {
        Ok(self.member_cell.lock().unwrap().clone())
    }

    async fn insert_identity(
        &self,
        _access_token: Option<&str>,
        row: &NewIdentity,
    ) -> AppResult<()> {
        self.identities.lock().unwrap().push(Identity {
            id: row.id,
            email: row.email.clone(),
            username: row.username.clone(),
            full_name: row.full_name.clone(),
            role: row.role,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn delete_identity(&self, _access_token: Option<&str>, id: Uuid) -> AppResult<()> {
        let mut identities = self.identities.lock().unwrap();
        let before = identities.len();
        identities.retain(|i| i.id != id);
        if identities.len() == before {
            Err(AppError::not_found("Registro não está mais presente"))
        } else {
            Ok(())
        }
    }

    async fn delete_celula(&self, _access_token: Option<&str>, id: Uuid) -> AppResult<()> {
        let mut celulas = self.celulas.lock().unwrap();
        let before = celulas.len();
        celulas.retain(|c| c.id != id);
        if celulas.len() == before {
            Err(AppError::not_found("Registro não está mais presente"))
        } else {
            Ok(())
        }
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new(backend: Backend) -> Self {
        let state = AppState::new(AppConfig::default(), backend);
        Self {
            router: build_router(state),
        }
    }

    /// App whose auth provider recognizes the given identity's session.
    pub fn with_user(identity: Identity) -> (Self, Arc<StubStore>) {
        let auth = StubAuth {
            user: AuthUser {
                id: identity.id,
                email: Some(identity.email.clone()),
            },
        };
        let store = Arc::new(StubStore::default());
        store.identities.lock().unwrap().push(identity);
        let backend = Backend::from_parts(Arc::new(auth), Arc::clone(&store) as Arc<dyn DataStore>);
        (Self::new(backend), store)
    }

    /// App with absent backend connection parameters (inert fail-open).
    pub fn unconfigured() -> Self {
        let config = AppConfig::default();
        let backend = Backend::from_config(&config.backend).expect("inert backend");
        Self::new(backend)
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(cookie) = cookie {
            req = req.header("Cookie", cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    pub fn set_cookies(&self) -> Vec<&str> {
        self.headers
            .get_all(http::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }
}

/// Cookie header carrying the valid token pair.
pub fn session_cookie() -> String {
    format!("cellhub_access={VALID_ACCESS}; cellhub_refresh={VALID_REFRESH}")
}

/// A test identity with the given role.
pub fn identity(role: Role) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: TEST_EMAIL.to_string(),
        username: "ana".to_string(),
        full_name: "Ana Souza".to_string(),
        role,
        created_at: Utc::now(),
    }
}

/// A test cell, optionally with an embedded leader reference.
pub fn celula(nome: &str, lider_nome: Option<&str>) -> Celula {
    Celula {
        id: Uuid::new_v4(),
        nome: nome.to_string(),
        descricao: None,
        endereco: Some("Rua das Flores, 12".to_string()),
        dia_semana: Some("quarta".to_string()),
        horario: Some("19:30".to_string()),
        ativa: true,
        lider_id: None,
        supervisor_id: None,
        lider: lider_nome.map(|nome| LeaderRef {
            id: Some(Uuid::new_v4()),
            full_name: nome.to_string(),
            username: None,
        }),
        supervisor: None,
        created_at: Some(Utc::now()),
    }
}
