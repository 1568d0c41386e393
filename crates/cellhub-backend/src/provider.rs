//! Capability traits for the external backend, and the startup selection
//! between the live and inert implementations.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use cellhub_core::config::backend::BackendConfig;
use cellhub_core::result::AppResult;
use cellhub_entity::celula::Celula;
use cellhub_entity::user::{Identity, NewIdentity};

use crate::inert::InertBackend;
use crate::live::LiveBackend;
use crate::session::{AuthUser, Session, SignUpOutcome};

/// Authentication operations delegated to the external auth provider.
///
/// Every method returns either a success value or an error; callers never
/// assume success. Token validation, credential hashing, and rotation are
/// owned by the provider.
#[async_trait]
pub trait AuthProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Exchange email/password credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session>;

    /// Register a new account.
    async fn sign_up(&self, email: &str, password: &str) -> AppResult<SignUpOutcome>;

    /// Invalidate the session behind an access token.
    async fn sign_out(&self, access_token: &str) -> AppResult<()>;

    /// Resolve the user behind an access token.
    ///
    /// Returns `Ok(None)` when the token is missing, expired, or rejected.
    async fn get_user(&self, access_token: &str) -> AppResult<Option<AuthUser>>;

    /// Rotate a refresh token into a fresh session.
    async fn refresh_session(&self, refresh_token: &str) -> AppResult<Session>;

    /// Exchange an authorization callback code for a session.
    async fn exchange_code(&self, code: &str) -> AppResult<Session>;
}

/// Read and write operations against the external relational store.
///
/// All reads are idempotent row/list fetches executed once per render.
/// `access_token` carries the caller's session for the store's row-level
/// checks; `None` falls back to anonymous access.
#[async_trait]
pub trait DataStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a single identity row by id.
    async fn fetch_identity(
        &self,
        access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Option<Identity>>;

    /// All identity rows, newest first.
    async fn list_identities(&self, access_token: Option<&str>) -> AppResult<Vec<Identity>>;

    /// All cells with embedded leader/supervisor rows, newest first.
    async fn list_celulas(&self, access_token: Option<&str>) -> AppResult<Vec<Celula>>;

    /// Cells where the given identity is supervisor or leader.
    async fn celulas_overseen_by(
        &self,
        access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Vec<Celula>>;

    /// The cell behind the identity's active membership, with the leader
    /// name embedded.
    async fn celula_for_member(
        &self,
        access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Option<Celula>>;

    /// Insert a freshly signed-up identity row.
    async fn insert_identity(
        &self,
        access_token: Option<&str>,
        row: &NewIdentity,
    ) -> AppResult<()>;

    /// Delete an identity row. A row that is already gone is reported as
    /// not-found, never retried.
    async fn delete_identity(&self, access_token: Option<&str>, id: Uuid) -> AppResult<()>;

    /// Delete a cell row. Same absent-row semantics as identities.
    async fn delete_celula(&self, access_token: Option<&str>, id: Uuid) -> AppResult<()>;
}

/// The backend pair handed to services and middleware.
///
/// Built once at process start: live when both connection parameters are
/// configured, inert otherwise.
#[derive(Debug, Clone)]
pub struct Backend {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DataStore>,
    configured: bool,
}

impl Backend {
    /// Select the implementation from configuration presence.
    pub fn from_config(config: &BackendConfig) -> AppResult<Self> {
        match (config.is_configured(), config.base_url(), &config.anon_key) {
            (true, Some(base_url), Some(anon_key)) => {
                let live = Arc::new(LiveBackend::new(
                    base_url,
                    anon_key.clone(),
                    config.request_timeout_seconds,
                )?);
                Ok(Self {
                    auth: live.clone(),
                    store: live,
                    configured: true,
                })
            }
            _ => {
                tracing::warn!(
                    "Backend connection parameters absent; using inert backend (unauthenticated fail-open)"
                );
                let inert = Arc::new(InertBackend);
                Ok(Self {
                    auth: inert.clone(),
                    store: inert,
                    configured: false,
                })
            }
        }
    }

    /// Assemble a backend from explicit implementations. Used by tests to
    /// script provider behavior.
    pub fn from_parts(auth: Arc<dyn AuthProvider>, store: Arc<dyn DataStore>) -> Self {
        Self {
            auth,
            store,
            configured: true,
        }
    }

    /// Whether the live implementation is in use.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// The auth provider capability.
    pub fn auth(&self) -> &dyn AuthProvider {
        self.auth.as_ref()
    }

    /// The data store capability.
    pub fn store(&self) -> &dyn DataStore {
        self.store.as_ref()
    }
}
