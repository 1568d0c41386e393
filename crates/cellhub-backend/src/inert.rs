//! Inert backend used when the connection parameters are absent.
//!
//! Reads answer with nothing, writes succeed as no-ops, and credential
//! operations surface a single inline "not configured" message. Nothing
//! here ever reaches the network.

use async_trait::async_trait;
use uuid::Uuid;

use cellhub_core::error::AppError;
use cellhub_core::result::AppResult;
use cellhub_entity::celula::Celula;
use cellhub_entity::user::{Identity, NewIdentity};

use crate::provider::{AuthProvider, DataStore};
use crate::session::{AuthUser, Session, SignUpOutcome};

const NOT_CONFIGURED: &str = "Backend não configurado";

/// The no-op backend implementation.
#[derive(Debug, Clone, Copy)]
pub struct InertBackend;

#[async_trait]
impl AuthProvider for InertBackend {
    async fn sign_in(&self, _email: &str, _password: &str) -> AppResult<Session> {
        Err(AppError::service_unavailable(NOT_CONFIGURED))
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> AppResult<SignUpOutcome> {
        Err(AppError::service_unavailable(NOT_CONFIGURED))
    }

    async fn sign_out(&self, _access_token: &str) -> AppResult<()> {
        Ok(())
    }

    async fn get_user(&self, _access_token: &str) -> AppResult<Option<AuthUser>> {
        Ok(None)
    }

    async fn refresh_session(&self, _refresh_token: &str) -> AppResult<Session> {
        Err(AppError::service_unavailable(NOT_CONFIGURED))
    }

    async fn exchange_code(&self, _code: &str) -> AppResult<Session> {
        Err(AppError::service_unavailable(NOT_CONFIGURED))
    }
}

#[async_trait]
impl DataStore for InertBackend {
    async fn fetch_identity(
        &self,
        _access_token: Option<&str>,
        _id: Uuid,
    ) -> AppResult<Option<Identity>> {
        Ok(None)
    }

    async fn list_identities(&self, _access_token: Option<&str>) -> AppResult<Vec<Identity>> {
        Ok(Vec::new())
    }

    async fn list_celulas(&self, _access_token: Option<&str>) -> AppResult<Vec<Celula>> {
        Ok(Vec::new())
    }

    async fn celulas_overseen_by(
        &self,
        _access_token: Option<&str>,
        _id: Uuid,
    ) -> AppResult<Vec<Celula>> {
        Ok(Vec::new())
    }

    async fn celula_for_member(
        &self,
        _access_token: Option<&str>,
        _id: Uuid,
    ) -> AppResult<Option<Celula>> {
        Ok(None)
    }

    async fn insert_identity(
        &self,
        _access_token: Option<&str>,
        _row: &NewIdentity,
    ) -> AppResult<()> {
        Ok(())
    }

    async fn delete_identity(&self, _access_token: Option<&str>, _id: Uuid) -> AppResult<()> {
        Ok(())
    }

    async fn delete_celula(&self, _access_token: Option<&str>, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}
