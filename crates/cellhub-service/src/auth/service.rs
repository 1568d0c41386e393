//! Sign-in, sign-up, and sign-out actions against the auth provider.

use tracing::{error, info};

use cellhub_backend::{Backend, Session};
use cellhub_core::error::AppError;
use cellhub_core::result::AppResult;
use cellhub_entity::user::{NewIdentity, Role};

/// Handles the three credential actions. Credential verification, hashing,
/// and token minting are owned by the external provider; this service only
/// sequences the calls and shapes the inline error messages.
#[derive(Debug, Clone)]
pub struct AuthService {
    backend: Backend,
}

/// Validated sign-up form data.
#[derive(Debug, Clone)]
pub struct SignUpData {
    /// Email address.
    pub email: String,
    /// Password (forwarded to the provider, never stored).
    pub password: String,
    /// Desired login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Requested ministry role, as submitted.
    pub role: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Exchange credentials for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        let session = self.backend.auth().sign_in(email, password).await?;
        info!(email = %email, "Sign-in succeeded");
        Ok(session)
    }

    /// Register an account and insert the matching identity row.
    ///
    /// Returns the new session when the provider auto-confirms, `None` when
    /// the account is pending email confirmation.
    pub async fn sign_up(&self, data: SignUpData) -> AppResult<Option<Session>> {
        let role = Role::parse(&data.role);
        if role == Role::Unknown {
            return Err(AppError::validation("Função inválida"));
        }

        let outcome = self
            .backend
            .auth()
            .sign_up(&data.email, &data.password)
            .await?;

        if let Some(user_id) = outcome.user_id() {
            let row = NewIdentity {
                id: user_id,
                email: data.email.clone(),
                username: data.username,
                full_name: data.full_name,
                role,
            };
            let access_token = outcome.session.as_ref().map(|s| s.access_token.as_str());

            if let Err(err) = self.backend.store().insert_identity(access_token, &row).await {
                error!(user_id = %user_id, error = %err, "Failed to insert identity row after sign-up");
                return Err(AppError::internal(
                    "Erro ao salvar dados do usuário. Tente novamente.",
                ));
            }
            info!(user_id = %user_id, role = %role, "Account registered");
        }

        Ok(outcome.session)
    }

    /// Invalidate the session behind an access token. The caller clears
    /// cookies regardless of the provider's answer.
    pub async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        self.backend.auth().sign_out(access_token).await
    }
}
