//! Session and auth-user value objects returned by the auth provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A token pair issued by the auth provider.
///
/// The provider owns token minting and rotation; this struct only carries
/// the opaque values between the provider and the response cookies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access-token lifetime in seconds, when reported.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// The authenticated user, when the provider embeds it.
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// The minimal user record the auth provider resolves from a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned user id. Matches the `users` table row id.
    pub id: Uuid,
    /// Email address, when present.
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of a sign-up call.
///
/// Depending on the provider's email-confirmation setting, sign-up may
/// return a full session, or only the created user pending confirmation.
#[derive(Debug, Clone)]
pub struct SignUpOutcome {
    /// The created user, when the provider reported one.
    pub user: Option<AuthUser>,
    /// An immediately usable session, when auto-confirmation is enabled.
    pub session: Option<Session>,
}

impl SignUpOutcome {
    /// The created user's id, from either the top-level user or the
    /// embedded session user.
    pub fn user_id(&self) -> Option<Uuid> {
        self.user
            .as_ref()
            .map(|u| u.id)
            .or_else(|| self.session.as_ref().and_then(|s| s.user.as_ref()).map(|u| u.id))
    }
}
