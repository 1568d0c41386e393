//! Admin destructive operations: identity and cell deletion.
//!
//! Both operations require the acting identity to be an administrator and
//! an upstream confirmation step (enforced at the HTTP boundary). A
//! successful delete re-fetches the admin dashboard so the caller renders
//! fresh data; a failed delete returns the error and performs no refresh.

use tracing::info;
use uuid::Uuid;

use cellhub_core::error::AppError;
use cellhub_core::result::AppResult;
use cellhub_entity::user::Identity;

use super::service::DashboardService;
use super::views::AdminDashboard;

/// Checks that the acting identity has the administrator role.
pub fn require_admin(identity: &Identity) -> AppResult<()> {
    if !identity.is_admin() {
        return Err(AppError::authorization(
            "Apenas administradores podem executar esta ação",
        ));
    }
    Ok(())
}

impl DashboardService {
    /// Delete an identity row and return the refreshed admin dashboard.
    ///
    /// Administrator rows are never deletable. A row that is already gone
    /// surfaces as not-found ("no longer present") and is not retried.
    pub async fn delete_identity(
        &self,
        actor: &Identity,
        access_token: &str,
        target: Uuid,
    ) -> AppResult<AdminDashboard> {
        require_admin(actor)?;

        let token = Some(access_token);
        if let Some(row) = self.backend().store().fetch_identity(token, target).await? {
            if row.is_admin() {
                return Err(AppError::authorization(
                    "Contas de administrador não podem ser excluídas",
                ));
            }
        }

        self.backend().store().delete_identity(token, target).await?;
        info!(actor = %actor.id, target = %target, "Identity deleted");

        Ok(self.admin_view(token).await)
    }

    /// Delete a cell row and return the refreshed admin dashboard.
    pub async fn delete_celula(
        &self,
        actor: &Identity,
        access_token: &str,
        target: Uuid,
    ) -> AppResult<AdminDashboard> {
        require_admin(actor)?;

        let token = Some(access_token);
        self.backend().store().delete_celula(token, target).await?;
        info!(actor = %actor.id, target = %target, "Cell deleted");

        Ok(self.admin_view(token).await)
    }
}
