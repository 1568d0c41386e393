//! Dashboard handlers — the role-dispatched view and the admin deletes.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use cellhub_core::error::AppError;
use cellhub_service::DashboardView;
use cellhub_service::dashboard::AdminDashboard;

use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Explicit confirmation for destructive actions, the server-side analog
/// of a confirm dialog.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

fn require_confirmation(params: &ConfirmParams) -> Result<(), ApiError> {
    if params.confirm {
        Ok(())
    } else {
        Err(AppError::validation("Confirme a exclusão para continuar (confirm=true)").into())
    }
}

/// GET /dashboard
///
/// The view family is selected from the identity's role; data-fetch
/// failures inside a family degrade to empty results.
pub async fn dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<DashboardView> {
    let view = state
        .dashboard_service
        .load(&user.identity, &user.access_token)
        .await;
    Json(view)
}

/// DELETE /dashboard/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<AdminDashboard>, ApiError> {
    require_confirmation(&params)?;

    let refreshed = state
        .dashboard_service
        .delete_identity(&user.identity, &user.access_token, id)
        .await?;
    Ok(Json(refreshed))
}

/// DELETE /dashboard/celulas/{id}
pub async fn delete_celula(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<AdminDashboard>, ApiError> {
    require_confirmation(&params)?;

    let refreshed = state
        .dashboard_service
        .delete_celula(&user.identity, &user.access_token, id)
        .await?;
    Ok(Json(refreshed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_defaults_to_false() {
        let params: ConfirmParams = serde_json::from_str("{}").unwrap();
        assert!(!params.confirm);
        assert!(require_confirmation(&params).is_err());
    }

    #[test]
    fn test_explicit_confirmation_passes() {
        let params = ConfirmParams { confirm: true };
        assert!(require_confirmation(&params).is_ok());
    }
}
