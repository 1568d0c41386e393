//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use cellhub_backend::Backend;
use cellhub_core::config::AppConfig;
use cellhub_service::{AuthService, DashboardService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheap to clone; there is no shared mutable state between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The external backend pair (live or inert).
    pub backend: Backend,
    /// Auth actions service.
    pub auth_service: Arc<AuthService>,
    /// Dashboard assembly service.
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wire the services around a constructed backend.
    pub fn new(config: AppConfig, backend: Backend) -> Self {
        Self {
            config: Arc::new(config),
            auth_service: Arc::new(AuthService::new(backend.clone())),
            dashboard_service: Arc::new(DashboardService::new(backend.clone())),
            backend,
        }
    }
}
