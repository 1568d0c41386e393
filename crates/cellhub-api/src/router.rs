//! Route definitions for the CellHub HTTP surface.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor. The session gate runs on every route.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing::landing))
        .route(
            "/auth/login",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .route(
            "/auth/cadastro",
            get(handlers::auth::cadastro_form).post(handlers::auth::cadastro),
        )
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route(
            "/dashboard/users/{id}",
            delete(handlers::dashboard::delete_user),
        )
        .route(
            "/dashboard/celulas/{id}",
            delete(handlers::dashboard::delete_celula),
        )
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session_gate,
        ))
        .layer(axum_middleware::from_fn(middleware::request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
