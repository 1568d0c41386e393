//! # cellhub-api
//!
//! HTTP layer for CellHub built on Axum.
//!
//! Provides the web routes, the session-gate and logging middleware, the
//! cookie helpers for the session token pair, the authenticated-user
//! extractor, and the error mapping to HTTP responses.

pub mod app;
pub mod cookies;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::serve;
pub use router::build_router;
pub use state::AppState;
