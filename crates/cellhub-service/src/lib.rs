//! # cellhub-service
//!
//! Application service layer for CellHub. Each service orchestrates the
//! external backend's capabilities to implement request-scoped use cases:
//! auth actions (sign-in, sign-up, sign-out) and role-dispatched dashboard
//! assembly.
//!
//! Services follow constructor injection — the backend pair is provided at
//! construction time and shared by cheap clones.

pub mod auth;
pub mod dashboard;

pub use auth::{AuthService, SignUpData};
pub use dashboard::{DashboardService, DashboardView};
