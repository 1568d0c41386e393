//! Request extractors available to handlers.

pub mod auth;

pub use auth::{AuthRejection, CurrentUser};
