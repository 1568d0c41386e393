//! Authentication actions.

pub mod service;

pub use service::{AuthService, SignUpData};
