//! HTTP handlers, organized by page.

pub mod auth;
pub mod dashboard;
pub mod landing;
