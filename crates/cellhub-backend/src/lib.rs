//! # cellhub-backend
//!
//! The boundary to the external managed backend that owns authentication
//! and the relational store. Exposes two capability traits —
//! [`AuthProvider`] and [`DataStore`] — with a live implementation that
//! speaks the backend's HTTP APIs and an inert implementation selected at
//! startup when the connection parameters are absent.
//!
//! Call sites never check configuration; they call through [`Backend`]
//! and receive either real answers or inert no-op responses.

pub mod inert;
pub mod live;
pub mod provider;
pub mod session;

pub use inert::InertBackend;
pub use provider::{AuthProvider, Backend, DataStore};
pub use session::{AuthUser, Session, SignUpOutcome};
