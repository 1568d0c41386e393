//! # cellhub-entity
//!
//! Domain entity models for CellHub. Every struct in this crate mirrors a
//! row shape served by the external store's table API, or a domain value
//! object derived from one. The store owns the authoritative copies; these
//! types are transient per-request snapshots.

pub mod celula;
pub mod user;

pub use celula::{Celula, CelulaMembro, LeaderRef};
pub use user::{Identity, NewIdentity, Role, ViewFamily};
