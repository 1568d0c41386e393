//! User identity entities.

pub mod model;
pub mod role;

pub use model::{Identity, NewIdentity};
pub use role::{Role, ViewFamily};
