//! Cell (célula) entities.

pub mod model;

pub use model::{Celula, CelulaMembro, LeaderRef, UNASSIGNED_LABEL};
