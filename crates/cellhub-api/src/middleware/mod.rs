//! Middleware layers applied to the router.

pub mod logging;
pub mod session_gate;

pub use logging::request_logging;
pub use session_gate::{GateAction, GateOutcome, RefreshedSession, authorize, session_gate};
