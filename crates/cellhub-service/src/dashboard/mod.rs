//! Role-dispatched dashboard assembly.

pub mod admin;
pub mod service;
pub mod views;

pub use service::DashboardService;
pub use views::{
    AdminDashboard, CelulaRow, DashboardView, MemberCelulaView, MemberDashboard,
    PastoralDashboard, SupervisoryDashboard, UnrecognizedView, UsuarioRow,
};
