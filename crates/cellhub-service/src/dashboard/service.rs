//! Dashboard assembly — dispatches on the viewer's role and issues each
//! family's read-only queries.
//!
//! Every fetch here is idempotent, executed once per render, and degrades
//! to an empty result on failure; errors are logged and never propagate
//! past this service.

use tracing::warn;

use cellhub_backend::Backend;
use cellhub_core::result::AppResult;
use cellhub_entity::user::{Identity, Role, ViewFamily};

use super::views::{
    AdminDashboard, AdminStats, CelulaRow, DashboardView, MemberCelulaView, MemberDashboard,
    PastoralDashboard, PastoralStats, SupervisoryDashboard, SupervisoryStats, UnrecognizedView,
    UsuarioRow,
};

/// Builds the role-appropriate dashboard payload for an authenticated
/// identity.
#[derive(Debug, Clone)]
pub struct DashboardService {
    backend: Backend,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub(crate) fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Dispatch the identity to its view family and assemble the payload.
    ///
    /// Callers must only invoke this after the identity row was fetched
    /// without error; a missing row is an authentication concern handled
    /// upstream, not a dispatch case.
    pub async fn load(&self, identity: &Identity, access_token: &str) -> DashboardView {
        let token = Some(access_token);
        match identity.role.view_family() {
            ViewFamily::Admin => DashboardView::Admin(self.admin_view(token).await),
            ViewFamily::Pastoral => DashboardView::Pastoral(self.pastoral_view(token).await),
            ViewFamily::Supervisory => {
                DashboardView::Supervisory(self.supervisory_view(token, identity).await)
            }
            ViewFamily::Member => DashboardView::Member(self.member_view(token, identity).await),
            ViewFamily::Unrecognized => DashboardView::Unrecognized(UnrecognizedView::default()),
        }
    }

    /// Full user and cell tables plus aggregate counters.
    pub(crate) async fn admin_view(&self, token: Option<&str>) -> AdminDashboard {
        let usuarios = self.list_or_empty(
            self.backend.store().list_identities(token).await,
            "identities",
        );
        let celulas =
            self.list_or_empty(self.backend.store().list_celulas(token).await, "celulas");

        let stats = AdminStats {
            total_usuarios: usuarios.len(),
            total_celulas: celulas.len(),
            celulas_ativas: celulas.iter().filter(|c| c.ativa).count(),
            membros_ativos: usuarios.iter().filter(|u| !u.role.is_admin()).count(),
        };

        AdminDashboard {
            stats,
            usuarios: usuarios.iter().map(UsuarioRow::from).collect(),
            celulas: celulas.iter().map(CelulaRow::from).collect(),
        }
    }

    /// Congregation-wide counters for the pastoral family.
    async fn pastoral_view(&self, token: Option<&str>) -> PastoralDashboard {
        let celulas =
            self.list_or_empty(self.backend.store().list_celulas(token).await, "celulas");
        let usuarios = self.list_or_empty(
            self.backend.store().list_identities(token).await,
            "identities",
        );

        PastoralDashboard {
            stats: PastoralStats {
                total_celulas: celulas.len(),
                celulas_ativas: celulas.iter().filter(|c| c.ativa).count(),
                total_membros: usuarios.iter().filter(|u| u.role == Role::Membro).count(),
                lideres: usuarios
                    .iter()
                    .filter(|u| u.role == Role::LiderCelula)
                    .count(),
            },
        }
    }

    /// Cells where the viewer is supervisor or leader.
    async fn supervisory_view(
        &self,
        token: Option<&str>,
        identity: &Identity,
    ) -> SupervisoryDashboard {
        let celulas = self.list_or_empty(
            self.backend
                .store()
                .celulas_overseen_by(token, identity.id)
                .await,
            "overseen celulas",
        );

        SupervisoryDashboard {
            stats: SupervisoryStats {
                celulas_supervisionadas: celulas.len(),
                membros_total: 0,
            },
            celulas: celulas.iter().map(CelulaRow::from).collect(),
        }
    }

    /// The viewer's own active cell, or the placeholder state.
    async fn member_view(&self, token: Option<&str>, identity: &Identity) -> MemberDashboard {
        let celula = match self
            .backend
            .store()
            .celula_for_member(token, identity.id)
            .await
        {
            Ok(celula) => celula,
            Err(err) => {
                warn!(user_id = %identity.id, error = %err, "Member cell lookup failed; rendering empty state");
                None
            }
        };

        MemberDashboard {
            celula: celula.as_ref().map(MemberCelulaView::from),
        }
    }

    /// Unwrap a list fetch, logging and degrading to empty on failure.
    fn list_or_empty<T>(&self, result: AppResult<Vec<T>>, what: &str) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "Failed to load {what}; rendering empty list");
                Vec::new()
            }
        }
    }
}
