//! Dashboard view models — the JSON payloads each view family renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cellhub_entity::celula::Celula;
use cellhub_entity::user::Identity;

/// The dashboard payload, tagged by view family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardView {
    /// Full administrative dashboard.
    Admin(AdminDashboard),
    /// Pastoral oversight dashboard.
    Pastoral(PastoralDashboard),
    /// Supervision/leadership dashboard.
    Supervisory(SupervisoryDashboard),
    /// Member's personal dashboard.
    Member(MemberDashboard),
    /// Static fallback for unrecognized roles.
    Unrecognized(UnrecognizedView),
}

/// Administrative dashboard: aggregate stats plus the full user and cell
/// tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    /// Aggregate counters.
    pub stats: AdminStats,
    /// All identities, newest first.
    pub usuarios: Vec<UsuarioRow>,
    /// All cells, newest first.
    pub celulas: Vec<CelulaRow>,
}

/// Admin aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStats {
    /// Total registered identities.
    pub total_usuarios: usize,
    /// Total cells.
    pub total_celulas: usize,
    /// Cells flagged active.
    pub celulas_ativas: usize,
    /// Non-admin identities.
    pub membros_ativos: usize,
}

/// One identity row in the admin table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioRow {
    /// Identity id.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Stored role value.
    pub role: String,
    /// Human-readable role label.
    pub role_label: String,
    /// When the identity was created.
    pub created_at: DateTime<Utc>,
    /// Whether a delete control is exposed for this row. Admin rows never
    /// expose one.
    pub pode_excluir: bool,
}

impl From<&Identity> for UsuarioRow {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
            full_name: identity.full_name.clone(),
            email: identity.email.clone(),
            role: identity.role.as_str().to_string(),
            role_label: identity.role.label().to_string(),
            created_at: identity.created_at,
            pode_excluir: !identity.role.is_admin(),
        }
    }
}

/// One cell row, with leadership slots resolved to display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelulaRow {
    /// Cell id.
    pub id: Uuid,
    /// Cell name.
    pub nome: String,
    /// Description.
    pub descricao: Option<String>,
    /// Meeting address.
    pub endereco: Option<String>,
    /// Meeting day.
    pub dia_semana: Option<String>,
    /// Meeting time.
    pub horario: Option<String>,
    /// Active flag.
    pub ativa: bool,
    /// Leader display name, `"Não definido"` when unassigned.
    pub lider: String,
    /// Supervisor display name, `"Não definido"` when unassigned.
    pub supervisor: String,
}

impl From<&Celula> for CelulaRow {
    fn from(celula: &Celula) -> Self {
        Self {
            id: celula.id,
            nome: celula.nome.clone(),
            descricao: celula.descricao.clone(),
            endereco: celula.endereco.clone(),
            dia_semana: celula.dia_semana.clone(),
            horario: celula.horario.clone(),
            ativa: celula.ativa,
            lider: celula.lider_nome().to_string(),
            supervisor: celula.supervisor_nome().to_string(),
        }
    }
}

/// Pastoral dashboard: congregation-wide counters only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastoralDashboard {
    /// Aggregate counters.
    pub stats: PastoralStats,
}

/// Pastoral aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastoralStats {
    /// Total cells.
    pub total_celulas: usize,
    /// Cells flagged active.
    pub celulas_ativas: usize,
    /// Identities with the `membro` role.
    pub total_membros: usize,
    /// Identities with the `lider_celula` role.
    pub lideres: usize,
}

/// Supervision dashboard: the viewer's overseen cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisoryDashboard {
    /// Aggregate counters.
    pub stats: SupervisoryStats,
    /// Cells where the viewer is supervisor or leader.
    pub celulas: Vec<CelulaRow>,
}

/// Supervision counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisoryStats {
    /// Overseen cell count.
    pub celulas_supervisionadas: usize,
    /// Member total across overseen cells.
    pub membros_total: usize,
}

/// Member dashboard: the viewer's own cell, when a membership exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDashboard {
    /// The member's active cell; `None` renders the placeholder state.
    pub celula: Option<MemberCelulaView>,
}

/// The member's own cell details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCelulaView {
    /// Cell name.
    pub nome: String,
    /// Description.
    pub descricao: Option<String>,
    /// Meeting address.
    pub endereco: Option<String>,
    /// Meeting day.
    pub dia_semana: Option<String>,
    /// Meeting time.
    pub horario: Option<String>,
    /// Leader display name, `"Não definido"` when unassigned.
    pub lider: String,
}

impl From<&Celula> for MemberCelulaView {
    fn from(celula: &Celula) -> Self {
        Self {
            nome: celula.nome.clone(),
            descricao: celula.descricao.clone(),
            endereco: celula.endereco.clone(),
            dia_semana: celula.dia_semana.clone(),
            horario: celula.horario.clone(),
            lider: celula.lider_nome().to_string(),
        }
    }
}

/// The static fallback rendered for unrecognized roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnrecognizedView {
    /// The fixed user-facing message.
    pub message: String,
}

impl Default for UnrecognizedView {
    fn default() -> Self {
        Self {
            message: "Função não reconhecida. Entre em contato com o administrador.".to_string(),
        }
    }
}
