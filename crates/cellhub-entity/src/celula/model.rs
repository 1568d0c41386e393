//! Cell entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display label for a leadership slot that has no assignee yet.
pub const UNASSIGNED_LABEL: &str = "Não definido";

/// A small recurring fellowship group (célula) within the congregation.
///
/// Leader and supervisor assignments are optional; a cell may exist with
/// neither. When the store query embeds the referenced identity rows they
/// land in [`Celula::lider`] / [`Celula::supervisor`]; narrower queries
/// (e.g. the member's own-cell lookup) leave the fields they did not
/// select at their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Celula {
    /// Unique identifier.
    pub id: Uuid,
    /// Cell name.
    pub nome: String,
    /// Free-form description.
    #[serde(default)]
    pub descricao: Option<String>,
    /// Meeting address.
    #[serde(default)]
    pub endereco: Option<String>,
    /// Meeting day of week.
    #[serde(default)]
    pub dia_semana: Option<String>,
    /// Meeting time.
    #[serde(default)]
    pub horario: Option<String>,
    /// Whether the cell is currently active.
    #[serde(default)]
    pub ativa: bool,
    /// Assigned leader's identity id, if any.
    #[serde(default)]
    pub lider_id: Option<Uuid>,
    /// Assigned supervisor's identity id, if any.
    #[serde(default)]
    pub supervisor_id: Option<Uuid>,
    /// Embedded leader row, when the query joined it.
    #[serde(default)]
    pub lider: Option<LeaderRef>,
    /// Embedded supervisor row, when the query joined it.
    #[serde(default)]
    pub supervisor: Option<LeaderRef>,
    /// When the cell was created, when the query selected it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Celula {
    /// Leader display name, falling back to [`UNASSIGNED_LABEL`].
    pub fn lider_nome(&self) -> &str {
        self.lider
            .as_ref()
            .map(|l| l.full_name.as_str())
            .unwrap_or(UNASSIGNED_LABEL)
    }

    /// Supervisor display name, falling back to [`UNASSIGNED_LABEL`].
    pub fn supervisor_nome(&self) -> &str {
        self.supervisor
            .as_ref()
            .map(|s| s.full_name.as_str())
            .unwrap_or(UNASSIGNED_LABEL)
    }
}

/// Identity fields embedded into a cell row by a relational join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderRef {
    /// Identity id, when selected.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name.
    pub full_name: String,
    /// Login name, when selected.
    #[serde(default)]
    pub username: Option<String>,
}

/// Membership of an identity in a cell (many-to-many, with an active flag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelulaMembro {
    /// Cell id.
    pub celula_id: Uuid,
    /// Member's identity id, when selected.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Whether the membership is active.
    #[serde(default)]
    pub ativo: bool,
}
