//! Role enumeration and the role-to-dashboard view-family mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ministry roles recognized by the congregation system.
///
/// Role values arrive as strings from the external store. Anything outside
/// the seven known values deserializes to [`Role::Unknown`] — an explicit
/// fallback state, never a deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full system administrator.
    Admin,
    /// Presiding pastor.
    PastorPresidente,
    /// Pastor.
    Pastor,
    /// Cell supervisor.
    Supervisor,
    /// Cell leader.
    LiderCelula,
    /// Cell auxiliary.
    Auxiliar,
    /// Regular member.
    Membro,
    /// Any role value not recognized above.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles offered at sign-up (admin accounts are provisioned out of band).
    pub const ASSIGNABLE: [Role; 6] = [
        Role::PastorPresidente,
        Role::Pastor,
        Role::Supervisor,
        Role::LiderCelula,
        Role::Auxiliar,
        Role::Membro,
    ];

    /// Parse a role string, falling back to [`Role::Unknown`].
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "pastor_presidente" => Self::PastorPresidente,
            "pastor" => Self::Pastor,
            "supervisor" => Self::Supervisor,
            "lider_celula" => Self::LiderCelula,
            "auxiliar" => Self::Auxiliar,
            "membro" => Self::Membro,
            _ => Self::Unknown,
        }
    }

    /// The role as its stored snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::PastorPresidente => "pastor_presidente",
            Self::Pastor => "pastor",
            Self::Supervisor => "supervisor",
            Self::LiderCelula => "lider_celula",
            Self::Auxiliar => "auxiliar",
            Self::Membro => "membro",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable Portuguese label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::PastorPresidente => "Pastor Presidente",
            Self::Pastor => "Pastor",
            Self::Supervisor => "Supervisor",
            Self::LiderCelula => "Líder de Célula",
            Self::Auxiliar => "Auxiliar",
            Self::Membro => "Membro",
            Self::Unknown => "Função não reconhecida",
        }
    }

    /// Which dashboard family this role sees.
    pub fn view_family(&self) -> ViewFamily {
        ViewFamily::for_role(*self)
    }

    /// Check if this role is the administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four dashboard presentations, plus the fallback for roles the
/// system does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewFamily {
    /// Full administrative dashboard.
    Admin,
    /// Pastoral oversight dashboard.
    Pastoral,
    /// Supervision/leadership dashboard.
    Supervisory,
    /// Member's personal dashboard.
    Member,
    /// Static "role not recognized" state.
    Unrecognized,
}

impl ViewFamily {
    /// Collapse a role into its dashboard family.
    ///
    /// Roles are mutually exclusive, so the mapping is order-independent.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::PastorPresidente | Role::Pastor => Self::Pastoral,
            Role::Supervisor | Role::LiderCelula => Self::Supervisory,
            Role::Auxiliar | Role::Membro => Self::Member,
            Role::Unknown => Self::Unrecognized,
        }
    }
}
