//! Public landing page payload.

use axum::Json;
use serde::Serialize;

use cellhub_entity::user::Role;

/// One ministry role as presented on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCard {
    pub value: &'static str,
    pub label: &'static str,
}

/// Landing page payload: the application pitch plus the six ministry
/// roles a visitor can sign up under.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub title: &'static str,
    pub tagline: &'static str,
    pub roles: Vec<RoleCard>,
    pub login_url: &'static str,
    pub cadastro_url: &'static str,
}

/// GET /
pub async fn landing() -> Json<LandingPage> {
    let roles = Role::ASSIGNABLE
        .iter()
        .map(|role| RoleCard {
            value: role.as_str(),
            label: role.label(),
        })
        .collect();

    Json(LandingPage {
        title: "CellHub",
        tagline: "Gestão de células e membros para a sua igreja",
        roles,
        login_url: "/auth/login",
        cadastro_url: "/auth/cadastro",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_landing_lists_six_assignable_roles() {
        let Json(page) = landing().await;
        assert_eq!(page.roles.len(), 6);
        assert!(page.roles.iter().all(|r| r.value != "admin"));
        assert!(page.roles.iter().any(|r| r.label == "Líder de Célula"));
    }
}
