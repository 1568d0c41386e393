//! Integration tests for role-dispatched dashboards and admin deletes.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

use cellhub_entity::user::Role;

#[tokio::test]
async fn test_admin_dashboard_lists_users_and_cells() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));
    store
        .celulas
        .lock()
        .unwrap()
        .push(helpers::celula("Célula Esperança", Some("João Lima")));

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["view"], "admin");
    assert_eq!(response.body["stats"]["total_usuarios"], 1);
    assert_eq!(response.body["stats"]["total_celulas"], 1);
    assert_eq!(response.body["celulas"][0]["lider"], "João Lima");
}

#[tokio::test]
async fn test_admin_rows_hide_delete_control_for_admins() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));
    {
        let mut identities = store.identities.lock().unwrap();
        let mut member = helpers::identity(Role::Membro);
        member.username = "bia".to_string();
        identities.push(member);
    }

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    let usuarios = response.body["usuarios"].as_array().unwrap();
    for row in usuarios {
        let expected = row["role"] != "admin";
        assert_eq!(row["pode_excluir"], expected);
    }
}

#[tokio::test]
async fn test_cell_without_leader_shows_placeholder() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));
    store
        .celulas
        .lock()
        .unwrap()
        .push(helpers::celula("Célula Sem Líder", None));

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    assert_eq!(response.body["celulas"][0]["lider"], "Não definido");
    assert_eq!(response.body["celulas"][0]["supervisor"], "Não definido");
}

#[tokio::test]
async fn test_pastoral_dashboard_for_pastor() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Pastor));
    store
        .celulas
        .lock()
        .unwrap()
        .push(helpers::celula("Célula Esperança", Some("João Lima")));

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    assert_eq!(response.body["view"], "pastoral");
    assert_eq!(response.body["stats"]["total_celulas"], 1);
}

#[tokio::test]
async fn test_supervisory_dashboard_lists_overseen_cells() {
    let identity = helpers::identity(Role::Supervisor);
    let supervisor_id = identity.id;
    let (app, store) = helpers::TestApp::with_user(identity);
    {
        let mut celulas = store.celulas.lock().unwrap();
        let mut own = helpers::celula("Célula Norte", Some("João Lima"));
        own.supervisor_id = Some(supervisor_id);
        celulas.push(own);
        celulas.push(helpers::celula("Célula Sul", None));
    }

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    assert_eq!(response.body["view"], "supervisory");
    assert_eq!(response.body["stats"]["celulas_supervisionadas"], 1);
    assert_eq!(response.body["celulas"][0]["nome"], "Célula Norte");
}

#[tokio::test]
async fn test_member_dashboard_shows_own_cell() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Membro));
    *store.member_cell.lock().unwrap() =
        Some(helpers::celula("Célula Esperança", Some("João Lima")));

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    assert_eq!(response.body["view"], "member");
    assert_eq!(response.body["celula"]["nome"], "Célula Esperança");
    assert_eq!(response.body["celula"]["lider"], "João Lima");
}

#[tokio::test]
async fn test_member_without_cell_renders_empty_state() {
    let (app, _store) = helpers::TestApp::with_user(helpers::identity(Role::Auxiliar));

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    assert_eq!(response.body["view"], "member");
    assert!(response.body["celula"].is_null());
}

#[tokio::test]
async fn test_unrecognized_role_renders_fallback_message() {
    let (app, _store) = helpers::TestApp::with_user(helpers::identity(Role::Unknown));

    let response = app
        .request("GET", "/dashboard", None, Some(&helpers::session_cookie()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["view"], "unrecognized");
    assert_eq!(
        response.body["message"],
        "Função não reconhecida. Entre em contato com o administrador."
    );
}

#[tokio::test]
async fn test_delete_user_requires_confirmation() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));
    let target = helpers::identity(Role::Membro);
    let target_id = target.id;
    store.identities.lock().unwrap().push(target);

    let response = app
        .request(
            "DELETE",
            &format!("/dashboard/users/{target_id}"),
            None,
            Some(&helpers::session_cookie()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(store.identities.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_user_refreshes_admin_dashboard() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));
    let target = helpers::identity(Role::Membro);
    let target_id = target.id;
    store.identities.lock().unwrap().push(target);

    let response = app
        .request(
            "DELETE",
            &format!("/dashboard/users/{target_id}?confirm=true"),
            None,
            Some(&helpers::session_cookie()),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["stats"]["total_usuarios"], 1);
    assert_eq!(store.identities.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_admin_identity_rejected() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));
    let other_admin = helpers::identity(Role::Admin);
    let other_id = other_admin.id;
    store.identities.lock().unwrap().push(other_admin);

    let response = app
        .request(
            "DELETE",
            &format!("/dashboard/users/{other_id}?confirm=true"),
            None,
            Some(&helpers::session_cookie()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "Contas de administrador não podem ser excluídas"
    );
    assert_eq!(store.identities.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_by_non_admin_rejected() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::LiderCelula));
    let target = helpers::identity(Role::Membro);
    let target_id = target.id;
    store.identities.lock().unwrap().push(target);

    let response = app
        .request(
            "DELETE",
            &format!("/dashboard/users/{target_id}?confirm=true"),
            None,
            Some(&helpers::session_cookie()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_absent_row_reports_no_longer_present() {
    let (app, _store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));

    let response = app
        .request(
            "DELETE",
            &format!("/dashboard/users/{}?confirm=true", Uuid::new_v4()),
            None,
            Some(&helpers::session_cookie()),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Registro não está mais presente");
}

#[tokio::test]
async fn test_delete_celula_refreshes_admin_dashboard() {
    let (app, store) = helpers::TestApp::with_user(helpers::identity(Role::Admin));
    let cell = helpers::celula("Célula Esperança", None);
    let cell_id = cell.id;
    store.celulas.lock().unwrap().push(cell);

    let response = app
        .request(
            "DELETE",
            &format!("/dashboard/celulas/{cell_id}?confirm=true"),
            None,
            Some(&helpers::session_cookie()),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["stats"]["total_celulas"], 0);
    assert!(store.celulas.lock().unwrap().is_empty());
}
