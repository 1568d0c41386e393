//! `DataStore` implementation over the backend's table API.
//!
//! Queries use the table API's embedded-resource syntax to join leader and
//! supervisor identity rows in a single round trip, mirroring the store's
//! foreign-key names (`celulas_lider_id_fkey`, `celulas_supervisor_id_fkey`).

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use cellhub_core::error::AppError;
use cellhub_core::result::AppResult;
use cellhub_entity::celula::Celula;
use cellhub_entity::user::{Identity, NewIdentity};

use crate::provider::DataStore;

use super::{LiveBackend, provider_error, transport_error};

const CELULAS_SELECT: &str = "select=*,\
lider:users!celulas_lider_id_fkey(id,full_name,username),\
supervisor:users!celulas_supervisor_id_fkey(id,full_name,username)";

const MEMBER_CELL_SELECT: &str = "select=celula_id,\
celulas(id,nome,descricao,endereco,dia_semana,horario,\
lider:users!celulas_lider_id_fkey(full_name))";

/// Query for the cells an identity supervises or leads. Carries the same
/// embedded leader/supervisor join as the full listing so display names
/// resolve for assigned cells.
fn overseen_query(id: Uuid) -> String {
    format!("/celulas?{CELULAS_SELECT}&or=(supervisor_id.eq.{id},lider_id.eq.{id})")
}

/// Row shape of the membership lookup: the join row plus the embedded cell.
#[derive(Debug, Deserialize)]
struct MemberCellRow {
    #[allow(dead_code)]
    celula_id: Uuid,
    #[serde(default)]
    celulas: Option<Celula>,
}

impl LiveBackend {
    /// GET a list of rows.
    async fn rest_list<T: DeserializeOwned>(
        &self,
        access_token: Option<&str>,
        path_and_query: &str,
    ) -> AppResult<Vec<T>> {
        let url = self.rest_url(path_and_query);
        let response = self
            .http()
            .get(&url)
            .header("apikey", self.anon_key())
            .bearer_auth(self.bearer(access_token))
            .send()
            .await
            .map_err(|e| transport_error("table select", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error("table select body", e))?;
        if !status.is_success() {
            return Err(provider_error(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// GET a single row, or `None` when no row matches.
    async fn rest_single<T: DeserializeOwned>(
        &self,
        access_token: Option<&str>,
        path_and_query: &str,
    ) -> AppResult<Option<T>> {
        let url = self.rest_url(path_and_query);
        let response = self
            .http()
            .get(&url)
            .header("apikey", self.anon_key())
            .header("Accept", "application/vnd.pgrst.object+json")
            .bearer_auth(self.bearer(access_token))
            .send()
            .await
            .map_err(|e| transport_error("table select", e))?;

        let status = response.status();
        // The table API answers 406 when the single-object filter matches
        // zero rows.
        if status.as_u16() == 406 {
            return Ok(None);
        }
        let text = response
            .text()
            .await
            .map_err(|e| transport_error("table select body", e))?;
        if !status.is_success() {
            return Err(provider_error(status, &text));
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// DELETE rows matching a filter; errors when nothing matched.
    async fn rest_delete(
        &self,
        access_token: Option<&str>,
        path_and_query: &str,
    ) -> AppResult<()> {
        let url = self.rest_url(path_and_query);
        let response = self
            .http()
            .delete(&url)
            .header("apikey", self.anon_key())
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer(access_token))
            .send()
            .await
            .map_err(|e| transport_error("table delete", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error("table delete body", e))?;
        if !status.is_success() {
            return Err(provider_error(status, &text));
        }

        let deleted: Vec<serde_json::Value> = serde_json::from_str(&text)?;
        if deleted.is_empty() {
            return Err(AppError::not_found("Registro não está mais presente"));
        }
        Ok(())
    }
}

#[async_trait]
impl DataStore for LiveBackend {
    async fn fetch_identity(
        &self,
        access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Option<Identity>> {
        self.rest_single(access_token, &format!("/users?select=*&id=eq.{id}"))
            .await
    }

    async fn list_identities(&self, access_token: Option<&str>) -> AppResult<Vec<Identity>> {
        self.rest_list(access_token, "/users?select=*&order=created_at.desc")
            .await
    }

    async fn list_celulas(&self, access_token: Option<&str>) -> AppResult<Vec<Celula>> {
        self.rest_list(
            access_token,
            &format!("/celulas?{CELULAS_SELECT}&order=created_at.desc"),
        )
        .await
    }

    async fn celulas_overseen_by(
        &self,
        access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Vec<Celula>> {
        self.rest_list(access_token, &overseen_query(id)).await
    }

    async fn celula_for_member(
        &self,
        access_token: Option<&str>,
        id: Uuid,
    ) -> AppResult<Option<Celula>> {
        let row: Option<MemberCellRow> = self
            .rest_single(
                access_token,
                &format!("/celula_membros?{MEMBER_CELL_SELECT}&user_id=eq.{id}&ativo=eq.true"),
            )
            .await?;
        Ok(row.and_then(|r| r.celulas))
    }

    async fn insert_identity(
        &self,
        access_token: Option<&str>,
        row: &NewIdentity,
    ) -> AppResult<()> {
        let url = self.rest_url("/users");
        let response = self
            .http()
            .post(&url)
            .header("apikey", self.anon_key())
            .header("Prefer", "return=minimal")
            .bearer_auth(self.bearer(access_token))
            .json(row)
            .send()
            .await
            .map_err(|e| transport_error("table insert", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(provider_error(status, &text));
        }
        Ok(())
    }

    async fn delete_identity(&self, access_token: Option<&str>, id: Uuid) -> AppResult<()> {
        self.rest_delete(access_token, &format!("/users?id=eq.{id}"))
            .await
    }

    async fn delete_celula(&self, access_token: Option<&str>, id: Uuid) -> AppResult<()> {
        self.rest_delete(access_token, &format!("/celulas?id=eq.{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overseen_query_embeds_leader_join() {
        let id: Uuid = "7c9e6679-7425-40de-944b-e07fc1f90ae7".parse().unwrap();
        let query = overseen_query(id);
        assert!(query.contains("lider:users!celulas_lider_id_fkey"));
        assert!(query.contains("supervisor:users!celulas_supervisor_id_fkey"));
        assert!(query.contains(&format!("or=(supervisor_id.eq.{id},lider_id.eq.{id})")));
    }

    #[test]
    fn test_overseen_row_resolves_assigned_leader_name() {
        // Shape returned by the overseen query: embedded join present.
        let celula: Celula = serde_json::from_str(
            r#"{
                "id": "11111111-2222-3333-4444-555555555555",
                "nome": "Célula Norte",
                "lider_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "lider": {"id": "7c9e6679-7425-40de-944b-e07fc1f90ae7", "full_name": "João Lima"}
            }"#,
        )
        .unwrap();
        assert_eq!(celula.lider_nome(), "João Lima");
    }

    #[test]
    fn test_member_cell_row_without_embedded_cell() {
        let row: MemberCellRow = serde_json::from_str(
            r#"{"celula_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7"}"#,
        )
        .unwrap();
        assert!(row.celulas.is_none());
    }

    #[test]
    fn test_member_cell_row_with_leader_only_join() {
        let row: MemberCellRow = serde_json::from_str(
            r#"{
                "celula_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "celulas": {
                    "id": "11111111-2222-3333-4444-555555555555",
                    "nome": "Célula Vida",
                    "lider": {"full_name": "Ana"}
                }
            }"#,
        )
        .unwrap();
        let celula = row.celulas.unwrap();
        assert_eq!(celula.lider_nome(), "Ana");
    }
}
