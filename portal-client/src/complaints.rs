//! Complaint, comment and status endpoints.

use reqwest::Method;
use serde_json::Value;

use crate::client::{read_empty, read_json, PortalClient};
use crate::error::ApiResult;
use crate::models::{ChangerStatut, Commentaire, CreerCommentaire, CreerReclamation, Reclamation, Statut};

impl PortalClient {
    /// `GET /api/reclamations` — the server scopes the list to the caller's
    /// role (plain users see their own complaints only).
    pub async fn my_complaints(&self) -> ApiResult<Vec<Reclamation>> {
        let response = self.request(Method::GET, "/api/reclamations").send().await?;
        read_json(response).await
    }

    /// `GET /api/reclamations/{id}`
    pub async fn complaint(&self, id: i64) -> ApiResult<Reclamation> {
        let response = self
            .request(Method::GET, &format!("/api/reclamations/{id}"))
            .send()
            .await?;
        read_json(response).await
    }

    /// `POST /api/reclamations`
    pub async fn create_complaint(&self, payload: &CreerReclamation) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/api/reclamations")
            .json(payload)
            .send()
            .await?;
        read_empty(response).await
    }

    /// `DELETE /api/reclamations/{id}`
    pub async fn delete_complaint(&self, id: i64) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/reclamations/{id}"))
            .send()
            .await?;
        read_empty(response).await
    }

    /// `GET /api/reclamations/{id}/commentaires`
    pub async fn comments(&self, reclamation_id: i64) -> ApiResult<Vec<Commentaire>> {
        let response = self
            .request(
                Method::GET,
                &format!("/api/reclamations/{reclamation_id}/commentaires"),
            )
            .send()
            .await?;
        read_json(response).await
    }

    /// `POST /api/reclamations/{id}/commentaires`
    pub async fn add_comment(
        &self,
        reclamation_id: i64,
        payload: &CreerCommentaire,
    ) -> ApiResult<()> {
        let response = self
            .request(
                Method::POST,
                &format!("/api/reclamations/{reclamation_id}/commentaires"),
            )
            .json(payload)
            .send()
            .await?;
        read_empty(response).await
    }

    /// `DELETE /api/reclamations/commentaires/{id}` — note the comment id is
    /// global, not nested under its complaint.
    pub async fn delete_comment(&self, comment_id: i64) -> ApiResult<()> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/api/reclamations/commentaires/{comment_id}"),
            )
            .send()
            .await?;
        read_empty(response).await
    }

    /// `GET /api/statuts`
    pub async fn statuses(&self) -> ApiResult<Vec<Statut>> {
        let response = self.request(Method::GET, "/api/statuts").send().await?;
        read_json(response).await
    }

    /// `PUT /api/reclamations/{id}/statut`
    pub async fn update_status(&self, reclamation_id: i64, statut_id: i64) -> ApiResult<()> {
        let response = self
            .request(
                Method::PUT,
                &format!("/api/reclamations/{reclamation_id}/statut"),
            )
            .json(&ChangerStatut { statut_id })
            .send()
            .await?;
        read_empty(response).await
    }

    /// `GET /api/reclamations/{id}/historique-statuts` — the server has not
    /// pinned this schema yet, so rows stay raw JSON.
    pub async fn status_history(&self, reclamation_id: i64) -> ApiResult<Vec<Value>> {
        let response = self
            .request(
                Method::GET,
                &format!("/api/reclamations/{reclamation_id}/historique-statuts"),
            )
            .send()
            .await?;
        read_json(response).await
    }
}
