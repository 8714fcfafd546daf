//! Category lookup endpoints used by the complaint submission form.

use reqwest::Method;

use crate::client::{read_json, PortalClient};
use crate::error::ApiResult;
use crate::models::{Categorie, SousCategorie};

impl PortalClient {
    /// `GET /api/categories`
    pub async fn categories(&self) -> ApiResult<Vec<Categorie>> {
        let response = self.request(Method::GET, "/api/categories").send().await?;
        read_json(response).await
    }

    /// `GET /api/categories/{id}/souscategories`
    pub async fn sub_categories(&self, category_id: i64) -> ApiResult<Vec<SousCategorie>> {
        let response = self
            .request(
                Method::GET,
                &format!("/api/categories/{category_id}/souscategories"),
            )
            .send()
            .await?;
        read_json(response).await
    }
}
