use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use common_session::{Route, SessionProvider};

use crate::config::PortalConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, LoginReponse, NouvelUtilisateur};

/// HTTP client for the complaint portal API.
///
/// One instance is built at startup from [`PortalConfig`] and the shared
/// [`SessionProvider`]; clones share the same connection pool and token
/// store.
#[derive(Clone)]
pub struct PortalClient {
    http: Client,
    base_url: String,
    session: SessionProvider,
}

impl PortalClient {
    pub fn new(config: &PortalConfig, session: SessionProvider) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> &SessionProvider {
        &self.session
    }

    /// Build a request for `path`, attaching `Authorization: Bearer <token>`
    /// when a token is stored. Without a token the request goes out
    /// unchanged. Evaluated once per outbound request.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `POST /api/Utilisateurs/register`
    pub async fn register(&self, payload: &NouvelUtilisateur) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/api/Utilisateurs/register")
            .json(payload)
            .send()
            .await?;
        read_empty(response).await
    }

    /// `POST /api/Utilisateurs/login`; stores the issued token on success.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/api/Utilisateurs/login")
            .json(credentials)
            .send()
            .await?;
        let body: LoginReponse = read_json(response).await?;
        if body.token.is_empty() {
            warn!("login succeeded but the response carried no token");
            return Ok(());
        }
        self.session.establish(&body.token)?;
        debug!("session established");
        Ok(())
    }

    /// Clear the stored token and hand back the route to navigate to.
    pub fn logout(&self) -> ApiResult<Route> {
        self.session.terminate()?;
        Ok(Route::Login)
    }
}

/// Deserialize a success body, or map a non-2xx response to [`ApiError`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.status().is_success() {
        let err = ApiError::from_response(response).await;
        warn!(error = %err, "API call failed");
        return Err(err);
    }
    Ok(response.json::<T>().await?)
}

/// Like [`read_json`] for endpoints whose body we discard.
pub(crate) async fn read_empty(response: Response) -> ApiResult<()> {
    if !response.status().is_success() {
        let err = ApiError::from_response(response).await;
        warn!(error = %err, "API call failed");
        return Err(err);
    }
    Ok(())
}
