use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback shown when the server returns no usable error body.
const GENERIC_SERVER_ERROR: &str = "Une erreur serveur est survenue.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; surfaced unchanged, never retried.
    #[error("request failed: {0}")]
    Network(String),
    /// Non-success response from the API.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    /// The issued token could not be persisted locally.
    #[error("failed to store session token: {0}")]
    Session(#[from] common_session::AuthError),
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build an [`ApiError::Api`] from a non-success response, preferring the
    /// JSON `message` field, then the raw body, then a generic message.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) if !body.trim().is_empty() => {
                match serde_json::from_str::<ErrorBody>(&body) {
                    Ok(ErrorBody {
                        message: Some(message),
                    }) => message,
                    _ => body,
                }
            }
            _ => GENERIC_SERVER_ERROR.to_owned(),
        };
        Self::Api { status, message }
    }
}
