use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token has no payload segment")]
    MalformedToken,
    #[error("failed to decode token payload: {0}")]
    InvalidBase64(String),
    #[error("malformed claim payload: {0}")]
    InvalidJson(String),
    #[error("failed to persist token: {0}")]
    Storage(String),
}
