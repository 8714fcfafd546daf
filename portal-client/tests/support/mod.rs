use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

use common_session::{MemoryTokenStore, SessionProvider, TokenStore};
use portal_client::{PortalClient, PortalConfig};

/// Forge an unsigned three-segment token around the given payload. The
/// client never reads the signature segment, so a placeholder suffices.
#[allow(dead_code)]
pub fn forge_token(payload: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.sig")
}

/// Build a client against `base_url` with an optional pre-stored token.
pub fn client_for(base_url: &str, token: Option<&str>) -> PortalClient {
    let store = MemoryTokenStore::new();
    if let Some(token) = token {
        store.save(token).expect("save token");
    }
    let session = SessionProvider::new(Arc::new(store));
    PortalClient::new(&PortalConfig::new(base_url), session)
}
