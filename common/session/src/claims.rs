use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::error::{AuthError, AuthResult};

/// Claim URIs emitted by the issuing server (.NET Identity schema).
/// These must match the issuer byte-for-byte.
pub const NAME_ID_CLAIM: &str =
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
pub const EMAIL_CLAIM: &str =
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
pub const NAME_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
pub const ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Application-focused view of the token payload.
///
/// Produced by [`decode`] without signature verification; treat every field
/// as untrusted input.
#[derive(Debug, Clone)]
pub struct Claims {
    /// Subject identifier as emitted (string or number on the wire).
    pub subject: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Role claim; when the issuer sends an array, the first element is
    /// taken as authoritative.
    pub role: Option<String>,
    /// Expiry in seconds since the epoch.
    pub expires_at: Option<i64>,
    pub raw: Value,
}

/// Decode the payload segment of a dot-delimited bearer token.
///
/// The signature segment is ignored entirely. Any malformed input yields a
/// typed [`AuthError`]; callers downgrade that to "no session".
pub fn decode(token: &str) -> AuthResult<Claims> {
    let payload = token.split('.').nth(1).ok_or(AuthError::MalformedToken)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|err| AuthError::InvalidBase64(err.to_string()))?;
    let value: Value =
        serde_json::from_slice(&bytes).map_err(|err| AuthError::InvalidJson(err.to_string()))?;
    Claims::try_from(value)
}

impl TryFrom<Value> for Claims {
    type Error = AuthError;

    fn try_from(value: Value) -> AuthResult<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| AuthError::InvalidJson("payload is not a JSON object".to_string()))?;

        let claims = Self {
            subject: string_claim(map, NAME_ID_CLAIM),
            email: string_claim(map, EMAIL_CLAIM),
            name: string_claim(map, NAME_CLAIM),
            role: role_claim(map),
            expires_at: map.get("exp").and_then(Value::as_i64),
            raw: value.clone(),
        };
        Ok(claims)
    }
}

fn string_claim(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}

fn role_claim(map: &Map<String, Value>) -> Option<String> {
    match map.get(ROLE_CLAIM) {
        Some(Value::String(role)) => Some(role.clone()),
        // Multi-valued role: the first element wins. The issuer has never
        // documented an ordering guarantee, so this mirrors its behavior
        // rather than any priority scheme.
        Some(Value::Array(items)) => items
            .first()
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forge(payload: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decode_maps_known_claim_uris() {
        let token = forge(json!({
            NAME_ID_CLAIM: "42",
            EMAIL_CLAIM: "amina@example.test",
            NAME_CLAIM: "Amina",
            ROLE_CLAIM: "Admin",
            "exp": 1_900_000_000,
        }));

        let claims = decode(&token).expect("decode succeeds");
        assert_eq!(claims.subject.as_deref(), Some("42"));
        assert_eq!(claims.email.as_deref(), Some("amina@example.test"));
        assert_eq!(claims.name.as_deref(), Some("Amina"));
        assert_eq!(claims.role.as_deref(), Some("Admin"));
        assert_eq!(claims.expires_at, Some(1_900_000_000));
    }

    #[test]
    fn decode_takes_first_role_from_array() {
        let token = forge(json!({ ROLE_CLAIM: ["Assigne", "Observateur"] }));
        let claims = decode(&token).expect("decode succeeds");
        assert_eq!(claims.role.as_deref(), Some("Assigne"));
    }

    #[test]
    fn decode_accepts_numeric_subject() {
        let token = forge(json!({ NAME_ID_CLAIM: 7 }));
        let claims = decode(&token).expect("decode succeeds");
        assert_eq!(claims.subject.as_deref(), Some("7"));
    }

    #[test]
    fn decode_rejects_token_without_payload_segment() {
        let err = decode("justonesegment").expect_err("should fail");
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let err = decode("a.!!not-base64!!.c").expect_err("should fail");
        assert!(matches!(err, AuthError::InvalidBase64(_)));
    }

    #[test]
    fn decode_rejects_non_object_payload() {
        let body = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        let err = decode(&format!("a.{body}.c")).expect_err("should fail");
        assert!(matches!(err, AuthError::InvalidJson(_)));
    }
}
