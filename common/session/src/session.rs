use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::claims::{self, Claims};
use crate::error::AuthResult;
use crate::roles::Role;
use crate::store::TokenStore;

/// Snapshot of the authenticated user derived from the stored token.
///
/// Recomputed on every query; never cached. The zero value (all fields
/// absent, plain-user role) stands for "no session".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Role,
}

/// On-demand session resolver over a token store.
///
/// Constructed once at startup and handed to the route guards and the HTTP
/// client; there is no ambient global. Every accessor re-reads and re-decodes
/// the stored token, so a cleared or expired token is reflected immediately.
#[derive(Clone)]
pub struct SessionProvider {
    store: Arc<dyn TokenStore>,
}

impl SessionProvider {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Persist the token issued by the login endpoint.
    pub fn establish(&self, token: &str) -> AuthResult<()> {
        self.store.save(token)
    }

    /// Drop the stored token. The caller navigates back to the login route.
    pub fn terminate(&self) -> AuthResult<()> {
        self.store.clear()
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    fn claims(&self) -> Option<Claims> {
        let token = self.store.get()?;
        match claims::decode(&token) {
            Ok(claims) => Some(claims),
            Err(err) => {
                debug!(error = %err, "stored token failed to decode");
                None
            }
        }
    }

    /// True iff a stored token decodes and its expiry lies in the future.
    ///
    /// Expiry is compared in milliseconds with strict greater-than: a token
    /// expiring at exactly the current millisecond counts as expired. A
    /// missing `exp` claim counts as expired, as does an `exp` too large to
    /// express in milliseconds (the token is untrusted input and must not be
    /// able to panic this check).
    pub fn is_logged_in(&self) -> bool {
        match self.claims().and_then(|claims| claims.expires_at) {
            Some(expires_at) => expires_at
                .checked_mul(1000)
                .is_some_and(|millis| millis > Utc::now().timestamp_millis()),
            None => false,
        }
    }

    /// Resolve the current user; zero-valued on any decode failure.
    pub fn current_user(&self) -> Session {
        let Some(claims) = self.claims() else {
            return Session::default();
        };
        Session {
            id: claims.subject.as_deref().and_then(|raw| raw.parse().ok()),
            email: claims.email,
            name: claims.name,
            role: Role::from_claim(claims.role.as_deref()),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.claims()
            .and_then(|claims| claims.subject)
            .and_then(|raw| raw.parse().ok())
    }

    pub fn user_name(&self) -> Option<String> {
        self.claims().and_then(|claims| claims.name)
    }

    fn role(&self) -> Role {
        Role::from_claim(self.claims().and_then(|claims| claims.role).as_deref())
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn is_assigne(&self) -> bool {
        self.role() == Role::Assigne
    }

    pub fn is_observateur(&self) -> bool {
        self.role() == Role::Observateur
    }

    pub fn has_admin_rights(&self) -> bool {
        self.role().has_admin_rights()
    }

    pub fn can_view_all_complaints(&self) -> bool {
        self.role().can_view_all_complaints()
    }
}
