use crate::session::SessionProvider;

/// Navigation surface of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Portal,
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Portal => "/portal",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Terminal outcome of one synchronous guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Deny { redirect: Route },
}

impl GuardOutcome {
    pub fn is_allowed(self) -> bool {
        matches!(self, GuardOutcome::Allow)
    }

    pub fn redirect(self) -> Option<Route> {
        match self {
            GuardOutcome::Allow => None,
            GuardOutcome::Deny { redirect } => Some(redirect),
        }
    }
}

/// Gate for routes that only require a live session.
pub fn auth_guard(session: &SessionProvider) -> GuardOutcome {
    if session.is_logged_in() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Deny {
            redirect: Route::Login,
        }
    }
}

/// Gate for administration routes (Admin or Assigne).
pub fn admin_guard(session: &SessionProvider) -> GuardOutcome {
    if !session.is_logged_in() {
        return GuardOutcome::Deny {
            redirect: Route::Login,
        };
    }
    if session.has_admin_rights() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Deny {
            redirect: Route::Dashboard,
        }
    }
}

/// Gate for routes listing every complaint (Admin, Assigne or Observateur).
pub fn view_all_complaints_guard(session: &SessionProvider) -> GuardOutcome {
    if !session.is_logged_in() {
        return GuardOutcome::Deny {
            redirect: Route::Login,
        };
    }
    if session.can_view_all_complaints() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Deny {
            redirect: Route::Dashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::ROLE_CLAIM;
    use crate::store::{MemoryTokenStore, TokenStore};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Arc;

    fn provider_with_role(role: Option<&str>) -> SessionProvider {
        let payload = match role {
            Some(role) => json!({ ROLE_CLAIM: role, "exp": Utc::now().timestamp() + 3600 }),
            None => json!({ "exp": Utc::now().timestamp() + 3600 }),
        };
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        let store = MemoryTokenStore::new();
        store.save(&format!("{header}.{body}.sig")).expect("save");
        SessionProvider::new(Arc::new(store))
    }

    fn logged_out_provider() -> SessionProvider {
        SessionProvider::new(Arc::new(MemoryTokenStore::new()))
    }

    #[test]
    fn unauthenticated_dashboard_request_redirects_to_login() {
        let outcome = auth_guard(&logged_out_provider());
        assert_eq!(
            outcome,
            GuardOutcome::Deny {
                redirect: Route::Login
            }
        );
        assert_eq!(outcome.redirect().map(Route::path), Some("/login"));
    }

    #[test]
    fn authenticated_user_passes_the_auth_guard() {
        assert!(auth_guard(&provider_with_role(None)).is_allowed());
    }

    #[test]
    fn observateur_views_all_but_is_not_an_admin() {
        let provider = provider_with_role(Some("Observateur"));
        assert!(view_all_complaints_guard(&provider).is_allowed());
        assert_eq!(
            admin_guard(&provider),
            GuardOutcome::Deny {
                redirect: Route::Dashboard
            }
        );
    }

    #[test]
    fn assigne_passes_both_privileged_guards() {
        let provider = provider_with_role(Some("Assigne"));
        assert!(admin_guard(&provider).is_allowed());
        assert!(view_all_complaints_guard(&provider).is_allowed());
    }

    #[test]
    fn plain_user_is_sent_back_to_the_dashboard() {
        let provider = provider_with_role(None);
        assert_eq!(
            admin_guard(&provider),
            GuardOutcome::Deny {
                redirect: Route::Dashboard
            }
        );
        assert_eq!(
            view_all_complaints_guard(&provider),
            GuardOutcome::Deny {
                redirect: Route::Dashboard
            }
        );
    }

    #[test]
    fn privileged_guards_redirect_logged_out_users_to_login() {
        let provider = logged_out_provider();
        assert_eq!(
            admin_guard(&provider),
            GuardOutcome::Deny {
                redirect: Route::Login
            }
        );
        assert_eq!(
            view_all_complaints_guard(&provider),
            GuardOutcome::Deny {
                redirect: Route::Login
            }
        );
    }
}
