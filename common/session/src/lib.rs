//! Client-side session layer for the complaint portal.
//!
//! Tokens are decoded but never cryptographically verified: no signing key is
//! available on the client, so integrity enforcement is deferred to the server
//! on every authenticated API call. The only local validation is the expiry
//! check in [`SessionProvider::is_logged_in`].

pub mod claims;
pub mod error;
pub mod guards;
pub mod roles;
pub mod session;
pub mod store;

pub use claims::{decode, Claims};
pub use error::{AuthError, AuthResult};
pub use guards::{admin_guard, auth_guard, view_all_complaints_guard, GuardOutcome, Route};
pub use roles::Role;
pub use session::{Session, SessionProvider};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
