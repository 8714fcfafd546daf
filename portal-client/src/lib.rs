//! Typed HTTP client for the remote complaint-management API.
//!
//! Every request flows through [`PortalClient::request`], which attaches the
//! stored bearer token when one is present. The server re-validates the token
//! on each call; nothing here retries or verifies signatures.

pub mod categories;
pub mod client;
pub mod complaints;
pub mod config;
pub mod error;
pub mod models;

pub use client::PortalClient;
pub use config::{load_portal_config, PortalConfig};
pub use error::{ApiError, ApiResult};
