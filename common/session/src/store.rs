use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{AuthError, AuthResult};

/// Fixed key under which the raw token is persisted.
pub const TOKEN_KEY: &str = "auth_token";

/// Single-cell storage for the raw bearer token.
///
/// The store never inspects the token; expiry checking belongs to the
/// session resolver. Writers are the login and logout handlers, and the last
/// write wins.
pub trait TokenStore: Send + Sync {
    fn save(&self, token: &str) -> AuthResult<()>;
    fn get(&self) -> Option<String>;
    fn clear(&self) -> AuthResult<()>;
}

/// In-memory store for tests and short-lived sessions.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) -> AuthResult<()> {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.clone()
    }

    fn clear(&self) -> AuthResult<()> {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        *guard = None;
        Ok(())
    }
}

/// Durable store writing the raw token to `<dir>/auth_token`.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_KEY),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) -> AuthResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| AuthError::Storage(err.to_string()))?;
        }
        fs::write(&self.path, token).map_err(|err| AuthError::Storage(err.to_string()))
    }

    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_owned())
        }
    }

    fn clear(&self) -> AuthResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AuthError::Storage(err.to_string())),
        }
    }
}
