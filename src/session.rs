//! Session context
//!
//! Holds the single bearer token. The token survives restarts through a
//! [`SessionStore`] and is dropped on logout or on any 401.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::errors::{Result, TrustMeBroError};

/// Persistent backing for the session token
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token kept in `<dir>/<key>`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(dir: P, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrustMeBroError::session(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token).map_err(|e| {
            TrustMeBroError::session(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TrustMeBroError::session(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// In-process store, nothing survives the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// Explicitly injected session context.
///
/// Lifecycle: [`Session::init`] on startup, [`Session::update`] on login,
/// [`Session::teardown`] on logout or 401. Clones share the same token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Read the persisted token, if any
    pub fn init(store: Arc<dyn SessionStore>) -> Result<Self> {
        let token = store.load()?;
        debug!("Session initialized (token present: {})", token.is_some());
        Ok(Self {
            store,
            token: Arc::new(RwLock::new(token)),
        })
    }

    /// Session without persistence
    pub fn ephemeral() -> Self {
        Self {
            store: Arc::new(MemorySessionStore::new()),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Persist and adopt a fresh token
    pub fn update(&self, token: &str) -> Result<()> {
        self.store.save(token)?;
        *self.token.write() = Some(token.to_string());
        info!("Session established");
        Ok(())
    }

    /// Forget the token.
    ///
    /// The in-memory token is cleared even when the store fails, so the
    /// caller always ends up logged out.
    pub fn teardown(&self) -> Result<()> {
        let had_token = self.token.write().take().is_some();
        if had_token {
            info!("Session cleared");
        }
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_session_lifecycle() {
        let session = Session::init(Arc::new(MemorySessionStore::new())).unwrap();
        assert!(!session.is_authenticated());

        session.update("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.teardown().unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_clones_share_token() {
        let session = Session::ephemeral();
        let other = session.clone();
        session.update("shared").unwrap();
        assert_eq!(other.token().as_deref(), Some("shared"));
        other.teardown().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_file_store_survives_reinit() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileSessionStore::new(dir.path().join("nested"), "token"));

        let session = Session::init(store.clone()).unwrap();
        session.update("persisted").unwrap();
        assert!(store.path().exists());

        let reloaded = Session::init(store.clone()).unwrap();
        assert_eq!(reloaded.token().as_deref(), Some("persisted"));

        reloaded.teardown().unwrap();
        assert!(!store.path().exists());
        assert!(Session::init(store).unwrap().token().is_none());
    }

    #[test]
    fn test_file_store_clear_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path(), "token");
        assert!(store.clear().is_ok());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_blank_file_is_no_token() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path(), "token");
        std::fs::write(store.path(), "  \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
