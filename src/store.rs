//! Persistent token storage.
//!
//! Models the browser's key-value store: one string-valued token under a
//! well-known key, read at process start, written on login, removed on
//! logout. The session manager is the only writer.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Well-known key (and file name) the token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Failure of the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token store I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Persistent key-value store for the authentication token.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist the token, replacing any previous value.
    fn save(&mut self, token: &str) -> Result<(), StoreError>;

    /// Remove the persisted token. Removing an absent token is not an
    /// error.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Token store backed by a single file under a directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token as `<dir>/token`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_KEY),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                Ok(if token.is_empty() { None } else { Some(token) })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory token store.
///
/// Clones share the same slot, so tests can keep a handle and observe
/// what the session manager persisted or evicted.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing token, as if a previous process had
    /// persisted it.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&mut self, token: &str) -> Result<(), StoreError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
