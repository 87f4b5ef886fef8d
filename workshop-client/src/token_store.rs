//! Token storage - where the bearer token lives between runs
//!
//! [`TokenStore`] has a JSON file backend for the desk binary and an
//! in-memory backend for tests.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted token record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    /// Email used to sign in, informational only
    #[serde(default)]
    pub email: Option<String>,
    /// Unix timestamp (seconds) of the login that issued the token
    pub saved_at: i64,
}

impl StoredToken {
    pub fn new(token: impl Into<String>, email: Option<String>) -> Self {
        Self {
            token: token.into(),
            email,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Token persistence seam
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredToken>, TokenStoreError>;
    fn save(&self, token: &StoredToken) -> Result<(), TokenStoreError>;
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Token file store: `<dir>/session.json`
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub const FILE_NAME: &'static str = "session.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(Self::FILE_NAME),
        }
    }

    /// Path of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<StoredToken>, TokenStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<StoredToken>(&json) {
            Ok(stored) if !stored.token.is_empty() => Ok(Some(stored)),
            Ok(_) => Ok(None),
            Err(e) => {
                // A corrupt file is treated as signed out
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding unreadable token file");
                Ok(None)
            }
        }
    }

    fn save(&self, token: &StoredToken) -> Result<(), TokenStoreError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(token)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory token store (tests, embedding)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<StoredToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(StoredToken::new(token, None))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<StoredToken>, TokenStoreError> {
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, token: &StoredToken) -> Result<(), TokenStoreError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::with_token("abc");
        assert_eq!(store.load().unwrap().unwrap().token, "abc");
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
