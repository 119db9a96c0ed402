use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::AuthError;

/// The active identity. Guest sessions exist only on this device and
/// never touch the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: Option<String>,
    pub token: Option<String>,
    pub guest: bool,
}

impl Session {
    /// A local-only identity for offline mode.
    pub fn guest() -> Self {
        Self {
            uid: format!("guest-{}", Uuid::new_v4()),
            email: None,
            token: None,
            guest: true,
        }
    }

    pub fn signed_in(uid: String, email: Option<String>, token: String) -> Self {
        Self {
            uid,
            email,
            token: Some(token),
            guest: false,
        }
    }
}

/// Stores the session as a JSON file in the data directory.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    /// Loads the persisted session, or creates and persists a guest one.
    /// A corrupt session file is replaced rather than surfaced.
    pub fn load_or_guest(&self) -> Session {
        if let Ok(contents) = std::fs::read_to_string(&self.path) {
            match serde_json::from_str(&contents) {
                Ok(session) => return session,
                Err(e) => {
                    tracing::warn!("Corrupt session file: {}; starting a guest session", e);
                }
            }
        }

        let session = Session::guest();
        if let Err(e) = self.save(&session) {
            tracing::warn!("Failed to persist guest session: {}", e);
        }
        session
    }

    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(AuthError::Io)?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::Config(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(AuthError::Io)
    }

    /// Sign-out: removes the session file.
    pub fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_or_guest_creates_and_persists_guest() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let first = store.load_or_guest();
        assert!(first.guest);
        assert!(first.uid.starts_with("guest-"));
        assert!(first.token.is_none());

        // Second load returns the same persisted guest.
        let second = store.load_or_guest();
        assert_eq!(second, first);
    }

    #[test]
    fn test_signed_in_session_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let session = Session::signed_in(
            "user-1".to_string(),
            Some("a@example.com".to_string()),
            "token".to_string(),
        );
        store.save(&session).unwrap();

        let loaded = store.load_or_guest();
        assert_eq!(loaded, session);
        assert!(!loaded.guest);
    }

    #[test]
    fn test_clear_then_load_returns_fresh_guest() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let first = store.load_or_guest();
        store.clear().unwrap();
        let second = store.load_or_guest();
        assert_ne!(second.uid, first.uid);
    }

    #[test]
    fn test_corrupt_session_replaced_with_guest() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "{broken").unwrap();

        let store = SessionStore::new(dir.path());
        assert!(store.load_or_guest().guest);
    }

    #[test]
    fn test_clear_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.clear().is_ok());
    }
}
