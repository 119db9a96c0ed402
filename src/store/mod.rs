mod local;
mod remote;

pub use local::LocalStore;
pub use remote::{document_path, DocumentStore, HttpDocumentStore};

/// Errors from local or remote storage. Callers above the sync layer
/// never see these: remote failures are logged and swallowed, local
/// corruption degrades to defaults.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    Http(reqwest::Error),
    Status(u16),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
            StoreError::Serialize(e) => write!(f, "Serialization error: {}", e),
            StoreError::Http(e) => write!(f, "HTTP error: {}", e),
            StoreError::Status(code) => write!(f, "Server returned status {}", code),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialize(e) => Some(e),
            StoreError::Http(e) => Some(e),
            StoreError::Status(_) => None,
        }
    }
}
