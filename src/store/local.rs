//! Local persistence: one JSON blob for progress plus the imported
//! custom verse library, both under the configured data directory.

use std::path::{Path, PathBuf};

use crate::models::{LibraryItem, UserData};

use super::StoreError;

/// Key-value style local store backed by plain files. The progress blob
/// lives at `{data_dir}/{app_id}_data.json`.
pub struct LocalStore {
    data_path: PathBuf,
    custom_library_path: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: &Path, app_id: &str) -> Self {
        Self {
            data_path: data_dir.join(format!("{app_id}_data.json")),
            custom_library_path: data_dir.join("custom_library.json"),
        }
    }

    /// Loads the progress blob. A missing file yields `None`; a corrupt
    /// one is logged and treated as absent so the caller falls back to
    /// defaults instead of failing.
    pub fn load(&self) -> Option<UserData> {
        let contents = std::fs::read_to_string(&self.data_path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(
                    "Corrupt local data at {}: {}; starting fresh",
                    self.data_path.display(),
                    e
                );
                None
            }
        }
    }

    pub fn save(&self, data: &UserData) -> Result<(), StoreError> {
        self.write_json(&self.data_path, data)
    }

    /// Loads the imported verse library; absent or corrupt files yield
    /// an empty library.
    pub fn load_custom_library(&self) -> Vec<LibraryItem> {
        let Ok(contents) = std::fs::read_to_string(&self.custom_library_path) else {
            return Vec::new();
        };
        match serde_json::from_str(&contents) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    "Corrupt custom library at {}: {}; ignoring",
                    self.custom_library_path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    pub fn save_custom_library(&self, items: &[LibraryItem]) -> Result<(), StoreError> {
        self.write_json(&self.custom_library_path, &items)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::Io)?;
        }
        let json = serde_json::to_string_pretty(value).map_err(StoreError::Serialize)?;
        std::fs::write(path, json).map_err(StoreError::Io)
    }
}
