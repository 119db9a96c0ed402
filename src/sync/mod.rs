//! Reconciliation between local and remote progress state.
//!
//! The merge policy is coarse: whichever side has completed more wins.
//! Completions write through local storage first, then best-effort to
//! the remote document; a failed remote write is logged and swallowed,
//! leaving local state authoritative until the next successful sync.

use crate::models::UserData;
use crate::store::{DocumentStore, LocalStore, StoreError};

/// Which side supplied the active state after reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileSource {
    /// Neither side had data; defaults are in effect
    Fresh,
    Local,
    Remote,
}

/// Result of a session-start reconciliation.
#[derive(Debug)]
pub struct ReconcileOutcome {
    pub data: UserData,
    pub source: ReconcileSource,
    /// True when the local state was pushed to an empty remote
    pub bootstrapped: bool,
}

/// Picks the active state. The remote wins only when its completion
/// count is at least the local one; the losing remote copy is left
/// stale for the next write-through to replace.
pub fn select_state(
    local: Option<UserData>,
    remote: Option<UserData>,
) -> (UserData, ReconcileSource) {
    match (local, remote) {
        (None, None) => (UserData::default(), ReconcileSource::Fresh),
        (Some(local), None) => (local, ReconcileSource::Local),
        (None, Some(remote)) => (remote, ReconcileSource::Remote),
        (Some(local), Some(remote)) => {
            if remote.total_completed >= local.total_completed {
                (remote, ReconcileSource::Remote)
            } else {
                (local, ReconcileSource::Local)
            }
        }
    }
}

/// Keeps local and remote progress eventually consistent. Guest
/// sessions construct this without a remote side.
pub struct SyncCoordinator<'a, S: DocumentStore> {
    local: &'a LocalStore,
    remote: Option<&'a S>,
    document_path: String,
}

impl<'a, S: DocumentStore> SyncCoordinator<'a, S> {
    pub fn new(local: &'a LocalStore, remote: Option<&'a S>, document_path: String) -> Self {
        Self {
            local,
            remote,
            document_path,
        }
    }

    /// Session-start reconciliation. Never fails: remote errors degrade
    /// to local state, and the selected state is always written back to
    /// local storage.
    pub async fn reconcile(&self) -> ReconcileOutcome {
        let local_state = self.local.load();
        let mut bootstrapped = false;

        let remote_state = match self.remote {
            Some(store) => match store.read(&self.document_path).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("Failed to read remote document: {}", e);
                    None
                }
            },
            None => None,
        };

        // Bootstrap an empty remote from local progress.
        if let (Some(store), Some(local), None) = (self.remote, &local_state, &remote_state) {
            match store.write(&self.document_path, local).await {
                Ok(()) => bootstrapped = true,
                Err(e) => tracing::warn!("Failed to bootstrap remote document: {}", e),
            }
        }

        let (data, source) = select_state(local_state, remote_state);

        if let Err(e) = self.local.save(&data) {
            tracing::warn!("Failed to persist reconciled state locally: {}", e);
        }

        ReconcileOutcome {
            data,
            source,
            bootstrapped,
        }
    }

    /// Write-through after a completion: local synchronously, then
    /// best-effort remote.
    pub async fn record(&self, data: &UserData) -> Result<(), StoreError> {
        self.local.save(data)?;

        if let Some(store) = self.remote {
            if let Err(e) = store.write(&self.document_path, data).await {
                tracing::warn!("Failed to save progress to remote: {}", e);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserData;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// In-memory document store double, optionally failing every call.
    struct MemoryStore {
        documents: Mutex<HashMap<String, UserData>>,
        failing: bool,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                documents: Mutex::new(HashMap::new()),
                failing: false,
            }
        }

        fn failing() -> Self {
            Self {
                documents: Mutex::new(HashMap::new()),
                failing: true,
            }
        }

        fn insert(&self, path: &str, data: UserData) {
            self.documents.lock().unwrap().insert(path.to_string(), data);
        }

        fn get(&self, path: &str) -> Option<UserData> {
            self.documents.lock().unwrap().get(path).cloned()
        }
    }

    impl DocumentStore for MemoryStore {
        async fn read(&self, path: &str) -> Result<Option<UserData>, StoreError> {
            if self.failing {
                return Err(StoreError::Status(500));
            }
            Ok(self.get(path))
        }

        async fn write(&self, path: &str, data: &UserData) -> Result<(), StoreError> {
            if self.failing {
                return Err(StoreError::Status(500));
            }
            self.insert(path, data.clone());
            Ok(())
        }
    }

    fn with_total(total: u32) -> UserData {
        UserData {
            total_completed: total,
            ..UserData::default()
        }
    }

    const PATH: &str = "artifacts/daybrief/users/u1/profile/data";

    #[test]
    fn test_select_remote_wins_on_higher_total() {
        let (data, source) = select_state(Some(with_total(5)), Some(with_total(8)));
        assert_eq!(data.total_completed, 8);
        assert_eq!(source, ReconcileSource::Remote);
    }

    #[test]
    fn test_select_local_wins_on_higher_total() {
        let (data, source) = select_state(Some(with_total(8)), Some(with_total(5)));
        assert_eq!(data.total_completed, 8);
        assert_eq!(source, ReconcileSource::Local);
    }

    #[test]
    fn test_select_remote_wins_ties() {
        let (_, source) = select_state(Some(with_total(3)), Some(with_total(3)));
        assert_eq!(source, ReconcileSource::Remote);
    }

    #[test]
    fn test_select_fresh_when_both_absent() {
        let (data, source) = select_state(None, None);
        assert_eq!(data.total_completed, 0);
        assert_eq!(source, ReconcileSource::Fresh);
    }

    #[tokio::test]
    async fn test_reconcile_bootstraps_empty_remote() {
        let dir = tempdir().unwrap();
        let local = LocalStore::new(dir.path(), "daybrief");
        local.save(&with_total(5)).unwrap();

        let remote = MemoryStore::new();
        let coordinator = SyncCoordinator::new(&local, Some(&remote), PATH.to_string());

        let outcome = coordinator.reconcile().await;
        assert!(outcome.bootstrapped);
        assert_eq!(outcome.source, ReconcileSource::Local);
        assert_eq!(remote.get(PATH).unwrap().total_completed, 5);
    }

    #[tokio::test]
    async fn test_reconcile_stale_remote_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let local = LocalStore::new(dir.path(), "daybrief");
        local.save(&with_total(8)).unwrap();

        let remote = MemoryStore::new();
        remote.insert(PATH, with_total(5));

        let coordinator = SyncCoordinator::new(&local, Some(&remote), PATH.to_string());
        let outcome = coordinator.reconcile().await;

        assert_eq!(outcome.source, ReconcileSource::Local);
        assert_eq!(outcome.data.total_completed, 8);
        // Reconciliation itself leaves the losing remote copy stale.
        assert_eq!(remote.get(PATH).unwrap().total_completed, 5);
    }

    #[tokio::test]
    async fn test_reconcile_persists_selected_state_locally() {
        let dir = tempdir().unwrap();
        let local = LocalStore::new(dir.path(), "daybrief");
        local.save(&with_total(5)).unwrap();

        let remote = MemoryStore::new();
        remote.insert(PATH, with_total(8));

        let coordinator = SyncCoordinator::new(&local, Some(&remote), PATH.to_string());
        let outcome = coordinator.reconcile().await;

        assert_eq!(outcome.source, ReconcileSource::Remote);
        assert_eq!(local.load().unwrap().total_completed, 8);
    }

    #[tokio::test]
    async fn test_reconcile_survives_failing_remote() {
        let dir = tempdir().unwrap();
        let local = LocalStore::new(dir.path(), "daybrief");
        local.save(&with_total(4)).unwrap();

        let remote = MemoryStore::failing();
        let coordinator = SyncCoordinator::new(&local, Some(&remote), PATH.to_string());

        let outcome = coordinator.reconcile().await;
        assert_eq!(outcome.source, ReconcileSource::Local);
        assert_eq!(outcome.data.total_completed, 4);
        assert!(!outcome.bootstrapped);
    }

    #[tokio::test]
    async fn test_record_writes_through_both_sides() {
        let dir = tempdir().unwrap();
        let local = LocalStore::new(dir.path(), "daybrief");
        let remote = MemoryStore::new();

        let coordinator = SyncCoordinator::new(&local, Some(&remote), PATH.to_string());
        coordinator.record(&with_total(2)).await.unwrap();

        assert_eq!(local.load().unwrap().total_completed, 2);
        assert_eq!(remote.get(PATH).unwrap().total_completed, 2);
    }

    #[tokio::test]
    async fn test_record_swallows_remote_failure() {
        let dir = tempdir().unwrap();
        let local = LocalStore::new(dir.path(), "daybrief");
        let remote = MemoryStore::failing();

        let coordinator = SyncCoordinator::new(&local, Some(&remote), PATH.to_string());
        coordinator.record(&with_total(2)).await.unwrap();

        assert_eq!(local.load().unwrap().total_completed, 2);
    }

    #[tokio::test]
    async fn test_guest_mode_has_no_remote_side() {
        let dir = tempdir().unwrap();
        let local = LocalStore::new(dir.path(), "daybrief");
        local.save(&with_total(3)).unwrap();

        let coordinator: SyncCoordinator<MemoryStore> =
            SyncCoordinator::new(&local, None, PATH.to_string());

        let outcome = coordinator.reconcile().await;
        assert_eq!(outcome.source, ReconcileSource::Local);
        assert!(!outcome.bootstrapped);
    }
}
