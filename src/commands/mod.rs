mod audit;
mod auth_cmd;
mod coach;
mod complete;
mod config_cmd;
mod import;
mod progress_cmd;
mod sync_cmd;
mod today;

pub use audit::AuditCommand;
pub use auth_cmd::AuthCommand;
pub use coach::CoachCommand;
pub use complete::CompleteCommand;
pub use config_cmd::ConfigCommand;
pub use import::ImportCommand;
pub use progress_cmd::ProgressCommand;
pub use sync_cmd::SyncCommand;
pub use today::TodayCommand;

use crate::auth::{Session, SessionStore};
use crate::config::Config;
use crate::store::{document_path, HttpDocumentStore, LocalStore};
use crate::sync::SyncCoordinator;

/// Collaborator handles shared by the commands: local storage, the
/// active session, and (for signed-in users) the remote document store.
pub struct AppContext {
    pub config: Config,
    pub local: LocalStore,
    pub sessions: SessionStore,
    pub session: Session,
    pub remote: Option<HttpDocumentStore>,
}

impl AppContext {
    pub fn init(config: Config) -> Self {
        let local = LocalStore::new(&config.data_dir.value, &config.app_id.value);
        let sessions = SessionStore::new(&config.data_dir.value);
        let session = sessions.load_or_guest();

        // Guests and unconfigured installs stay local-only.
        let remote = match (&config.remote.value.server_url, &session.token) {
            (Some(url), Some(token)) if !session.guest && config.remote.value.is_configured() => {
                Some(HttpDocumentStore::new(url, token.clone()))
            }
            _ => None,
        };

        Self {
            config,
            local,
            sessions,
            session,
            remote,
        }
    }

    pub fn coordinator(&self) -> SyncCoordinator<'_, HttpDocumentStore> {
        SyncCoordinator::new(
            &self.local,
            self.remote.as_ref(),
            document_path(&self.config.app_id.value, &self.session.uid),
        )
    }
}
