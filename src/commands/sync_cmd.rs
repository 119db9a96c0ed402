//! Sync CLI commands for reconciling with the remote document store.

use clap::{Args, Subcommand};

use crate::sync::ReconcileSource;

use super::AppContext;

/// Reconcile progress with the remote store
#[derive(Args)]
pub struct SyncCommand {
    #[command(subcommand)]
    command: Option<SyncSubcommand>,
}

#[derive(Subcommand)]
enum SyncSubcommand {
    /// Show sync configuration and session state
    Status,
}

impl SyncCommand {
    pub async fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            None => self.sync(ctx).await,
            Some(SyncSubcommand::Status) => self.status(ctx),
        }
    }

    async fn sync(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        if ctx.remote.is_none() {
            println!("Nothing to sync: running in offline mode.");
            println!("Sign in with 'daybrief auth login' to sync across devices.");
            return Ok(());
        }

        println!("Syncing with remote...");
        let outcome = ctx.coordinator().reconcile().await;

        match outcome.source {
            ReconcileSource::Remote => println!("  ✓ remote progress adopted"),
            ReconcileSource::Local => {
                if outcome.bootstrapped {
                    println!("  ✓ local progress pushed to remote");
                } else {
                    println!("  ✓ local progress kept (ahead of remote)");
                }
            }
            ReconcileSource::Fresh => println!("  ✓ no progress on either side yet"),
        }

        println!();
        println!(
            "Streak: {} • Total missions: {}",
            outcome.data.streak, outcome.data.total_completed
        );
        Ok(())
    }

    fn status(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        println!("Sync Configuration");
        println!("==================");
        println!();

        if !ctx.config.remote.value.is_configured() {
            println!("Status: Not configured");
            println!();
            println!("To enable sync, add to your config file:");
            println!();
            println!("  remote:");
            println!("    server_url: \"https://sync.example.com\"");
            println!("    api_key: \"your-api-key\"");
            println!();
            println!("Or set environment variables:");
            println!("  DAYBRIEF_SERVER_URL");
            println!("  DAYBRIEF_API_KEY");
            return Ok(());
        }

        if let Some(url) = &ctx.config.remote.value.server_url {
            println!("Server:  {}", url);
        }
        if let Some(key) = &ctx.config.remote.value.api_key {
            println!("API Key: {}...", key_prefix(key));
        }
        println!(
            "Session: {}",
            if ctx.session.guest {
                "guest (local only)"
            } else {
                "signed in"
            }
        );
        Ok(())
    }
}

/// First characters of the key for display. Keys are untrusted input,
/// so the cut must land on a char boundary.
fn key_prefix(key: &str) -> String {
    key.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_prefix_respects_char_boundaries() {
        assert_eq!(key_prefix("abcdefghijklmnop"), "abcdefgh");
        assert_eq!(key_prefix("short"), "short");
        // A multibyte char straddling byte 8 must not panic the cut.
        assert_eq!(key_prefix("abcdefg日本語"), "abcdefg日");
    }
}
