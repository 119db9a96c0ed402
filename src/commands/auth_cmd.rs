//! Authentication commands: sign in, register, and session management
//! against the external identity provider.

use std::io::{self, Write};

use clap::{Args, Subcommand};

use crate::auth::{AuthError, IdentityClient};

use super::AppContext;

/// Manage your account and session
#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand)]
enum AuthSubcommand {
    /// Sign in with email and password
    Login,
    /// Create an account
    Register,
    /// Sign in anonymously (progress syncs under a throwaway account)
    Anonymous,
    /// Send a password-reset email
    ResetPassword {
        /// Account email
        email: String,
    },
    /// Remove the local session
    Logout,
    /// Show the active session
    Status,
}

impl AuthCommand {
    pub async fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        let result = match &self.command {
            AuthSubcommand::Login => self.login(ctx).await,
            AuthSubcommand::Register => self.register(ctx).await,
            AuthSubcommand::Anonymous => self.anonymous(ctx).await,
            AuthSubcommand::ResetPassword { email } => self.reset_password(ctx, email).await,
            AuthSubcommand::Logout => self.logout(ctx),
            AuthSubcommand::Status => self.status(ctx),
        };

        // Every auth failure maps to a user-facing message; none escape
        // to the top-level error handler.
        if let Err(e) = result {
            println!("{}", e.user_message());
        }
        Ok(())
    }

    async fn login(&self, ctx: &AppContext) -> Result<(), AuthError> {
        let client = IdentityClient::from_config(&ctx.config.remote.value)?;
        let (email, password) = prompt_credentials()?;

        let session = client.sign_in(&email, &password).await?;
        ctx.sessions.save(&session)?;

        println!("Signed in as {}.", email);
        println!("Run 'daybrief sync' to pull your progress.");
        Ok(())
    }

    async fn register(&self, ctx: &AppContext) -> Result<(), AuthError> {
        let client = IdentityClient::from_config(&ctx.config.remote.value)?;
        let (email, password) = prompt_credentials()?;

        let session = client.register(&email, &password).await?;
        ctx.sessions.save(&session)?;

        println!("Account created. Signed in as {}.", email);
        Ok(())
    }

    async fn anonymous(&self, ctx: &AppContext) -> Result<(), AuthError> {
        let client = IdentityClient::from_config(&ctx.config.remote.value)?;
        let session = client.sign_in_anonymously().await?;
        ctx.sessions.save(&session)?;

        println!("Signed in anonymously (uid {}).", session.uid);
        Ok(())
    }

    async fn reset_password(&self, ctx: &AppContext, email: &str) -> Result<(), AuthError> {
        let client = IdentityClient::from_config(&ctx.config.remote.value)?;
        client.send_password_reset(email).await?;

        println!("Password-reset email sent to {}.", email);
        Ok(())
    }

    fn logout(&self, ctx: &AppContext) -> Result<(), AuthError> {
        ctx.sessions.clear()?;
        println!("Signed out. Progress stays on this device until you sign in again.");
        Ok(())
    }

    fn status(&self, ctx: &AppContext) -> Result<(), AuthError> {
        let session = &ctx.session;
        if session.guest {
            println!("Guest session (offline mode).");
            println!("uid: {}", session.uid);
            if !ctx.config.remote.value.is_configured() {
                println!();
                println!("Remote provider not configured. Add to your config file:");
                println!();
                println!("  remote:");
                println!("    server_url: \"https://sync.example.com\"");
                println!("    api_key: \"your-api-key\"");
            }
        } else {
            match &session.email {
                Some(email) => println!("Signed in as {}.", email),
                None => println!("Signed in anonymously."),
            }
            println!("uid: {}", session.uid);
        }
        Ok(())
    }
}

fn prompt_credentials() -> Result<(String, String), AuthError> {
    let email = prompt("Email: ")?;
    if email.is_empty() {
        return Err(AuthError::Config("Email cannot be empty".to_string()));
    }
    let password = prompt("Password: ")?;
    Ok((email, password))
}

fn prompt(label: &str) -> Result<String, AuthError> {
    print!("{label}");
    io::stdout().flush().map_err(AuthError::Io)?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(AuthError::Io)?;
    Ok(line.trim().to_string())
}
