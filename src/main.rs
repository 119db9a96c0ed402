use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ai;
mod auth;
mod commands;
mod config;
mod content;
mod models;
mod progress;
mod store;
mod sync;

use commands::{
    AppContext, AuditCommand, AuthCommand, CoachCommand, CompleteCommand, ConfigCommand,
    ImportCommand, ProgressCommand, SyncCommand, TodayCommand,
};
use config::Config;

#[derive(Parser)]
#[command(name = "daybrief")]
#[command(version)]
#[command(about = "A daily leadership briefing for your marriage", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's briefing
    Today(TodayCommand),

    /// Mark today's briefing complete
    Complete(CompleteCommand),

    /// Show streak and skill mastery
    Progress(ProgressCommand),

    /// Ask the AI coach (the War Room)
    Coach(CoachCommand),

    /// Import custom verses from CSV
    Import(ImportCommand),

    /// Generate a rotation audit log
    Audit(AuditCommand),

    /// Manage your account and session
    Auth(AuthCommand),

    /// Reconcile progress with the remote store
    Sync(SyncCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daybrief=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Today(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx).await?;
        }
        Some(Commands::Complete(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx).await?;
        }
        Some(Commands::Progress(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx).await?;
        }
        Some(Commands::Coach(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx).await?;
        }
        Some(Commands::Import(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx)?;
        }
        Some(Commands::Audit(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx)?;
        }
        Some(Commands::Auth(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx).await?;
        }
        Some(Commands::Sync(cmd)) => {
            let ctx = AppContext::init(config);
            cmd.run(&ctx).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
