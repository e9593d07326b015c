// ABOUTME: CLI entry point for ai-engine-db-init
// ABOUTME: Parses commands and routes to appropriate handlers

use ai_engine_db_init::commands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ai-engine-db-init")]
#[command(about = "Idempotent PostgreSQL bootstrap for the AI Engine database", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure required extensions are installed and emit the startup notice
    Init {
        /// PostgreSQL connection string for the target database
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Report which required extensions are installed (read-only)
    Status {
        /// PostgreSQL connection string for the target database
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { database_url } => commands::init(&database_url).await,
        Commands::Status { database_url } => commands::status(&database_url).await,
    }
}
