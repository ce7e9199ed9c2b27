//! CLI administration tool for shorturl-service.
//!
//! Inspects and maintains the PostgreSQL registry without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show entry count and the next short code
//! cargo run --bin admin -- stats
//!
//! # Print the URL behind a short code
//! cargo run --bin admin -- lookup 42
//!
//! # Create the counter record if it is missing
//! cargo run --bin admin -- counter init
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturl_service::application::services::link_service::{NOT_FOUND_MESSAGE, parse_short_code};
use shorturl_service::config::mask_connection_string;
use shorturl_service::domain::repositories::UrlRepository;
use shorturl_service::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show registry statistics
    Stats,

    /// Print the original URL for a short code
    Lookup {
        /// Short code as issued by the service (e.g. 42)
        code: String,
    },

    /// Short code counter operations
    Counter {
        #[command(subcommand)]
        action: CounterAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Counter subcommands.
#[derive(Subcommand)]
enum CounterAction {
    /// Create the counter with next number 1 if it does not exist
    Init,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Lookup { code } => handle_lookup(&repo, &code).await?,
        Commands::Counter { action } => handle_counter_action(action, &repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays registry statistics.
///
/// Shows:
/// - Total number of stored entries
/// - The short code the next new URL will receive
async fn handle_stats(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let entries = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count entries: {}", e))?;

    let next = match repo.next_number().await {
        Ok(n) => n.to_string().bright_green().bold(),
        Err(_) => "not initialized".yellow(),
    };

    println!(
        "  Entries:          {}",
        entries.to_string().bright_green().bold()
    );
    println!("  Next short code:  {}", next);
    println!();

    Ok(())
}

/// Prints the URL stored under `code`.
async fn handle_lookup(repo: &PgUrlRepository, code: &str) -> Result<()> {
    let short_code = parse_short_code(code)
        .map_err(|e| anyhow::anyhow!("{}: '{}'", e, code))?
        .context(NOT_FOUND_MESSAGE)?;

    let entry = repo
        .find_by_code(short_code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context(NOT_FOUND_MESSAGE)?;

    println!("  Code:     {}", entry.short_code.to_string().cyan());
    println!("  URL:      {}", entry.original_url.bright_white());
    println!(
        "  Created:  {}",
        entry
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );

    Ok(())
}

/// Dispatches counter commands.
async fn handle_counter_action(action: CounterAction, repo: &PgUrlRepository) -> Result<()> {
    match action {
        CounterAction::Init => {
            let created = repo
                .ensure_counter()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialize counter: {}", e))?;

            if created {
                println!("{}", "✅ Counter initialized at 1".green().bold());
            } else {
                println!("{}", "ℹ️  Counter already exists".yellow());
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repo: &PgUrlRepository, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repo.health_check()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
