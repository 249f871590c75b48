//! CLI administration tool for shorturl.
//!
//! Read-only inspection of stored mappings and database diagnostics without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Look up a mapping by id or by URL
//! cargo run --bin admin -- link show 1
//! cargo run --bin admin -- link find https://example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection

use shorturl::config::{self, Config};
use shorturl::domain::entities::Link;
use shorturl::domain::repositories::LinkRepository;
use shorturl::infrastructure::persistence::PgLinkRepository;
use shorturl::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting shorturl.
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
    /// Show statistics
    Stats,

    /// Inspect link mappings
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link lookup subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the mapping for a short id
    Show {
        /// Numeric short id
        short_url: String,
    },

    /// Find the mapping for an original URL (exact match)
    Find {
        /// Original URL as submitted
        url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_pool(&config).await?;
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Link { action } => handle_link_action(action, &repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Displays mapping statistics.
///
/// Shows:
/// - Total number of mappings
/// - Last issued short id
async fn handle_stats(repo: &PgLinkRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = repo
        .count_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {:?}", e))?;
    let last_id = repo
        .last_issued_id()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read sequence: {:?}", e))?;

    println!(
        "  Links:          {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Last short id:  {}",
        last_id.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches link lookup commands.
async fn handle_link_action(action: LinkAction, repo: &PgLinkRepository) -> Result<()> {
    let link = match action {
        LinkAction::Show { short_url } => {
            let id = shorturl::utils::validation::parse_short_id(&short_url)
                .map_err(|e| anyhow::anyhow!("{}: '{}'", e, short_url))?;
            match id {
                Some(id) => repo
                    .find_by_short_id(id)
                    .await
                    .map_err(|e| anyhow::anyhow!("Database error: {:?}", e))?,
                None => None,
            }
        }
        LinkAction::Find { url } => repo
            .find_by_url(&url)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {:?}", e))?,
    };

    match link {
        Some(link) => print_link(&link),
        None => println!("{}", "⚠️  No mapping found".yellow()),
    }

    Ok(())
}

fn print_link(link: &Link) {
    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!(
        "  Short id:  {}",
        link.short_url.to_string().bright_yellow().bold()
    );
    println!("  URL:       {}", link.original_url.cyan());
    println!(
        "  Created:   {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!(
                "  Database:   {}",
                config::mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
