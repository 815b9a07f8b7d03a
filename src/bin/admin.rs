//! CLI administration tool for shortlink.
//!
//! Provides commands for viewing statistics, deleting links, checking
//! aliases, and performing database operations without HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Top links by clicks
//! cargo run --bin admin -- stats --limit 20
//!
//! # Delete a link
//! cargo run --bin admin -- delete my-link
//!
//! # Preview how an alias would be sanitized and whether it is accepted
//! cargo run --bin admin -- alias "Café Menu!!"
//!
//! # Generate a value for ADMIN_API_TOKEN
//! cargo run --bin admin -- token generate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components: PostgreSQL connection
//!   (`stats`, `delete`, `db`)
//! - `RESERVED_WORDS_FILE` (optional): extra reserved aliases (`alias`)

use shortlink::application::services::StatsService;
use shortlink::config::{Config, mask_connection_string};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::utils::alias::{sanitize_alias, validate_alias};
use shortlink::utils::reserved_words::ReservedWords;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// Show the most-clicked links
    Stats {
        /// Number of links to show (1-1000)
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Delete a short link
    Delete {
        /// Short link identifier
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show how an alias is sanitized and whether it would be accepted
    Alias {
        /// Alias as a user would type it
        raw: String,

        /// Extra reserved words file (defaults to RESERVED_WORDS_FILE)
        #[arg(long)]
        reserved_file: Option<PathBuf>,
    },

    /// Admin token helpers
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Admin token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Generate a random value for ADMIN_API_TOKEN
    Generate {
        /// Print only the token
        #[arg(long)]
        raw: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { limit } => handle_stats(&connect().await?, limit).await?,
        Commands::Delete { id, yes } => handle_delete(&connect().await?, &id, yes).await?,
        Commands::Alias { raw, reserved_file } => handle_alias(&raw, reserved_file)?,
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })
}

fn repository(pool: &PgPool) -> Arc<PgLinkRepository> {
    Arc::new(PgLinkRepository::new(Arc::new(pool.clone())))
}

/// Displays the most-clicked links and the total link count.
///
/// # Output Format
///
/// ```text
/// 📊 Top links
///
///   ID         Clicks   Created            Target
///   ────────────────────────────────────────────────────────────
///   my-link        42   2025-01-15 10:30   https://example.com
///
///   Total links: 1
/// ```
async fn handle_stats(pool: &PgPool, limit: i64) -> Result<()> {
    println!("{}", "📊 Top links".bright_blue().bold());
    println!();

    let service = StatsService::new(repository(pool));
    let snapshot = service
        .top_links(limit)
        .await
        .map_err(|e| anyhow!("Failed to load statistics: {}", e))?;

    if snapshot.top_links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<12} {:>8}   {:<18} {}",
        "ID".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &snapshot.top_links {
        println!(
            "  {:<12} {:>8}   {:<18} {}",
            link.id.cyan(),
            link.click_count.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!(
        "  Total links: {}",
        snapshot.stored_links.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a link after showing it and asking for confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
async fn handle_delete(pool: &PgPool, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete short link".bright_blue().bold());
    println!();

    let repo = repository(pool);

    let link = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow!("Database error: {}", e))?
        .context("Short link not found")?;

    println!("  ID:     {}", link.id.cyan());
    println!("  Target: {}", link.target_url);
    println!("  Clicks: {}", link.click_count.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| anyhow!("Failed to delete link: {}", e))?;

    if deleted {
        println!("{}", "✅ Link deleted".green().bold());
    } else {
        println!("{}", "⚠️  Link was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Prints the sanitized alias and the verdict of each check.
fn handle_alias(raw: &str, reserved_file: Option<PathBuf>) -> Result<()> {
    let reserved_file =
        reserved_file.or_else(|| std::env::var_os("RESERVED_WORDS_FILE").map(PathBuf::from));
    let reserved = ReservedWords::load(reserved_file.as_deref())?;

    let sanitized = sanitize_alias(raw);

    println!("{}", "🔤 Alias check".bright_blue().bold());
    println!();
    println!("  Input:     {}", raw.bright_white());
    println!("  Sanitized: {}", sanitized.cyan().bold());
    println!();

    match validate_alias(&sanitized) {
        Ok(()) if reserved.contains(&sanitized) => {
            println!("{}", "❌ Reserved for system use".red().bold());
        }
        Ok(()) => {
            println!("{}", "✅ Accepted (if not already taken)".green().bold());
        }
        Err(reason) => {
            println!("{} {}", "❌ Rejected:".red().bold(), reason);
        }
    }
    println!();

    Ok(())
}

/// Handles admin token helpers.
///
/// # Format
///
/// - 32 bytes from the OS random source
/// - Lowercase hex, 64 characters
fn handle_token_action(action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Generate { raw } => {
            let mut bytes = [0u8; 32];
            getrandom::fill(&mut bytes).map_err(|e| anyhow!("Failed to generate token: {e}"))?;
            let token = hex::encode(bytes);

            if raw {
                println!("{token}");
                return Ok(());
            }

            println!("{}", "🔑 Admin token".bright_blue().bold());
            println!();
            println!("  {}", token.bright_yellow().bold());
            println!();
            println!("{}", "Add this to your environment:".bright_white());
            println!("  {}={}", "ADMIN_API_TOKEN".bright_cyan(), token);
            println!();
            println!("{}", "Example:".bright_white());
            println!(
                "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/stats",
                token.bright_yellow()
            );
            println!();
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let pool = connect().await?;
            let repo = repository(&pool);

            repo.ping()
                .await
                .map_err(|e| anyhow!("Database check failed: {}", e))?;

            let total = repo
                .count()
                .await
                .map_err(|e| anyhow!("Failed to count links: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Links stored: {}", total.to_string().bright_white());
        }
    }

    Ok(())
}
