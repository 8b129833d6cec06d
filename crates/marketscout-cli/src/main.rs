//! MarketScout CLI - Request marketplace reports from the terminal
//!
//! Talks to the MarketScout API, which forwards requests to the automation
//! webhook. Reports arrive by email.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use api::{MarketScoutClient, SubmissionResponse};
use config::Config;
use marketscout::{ReportTarget, SearchRequest, SubmissionStatus};

#[derive(Parser)]
#[command(name = "marketscout")]
#[command(about = "MarketScout CLI - Amazon keyword reports and Flipkart price scrapes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an Amazon product report for a keyword
    Amazon {
        /// Search keyword (will prompt if not provided)
        keyword: Option<String>,
        /// Email address for the report (falls back to the configured default)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Scrape Flipkart prices for a list of FSNs
    Flipkart {
        /// Comma-separated FSNs (will prompt if not provided)
        fsns: Option<String>,
        /// Email address for the results (falls back to the configured default)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Check that the API is reachable
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        /// e.g. https://marketscout.shuttle.app
        url: String,
    },
    /// Set the default email address
    SetEmail { email: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MARKETSCOUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Amazon { keyword, email } => {
            cmd_submit(ReportTarget::Amazon, keyword, email).await
        }
        Commands::Flipkart { fsns, email } => cmd_submit(ReportTarget::Flipkart, fsns, email).await,
        Commands::Health => cmd_health().await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_submit(target: ReportTarget, term: Option<String>, email: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let term = match term {
        Some(t) => t,
        None => prompt(match target {
            ReportTarget::Amazon => "Search keyword (e.g., 'wireless headphones')",
            ReportTarget::Flipkart => "FSNs (comma-separated)",
        })?,
    };

    let email = match email.or_else(|| config.default_email.clone()) {
        Some(e) => e,
        None => prompt("Email address")?,
    };

    // Same checks the server runs; no round trip for obvious mistakes
    let request = SearchRequest::new(target, term, email);
    if let Err(e) = request.validate() {
        render(SubmissionStatus::Error, &e.to_string());
        bail!("Request not sent");
    }

    println!(
        "{} {}",
        "⏳".yellow(),
        target.loading_title().bold()
    );
    println!("   {}", target.loading_message(&request.term, &request.email).dimmed());

    let client = MarketScoutClient::new(&config.base_url);
    let response = client
        .submit(target, &request.term, &request.email)
        .await
        .context("Search failed")?;

    let status = settled_status(&response);
    render(status, &response.message);

    if status == SubmissionStatus::Success {
        if let Some(email) = &response.email_sent_to {
            println!("   {} {}", "Report for".dimmed(), response.searched_term.cyan());
            println!("   {} {}", "Delivery to".dimmed(), email.cyan());
        }
        Ok(())
    } else {
        bail!("Request was not accepted")
    }
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = MarketScoutClient::new(&config.base_url);

    print!("Checking {}... ", config.base_url);
    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to MarketScout API. Check the base URL.");
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "MarketScout Configuration".bold());
            println!("  Config file:   {:?}", Config::config_path()?);
            println!("  Base URL:      {}", config.base_url);
            println!(
                "  Default email: {}",
                config.default_email.as_deref().unwrap_or("(not set)")
            );
            return Ok(());
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(&url)?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
        ConfigAction::SetEmail { email } => {
            config.set_default_email(&email)?;
            println!("{} Default email set to {}", "✓".green(), email);
        }
    }

    config.save()
}

// ============================================
// Helpers
// ============================================

fn prompt(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}

fn settled_status(response: &SubmissionResponse) -> SubmissionStatus {
    if response.success && response.status == SubmissionStatus::Success.to_string() {
        SubmissionStatus::Success
    } else {
        SubmissionStatus::Error
    }
}

fn render(status: SubmissionStatus, message: &str) {
    let title = status.title().unwrap_or_default();
    match status {
        SubmissionStatus::Success => println!("{} {}", "✓".green(), title.green().bold()),
        _ => println!("{} {}", "✗".red(), title.red().bold()),
    }
    println!("   {}", message);
}
