//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `insta_query` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the result as JSON
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::process;

use insta_query::config::{BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS};
use insta_query::initialization::init_logger;
use insta_query::{BrowserProfile, Config, Extractor, LogFormat, LogLevel, Target};

/// Extract a field from a public profile page.
#[derive(Debug, Parser)]
#[command(name = "insta_query", version, about)]
struct Cli {
    /// Username whose profile page is fetched
    username: String,

    /// Field to extract: picture, page, profile, name, followers, following, posts or infos
    #[arg(long, default_value = "infos")]
    field: Target,

    /// Collect the field from every candidate node instead of stopping at the first match
    #[arg(long)]
    all: bool,

    /// CSS selector for candidate nodes (defaults to the field's usual location)
    #[arg(long)]
    selector: Option<String>,

    /// Browser language sent as Accept-Language
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Browser family for the generated User-Agent: chrome, firefox, explorer,
    /// iphone, android, mobile, windows, mac or linux (random when omitted or unknown)
    #[arg(long)]
    os: Option<String>,

    /// Explicit User-Agent; takes precedence over --os
    #[arg(long)]
    user_agent: Option<String>,

    /// Base URL that the username is appended to
    #[arg(long, env = BASE_URL_ENV_VAR, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            base_url: cli.base_url.clone(),
            language: cli.language.clone(),
            browser_profile: cli.os.as_deref().and_then(BrowserProfile::from_name),
            user_agent: cli.user_agent.clone(),
            timeout_seconds: cli.timeout_seconds,
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<String> {
    let extractor = Extractor::from_config(config).context("Failed to initialize extractor")?;
    let selector = cli
        .selector
        .as_deref()
        .unwrap_or_else(|| cli.field.default_selector());

    let json = if cli.all {
        let lookup = extractor.lookup_all(&cli.username, cli.field, selector).await;
        if let Some(reason) = lookup.reason() {
            warn!("No {} for '{}': {}", cli.field, cli.username, reason);
        }
        serde_json::to_string_pretty(&lookup.into_value())
    } else {
        let lookup = extractor.lookup(&cli.username, cli.field, selector).await;
        if let Some(reason) = lookup.reason() {
            warn!("No {} for '{}': {}", cli.field, cli.username, reason);
        }
        serde_json::to_string_pretty(&lookup.into_value())
    };
    json.context("Failed to serialize result")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    if dotenvy::dotenv().is_err() {
        // Fall back to a .env next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logger(&config).context("Failed to initialize logger")?;
    if let Some(os) = cli.os.as_deref() {
        if BrowserProfile::from_name(os).is_none() {
            warn!("Unknown --os '{}', using a random browser profile", os);
        }
    }
    info!("Looking up {} for '{}'", cli.field, cli.username);

    match run(&cli, &config).await {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("insta_query error: {:#}", e);
            process::exit(1);
        }
    }
}
