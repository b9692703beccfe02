//! bali-gateway: LINE bot server binary
//!
//! Usage:
//!   bali-gateway                  - Start the webhook server
//!   bali-gateway --config PATH    - Start with the given config file
//!   bali-gateway --help           - Show help

mod server;

use std::path::PathBuf;

use bali_core::Config;
use bali_line::LineBot;
use tracing_subscriber::EnvFilter;

/// Run mode
#[derive(Debug, PartialEq, Eq)]
enum RunMode {
    /// Serve the webhook, optionally from an explicit config file
    Server { config: Option<PathBuf> },
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = match parse_args(&args)? {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("bali-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server { config } => config,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load(config_path.as_deref())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting bali-gateway...");
    tracing::info!("Environment: {}", config.server.environment);
    tracing::info!("Public URL: {}", config.base_url());

    let bot = LineBot::new(config.clone())
        .map_err(|e| anyhow::anyhow!("Failed to create LINE bot: {}", e))?;

    let app = server::app(&bot, &config);

    tracing::info!("Press Ctrl+C to exit");
    server::serve(app, config.server.port, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> anyhow::Result<RunMode> {
    let mut config = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(RunMode::Help),
            "--version" | "-v" => return Ok(RunMode::Version),
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                config = Some(PathBuf::from(path));
            }
            other => anyhow::bail!("Unknown argument: {} (see --help)", other),
        }
    }

    Ok(RunMode::Server { config })
}

/// Print help message
fn print_help() {
    println!("bali-gateway - LINE bot for Bali property information");
    println!();
    println!("Usage:");
    println!("  bali-gateway                Start the webhook server");
    println!("  bali-gateway --config PATH  Load settings from PATH (default: bali-bot.toml)");
    println!("  bali-gateway --help         Show this help message");
    println!("  bali-gateway --version      Show version");
    println!();
    println!("Environment Variables:");
    println!("  LINE_CHANNEL_SECRET        Channel secret (required)");
    println!("  LINE_CHANNEL_ACCESS_TOKEN  Channel access token (required)");
    println!("  PORT                       HTTP port (default: 3000)");
    println!("  BASE_URL                   Public URL for image links");
    println!("  PUBLIC_DIR                 Directory served under /images (default: public/images)");
    println!("  APP_ENV                    Environment name (default: development)");
    println!("  AIRTABLE_API_KEY           Airtable token");
    println!("  AIRTABLE_BASE_ID           Airtable base ID");
    println!("  AIRTABLE_TABLES            Comma-separated table names (default: Properties,Table 1)");
    println!("  AIRTABLE_MAX_RECORDS       Listings per lookup (default: 10)");
    println!("  AIRTABLE_TIMEOUT_SECS      Request timeout (default: 10)");
    println!("  AIRTABLE_DIAGNOSTICS       Log stored area values on empty lookups");
    println!("  AIRTABLE_DEMO_FALLBACK     Show sample listings when Airtable rejects the token");
    println!("  GOOGLE_FORM_URL            Inspection booking form");
    println!("  ASSET_VERSION              Cache-busting version for image URLs");
    println!("  PLACEHOLDER_IMAGE_URL      Image for listings without a photo");
    println!("  BOT_MODE                   property or catalog (default: property)");
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&[]).unwrap(), RunMode::Server { config: None });
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), RunMode::Help);
        assert_eq!(parse_args(&args(&["-v"])).unwrap(), RunMode::Version);
        assert_eq!(
            parse_args(&args(&["--config", "prod.toml"])).unwrap(),
            RunMode::Server {
                config: Some(PathBuf::from("prod.toml"))
            }
        );
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--cli"])).is_err());
    }
}
