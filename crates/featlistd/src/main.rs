//! featlistd - Featlist Server Daemon
//!
//! REST API server for managing feature lists.
//!
//! Usage:
//!   featlistd [OPTIONS] [config.toml]
//!
//! If no config file is provided, the server listens on 0.0.0.0:8080 with an
//! empty in-memory store.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use featlist_api::{create_router, AppState};
use featlist_store::MemoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args { config_path: None };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
                i += 1;
            }
            _ => {
                tracing::warn!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"featlistd - Featlist Server Daemon

Usage: featlistd [OPTIONS] [config.toml]

Options:
  -h, --help    Print this help message

Examples:
  # Run with defaults (0.0.0.0:8080)
  featlistd

  # Run with a config file
  featlistd config.toml
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "featlistd=info,featlist_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting featlistd (Featlist Server Daemon)");

    // Parse command-line arguments
    let args = parse_args();

    // Load configuration
    let config = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path);
        Config::load(path).map_err(|e| anyhow::anyhow!("{}", e))?
    } else {
        tracing::info!("No config file provided, using defaults");
        Config::default()
    };

    // Create the app state with an in-memory store
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store);

    // Create the router
    let app = create_router(state);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
