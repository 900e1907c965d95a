//! Table booking CLI server
//!
//! Runs the reservation REST API as a standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/table-booking/config.toml)
//! booking-service
//!
//! # Custom config path and port
//! booking-service --config /etc/table-booking/config.toml --port 8080
//!
//! # Validate config without starting
//! booking-service --check
//!
//! # Write the effective config to the config path
//! booking-service --init-config
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use table_booking::config::{AppConfig, CONFIG_ENV};
use table_booking::server::{init_tracing, ServerHandle, ServerOptions};
use table_booking::shared::listen_for_shutdown_signals;

/// Restaurant table booking server.
#[derive(Parser, Debug)]
#[command(
    name = "booking-service",
    version,
    about = "Restaurant table reservation server",
    long_about = "REST API for booking restaurant tables by hourly slot.\n\n\
                  Default config: ~/.config/table-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the directory holding the mirrored table inventory.
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(table_booking::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(dir) = &cli.cache_dir {
        config.inventory.cache_dir = Some(dir.clone());
    }

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    if cli.init_config {
        config.save(&config_path)?;
        println!("Configuration written to {}", config_path.display());
        return Ok(());
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.address());
        println!("   Seed tables : {:?}", config.inventory.seed_tables);
        println!("   Cache dir   : {}", config.inventory.cache_dir().display());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions { config }).await?;

    let signal = handle.shutdown_signal();
    tokio::spawn(async move {
        if let Err(e) = listen_for_shutdown_signals(signal).await {
            error!("Failed to install signal handlers: {}", e);
        }
    });

    info!("Press Ctrl+C to shutdown gracefully.");
    handle.shutdown_signal().wait().await;
    handle.shutdown().await;

    info!("Table booking server shutdown complete");
    Ok(())
}
