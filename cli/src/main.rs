//! Salon staff service - CLI server
//!
//! ```sh
//! # Run with default config (~/.config/salon-service/config.toml)
//! salon-service
//!
//! # Custom config path
//! salon-service --config /etc/salon-service/config.toml
//!
//! # Override the port
//! salon-service --port 8080
//!
//! # Validate config without starting
//! salon-service --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use salon::config::{resolve_config_path, AppConfig};
use salon::server::{init_tracing, ServerHandle, ServerOptions};

/// Employee directory and service assignment API for a beauty salon.
#[derive(Parser, Debug)]
#[command(
    name = "salon-service",
    version,
    about = "Salon staff service: employee directory and service assignments",
    long_about = "REST API for listing salon employees and managing which services \
                  each of them performs.\n\n\
                  Default config: ~/.config/salon-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "SALON_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip seeding demo data into an empty database.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = resolve_config_path(cli.config);
    let loaded = if config_path.exists() {
        Some(AppConfig::load(&config_path))
    } else {
        None
    };

    if cli.check {
        return match loaded {
            Some(Ok(config)) => {
                println!("Configuration is valid");
                println!("   Config file : {}", config_path.display());
                println!("   API address : {}", config.server.address());
                println!("   Database    : {}", config.database.url);
                println!("   Log level   : {}", config.logging.level);
                ExitCode::SUCCESS
            }
            Some(Err(e)) => {
                eprintln!("Invalid configuration {}: {}", config_path.display(), e);
                ExitCode::FAILURE
            }
            None => {
                eprintln!("Config file not found: {}", config_path.display());
                ExitCode::FAILURE
            }
        };
    }

    let (mut config, load_error) = match loaded {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (AppConfig::default(), Some(e)),
        None => (AppConfig::default(), None),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config);
    match load_error {
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
        None => info!("Configuration: {}", config_path.display()),
    }

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed: !cli.no_seed,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    ExitCode::SUCCESS
}
