//! Reusable server runtime.
//!
//! [`ServerHandle`] owns the whole lifecycle: database connection,
//! migrations, demo seeding, the REST API task and graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::{JwtConfig, ISSUER};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::seeder::{seed_if_empty, SeedOutcome};
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::interfaces::http::create_api_router;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Seed demo data into an empty database (default: true, also gated by
    /// `seed.enabled`).
    pub seed: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            seed: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// ```rust,no_run
/// use salon::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Port the API is bound to (resolved when the config asks for port 0).
    pub port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Connect, migrate, seed, bind and start serving.
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let app_cfg = opts.config;

        info!("Starting salon service v{}...", env!("CARGO_PKG_VERSION"));

        let db_config = DatabaseConfig {
            url: app_cfg.database.url.clone(),
            max_connections: app_cfg.database.max_connections,
        };

        let jwt_config = JwtConfig {
            secret: app_cfg.security.jwt_secret.clone(),
            expiration_hours: app_cfg.security.jwt_expiration_hours,
            issuer: ISSUER.to_string(),
        };
        info!(
            "JWT configured with {}h token expiration",
            jwt_config.expiration_hours
        );

        // ── Database ───────────────────────────────────────────
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        if opts.seed && app_cfg.seed.enabled {
            match seed_if_empty(&db, &app_cfg.seed).await {
                Ok(SeedOutcome::Seeded { persons, services }) => {
                    info!(persons, services, "Demo data ready");
                    warn!("Change the seeded owner password before going live");
                }
                Ok(SeedOutcome::Skipped) => {}
                Err(e) => error!("Failed to seed demo data: {}", e),
            }
        }

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        // ── REST API server ────────────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let api_router = create_api_router(repos.clone(), db.clone(), jwt_config);

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown.signal();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config: app_cfg,
            port: local_addr.port(),
            db,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop after shutdown has been triggered.
    /// In-flight requests get `shutdown_timeout` seconds to finish.
    pub async fn wait(self) {
        info!("Waiting for in-flight requests...");

        let timeout = Duration::from_secs(self.shutdown.timeout_secs());
        let mut api_task = self.api_task;
        match tokio::time::timeout(timeout, &mut api_task).await {
            Ok(Ok(())) => info!("REST API server stopped"),
            Ok(Err(e)) => error!("REST API task panicked: {}", e),
            Err(_) => {
                warn!("Graceful shutdown timed out after {:?}, aborting", timeout);
                api_task.abort();
            }
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }

        info!("Salon service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down salon service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
/// `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
