//! Reusable server runtime.
//!
//! [`ServerHandle`] wires the table registry, booking store, inventory
//! mirror and reservation service together, serves the REST API and shuts it
//! down gracefully. The CLI binary is a thin wrapper around it.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::application::{InventoryResolver, ReservationService};
use crate::config::AppConfig;
use crate::domain::InventoryMirror;
use crate::infrastructure::{FileInventoryMirror, InMemoryBookingStore, InMemoryTableRegistry};
use crate::interfaces::http::create_api_router;
use crate::shared::errors::{AppError, InfraError};
use crate::shared::shutdown::ShutdownSignal;

// ── Options ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    pub config: AppConfig,
}

/// Fully wired core, independent of any transport.
pub struct Components {
    pub service: Arc<ReservationService>,
    pub inventory: Arc<InventoryResolver>,
}

/// Build the reservation core from configuration and publish the seeded
/// table inventory to the mirror.
pub async fn build_components(config: &AppConfig) -> Components {
    let mirror: Arc<dyn InventoryMirror> =
        Arc::new(FileInventoryMirror::new(config.inventory.cache_dir()));
    let tables = InMemoryTableRegistry::with_tables(config.inventory.seed_tables());

    let service = Arc::new(
        ReservationService::new(Arc::new(InMemoryBookingStore::new()), Arc::new(tables))
            .with_mirror(mirror.clone()),
    );
    service.publish_inventory().await;

    let inventory = Arc::new(InventoryResolver::new(service.clone(), mirror));
    Components { service, inventory }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running booking server.
///
/// # Examples
///
/// ```rust,no_run
/// use table_booking::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     // ... wait for shutdown signal ...
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub service: Arc<ReservationService>,
    local_addr: SocketAddr,
    shutdown: ShutdownSignal,
    shutdown_timeout: Duration,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub async fn start(options: ServerOptions) -> Result<Self, AppError> {
        let config = options.config;
        let Components { service, inventory } = build_components(&config).await;
        info!(
            tables = ?config.inventory.seed_tables,
            cache_dir = %config.inventory.cache_dir().display(),
            "Reservation core ready"
        );

        let router = create_api_router(service.clone(), inventory);
        let listener = TcpListener::bind(config.address())
            .await
            .map_err(InfraError::from)?;
        let local_addr = listener.local_addr().map_err(InfraError::from)?;
        info!("REST API listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let shutdown = ShutdownSignal::new();
        let server_shutdown = shutdown.clone();
        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    server_shutdown.wait().await;
                    info!("REST API server received shutdown signal");
                })
                .await
        });

        Ok(Self {
            service,
            local_addr,
            shutdown,
            shutdown_timeout: Duration::from_secs(config.server.shutdown_timeout),
            task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Trigger shutdown and wait for in-flight requests, up to the
    /// configured timeout.
    pub async fn shutdown(self) {
        self.shutdown.trigger();
        match tokio::time::timeout(self.shutdown_timeout, self.task).await {
            Ok(Ok(Ok(()))) => info!("REST API server stopped"),
            Ok(Ok(Err(e))) => error!("REST API server error: {}", e),
            Ok(Err(e)) => error!("REST API server task panicked: {}", e),
            Err(_) => warn!(
                "REST API server did not stop within {}s",
                self.shutdown_timeout.as_secs()
            ),
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// configured level.
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
