//! Axum server setup
//!
//! Lifecycle: the caller hands over an initialized [`Database`] (Ready), the
//! listener is bound and serves until Ctrl+C or SIGTERM (ShuttingDown), and
//! the pool is closed once in-flight requests have drained (Closed).

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::db::{Database, PeopleStore, PgPeopleRepo};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    people: Arc<dyn PeopleStore>,
}

impl AppState {
    pub fn new(people: Arc<dyn PeopleStore>) -> Self {
        Self { people }
    }

    /// State backed by the PostgreSQL repository.
    pub fn from_database(database: &Database) -> Self {
        Self::new(Arc::new(PgPeopleRepo::new(database.pool().clone())))
    }

    pub fn people(&self) -> &dyn PeopleStore {
        self.people.as_ref()
    }
}

/// Build the application router.
///
/// Paths no route claims fall through to `static_dir` when one is given.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .merge(routes::index::router::<AppState>())
        .merge(routes::health::router::<AppState>())
        .merge(routes::people::router());

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal, then close the store.
///
/// The store must already be initialized; no request is accepted before
/// the listener is bound here.
///
/// # Example
///
/// ```ignore
/// let database = Database::initialize(&db_config).await?;
/// run_server(database, ServerConfig::default()).await?;
/// ```
pub async fn run_server(database: Database, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::from_database(&database);
    let app = build_router(state, config.static_dir.as_deref());

    if let Some(dir) = &config.static_dir {
        tracing::info!(static_dir = %dir.display(), "serving static files");
    }

    let result = serve(app, &config).await;

    database.close().await;
    tracing::info!("Server shutdown complete");
    result
}

async fn serve(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
