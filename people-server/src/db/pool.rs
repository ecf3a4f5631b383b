//! Database connection pool management
//!
//! [`Database`] is the single owned handle to the store. It is built once by
//! [`Database::initialize`], cloned into router state, and released with
//! [`Database::close`] after the server stops accepting requests.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use super::{schema, DbError};
use crate::config::{DbConfig, SslMode};

/// Owned handle to the connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect and make sure the `people` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] if the pool cannot open a connection
    /// (bad credentials, unreachable host, connect timeout) or if the schema
    /// statement fails. Callers treat this as fatal.
    pub async fn initialize(config: &DbConfig) -> Result<Self, DbError> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "connecting to database"
        );

        let pool = create_pool(config).await.map_err(DbError::Connection)?;
        tracing::info!("connected to database");

        schema::ensure_people_table(&pool)
            .await
            .map_err(DbError::Connection)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Release every connection. Safe to call more than once.
    pub async fn close(&self) {
        if self.pool.is_closed() {
            return;
        }
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

/// Create a PostgreSQL pool from discrete connection settings.
///
/// Opens one connection eagerly so a bad configuration fails here rather than
/// on the first request.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect_with(connect_options(config))
        .await
}

/// Build connect options; the per-statement timeout is applied server-side.
pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
    let ssl_mode = match config.ssl_mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    };

    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.username)
        .password(&config.password)
        .ssl_mode(ssl_mode)
        .options([(
            "statement_timeout",
            config.request_timeout.as_millis().to_string(),
        )])
}
