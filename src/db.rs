use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::migrator::{ClientsMigrator, SamplesMigrator};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Which store a pool belongs to. Cross-store references (e.g. `buyer_id` on
/// samples) are weak integer refs, never database constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Clients,
    Samples,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Clients => "clients",
            StoreKind::Samples => "samples",
        }
    }
}

/// Configuration for one store's connection pool
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout duration
    pub idle_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
    /// Startup connection attempts before giving up
    pub connect_retries: u32,
    /// Fixed backoff between startup attempts
    pub retry_backoff: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 25,
            min_connections: 2,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            acquire_timeout: Duration::from_secs(60),
            connect_retries: 5,
            retry_backoff: Duration::from_secs(5),
        }
    }
}

impl DbConfig {
    /// Builds the pool config for one store from the app configuration.
    pub fn for_store(cfg: &AppConfig, store: StoreKind) -> Self {
        let url = match store {
            StoreKind::Clients => cfg.database_url_clients.clone(),
            StoreKind::Samples => cfg.database_url_samples.clone(),
        };
        Self {
            url,
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.db_idle_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
            connect_retries: cfg.db_connect_retries.max(1),
            retry_backoff: Duration::from_secs(cfg.db_connect_retry_backoff_secs),
        }
    }
}

/// Establishes a connection pool for one store
///
/// # Errors
/// Returns a `ServiceError` if the connection cannot be established
pub async fn establish_connection_with_config(
    config: &DbConfig,
) -> Result<DbPool, ServiceError> {
    debug!("Configuring database connection with: {:?}", config);

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(true);

    let db_pool = Database::connect(opt)
        .await
        .map_err(ServiceError::DatabaseError)?;

    info!(
        "Database connection pool established (max_connections={})",
        config.max_connections
    );

    Ok(db_pool)
}

/// Connects to one store with a fixed number of startup attempts and fixed
/// backoff. Exhausting the attempts is fatal to the caller.
pub async fn connect_with_retries(
    store: StoreKind,
    config: &DbConfig,
) -> Result<DbPool, ServiceError> {
    let attempts = config.connect_retries;
    for attempt in 1..=attempts {
        info!(
            "Connecting to {} store (attempt {}/{})",
            store.as_str(),
            attempt,
            attempts
        );
        match establish_connection_with_config(config).await {
            Ok(pool) => return Ok(pool),
            Err(err) if attempt < attempts => {
                warn!(
                    "{} store connection failed: {}. Retrying in {:?}...",
                    store.as_str(),
                    err,
                    config.retry_backoff
                );
                tokio::time::sleep(config.retry_backoff).await;
            }
            Err(err) => {
                error!(
                    "Failed to connect to {} store after {} attempts",
                    store.as_str(),
                    attempts
                );
                return Err(err);
            }
        }
    }
    unreachable!("retry loop returns on the final attempt")
}

/// One pool per store; all request handling borrows short-lived connections
/// from these, released unconditionally when the statement finishes.
#[derive(Clone)]
pub struct DataStores {
    pub clients: Arc<DbPool>,
    pub samples: Arc<DbPool>,
}

impl DataStores {
    /// Connect both stores with startup retries.
    pub async fn connect(cfg: &AppConfig) -> Result<Self, ServiceError> {
        let clients =
            connect_with_retries(StoreKind::Clients, &DbConfig::for_store(cfg, StoreKind::Clients))
                .await?;
        let samples =
            connect_with_retries(StoreKind::Samples, &DbConfig::for_store(cfg, StoreKind::Samples))
                .await?;
        Ok(Self {
            clients: Arc::new(clients),
            samples: Arc::new(samples),
        })
    }

    /// Runs the embedded migrations for both stores.
    pub async fn run_migrations(&self) -> Result<(), ServiceError> {
        info!("Running clients store migrations");
        ClientsMigrator::up(self.clients.as_ref(), None)
            .await
            .map_err(ServiceError::DatabaseError)?;

        info!("Running samples store migrations");
        SamplesMigrator::up(self.samples.as_ref(), None)
            .await
            .map_err(ServiceError::DatabaseError)?;

        info!("Database migrations completed successfully");
        Ok(())
    }
}

/// Checks if a store's connection is active
pub async fn check_connection(pool: &DbPool) -> Result<(), ServiceError> {
    debug!("Checking database connection");
    pool.ping().await.map_err(ServiceError::DatabaseError)
}
