#![allow(dead_code)]

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use stitchline_api::migrator::{ClientsMigrator, SamplesMigrator};

// A single-connection pool keeps the whole test on one in-memory database
async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite")
}

/// Fresh samples store with the embedded migrations applied.
pub async fn samples_db() -> Arc<DatabaseConnection> {
    let db = memory_db().await;
    SamplesMigrator::up(&db, None)
        .await
        .expect("samples migrations failed");
    Arc::new(db)
}

/// Fresh clients store with the embedded migrations applied.
pub async fn clients_db() -> Arc<DatabaseConnection> {
    let db = memory_db().await;
    ClientsMigrator::up(&db, None)
        .await
        .expect("clients migrations failed");
    Arc::new(db)
}
