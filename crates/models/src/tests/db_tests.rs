use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, DatabaseBackend};

use crate::db::connect_with_config;

#[tokio::test]
async fn connects_to_sqlite_memory() -> anyhow::Result<()> {
    let db = super::memory_db().await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    db.ping().await?;
    Ok(())
}

#[tokio::test]
async fn migrations_are_reversible() -> anyhow::Result<()> {
    let db = super::memory_db().await?;
    migration::Migrator::down(&db, None).await?;
    migration::Migrator::up(&db, None).await?;
    let pending = migration::Migrator::get_pending_migrations(&db).await?;
    assert!(pending.is_empty());
    Ok(())
}

#[tokio::test]
async fn unreachable_database_is_an_error() {
    let cfg = DatabaseConfig {
        url: "mysql://nobody@127.0.0.1:1/none".into(),
        connect_timeout_secs: 1,
        acquire_timeout_secs: 1,
        ..Default::default()
    };
    assert!(connect_with_config(&cfg).await.is_err());
}
