use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;

use server::{routes, state::ServerState};

/// Full application over a private in-memory SQLite database.
pub async fn build_app() -> anyhow::Result<Router> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(routes::build_router(ServerState::from_db(db), CorsLayer::very_permissive(), "frontend"))
}
