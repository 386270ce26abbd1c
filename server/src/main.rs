//! Developer registry server.
//!
//! Run from repo root: `cargo run -p devs-server`
//! Without `DATABASE_URL` the server keeps records in memory.

use devs_api::{
    app_router, ensure_database_exists, ensure_developers_table, AppState, DeveloperStore, MemoryDeveloperStore,
    PgDeveloperStore, ServerConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("devs_api=info,devs_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store: Arc<dyn DeveloperStore> = match &config.database_url {
        Some(database_url) => {
            ensure_database_exists(database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;
            ensure_developers_table(&pool, &config.schema).await?;
            Arc::new(PgDeveloperStore::new(pool, &config.schema))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            Arc::new(MemoryDeveloperStore::new())
        }
    };

    let app = app_router(AppState::new(store), config.max_body_bytes);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
