use anyhow::Result;
use tracing::info;

mod app;
mod config;
mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics();

    info!("Starting Device Tracker API v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&config.database.pool_settings()).await?;

    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    // Sample pool gauges every 10 seconds for /metrics
    let metrics_pool = pool.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(10));
        loop {
            interval.tick().await;
            persistence::metrics::record_pool_metrics(&metrics_pool);
        }
    });

    let app = app::create_app(config.clone(), pool);

    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
