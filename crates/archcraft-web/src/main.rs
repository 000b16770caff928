//! ArchCraft Admin Panel Server
//!
//! Run with: cargo run -p archcraft-web

use archcraft_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting ArchCraft admin panel...");

    let config = Config::load_or_default();
    let addr = config.server.bind;

    // Create app state: loads both registries and takes the first status snapshot
    let state = archcraft_web::state::AppState::from_config(config).await;
    let state = std::sync::Arc::new(state);

    // Poll server status for the lifetime of the process
    archcraft_web::state::spawn_status_refresher(state.clone());

    let app = archcraft_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
