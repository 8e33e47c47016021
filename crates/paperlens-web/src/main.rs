//! Paperlens web server.
//!
//! Run with: cargo run -p paperlens-web

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = paperlens_web::config::Config::from_env()?;
    let state = paperlens_web::state::AppState::new(&config)?;
    let app = paperlens_web::router::build_router(state);

    info!("Server listening on http://{}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
