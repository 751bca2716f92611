use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use practice_site::config::AppConfig;
use practice_site::routes;
use practice_site::services::intake::log::LogSink;
use practice_site::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        theme = config.theme.as_str(),
        timeout_secs = config.contact_timeout_secs,
        "loaded configuration for {}",
        config.practice_name
    );

    let port = config.port;
    let state = Arc::new(AppState {
        config,
        intake: Box::new(LogSink),
    });

    let app = routes::router(state)?;

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
