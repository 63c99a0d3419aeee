use std::sync::Arc;

use anyhow::Context;
use calorie_lens::{router, AppState, Config, VisionClient};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    if config.api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; vision API calls will be rejected");
    }

    let vision = VisionClient::new(config.vision()).context("failed to build HTTP client")?;
    info!(
        endpoint = vision.endpoint(),
        timeout_secs = config.timeout_secs,
        "vision client ready"
    );

    let state = Arc::new(AppState {
        vision,
        max_upload_bytes: config.max_upload_bytes,
    });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!("server running on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
