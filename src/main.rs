#[cfg(feature = "http-server")]
mod api; // JSON API consumed by the web UI
mod config;
mod errors;
mod handlers;
mod models;
mod pipeline;
mod services;

use anyhow::Result;
use dotenv::dotenv;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before the logger so RUST_LOG from .env applies
    dotenv().ok();
    env_logger::init();

    log::info!("🚀 Starting Fitness AI Advisor...");

    let config = Config::from_env()?;
    log::debug!("Configuration: {:?}", config);

    let model = services::build_model(&config)?;
    log::info!("✅ AI service initialized: {}", model.name());
    if let Some(timeout) = config.request_timeout {
        log::info!("⏱️ AI request timeout: {}s", timeout.as_secs());
    }

    #[cfg(feature = "http-server")]
    {
        use std::sync::Arc;

        let state = Arc::new(api::AppState::new(model));
        let app = api::create_api_router(state, config.static_dir.as_deref());

        let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
        log::info!("🌐 API server listening on http://{}", config.bind_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                log::info!("🛑 Shutting down...");
            })
            .await?;
    }

    #[cfg(not(feature = "http-server"))]
    {
        let _ = model;
        log::warn!("⚠️ Built without the http-server feature, nothing to serve");
    }

    Ok(())
}
