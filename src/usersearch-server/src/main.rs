use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing_actix_web::TracingLogger;
use usersearch_core::{Dataset, ServerConfig};
use usersearch_server::api;

mod telemetry;

#[actix_web::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());

    let (config, load_error) = match ServerConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (ServerConfig::default(), Some(e)),
    };

    // Keep the guard alive for the whole run so buffered logs get flushed
    let _guard = telemetry::init_telemetry(&config)?;

    if let Some(e) = load_error {
        tracing::warn!("Failed to load {}: {}, using defaults", config_path, e);
    }

    tracing::info!("usersearch-server starting");
    tracing::info!("  Port: {}", config.port);
    tracing::info!("  Dataset: {}", config.dataset_path);
    tracing::info!("  Access token required: {}", config.access_token.is_some());

    let dataset = Dataset::load(&config.dataset_path)
        .with_context(|| format!("failed to load dataset from {}", config.dataset_path))?;
    tracing::info!("✓ Dataset loaded ({} users)", dataset.len());

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let app_state = web::Data::new(api::AppState::new(dataset, config));

    tracing::info!("🚀 Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            .configure(api::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}
