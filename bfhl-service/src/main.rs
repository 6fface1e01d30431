use bfhl_service::config::BfhlConfig;
use bfhl_service::services::init_metrics;
use bfhl_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("bfhl-service", "info", otlp_endpoint.as_deref())?;

    init_metrics()?;

    let config = BfhlConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await?;
    tracing::info!("Server is running on port {}", app.port());

    app.run_until_stopped().await?;

    Ok(())
}
