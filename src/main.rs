use anyhow::Result;
use leyden::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load and validate configuration
    let config = Config::load().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

    leyden::logging::init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Leyden battery status bridge starting up");

    let source = leyden::telemetry::build_source(&config)
        .map_err(|e| anyhow::anyhow!("Failed to build telemetry source: {}", e))?;

    let host = config.web.host.clone();
    let port = config.web.port;
    leyden::web::serve(source, config, &host, port).await
}
