use anyhow::Result;
use driver_review::{config::Config, engine::ReviewEngine, http::start_http_server, init_tracing};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting driver review service");

    let config = Arc::new(Config::load()?);
    let engine = ReviewEngine::from_config(&config.directory)?;

    start_http_server(config, engine).await?;

    info!("Server shutdown complete");
    Ok(())
}
