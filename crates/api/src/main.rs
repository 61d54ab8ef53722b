use anyhow::Context;

use cablestock_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    cablestock_observability::init(config.log_format);

    let app = cablestock_api::app::build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        inventory = %config.inventory_path.display(),
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
