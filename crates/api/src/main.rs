use anyhow::Context;

use shopfront_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        "upstream products: {}, attributes: {}",
        config.upstream.products_url,
        config.upstream.attributes_url
    );

    let app = shopfront_api::app::build_app(&config.upstream)
        .context("failed to build upstream HTTP client")?;

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
