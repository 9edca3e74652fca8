use crate::infra::config::{AppConfig, Config};
use std::net::SocketAddr;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    let app_cfg = AppConfig::from_env_and_toml();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        deprecate_rest = cfg.deprecate_rest,
        slides_base = app_cfg.slides.base_url.as_deref().unwrap_or_default(),
        token_configured = app_cfg.access_token.is_some(),
        "BOOT slides-mcp-gateway"
    );
    let source = crate::clients::source_from_config(&app_cfg);

    if cfg.mode == "stdio" {
        let factory = move || crate::tools::slides::tool_router::factory_with_source(source);
        crate::infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = crate::infra::http_app::build_app(source, cfg.deprecate_rest);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
