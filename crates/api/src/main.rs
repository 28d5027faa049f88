use std::sync::Arc;
use tracing::{info, warn};
use hw_core::{config::AppConfig, HeaderConfig};
use hw_api::app::build_app;
use hw_api::observability::init_tracing;
use hw_api::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::load()?;
    init_tracing(&cfg);

    let headers = cfg.header_config();
    headers.validate()?;
    warn_weak_headers(&cfg, &headers);
    for (name, value) in headers.headers() {
        info!(header = name, %value, "security header configured");
    }

    let router = build_app(&cfg, Arc::new(headers))?;
    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, env = %cfg.app.env, "starting server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn warn_weak_headers(cfg: &AppConfig, headers: &HeaderConfig) {
    if cfg.is_production() && headers.hsts().is_none() {
        warn!("Strict-Transport-Security disabled in production");
    }
    if headers.expect_ct().is_some() && !cfg.headers.emit_expect_ct {
        warn!("Expect-CT configured but not emitted; set HEADERS_EMIT_EXPECT_CT=true to send it");
    }
}
