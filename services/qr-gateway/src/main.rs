use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ---------------------------------------------------------------------------
// qr-gateway — transaction QR issuing service
//
// Pipeline per request: INPUT → IDENTIFIER → SYMBOL → RESPONSE.
// Stateless across requests; all shared resources live in AppState.
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = qr_gateway::state::Config::from_env();

    // One JSON object per line. RUST_LOG overrides LOG_LEVEL for targeted
    // per-module filtering.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!("qr_gateway={0},qr_core={0},axum=info", cfg.log_level)
            }),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let addr = cfg.bind_addr();
    let state = qr_gateway::state::AppState::new(cfg);
    let app = qr_gateway::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(service = "qr-gateway", "listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
