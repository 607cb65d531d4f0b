use anyhow::Result;
use axum::Router;
use inventory_service::{api, catalog::Catalog, config, state::AppState, telemetry};
use config::{Config, ServerConfig};
use telemetry::init_tracing;
use tokio::runtime::Runtime;
use tracing::{info, warn};

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;
    let runtime = build_runtime(&cfg.server)?;
    runtime.block_on(serve(cfg))
}

/// One worker thread reproduces a single event loop: a burning request
/// holds up every other request until it completes.
fn build_runtime(server: &ServerConfig) -> Result<Runtime> {
    let runtime = match server.worker_threads {
        Some(0) => anyhow::bail!("server.worker_threads must be at least 1"),
        Some(1) => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?,
        Some(n) => tokio::runtime::Builder::new_multi_thread()
            .worker_threads(n)
            .enable_all()
            .build()?,
        None => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?,
    };
    Ok(runtime)
}

async fn serve(cfg: Config) -> Result<()> {
    let catalog = Catalog::seeded();
    info!(items = catalog.len(), "catalog loaded");

    let state = AppState::from_config(catalog, &cfg);
    if state.faults.is_enabled() {
        warn!("fault injection enabled: even ids answer with 500");
    }

    #[allow(unused_mut)]
    let mut app: Router = api::router(state, &cfg);

    #[cfg(feature = "metrics")]
    {
        app = api::with_metrics(app);
    }

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("server binding to 0.0.0.0 - service will be accessible from network");
    }

    info!(
        %addr,
        worker_threads = ?cfg.server.worker_threads,
        "starting inventory service"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
