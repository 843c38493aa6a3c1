use std::sync::Arc;

use tickerlens::{LensConnector, TickerLens};
use tickerlens_mock::MockConnector;
use tickerlens_server::{ServerConfig, build_router};
use tickerlens_yfinance::YfConnector;
use tracing::{info, warn};

const DEFAULT_FILTER: &str = "info,tickerlens=debug,tickerlens_server=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let addr = config.socket_addr().map_err(|e| {
        warn!(
            host = %config.host,
            port = config.port,
            error = %e,
            "invalid bind address; check TICKERLENS_HOST and TICKERLENS_PORT"
        );
        e
    })?;

    let connector: Arc<dyn LensConnector> = if config.use_mock {
        Arc::new(MockConnector::new())
    } else {
        Arc::new(YfConnector::try_new_default()?)
    };
    let lens = TickerLens::builder()
        .with_connector(connector)
        .config(config.lens_config())
        .build()?;
    info!(
        connector = lens.connector_name(),
        history_days = config.history_window_days,
        news_limit = config.news_limit,
        "report pipeline ready"
    );

    let app = build_router(Arc::new(lens));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening on /api/handler");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => warn!("received Ctrl+C, shutting down"),
        () = terminate => warn!("received SIGTERM, shutting down"),
    }
}
