mod cli;

use crate::cli::CLI;
use clap::Parser;
use pixroll_catalog::{CatalogService, CatalogSettings};
use pixroll_gateway::{App, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    pixroll_telemetry::init_tracing(config.log_format)?;

    let cache_ttl = config.cache_ttl();
    info!(
        listen_addr = %config.listen_addr,
        categories_dir = %config.categories_dir.display(),
        public_dir = %config.public_dir.display(),
        cache_ttl = ?cache_ttl,
        "starting gateway server"
    );

    let settings = CatalogSettings::builder()
        .base_dir(config.categories_dir)
        .cache_ttl(cache_ttl)
        .build();
    let catalog = CatalogService::from_settings(settings);
    let app = App::router(AppState::new(Arc::new(catalog)), &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
