//! Fibersheet HTTP server entrypoint.

use std::net::SocketAddr;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use fibersheet::config::Config;
use fibersheet::gateway::{HandlerState, create_router_with_state};
use fibersheet::http::build_client;
use fibersheet::lookup::{CachedParameterSource, HttpParameterSource};
use fibersheet::publish::DatasheetPublisher;
use fibersheet::search::{HttpSearchBackend, SearchOrchestrator};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        search_url = %config.search_url,
        "Fibersheet starting"
    );

    if config.accept_invalid_certs {
        tracing::warn!("TLS certificate verification is disabled for the external API");
    }

    let client = build_client(&config)?;

    let orchestrator = SearchOrchestrator::new(HttpSearchBackend::from_config(client.clone(), &config));
    let parameters = CachedParameterSource::new(
        HttpParameterSource::from_config(client.clone(), &config),
        config.options_ttl,
    );
    let publisher = DatasheetPublisher::from_config(client, &config);

    let state = HandlerState::new(orchestrator, parameters, publisher);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Fibersheet shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
