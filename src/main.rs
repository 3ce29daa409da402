//! Server entry point: connect the store, bootstrap the table, mount routes, listen.

use simple_api::{app, ensure_data_table, telemetry, AppState, PgDataStore, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter(telemetry::env_filter()).init();

    let settings = Settings::from_env();

    // Without a working store there is nothing to serve; exit non-zero.
    let store = match PgDataStore::connect(&settings).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "unable to connect to the database");
            return Err(e.into());
        }
    };
    tracing::info!("database connection established");

    if let Err(e) = ensure_data_table(store.pool()).await {
        tracing::error!(error = %e, "failed to initialize database");
        return Err(e.into());
    }
    tracing::info!("database synchronized");

    let state = AppState::new(Arc::new(store), settings.fallback_host());
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server_port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("server is running on port {}", listener.local_addr()?.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
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
            Ok(mut sig) => {
                sig.recv().await;
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
    tracing::info!("shutdown signal received");
}
