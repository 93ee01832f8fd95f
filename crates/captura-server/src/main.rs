//! Captura server entry point.
//!
//! Bootstraps the document store and intake service, then starts the Axum
//! HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tokio::net::TcpListener;
use tracing::info;

use captura_core::intake::IntakeService;
use captura_store::{DocumentStore, FileStore, MemoryStore};

use captura_server::config::{ServerConfig, StoreBackendType};
use captura_server::routes;
use captura_server::state::AppState;

use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(store = ?config.store, "Captura starting");

    let store: Arc<dyn DocumentStore> = match &config.store {
        StoreBackendType::Memory => {
            info!("using in-memory store (submissions will not persist)");
            Arc::new(MemoryStore::new())
        }
        StoreBackendType::File { path } => {
            info!(path = %path, "using file store");
            Arc::new(FileStore::new(path.as_str()))
        }
    };

    let state = Arc::new(AppState {
        intake: IntakeService::new(store),
    });

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "Captura server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Captura server stopped");
    Ok(())
}

/// Build the Axum router with all routes and middleware.
fn build_router(state: Arc<AppState>) -> Router {
    // Concurrency-limit the submission API to keep a burst of form posts
    // from exhausting the process.
    let api_routes = Router::new()
        .merge(routes::submit::router())
        .layer(tower::limit::ConcurrencyLimitLayer::new(32));

    // CORS — the form posts same-origin, but the dashboard is sometimes
    // embedded elsewhere during campaigns.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(api_routes)
        .merge(routes::pages::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
