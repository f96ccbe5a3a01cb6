use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally::api::{create_router, AppState};
use tally::config::Config;
use tally::db::{Database, DocumentStore, LibSqlBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // A missing or broken store is not fatal: the server still comes up and
    // storage-backed endpoints answer with a 500 until it is configured.
    let store: Option<Arc<dyn DocumentStore>> = if config.database.url.is_some() {
        tracing::info!("Initializing document store...");
        match Database::new(&config.database).await {
            Ok(db) => Some(Arc::new(LibSqlBackend::new(db))),
            Err(e) => {
                tracing::error!(
                    "Failed to initialize document store: {} - continuing without storage",
                    e
                );
                None
            }
        }
    } else {
        tracing::warn!(
            "DATABASE_URL is not set - storage-backed endpoints will return HTTP 500"
        );
        None
    };

    let state = AppState::new(config.clone(), store);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Tally starting on http://{}", addr);
    tracing::info!("  Diagnostics:  http://{}/test", addr);
    tracing::info!("  API docs:     http://{}/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
