use std::sync::Arc;

use anyhow::Context;

use stockroom_api::{app, config::AppConfig};
use stockroom_infra::SqliteItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    match &config.log_file {
        Some(path) => stockroom_observability::init_with_log_file(path)
            .with_context(|| format!("failed to initialize logging to {path:?}"))?,
        None => stockroom_observability::init(),
    }

    let store = SqliteItemStore::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let services = app::services::AppServices::with_store(Arc::new(store.clone()))
        .context("failed to load page templates")?;
    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
