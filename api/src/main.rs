mod config;
mod error;
mod handlers;
mod models;
mod routes;

use std::sync::Arc;

use food_store::{FoodStore, MemoryFoodStore, MongoFoodStore};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, StoreBackend};

const DEFAULT_LOG_FILTER: &str = "food_api=info,food_store=info,tower_http=info";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FoodStore>,
}

async fn store_connect(config: &Config) -> food_store::Result<Arc<dyn FoodStore>> {
    match config.store {
        StoreBackend::MongoDb => {
            let store = MongoFoodStore::connect(&config.mongo).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory food store, nothing will be persisted");
            Ok(Arc::new(MemoryFoodStore::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = store_connect(&config).await?;

    let state = AppState {
        store: store.clone(),
    };
    let app = routes::app_router(state, &config.public_dir);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}
