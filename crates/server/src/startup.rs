use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::{storage::FsFileStore, ShopService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::graphql::{build_schema, ShopSchema};
use crate::routes;

/// Browser clients (GraphiQL, local frontends) call from any origin
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or defaults) with environment overrides applied.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Schema over the on-disk stores named in `config`.
pub fn build_shop_schema(config: &AppConfig) -> ShopSchema {
    let storage = &config.storage;
    // local disk; record directories come from config
    let shop = ShopService::new(
        Arc::new(FsFileStore::new()),
        storage.carts_dir.clone(),
        storage.products_dir.clone(),
    );
    build_schema(shop)
}

pub fn build_app(config: &AppConfig) -> Router {
    routes::build_router(build_shop_schema(config), build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let storage = &config.storage;
    // Data directories must exist before the first request
    common::env::ensure_env(&[&storage.carts_dir, &storage.products_dir])
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    // Build router
    let app = build_app(&config);

    // Bind and serve
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {addr}: {e}")))?;
    info!(
        %addr,
        carts_dir = %storage.carts_dir.display(),
        products_dir = %storage.products_dir.display(),
        "graphql server listening"
    );

    // in-flight requests finish before shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
