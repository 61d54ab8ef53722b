//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the per-request pipeline (load, apply, persist, render)
//! - `routes/`: HTTP routes + handlers
//! - `form.rs`: form decoding into an `InventoryCommand`
//! - `view.rs`: page rendering
//! - `errors.rs`: infrastructure failures as responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use cablestock_infra::{AppConfig, FlatFileInventoryStore, InventoryStore};

pub mod errors;
pub mod form;
pub mod routes;
pub mod services;
pub mod view;

use errors::AppError;
use services::AppServices;
use view::PageRenderer;

/// Build the full HTTP router backed by the configured inventory file.
pub fn build_app(config: &AppConfig) -> Result<Router, AppError> {
    let store = FlatFileInventoryStore::new(config.inventory_path.clone());
    build_app_with_store(Arc::new(store))
}

/// Build the router around any store.
pub fn build_app_with_store(store: Arc<dyn InventoryStore>) -> Result<Router, AppError> {
    let renderer = PageRenderer::new()?;
    let services = Arc::new(AppServices::new(store, renderer));

    Ok(routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
}
