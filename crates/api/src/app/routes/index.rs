use std::sync::Arc;

use axum::{extract::Extension, response::Html};
use axum_extra::extract::Form;

use cablestock_inventory::InventoryCommand;

use crate::app::errors::AppError;
use crate::app::form::IndexForm;
use crate::app::services::AppServices;

pub async fn show(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Html<String>, AppError> {
    run(services, InventoryCommand::Noop).await
}

pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<IndexForm>,
) -> Result<Html<String>, AppError> {
    run(services, form.into_command()).await
}

/// File IO is synchronous, so the whole cycle runs on the blocking pool.
async fn run(services: Arc<AppServices>, command: InventoryCommand) -> Result<Html<String>, AppError> {
    let page = tokio::task::spawn_blocking(move || services.process(&command)).await??;
    Ok(Html(page))
}
