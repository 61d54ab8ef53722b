use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use cablestock_infra::StoreError;

/// Failures that are not the user's fault.
///
/// Bad form input never ends up here; it is reported on the page itself.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("inventory storage failed: {0}")]
    Store(#[from] StoreError),

    #[error("page template is invalid: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("page rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("request task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!doctype html><title>Error</title><h1>Something went wrong</h1><p>The inventory could not be processed. Check the server log.</p>"),
        )
            .into_response()
    }
}
