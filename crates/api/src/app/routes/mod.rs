use axum::{routing::get, Router};

pub mod index;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index::show).post(index::submit))
        .route("/health", get(system::health))
}
