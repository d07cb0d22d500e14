use axum::{routing::get, Router};

pub mod items;
pub mod pages;
pub mod system;

/// Router for both surfaces plus system endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(pages::router())
        .merge(items::router())
}
