//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared service bundle handed to every handler
//! - `routes/`: HTTP routes + handlers (page surface, JSON surface, system)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses per surface
//! - `views.rs`: the HTML renderer seam

use std::sync::Arc;

use axum::{middleware::from_fn, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(from_fn(middleware::request_context))
            .layer(Extension(Arc::new(services))),
    )
}
