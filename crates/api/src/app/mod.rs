//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use shopfront_infra::{CatalogService, FetchError, HttpCatalogSource, UpstreamConfig};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router against the configured upstream documents
/// (public entrypoint used by `main.rs`).
pub fn build_app(upstream: &UpstreamConfig) -> Result<Router, FetchError> {
    let source = HttpCatalogSource::new(upstream)?;
    Ok(build_app_with_service(CatalogService::new(Arc::new(source))))
}

/// Build the router around an existing service (tests inject other sources).
pub fn build_app_with_service(service: CatalogService) -> Router {
    let service = Arc::new(service);

    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::unsupported_route)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(service)),
        )
}
