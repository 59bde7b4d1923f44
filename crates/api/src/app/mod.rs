//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: agent clients and the analysis pipeline
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: ApiConfig) -> Result<Router, services::ServiceError> {
    let services = Arc::new(services::AppServices::from_config(&config)?);

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .nest("/margin", routes::margin::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        ))
}
