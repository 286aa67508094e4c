//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring and the shared service container
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and their mapping onto domain commands
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let services = services::build_services(config)?;
    Ok(router(services))
}

/// Router over an already wired service container.
pub fn router(services: AppServices) -> Router {
    let auth_state = middleware::AuthState {
        jwt: services.tokens.clone(),
    };

    // Protected routes: require a verified bearer token.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    routes::public_router()
        .merge(protected)
        .layer(Extension(Arc::new(services)))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
