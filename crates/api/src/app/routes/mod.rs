use axum::{routing::get, Router};

pub mod auth;
pub mod products;
pub mod system;
pub mod users;

/// Routes open to anonymous callers.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/products", products::public_router())
        .nest("/auth", auth::router())
}

/// Routes that require a valid bearer token.
pub fn protected_router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/products", products::admin_router())
        .nest("/admin/users", users::router())
}
