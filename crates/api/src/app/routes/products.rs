use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post, put},
    Json, Router,
};

use webshop_auth::Permission;
use webshop_catalog::{pipeline, search, CatalogStore, ProductDetail, ProductRepository, SearchOutcome};
use webshop_core::{DomainError, ExpectedVersion, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

/// Anonymous catalog browsing.
pub fn public_router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/:id", get(get_product))
}

/// Product administration (bearer token + admin role).
pub fn admin_router() -> Router {
    Router::new()
        .route("/", post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse::<ProductId>()
        .map_err(errors::domain_error_to_response)
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListingParams>,
) -> axum::response::Response {
    let query = params.into_query();
    let response = pipeline::run(services.catalog.as_ref(), &query);
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    match search(services.catalog.as_ref(), params.q.as_deref()) {
        SearchOutcome::RedirectToListing => Redirect::to("/products").into_response(),
        SearchOutcome::Results(results) => (StatusCode::OK, Json(results)).into_response(),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.catalog.get_by_id(id) {
        Some(product) => (StatusCode::OK, Json(ProductDetail::from(&product))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::authorize_admin(&principal, &Permission::PRODUCTS_WRITE) {
        return errors::forbidden(e);
    }

    let created = body
        .into_draft()
        .and_then(|draft| services.catalog.create(draft));

    match created {
        Ok(product) => (StatusCode::CREATED, Json(ProductDetail::from(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::authorize_admin(&principal, &Permission::PRODUCTS_WRITE) {
        return errors::forbidden(e);
    }

    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    // A form naming some other record is treated as a missing record.
    if body.id.is_some_and(|form_id| form_id != id.get()) {
        return errors::domain_error_to_response(DomainError::not_found());
    }

    let expected = ExpectedVersion::from(body.version);
    let updated = body
        .into_draft()
        .and_then(|draft| services.catalog.update(id, expected, draft));

    match updated {
        Ok(product) => (StatusCode::OK, Json(ProductDetail::from(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Query(params): Query<dto::DeleteParams>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::authorize_admin(&principal, &Permission::PRODUCTS_WRITE) {
        return errors::forbidden(e);
    }

    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.catalog.delete(id, ExpectedVersion::from(params.version)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
