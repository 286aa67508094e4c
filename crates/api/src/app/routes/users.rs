//! User account administration. Every handler requires `users.manage`.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use webshop_auth::{IdentityService, Permission, UserView};
use webshop_core::UserId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz::authorize_admin;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(edit_user_view).put(edit_user).delete(delete_user))
        .route("/:id/password", get(change_password_view).post(change_password))
}

fn guard(principal: &PrincipalContext) -> Result<(), axum::response::Response> {
    authorize_admin(principal, &Permission::USERS_MANAGE).map_err(errors::forbidden)
}

fn parse_id(raw: &str) -> Result<UserId, axum::response::Response> {
    raw.parse::<UserId>()
        .map_err(errors::domain_error_to_response)
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(resp) = guard(&principal) {
        return resp;
    }

    let items = services
        .identity
        .users()
        .iter()
        .map(UserView::from)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    if let Err(resp) = guard(&principal) {
        return resp;
    }

    let account = body.into_account();
    match services.run_identity(move |identity| identity.create(account)).await {
        Ok(user) => (StatusCode::CREATED, Json(UserView::from(&user))).into_response(),
        Err(e) => errors::account_error_to_response(e),
    }
}

pub async fn edit_user_view(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = guard(&principal) {
        return resp;
    }
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.identity.find_by_id(id) {
        Some(user) => (StatusCode::OK, Json(dto::EditUserView::from(&user))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
    }
}

pub async fn edit_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::EditUserRequest>,
) -> axum::response::Response {
    if let Err(resp) = guard(&principal) {
        return resp;
    }
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.identity.update(body.into_edit(id)) {
        Ok(user) => (StatusCode::OK, Json(UserView::from(&user))).into_response(),
        Err(e) => errors::account_error_to_response(e),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = guard(&principal) {
        return resp;
    }
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.identity.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::account_error_to_response(e),
    }
}

pub async fn change_password_view(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = guard(&principal) {
        return resp;
    }
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.identity.find_by_id(id) {
        Some(user) => (StatusCode::OK, Json(dto::ChangePasswordView::from(&user))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
    }
}

pub async fn change_password(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::ChangePasswordRequest>,
) -> axum::response::Response {
    if let Err(resp) = guard(&principal) {
        return resp;
    }
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let change = body.into_change(id);
    match services.run_identity(move |identity| identity.change_password(change)).await {
        Ok(user) => (StatusCode::OK, Json(UserView::from(&user))).into_response(),
        Err(e) => errors::account_error_to_response(e),
    }
}
