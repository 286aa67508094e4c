use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

/// Exchange user name + password for a bearer token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let dto::LoginRequest { user_name, password } = body;

    let user = match services
        .run_identity(move |identity| identity.check_password(&user_name, &password))
        .await
    {
        Ok(user) => user,
        Err(e) => return errors::account_error_to_response(e),
    };

    match services.issue_token(&user) {
        Ok(token) => {
            tracing::info!(user_id = %user.id_typed(), "token issued");
            (StatusCode::OK, Json(token)).into_response()
        }
        Err(e) => errors::token_error_to_response(e),
    }
}
