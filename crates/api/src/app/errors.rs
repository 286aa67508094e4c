use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use webshop_auth::{AccountError, AuthzError, JwtError};
use webshop_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn account_error_to_response(err: AccountError) -> axum::response::Response {
    match err {
        AccountError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        AccountError::Rejected(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "validation_error",
                "message": errors.join(" "),
                "errors": errors,
            })),
        )
            .into_response(),
        AccountError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        AccountError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid user name or password",
        ),
        AccountError::Hashing(msg) => {
            tracing::error!(error = %msg, "identity operation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
        }
    }
}

pub fn forbidden(err: AuthzError) -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string())
}

pub fn token_error_to_response(err: JwtError) -> axum::response::Response {
    tracing::error!(error = %err, "failed to issue token");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
