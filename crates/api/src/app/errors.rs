use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use eztest_auth::AuthzError;
use eztest_core::DomainError;

/// Missing or invalid credentials.
///
/// One uniform body for every authentication failure mode, so a tampered
/// token is indistinguishable from no token at all.
pub fn unauthenticated() -> axum::response::Response {
    json_error(
        StatusCode::UNAUTHORIZED,
        "unauthenticated",
        "missing or invalid credentials",
    )
}

/// Valid identity, insufficient grant.
///
/// Names the required capability only; the caller's own permission set is
/// never echoed.
pub fn forbidden(err: &AuthzError) -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
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
