use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::CurrentUser;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Echo the resolved identity: id and role, nothing else.
pub async fn whoami(Extension(user): Extension<CurrentUser>) -> impl IntoResponse {
    Json(serde_json::json!({
        "user_id": user.user_id().to_string(),
        "role": user.role().as_str(),
    }))
}
