//! Dropdown-options lookup: the option sets the UI renders into selects.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{errors, services::AppServices};

pub async fn list_kinds(
    Extension(services): Extension<Arc<AppServices>>,
) -> impl IntoResponse {
    Json(serde_json::json!({ "kinds": services.dropdown_kinds() }))
}

pub async fn get_options(
    Extension(services): Extension<Arc<AppServices>>,
    Path(kind): Path<String>,
) -> axum::response::Response {
    match services.dropdown_options(&kind) {
        Some(options) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "kind": kind,
                "options": options,
            })),
        )
            .into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("unknown dropdown kind '{kind}'"),
        ),
    }
}
