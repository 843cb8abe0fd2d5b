//! Project member administration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use eztest_auth::Role;
use eztest_core::{ProjectId, UserId};

use crate::app::{dto, errors, services::AppServices};
use crate::context::CurrentUser;

pub async fn list_members(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let project = match parse_project_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    Json(serde_json::json!({ "members": services.list_members(project) })).into_response()
}

pub async fn add_member(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::AddMemberRequest>,
) -> axum::response::Response {
    let project = match parse_project_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    if body.user_id.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "user_id must be non-empty",
        );
    }
    if body.role.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "role must be non-empty",
        );
    }

    let member = dto::ProjectMember {
        user_id: UserId::new(body.user_id),
        role: Role::new(body.role),
    };

    match services.add_member(project, member.clone()) {
        Ok(()) => {
            tracing::info!(
                actor = %actor.user_id(),
                project = %project,
                member = %member.user_id,
                "project member added",
            );
            (
                StatusCode::CREATED,
                Json(serde_json::json!({ "member": member })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_member(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<CurrentUser>,
    Path((id, user_id)): Path<(String, String)>,
) -> axum::response::Response {
    let project = match parse_project_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let user_id = UserId::new(user_id);

    match services.remove_member(project, &user_id) {
        Ok(()) => {
            tracing::info!(
                actor = %actor.user_id(),
                project = %project,
                member = %user_id,
                "project member removed",
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

fn parse_project_id(id: &str) -> Result<ProjectId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid project id")
    })
}
