//! Developer handlers: create, update, read, list, list by specialty, delete.
//! Each endpoint picks its own status for domain failures; see the route table in `routes::developer`.

use crate::error::ApiError;
use crate::model::DeveloperDto;
use crate::response::{ok_many, ok_one, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteParams {
    /// Physically remove the record instead of marking it DELETED.
    #[serde(rename = "isHard", default)]
    pub is_hard: bool,
}

/// Any failure here, including an unreadable body, is reported as 400.
#[utoipa::path(
    post,
    path = "/api/v1/developers",
    tag = "developers",
    request_body = DeveloperDto,
    responses(
        (status = 200, description = "Developer created with status ACTIVE", body = DeveloperDto),
        (status = 400, description = "Duplicate email or invalid body", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<DeveloperDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let mut developer = dto.into_entity();
    developer.id = None;
    let created = state.developers.create(developer).await.map_err(|e| {
        if !e.is_client_error() {
            tracing::error!(error = %e, "create developer failed");
        }
        ApiError::bad_request(e.to_string())
    })?;
    Ok(ok_one(DeveloperDto::from(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/developers",
    tag = "developers",
    request_body = DeveloperDto,
    responses(
        (status = 200, description = "Developer replaced", body = DeveloperDto),
        (status = 400, description = "Developer not found or invalid body", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<DeveloperDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let updated = state
        .developers
        .update(dto.into_entity())
        .await
        .map_err(|e| ApiError::with_client_status(e, StatusCode::BAD_REQUEST))?;
    Ok(ok_one(DeveloperDto::from(updated)))
}

#[utoipa::path(
    get,
    path = "/api/v1/developers/{id}",
    tag = "developers",
    params(("id" = i32, Path, description = "Developer id")),
    responses(
        (status = 200, description = "Developer in any status", body = DeveloperDto),
        (status = 404, description = "Developer not found", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let developer = state
        .developers
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::with_client_status(e, StatusCode::NOT_FOUND))?;
    Ok(ok_one(DeveloperDto::from(developer)))
}

#[utoipa::path(
    get,
    path = "/api/v1/developers",
    tag = "developers",
    responses((status = 200, description = "All ACTIVE developers", body = Vec<DeveloperDto>))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let developers = state.developers.list_active().await?;
    Ok(ok_many(developers.into_iter().map(DeveloperDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/developers/specialty/{specialty}",
    tag = "developers",
    params(("specialty" = String, Path, description = "Exact specialty, e.g. Java")),
    responses((status = 200, description = "ACTIVE developers with this specialty", body = Vec<DeveloperDto>))
)]
pub async fn list_by_specialty(
    State(state): State<AppState>,
    Path(specialty): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let developers = state.developers.list_active_by_specialty(&specialty).await?;
    Ok(ok_many(developers.into_iter().map(DeveloperDto::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/developers/{id}",
    tag = "developers",
    params(("id" = i32, Path, description = "Developer id"), DeleteParams),
    responses(
        (status = 200, description = "Developer deleted"),
        (status = 400, description = "Developer not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    let result = if params.is_hard {
        state.developers.hard_delete(id).await
    } else {
        state.developers.soft_delete(id).await
    };
    result.map_err(|e| ApiError::with_client_status(e, StatusCode::BAD_REQUEST))?;
    Ok(StatusCode::OK)
}
