use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    dto::matches::{MatchResponse, RecordMatchRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = RecordMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Match scored and recorded", body = MatchResponse),
        (status = 400, description = "Validation or scoring error (entry count, duplicate player, score sum)"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "matches"
)]
pub async fn record_match(
    State(db): State<Database>,
    Json(req): Json<RecordMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let recorded = services::record_match(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(recorded)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches",
    params(PaginationParams),
    responses(
        (status = 200, description = "Match history, newest first", body = PaginatedResponse<MatchResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "matches"
)]
pub async fn list_matches(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (matches, total_items) = services::list_matches(db.pool(), &pagination).await?;

    let response = PaginatedResponse::new(
        matches,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match found", body = MatchResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let found = services::get_match(db.pool(), id).await?;

    Ok(Json(found).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Match and its results deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn delete_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_match(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
