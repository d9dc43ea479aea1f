use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::player::{CreatePlayerRequest, PlayerResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "List all registered players", body = Vec<PlayerResponse>)
    ),
    tag = "players"
)]
pub async fn list_players(State(db): State<Database>) -> Result<Response, WebError> {
    let players = services::list_players(db.pool()).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    params(
        ("id" = Uuid, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let player = services::get_player(db.pool(), id).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Player registered successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Nickname already taken")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(db): State<Database>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let player = services::create_player(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    params(
        ("id" = Uuid, Path, description = "Player ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Player deleted; their match history is preserved"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn delete_player(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_player(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
