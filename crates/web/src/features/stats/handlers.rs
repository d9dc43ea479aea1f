use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::stats::{LeaderboardEntry, PlayerStatsResponse},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats/leaderboard",
    responses(
        (status = 200, description = "All players with aggregate record, best total first", body = Vec<LeaderboardEntry>)
    ),
    tag = "stats"
)]
pub async fn leaderboard(State(db): State<Database>) -> Result<Response, WebError> {
    let entries = services::leaderboard(db.pool()).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    get,
    path = "/api/stats/players/{id}",
    params(
        ("id" = Uuid, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Per-player statistics with rank distribution and cumulative series", body = PlayerStatsResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "stats"
)]
pub async fn player_stats(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let stats = services::player_stats(db.pool(), id).await?;

    Ok(Json(stats).into_response())
}
