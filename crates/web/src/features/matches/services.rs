use sqlx::PgPool;
use storage::{
    dto::common::PaginationParams,
    dto::matches::{MatchResponse, RecordMatchRequest},
    repository::matches::MatchRepository,
    services::scoring::{self, ScoreEntry},
};
use uuid::Uuid;

use crate::error::WebError;

/// Score a submitted match and persist it atomically.
pub async fn record_match(
    pool: &PgPool,
    request: &RecordMatchRequest,
) -> Result<MatchResponse, WebError> {
    let entries: Vec<ScoreEntry> = request
        .entries
        .iter()
        .map(|e| ScoreEntry {
            player_id: e.player_id,
            raw_score: e.raw_score,
        })
        .collect();

    let results = scoring::compute_match_results(&entries)?;

    let repo = MatchRepository::new(pool);
    let match_id = repo.record(&results).await?;

    Ok(repo.find_by_id(match_id).await?)
}

/// Paginated match history, newest first.
pub async fn list_matches(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<(Vec<MatchResponse>, i64), WebError> {
    let repo = MatchRepository::new(pool);
    Ok(repo.list(pagination).await?)
}

/// Get one match with its results
pub async fn get_match(pool: &PgPool, match_id: Uuid) -> Result<MatchResponse, WebError> {
    let repo = MatchRepository::new(pool);
    Ok(repo.find_by_id(match_id).await?)
}

/// Delete a match and its result rows
pub async fn delete_match(pool: &PgPool, match_id: Uuid) -> Result<(), WebError> {
    let repo = MatchRepository::new(pool);
    Ok(repo.delete(match_id).await?)
}
