use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One player's line in a match: four of these exist per match, with ranks
/// forming the set {1,2,3,4}. `player_id` may reference a player that has
/// since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatchResult {
    pub result_id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub raw_score: i32,
    pub net_score: Decimal,
    pub rank: i16,
    pub created_at: chrono::NaiveDateTime,
}
