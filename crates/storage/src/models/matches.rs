use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One completed round of play among exactly four players.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
}
