use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the league leaderboard, ordered by total points descending.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub player_id: Uuid,
    pub nickname: String,
    pub games_played: i64,
    pub total_points: Decimal,
    /// Null for players who have not played yet.
    pub average_rank: Option<Decimal>,
}

/// How often a player finished in each place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankDistribution {
    pub first: i64,
    pub second: i64,
    pub third: i64,
    pub fourth: i64,
}

impl RankDistribution {
    pub fn record(&mut self, rank: i16) {
        match rank {
            1 => self.first += 1,
            2 => self.second += 1,
            3 => self.third += 1,
            _ => self.fourth += 1,
        }
    }
}

/// One point of a player's cumulative score series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CumulativePoint {
    pub game_number: i64,
    pub played_at: NaiveDateTime,
    pub running_total: Decimal,
}

/// Full per-player statistics view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerStatsResponse {
    pub player_id: Uuid,
    pub nickname: String,
    pub games_played: i64,
    pub total_points: Decimal,
    pub average_rank: Option<Decimal>,
    /// Average rank over the most recent games only.
    pub recent_average_rank: Option<Decimal>,
    pub best_raw_score: Option<i32>,
    pub best_net_score: Option<Decimal>,
    pub rank_distribution: RankDistribution,
    pub cumulative_points: Vec<CumulativePoint>,
}
