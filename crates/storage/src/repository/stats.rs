use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::stats::LeaderboardEntry;
use crate::error::Result;

#[derive(FromRow)]
struct LeaderboardRow {
    player_id: Uuid,
    nickname: String,
    games_played: i64,
    total_points: Decimal,
    average_rank: Option<Decimal>,
}

pub struct StatsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// League table: every registered player with their aggregate record,
    /// best total first. Players without games sort last with zero points.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT p.player_id,
                   p.nickname,
                   COUNT(r.result_id) AS games_played,
                   COALESCE(SUM(r.net_score), 0) AS total_points,
                   ROUND(AVG(r.rank), 2) AS average_rank
            FROM players p
            LEFT JOIN match_results r ON r.player_id = p.player_id
            GROUP BY p.player_id, p.nickname
            ORDER BY total_points DESC, p.nickname
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let entries = rows
            .into_iter()
            .map(|row| LeaderboardEntry {
                player_id: row.player_id,
                nickname: row.nickname,
                games_played: row.games_played,
                total_points: row.total_points,
                average_rank: row.average_rank,
            })
            .collect();

        Ok(entries)
    }
}
