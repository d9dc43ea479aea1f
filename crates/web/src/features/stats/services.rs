use sqlx::PgPool;
use storage::{
    dto::stats::{LeaderboardEntry, PlayerStatsResponse},
    error::Result,
    repository::{matches::MatchRepository, player::PlayerRepository, stats::StatsRepository},
    services::performance,
};
use uuid::Uuid;

/// League leaderboard, best total first
pub async fn leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    let repo = StatsRepository::new(pool);
    repo.leaderboard().await
}

/// Full statistics view for one player
pub async fn player_stats(pool: &PgPool, player_id: Uuid) -> Result<PlayerStatsResponse> {
    let player = PlayerRepository::new(pool).find_by_id(player_id).await?;
    let results = MatchRepository::new(pool)
        .results_for_player(player_id)
        .await?;

    let summary = performance::summarize(&results);

    Ok(PlayerStatsResponse {
        player_id: player.player_id,
        nickname: player.nickname,
        games_played: summary.games_played,
        total_points: summary.total_points,
        average_rank: summary.average_rank,
        recent_average_rank: summary.recent_average_rank,
        best_raw_score: summary.best_raw_score,
        best_net_score: summary.best_net_score,
        rank_distribution: summary.rank_distribution,
        cumulative_points: summary.cumulative_points,
    })
}
