use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{leaderboard, player_stats};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/leaderboard", get(leaderboard))
        .route("/players/:id", get(player_stats))
}
