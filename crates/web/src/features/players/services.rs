use sqlx::PgPool;
use storage::{
    dto::player::CreatePlayerRequest,
    error::Result,
    models::Player,
    repository::player::PlayerRepository,
};
use uuid::Uuid;

/// List all players
pub async fn list_players(pool: &PgPool) -> Result<Vec<Player>> {
    let repo = PlayerRepository::new(pool);
    repo.list().await
}

/// Get player by ID
pub async fn get_player(pool: &PgPool, id: Uuid) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a new player
pub async fn create_player(pool: &PgPool, request: &CreatePlayerRequest) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.create(request).await
}

/// Delete a player; their historical match results are kept.
pub async fn delete_player(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = PlayerRepository::new(pool);
    repo.delete(id).await
}
