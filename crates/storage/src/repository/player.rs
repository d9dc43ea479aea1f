use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::player::CreatePlayerRequest;
use crate::error::{Result, StorageError};
use crate::models::Player;

pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all players, ordered by nickname
    pub async fn list(&self) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT player_id, nickname, created_at
            FROM players
            ORDER BY nickname
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(players)
    }

    /// Find player by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT player_id, nickname, created_at
            FROM players
            WHERE player_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }

    /// Register a new player
    pub async fn create(&self, req: &CreatePlayerRequest) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (nickname)
            VALUES ($1)
            RETURNING player_id, nickname, created_at
            "#,
        )
        .bind(req.nickname.trim())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(format!(
                    "nickname '{}' is already taken",
                    req.nickname.trim()
                ))
            } else {
                err
            }
        })?;

        Ok(player)
    }

    /// Delete a player by ID. Their match results stay in place.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM players WHERE player_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
