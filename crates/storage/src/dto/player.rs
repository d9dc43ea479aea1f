use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub player_id: Uuid,
    pub nickname: String,
    pub created_at: NaiveDateTime,
}

/// Request payload for registering a new player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Nickname must be between 1 and 64 characters"
    ))]
    pub nickname: String,
}

impl From<crate::models::Player> for PlayerResponse {
    fn from(player: crate::models::Player) -> Self {
        Self {
            player_id: player.player_id,
            nickname: player.nickname,
            created_at: player.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_nickname_fails_validation() {
        let req = CreatePlayerRequest {
            nickname: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn reasonable_nickname_passes() {
        let req = CreatePlayerRequest {
            nickname: "east-seat-ace".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
