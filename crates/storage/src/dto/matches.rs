use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One seat's input when recording a match.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchEntryRequest {
    pub player_id: Uuid,
    pub raw_score: i32,
}

/// Request payload for recording a completed match.
///
/// The entry count, player uniqueness and score-sum constraints are enforced
/// by the scoring engine, which reports them with precise messages; the
/// `length` rule here only short-circuits grossly malformed payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordMatchRequest {
    #[validate(length(equal = 4, message = "A match requires exactly 4 entries"))]
    pub entries: Vec<MatchEntryRequest>,
}

/// One player's line in a stored match. `nickname` is null when the player
/// has been deleted since the match was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResultResponse {
    pub player_id: Uuid,
    pub nickname: Option<String>,
    pub raw_score: i32,
    pub net_score: Decimal,
    pub rank: i16,
}

/// A stored match with its four results in rank order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub created_at: NaiveDateTime,
    pub results: Vec<MatchResultResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(raw_score: i32) -> MatchEntryRequest {
        MatchEntryRequest {
            player_id: Uuid::new_v4(),
            raw_score,
        }
    }

    #[test]
    fn four_entries_pass_validation() {
        let req = RecordMatchRequest {
            entries: vec![entry(40_000), entry(30_000), entry(20_000), entry(10_000)],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn other_entry_counts_fail_validation() {
        let req = RecordMatchRequest {
            entries: vec![entry(50_000), entry(50_000)],
        };
        assert!(req.validate().is_err());

        let req = RecordMatchRequest { entries: vec![] };
        assert!(req.validate().is_err());
    }
}
