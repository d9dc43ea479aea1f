//! Match scoring: converts four raw table scores into ranked net-point
//! deltas.
//!
//! Conversion for the entry ranked `k` (0-indexed):
//!
//! ```text
//! net = (raw - BASE_POINTS) / POINT_SCALE + UMA[k]   (+ OKA_BONUS if k == 0)
//! ```
//!
//! The oka bonus is tuned so that the four net scores sum to zero before
//! rounding: the raw components sum to `(100_000 - 4 * 30_000) / 1_000 =
//! -20`, the uma offsets cancel each other, and the +20 oka closes the gap.
//! Changing any constant independently breaks the identity. Rounding is
//! applied per entry, so the rounded nets can drift off zero by the rounding
//! residual, at most 0.05 per seat (|sum| <= 0.2).

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use uuid::Uuid;

/// Raw-score value treated as the zero point of the conversion.
pub const BASE_POINTS: i64 = 30_000;
/// Per-rank point adjustment, indexed by rank 1..4.
pub const UMA: [i64; 4] = [30, 10, -10, -30];
/// Bonus awarded to the rank-1 finisher only.
pub const OKA_BONUS: i64 = 20;
/// Divisor turning raw table points into league points.
pub const POINT_SCALE: i64 = 1_000;
/// Sum the four raw scores of a legal match must reach.
pub const REQUIRED_TOTAL: i64 = 100_000;
/// A match is played by exactly four players.
pub const PLAYERS_PER_MATCH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("a match requires exactly 4 entries, got {0}")]
    InvalidEntryCount(usize),

    #[error("player {0} appears more than once in the match")]
    DuplicatePlayer(Uuid),

    #[error("raw scores must sum to 100000, got {0}")]
    ScoreSumMismatch(i64),
}

/// One player's raw table score, as collected at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player_id: Uuid,
    pub raw_score: i32,
}

/// The converted outcome for one player, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredResult {
    pub player_id: Uuid,
    pub raw_score: i32,
    pub net_score: Decimal,
    pub rank: i16,
}

/// Ranks four score entries and converts them to net points.
///
/// Returns results in rank order (rank 1 first). Ties on raw score resolve
/// in favor of the entry appearing earlier in the input; the sort is stable,
/// so this is deterministic. Net scores are rounded to one decimal with
/// half-away-from-zero, per entry, matching what gets persisted and shown;
/// no residual redistribution is done across seats.
///
/// Pure: no I/O, no hidden state. Persisting the output is the caller's job.
pub fn compute_match_results(entries: &[ScoreEntry]) -> Result<Vec<ScoredResult>, ScoringError> {
    if entries.len() != PLAYERS_PER_MATCH {
        return Err(ScoringError::InvalidEntryCount(entries.len()));
    }

    for (i, entry) in entries.iter().enumerate() {
        if entries[..i].iter().any(|e| e.player_id == entry.player_id) {
            return Err(ScoringError::DuplicatePlayer(entry.player_id));
        }
    }

    let total: i64 = entries.iter().map(|e| i64::from(e.raw_score)).sum();
    if total != REQUIRED_TOTAL {
        return Err(ScoringError::ScoreSumMismatch(total));
    }

    let mut seated: Vec<&ScoreEntry> = entries.iter().collect();
    // Stable sort: equal raw scores keep their input order.
    seated.sort_by(|a, b| b.raw_score.cmp(&a.raw_score));

    let results = seated
        .iter()
        .enumerate()
        .map(|(k, entry)| {
            let mut net = Decimal::from(i64::from(entry.raw_score) - BASE_POINTS)
                / Decimal::from(POINT_SCALE)
                + Decimal::from(UMA[k]);
            if k == 0 {
                net += Decimal::from(OKA_BONUS);
            }

            ScoredResult {
                player_id: entry.player_id,
                raw_score: entry.raw_score,
                net_score: net.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
                rank: (k + 1) as i16,
            }
        })
        .collect();

    Ok(results)
}
