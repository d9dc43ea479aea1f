//! Per-player performance summaries derived from stored match results.
//!
//! All derivation is pure; the caller fetches the player's results ordered
//! by creation time ascending and hands them over.

use rust_decimal::Decimal;

use crate::dto::stats::{CumulativePoint, RankDistribution};
use crate::models::MatchResult;

/// Window for the "recent form" average rank.
pub const RECENT_FORM_GAMES: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub games_played: i64,
    pub total_points: Decimal,
    pub average_rank: Option<Decimal>,
    pub recent_average_rank: Option<Decimal>,
    pub best_raw_score: Option<i32>,
    pub best_net_score: Option<Decimal>,
    pub rank_distribution: RankDistribution,
    pub cumulative_points: Vec<CumulativePoint>,
}

/// Summarizes a player's results. `results` must be ordered oldest first so
/// the cumulative series and the recent-form window line up with play order.
pub fn summarize(results: &[MatchResult]) -> PerformanceSummary {
    let mut distribution = RankDistribution::default();
    let mut running_total = Decimal::ZERO;
    let mut cumulative = Vec::with_capacity(results.len());

    for (i, result) in results.iter().enumerate() {
        distribution.record(result.rank);
        running_total += result.net_score;
        cumulative.push(CumulativePoint {
            game_number: (i + 1) as i64,
            played_at: result.created_at,
            running_total,
        });
    }

    PerformanceSummary {
        games_played: results.len() as i64,
        total_points: running_total,
        average_rank: average_rank(results),
        recent_average_rank: average_rank(recent_window(results)),
        best_raw_score: results.iter().map(|r| r.raw_score).max(),
        best_net_score: results.iter().map(|r| r.net_score).max(),
        rank_distribution: distribution,
        cumulative_points: cumulative,
    }
}

fn recent_window(results: &[MatchResult]) -> &[MatchResult] {
    let start = results.len().saturating_sub(RECENT_FORM_GAMES);
    &results[start..]
}

fn average_rank(results: &[MatchResult]) -> Option<Decimal> {
    if results.is_empty() {
        return None;
    }

    let sum: i64 = results.iter().map(|r| i64::from(r.rank)).sum();
    let avg = Decimal::from(sum) / Decimal::from(results.len() as i64);
    Some(avg.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn result(rank: i16, raw_score: i32, net_tenths: i64, minute: u32) -> MatchResult {
        MatchResult {
            result_id: Uuid::new_v4(),
            match_id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            raw_score,
            net_score: Decimal::new(net_tenths, 1),
            rank,
            created_at: NaiveDateTime::parse_from_str(
                &format!("2026-01-05 18:{minute:02}:00"),
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
        }
    }

    #[test]
    fn empty_history_yields_zeroed_summary() {
        let summary = summarize(&[]);

        assert_eq!(summary.games_played, 0);
        assert_eq!(summary.total_points, Decimal::ZERO);
        assert_eq!(summary.average_rank, None);
        assert_eq!(summary.recent_average_rank, None);
        assert_eq!(summary.best_raw_score, None);
        assert_eq!(summary.best_net_score, None);
        assert_eq!(summary.rank_distribution, RankDistribution::default());
        assert!(summary.cumulative_points.is_empty());
    }

    #[test]
    fn totals_and_distribution_accumulate() {
        let history = vec![
            result(1, 42_000, 620, 0),
            result(4, 12_000, -480, 1),
            result(2, 31_000, 110, 2),
            result(1, 38_000, 580, 3),
        ];

        let summary = summarize(&history);

        assert_eq!(summary.games_played, 4);
        assert_eq!(summary.total_points, Decimal::new(830, 1));
        assert_eq!(summary.average_rank, Some(Decimal::new(2, 0)));
        assert_eq!(summary.best_raw_score, Some(42_000));
        assert_eq!(summary.best_net_score, Some(Decimal::new(620, 1)));
        assert_eq!(
            summary.rank_distribution,
            RankDistribution {
                first: 2,
                second: 1,
                third: 0,
                fourth: 1,
            }
        );
    }

    #[test]
    fn cumulative_series_is_a_running_total() {
        let history = vec![
            result(1, 42_000, 620, 0),
            result(4, 12_000, -480, 1),
            result(3, 22_000, -180, 2),
        ];

        let summary = summarize(&history);
        let totals: Vec<Decimal> = summary
            .cumulative_points
            .iter()
            .map(|p| p.running_total)
            .collect();

        assert_eq!(
            totals,
            vec![
                Decimal::new(620, 1),
                Decimal::new(140, 1),
                Decimal::new(-40, 1),
            ]
        );
        assert_eq!(
            summary
                .cumulative_points
                .iter()
                .map(|p| p.game_number)
                .collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn average_rank_rounds_to_two_decimals() {
        let history = vec![
            result(1, 40_000, 500, 0),
            result(2, 30_000, 100, 1),
            result(2, 30_000, 100, 2),
        ];

        // (1 + 2 + 2) / 3 = 1.666... -> 1.67
        assert_eq!(
            summarize(&history).average_rank,
            Some(Decimal::new(167, 2))
        );
    }

    #[test]
    fn recent_form_only_covers_the_last_ten_games() {
        let mut history: Vec<MatchResult> =
            (0..12).map(|i| result(4, 10_000, -500, i)).collect();
        history.extend((12..22).map(|i| result(1, 45_000, 650, i)));

        let summary = summarize(&history);

        // Last ten games are all rank 1; the lifetime average is not.
        assert_eq!(summary.recent_average_rank, Some(Decimal::new(1, 0)));
        assert_ne!(summary.average_rank, summary.recent_average_rank);
    }
}
