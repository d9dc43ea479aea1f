use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::matches::{MatchResponse, MatchResultResponse};
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchResult};
use crate::services::scoring::ScoredResult;

/// One result row joined with the match timestamp and (when the player
/// still exists) their nickname.
#[derive(FromRow)]
struct HistoryRow {
    match_id: Uuid,
    match_created_at: NaiveDateTime,
    player_id: Uuid,
    nickname: Option<String>,
    raw_score: i32,
    net_score: Decimal,
    rank: i16,
}

pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a scored match: the match row plus its four result rows,
    /// all-or-nothing.
    pub async fn record(&self, results: &[ScoredResult]) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        let match_row = sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches DEFAULT VALUES
            RETURNING match_id, created_at
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        for result in results {
            sqlx::query(
                r#"
                INSERT INTO match_results (match_id, player_id, raw_score, net_score, rank)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(match_row.match_id)
            .bind(result.player_id)
            .bind(result.raw_score)
            .bind(result.net_score)
            .bind(result.rank)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(match_row.match_id)
    }

    /// Fetch one match with its results in rank order.
    pub async fn find_by_id(&self, match_id: Uuid) -> Result<MatchResponse> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT r.match_id, m.created_at AS match_created_at,
                   r.player_id, p.nickname, r.raw_score, r.net_score, r.rank
            FROM match_results r
            JOIN matches m ON m.match_id = r.match_id
            LEFT JOIN players p ON p.player_id = r.player_id
            WHERE r.match_id = $1
            ORDER BY r.rank
            "#,
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        group_rows(rows).pop().ok_or(StorageError::NotFound)
    }

    /// List matches newest first, each with its four results in rank order.
    pub async fn list(&self, pagination: &PaginationParams) -> Result<(Vec<MatchResponse>, i64)> {
        let total_items = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches")
            .fetch_one(self.pool)
            .await?;

        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT r.match_id, m.created_at AS match_created_at,
                   r.player_id, p.nickname, r.raw_score, r.net_score, r.rank
            FROM (
                SELECT match_id, created_at
                FROM matches
                ORDER BY created_at DESC, match_id
                LIMIT $1 OFFSET $2
            ) m
            JOIN match_results r ON r.match_id = m.match_id
            LEFT JOIN players p ON p.player_id = r.player_id
            ORDER BY m.created_at DESC, m.match_id, r.rank
            "#,
        )
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok((group_rows(rows), total_items))
    }

    /// A player's results ordered oldest first, the order the performance
    /// summary expects.
    pub async fn results_for_player(&self, player_id: Uuid) -> Result<Vec<MatchResult>> {
        let results = sqlx::query_as::<_, MatchResult>(
            r#"
            SELECT result_id, match_id, player_id, raw_score, net_score, rank, created_at
            FROM match_results
            WHERE player_id = $1
            ORDER BY created_at ASC, result_id
            "#,
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Delete a match; its result rows go with it (ON DELETE CASCADE).
    pub async fn delete(&self, match_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM matches WHERE match_id = $1")
            .bind(match_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// Folds already-ordered result rows into one response per match.
fn group_rows(rows: Vec<HistoryRow>) -> Vec<MatchResponse> {
    let mut matches: Vec<MatchResponse> = Vec::new();

    for row in rows {
        let result = MatchResultResponse {
            player_id: row.player_id,
            nickname: row.nickname,
            raw_score: row.raw_score,
            net_score: row.net_score,
            rank: row.rank,
        };

        match matches.last_mut() {
            Some(last) if last.match_id == row.match_id => last.results.push(result),
            _ => matches.push(MatchResponse {
                match_id: row.match_id,
                created_at: row.match_created_at,
                results: vec![result],
            }),
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(match_id: Uuid, rank: i16, nickname: Option<&str>) -> HistoryRow {
        HistoryRow {
            match_id,
            match_created_at: chrono::NaiveDateTime::default(),
            player_id: Uuid::new_v4(),
            nickname: nickname.map(String::from),
            raw_score: 25_000,
            net_score: Decimal::ZERO,
            rank,
        }
    }

    #[test]
    fn adjacent_rows_fold_into_one_match() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            row(a, 1, Some("ton")),
            row(a, 2, Some("nan")),
            row(a, 3, None),
            row(a, 4, Some("pei")),
            row(b, 1, Some("nan")),
            row(b, 2, Some("ton")),
        ];

        let grouped = group_rows(rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].match_id, a);
        assert_eq!(grouped[0].results.len(), 4);
        assert_eq!(grouped[0].results[2].nickname, None);
        assert_eq!(grouped[1].match_id, b);
        assert_eq!(grouped[1].results.len(), 2);
    }

    #[test]
    fn results_stay_in_rank_order_within_a_match() {
        let id = Uuid::new_v4();
        let rows = vec![row(id, 1, None), row(id, 2, None), row(id, 3, None)];

        let grouped = group_rows(rows);
        let ranks: Vec<i16> = grouped[0].results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }
}
