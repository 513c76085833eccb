//! Score repository implementation.
//!
//! SQLite-backed persistence for score submissions and leaderboard reads.
//! Timestamps are stored as RFC 3339 text with fixed nanosecond precision
//! and a `Z` suffix so that lexical order matches chronological order.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, Transaction};
use tracing::{debug, instrument};

use fastbreak_application::{ApplicationError, ScoreRepositoryPort};
use fastbreak_domain::{LeaderboardPage, LeaderboardQuery, NewScore, Score, ScoreId, StorageError};

use crate::database::{DatabasePool, TransactionExt};
use crate::{Error, Result};

/// SQLite implementation of the score storage port.
#[derive(Debug, Clone)]
pub struct SqliteScoreRepository {
    pool: DatabasePool,
}

impl SqliteScoreRepository {
    /// Create a new SQLite score repository.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Insert a score in its own transaction.
    #[instrument(skip(self, score), fields(game_type = %score.game_type))]
    pub async fn create(&self, score: &NewScore) -> Result<Score> {
        let mut tx = self.pool.begin().await?;
        let result = insert_row(&mut tx, score).await;
        let id = tx.commit_or_rollback(result).await?;

        debug!(score_id = id, "Score inserted");

        Ok(score.clone().into_score(ScoreId::new(id)))
    }

    /// Read one leaderboard page and its partition size in one transaction.
    #[instrument(skip(self, query), fields(game_type = %query.game_type, limit = query.limit))]
    pub async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<LeaderboardPage> {
        let mut tx = self.pool.begin().await?;
        let result = read_page(&mut tx, query).await;
        tx.commit_or_rollback(result).await
    }
}

async fn insert_row(tx: &mut Transaction<'static, Sqlite>, score: &NewScore) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO scores (player_id, game_type, score, stars, timestamp)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&score.player_id)
    .bind(&score.game_type)
    .bind(score.score)
    .bind(score.stars)
    .bind(format_timestamp(score.timestamp))
    .execute(&mut **tx)
    .await
    .map_err(Error::Database)?;

    Ok(result.last_insert_rowid())
}

async fn read_page(
    tx: &mut Transaction<'static, Sqlite>,
    query: &LeaderboardQuery,
) -> Result<LeaderboardPage> {
    let rows = sqlx::query(
        r#"
        SELECT id, player_id, game_type, score, stars, timestamp
        FROM scores
        WHERE game_type = ?
        ORDER BY score DESC, timestamp ASC, id ASC
        LIMIT ?
        "#,
    )
    .bind(&query.game_type)
    .bind(i64::from(query.limit))
    .fetch_all(&mut **tx)
    .await
    .map_err(Error::Database)?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scores WHERE game_type = ?")
        .bind(&query.game_type)
        .fetch_one(&mut **tx)
        .await
        .map_err(Error::Database)?;

    let scores = rows.iter().map(row_to_score).collect::<Result<Vec<_>>>()?;

    Ok(LeaderboardPage {
        scores,
        total: u64::try_from(total).unwrap_or_default(),
    })
}

/// Convert a database row to a Score.
fn row_to_score(row: &SqliteRow) -> Result<Score> {
    let timestamp: String = row.try_get("timestamp")?;

    Ok(Score {
        id: ScoreId::new(row.try_get("id")?),
        player_id: row.try_get("player_id")?,
        game_type: row.try_get("game_type")?,
        score: row.try_get("score")?,
        stars: row.try_get("stars")?,
        timestamp: parse_timestamp(&timestamp)?,
    })
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::InvalidData(format!("timestamp '{value}': {e}")))
}

#[async_trait]
impl ScoreRepositoryPort for SqliteScoreRepository {
    async fn insert(&self, score: &NewScore) -> std::result::Result<Score, ApplicationError> {
        self.create(score).await.map_err(|e| {
            if e.is_unavailable() {
                ApplicationError::from(e)
            } else {
                StorageError::WriteFailed(e.to_string()).into()
            }
        })
    }

    async fn top_scores(
        &self,
        query: &LeaderboardQuery,
    ) -> std::result::Result<LeaderboardPage, ApplicationError> {
        self.leaderboard(query).await.map_err(Into::into)
    }

    async fn ping(&self) -> std::result::Result<(), ApplicationError> {
        self.pool.ping().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_timestamp_text_round_trips_at_nanosecond_precision() {
        let ts = Utc
            .with_ymd_and_hms(2024, 3, 1, 8, 30, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let text = format_timestamp(ts);
        assert_eq!(text, "2024-03-01T08:30:00.123456789Z");
        assert_eq!(parse_timestamp(&text).unwrap(), ts);

        let whole = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(whole), "2024-03-01T08:30:00.000000000Z");
    }

    #[test]
    fn test_timestamp_text_sorts_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let later = earlier + chrono::Duration::nanoseconds(1);
        assert!(format_timestamp(earlier) < format_timestamp(later));
    }

    #[test]
    fn test_unparseable_timestamp_is_invalid_data() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(Error::InvalidData(_))
        ));
    }
}
