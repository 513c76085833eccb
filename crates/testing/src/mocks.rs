//! Mock implementations for repositories.
//!
//! Provides an in-memory score store for testing services without a
//! database.

use async_trait::async_trait;
use fastbreak_application::{ApplicationError, ScoreRepositoryPort};
use fastbreak_domain::{LeaderboardPage, LeaderboardQuery, NewScore, Score, ScoreId};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Store {
    scores: Vec<Score>,
    last_id: i64,
}

/// In-memory score repository
///
/// Ids are assigned sequentially from 1. Flip [`set_unavailable`] to make
/// every call fail the way an unreachable database would.
///
/// [`set_unavailable`]: InMemoryScoreRepository::set_unavailable
#[derive(Clone, Default)]
pub struct InMemoryScoreRepository {
    store: Arc<RwLock<Store>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate storage going away (or coming back)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.store.read().scores.len()
    }

    fn ensure_available(&self) -> Result<(), ApplicationError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(ApplicationError::ServiceUnavailable(
                "in-memory store marked unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ScoreRepositoryPort for InMemoryScoreRepository {
    async fn insert(&self, score: &NewScore) -> Result<Score, ApplicationError> {
        self.ensure_available()?;

        let mut store = self.store.write();
        store.last_id += 1;
        let score = score.clone().into_score(ScoreId::new(store.last_id));
        store.scores.push(score.clone());

        Ok(score)
    }

    async fn top_scores(
        &self,
        query: &LeaderboardQuery,
    ) -> Result<LeaderboardPage, ApplicationError> {
        self.ensure_available()?;

        let partition = self
            .store
            .read()
            .scores
            .iter()
            .filter(|s| s.in_partition(&query.game_type))
            .cloned()
            .collect();

        Ok(LeaderboardPage::from_partition(partition, query))
    }

    async fn ping(&self) -> Result<(), ApplicationError> {
        self.ensure_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_test_new_score;

    fn query(game_type: &str, limit: u32) -> LeaderboardQuery {
        LeaderboardQuery {
            game_type: game_type.to_string(),
            limit,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryScoreRepository::new();
        let first = repo
            .insert(&create_test_new_score("p1", "fast_break", 10, 0))
            .await
            .unwrap();
        let second = repo
            .insert(&create_test_new_score("p2", "practice", 20, 0))
            .await
            .unwrap();

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
        assert_eq!(repo.count(), 2);
    }

    #[tokio::test]
    async fn test_top_scores_filters_partition() {
        let repo = InMemoryScoreRepository::new();
        repo.insert(&create_test_new_score("p1", "fast_break", 10, 0))
            .await
            .unwrap();
        repo.insert(&create_test_new_score("p2", "practice", 99, 0))
            .await
            .unwrap();

        let page = repo.top_scores(&query("fast_break", 10)).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.scores[0].player_id, "p1");
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let repo = InMemoryScoreRepository::new();
        repo.set_unavailable(true);

        assert!(repo.ping().await.is_err());
        assert!(repo.top_scores(&query("fast_break", 10)).await.is_err());
        assert!(repo
            .insert(&create_test_new_score("p1", "fast_break", 10, 0))
            .await
            .is_err());

        repo.set_unavailable(false);
        assert!(repo.ping().await.is_ok());
    }
}
