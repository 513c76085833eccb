//! Integration tests for the SQLite score repository
//!
//! Each test opens its own in-memory database; one test uses a file-backed
//! database to cover the WAL configuration path.

use fastbreak_application::{
    LeaderboardRequest, LeaderboardService, ScoreRepositoryPort, ServiceConfig, ServiceContext,
};
use fastbreak_domain::{LeaderboardQuery, Score};
use fastbreak_infrastructure::{DatabaseConfig, DatabasePool, SqliteScoreRepository};
use fastbreak_testing::builders::SubmitScoreRequestBuilder;
use fastbreak_testing::fixtures::{arb_new_score, create_test_new_score};
use std::sync::Arc;
use proptest::prelude::*;

async fn setup() -> (SqliteScoreRepository, DatabasePool) {
    let pool = DatabasePool::new(&DatabaseConfig::in_memory()).await.unwrap();
    pool.ensure_schema().await.unwrap();
    (SqliteScoreRepository::new(pool.clone()), pool)
}

fn query(game_type: &str, limit: u32) -> LeaderboardQuery {
    LeaderboardQuery {
        game_type: game_type.to_string(),
        limit,
    }
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let (repo, _pool) = setup().await;

    let first = repo
        .insert(&create_test_new_score("p1", "fast_break", 100, 0))
        .await
        .unwrap();
    let second = repo
        .insert(&create_test_new_score("p2", "practice", 50, 0))
        .await
        .unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.player_id, "p1");
    assert_eq!(first.score, 100);
    assert_eq!(first.stars, 1);
}

#[tokio::test]
async fn test_inserted_record_matches_what_is_read_back() {
    let (repo, _pool) = setup().await;
    let mut new_score = create_test_new_score("p1", "fast_break", 100, 0);
    new_score.timestamp = chrono::Utc::now();

    let inserted = repo.insert(&new_score).await.unwrap();
    let page = repo.top_scores(&query("fast_break", 10)).await.unwrap();

    assert_eq!(page.scores, vec![inserted]);
}

#[tokio::test]
async fn test_service_timestamps_never_precede_the_call() {
    let (repo, _pool) = setup().await;
    let service = LeaderboardService::new(Arc::new(repo), ServiceConfig::default());
    let ctx = ServiceContext::new("timestamps");

    for i in 0..200 {
        let before = chrono::Utc::now();
        let score = service
            .submit_score(&ctx, SubmitScoreRequestBuilder::new().with_score(i).build())
            .await
            .unwrap();
        let after = chrono::Utc::now();

        assert!(before <= score.timestamp, "{} < {}", score.timestamp, before);
        assert!(score.timestamp <= after);
    }

    let page = service
        .get_leaderboard(&ctx, LeaderboardRequest::new("fast_break", 100))
        .await
        .unwrap();
    assert_eq!(page.total, 200);
    for pair in page.scores.windows(2) {
        assert!(pair[0].score > pair[1].score);
    }
}

#[tokio::test]
async fn test_top_scores_scenario() {
    let (repo, _pool) = setup().await;
    repo.insert(&create_test_new_score("p1", "fast_break", 100, 0))
        .await
        .unwrap();
    repo.insert(&create_test_new_score("p2", "fast_break", 50, 1))
        .await
        .unwrap();

    let page = repo.top_scores(&query("fast_break", 10)).await.unwrap();
    assert_eq!(page.total, 2);
    let players: Vec<_> = page.scores.iter().map(|s| s.player_id.as_str()).collect();
    assert_eq!(players, vec!["p1", "p2"]);

    let page = repo.top_scores(&query("fast_break", 1)).await.unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.scores.len(), 1);
    assert_eq!(page.scores[0].score, 100);
}

#[tokio::test]
async fn test_equal_scores_rank_earliest_first() {
    let (repo, _pool) = setup().await;
    repo.insert(&create_test_new_score("late", "fast_break", 70, 30))
        .await
        .unwrap();
    repo.insert(&create_test_new_score("early", "fast_break", 70, 10))
        .await
        .unwrap();
    repo.insert(&create_test_new_score("same-time", "fast_break", 70, 10))
        .await
        .unwrap();

    let page = repo.top_scores(&query("fast_break", 10)).await.unwrap();
    let players: Vec<_> = page.scores.iter().map(|s| s.player_id.as_str()).collect();
    assert_eq!(players, vec!["early", "same-time", "late"]);
}

#[tokio::test]
async fn test_unknown_partition_is_empty() {
    let (repo, _pool) = setup().await;
    repo.insert(&create_test_new_score("p1", "fast_break", 100, 0))
        .await
        .unwrap();

    let page = repo.top_scores(&query("Fast_Break", 10)).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.scores.is_empty());
}

#[tokio::test]
async fn test_closed_pool_reports_unavailable() {
    let (repo, pool) = setup().await;
    assert!(repo.ping().await.is_ok());

    pool.close().await;

    let err = repo.ping().await.unwrap_err();
    assert_eq!(err.http_status(), 503);

    let err = repo
        .insert(&create_test_new_score("p1", "fast_break", 1, 0))
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 503);
}

#[tokio::test]
async fn test_file_database_persists_across_pools() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("scores.db").display()),
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::new(&config).await.unwrap();
    pool.ensure_schema().await.unwrap();
    SqliteScoreRepository::new(pool.clone())
        .insert(&create_test_new_score("p1", "fast_break", 42, 0))
        .await
        .unwrap();
    pool.close().await;

    let pool = DatabasePool::new(&config).await.unwrap();
    pool.ensure_schema().await.unwrap();
    let page = SqliteScoreRepository::new(pool)
        .top_scores(&query("fast_break", 10))
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.scores[0].score, 42);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_sql_order_matches_domain_order(
        scores in proptest::collection::vec(arb_new_score(), 1..30),
        limit in 1u32..40,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let (page, mut expected) = runtime.block_on(async {
            let (repo, _pool) = setup().await;
            let mut stored: Vec<Score> = Vec::new();
            for score in &scores {
                stored.push(repo.insert(score).await.unwrap());
            }
            let page = repo.top_scores(&query("fast_break", limit)).await.unwrap();
            (page, stored)
        });

        expected.retain(|s| s.game_type == "fast_break");
        let total = expected.len() as u64;
        expected.sort_by(Score::leaderboard_order);
        expected.truncate(limit as usize);

        prop_assert_eq!(page.total, total);
        prop_assert_eq!(page.scores, expected);
    }
}
