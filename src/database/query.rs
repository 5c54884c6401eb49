//! Raw sqlx query helpers for the leaderboard store.

use crate::database::models::LeaderboardEntry;
use sqlx::SqlitePool;

/// Returns the best `limit` scores, highest first.
pub async fn get_top_scores(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT player, score FROM leaderboard ORDER BY score DESC, player ASC LIMIT ?1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Counts stored scores.
#[cfg(test)]
pub async fn count_scores(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM leaderboard")
        .fetch_one(pool)
        .await
}
