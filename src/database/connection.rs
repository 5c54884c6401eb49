use crate::database::models::LeaderboardEntry;
use crate::database::query;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::{Path, PathBuf};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens or creates the leaderboard database.
    pub async fn new(db_path: &Path) -> Result<Self, sqlx::Error> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let absolute_path = if db_path.is_absolute() {
            db_path.to_path_buf()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(db_path)
        };

        let options = SqliteConnectOptions::new()
            .filename(&absolute_path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool (used with in-memory databases).
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        let db = Database { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Creates the table if it does not exist. Rows are written by the
    /// external score source only.
    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS leaderboard (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player TEXT NOT NULL,
                score INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Best `limit` scores, highest first.
    pub async fn get_top_scores(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        query::get_top_scores(&self.pool, limit).await
    }

    #[cfg(test)]
    pub async fn count_scores(&self) -> Result<i64, sqlx::Error> {
        query::count_scores(&self.pool).await
    }
}
