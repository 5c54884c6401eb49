//! Data structures mirroring the SQLite tables.

use sqlx::FromRow;

/// One leaderboard row as provided by the external score source.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LeaderboardEntry {
    /// Wallet address or other player identifier.
    pub player: String,
    pub score: i64,
}
