pub mod connection;
pub mod manager;
pub mod models;
pub mod query;

pub use connection::Database;
pub use manager::{DbManager, DbStatus};
pub use models::LeaderboardEntry;
