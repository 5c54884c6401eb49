pub mod color;
pub mod leaderboard;
pub mod settings;
pub mod timing;
