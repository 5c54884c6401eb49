//! Render snapshots for inter-thread communication.
//!
//! Snapshots are immutable captures of game state sent from the logic thread
//! to the render thread. This decouples game logic from rendering.

use crate::logic::audio::AudioStatus;
use crate::models::color::NUM_COLORS;
use crate::models::leaderboard::LeaderboardRow;
use crate::models::settings::GameMode;
use crate::state::game::Phase;

/// Everything the board needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub game: GameplaySnapshot,
    pub leaderboard: LeaderboardSnapshot,
}

/// Snapshot of the game board.
#[derive(Clone, Debug, PartialEq)]
pub struct GameplaySnapshot {
    pub phase: Phase,
    pub score: u32,
    pub mode: GameMode,
    pub audio_status: AudioStatus,
    /// Which buttons are currently lit, in board order.
    pub lit: [bool; NUM_COLORS],
    pub buttons_enabled: bool,
    pub round: usize,
}

/// Snapshot of the leaderboard panel.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardSnapshot {
    pub open: bool,
    pub rows: Vec<LeaderboardRow>,
}
