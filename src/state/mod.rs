//! State management module.
//!
//! - `GameMachine` - rounds, playback and judging
//! - `GlobalState` - the machine plus the leaderboard panel, fed by actions

pub mod game;
pub mod global;

pub use game::{GameMachine, GameSession, Phase};
pub use global::{GlobalState, Transition};
