//! Global state: the game machine plus the leaderboard panel.

use crate::database::{DbManager, DbStatus};
use crate::input::events::GameAction;
use crate::logic::audio::AudioContext;
use crate::logic::feedback::Haptics;
use crate::models::leaderboard::LeaderboardView;
use crate::shared::snapshot::{LeaderboardSnapshot, RenderState};
use crate::state::game::{GameMachine, Phase};
use std::time::Duration;

/// What the logic loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Exit,
}

pub struct GlobalState<A, H> {
    game: GameMachine<A, H>,
    leaderboard: LeaderboardView,
    db_manager: Option<DbManager>,
    last_leaderboard_version: u64,
}

impl<A: AudioContext, H: Haptics> GlobalState<A, H> {
    pub fn new(game: GameMachine<A, H>, db_manager: Option<DbManager>) -> Self {
        log::info!("LOGIC: Initializing Global State");
        Self {
            game,
            leaderboard: LeaderboardView::new(),
            db_manager,
            last_leaderboard_version: 0,
        }
    }

    pub fn game(&self) -> &GameMachine<A, H> {
        &self.game
    }

    pub fn handle_action(&mut self, action: GameAction) -> Transition {
        match action {
            GameAction::Press(color) => {
                if let Some(outcome) = self.game.submit(color) {
                    log::debug!("LOGIC: {} -> {:?}", color, outcome);
                }
            }
            GameAction::StartGame => self.game.start_game(),
            GameAction::ToggleMode => self.game.toggle_mode(),
            GameAction::SetMode(mode) => self.game.set_mode(mode),
            GameAction::ToggleLeaderboard => {
                self.leaderboard.toggle();
                if self.leaderboard.open
                    && let Some(db) = &self.db_manager
                {
                    db.fetch_leaderboard();
                }
            }
            GameAction::DismissGameOver => self.game.acknowledge_game_over(),
            GameAction::TestSound => self.game.feedback_mut().play_test_tone(),
            GameAction::SaveScore => {
                if self.game.phase() == Phase::GameOver {
                    log::info!(
                        "LOGIC: Saving scores is not available (score {})",
                        self.game.session().score
                    );
                }
            }
            GameAction::Quit => return Transition::Exit,
        }
        Transition::None
    }

    /// Ticks the game clock and pulls fresh leaderboard data.
    pub fn update(&mut self, dt: Duration) {
        self.game.update(dt);
        self.sync_db_to_leaderboard();
    }

    /// Mirrors database results into the panel whenever a new load lands.
    fn sync_db_to_leaderboard(&mut self) {
        let Some(db) = &self.db_manager else {
            return;
        };
        let db_state = db.get_state();
        if let Ok(guard) = db_state.try_lock()
            && matches!(guard.status, DbStatus::Idle)
            && guard.leaderboard_version != self.last_leaderboard_version
        {
            self.leaderboard.update_entries(guard.leaderboard.clone());
            self.last_leaderboard_version = guard.leaderboard_version;
        }
    }

    pub fn create_snapshot(&self) -> RenderState {
        RenderState {
            game: self.game.get_snapshot(),
            leaderboard: LeaderboardSnapshot {
                open: self.leaderboard.open,
                rows: self.leaderboard.rows(),
            },
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(db) = &self.db_manager {
            db.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::cue::fakes::RecordingAudio;
    use crate::logic::feedback::FeedbackController;
    use crate::logic::feedback::fakes::RecordingHaptics;
    use crate::models::color::{Color, Pitch};
    use crate::models::settings::GameMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state() -> GlobalState<RecordingAudio, RecordingHaptics> {
        let feedback =
            FeedbackController::new(RecordingAudio::ready(), RecordingHaptics::default(), 60);
        let game = GameMachine::new(feedback, GameMode::Sound, StdRng::seed_from_u64(3));
        GlobalState::new(game, None)
    }

    #[test]
    fn test_start_and_play_through_actions() {
        let mut state = state();
        assert_eq!(state.handle_action(GameAction::StartGame), Transition::None);
        for _ in 0..2000 {
            state.update(Duration::from_millis(1));
        }
        assert_eq!(state.game().phase(), Phase::AwaitingInput);

        let color = state.game().session().sequence[0];
        state.handle_action(GameAction::Press(color));
        assert_eq!(state.game().session().score, 1);
    }

    #[test]
    fn test_mode_actions() {
        let mut state = state();
        state.handle_action(GameAction::SetMode(GameMode::Silent));
        assert_eq!(state.game().mode(), GameMode::Silent);
        state.handle_action(GameAction::ToggleMode);
        assert_eq!(state.game().mode(), GameMode::Sound);
    }

    #[test]
    fn test_test_sound_plays_c4() {
        let mut state = state();
        state.handle_action(GameAction::SetMode(GameMode::Silent));
        state.handle_action(GameAction::TestSound);
        let played = &state.game().feedback().audio().played;
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].0, Pitch::C4);
    }

    #[test]
    fn test_leaderboard_toggle_without_source() {
        let mut state = state();
        state.handle_action(GameAction::ToggleLeaderboard);
        let snapshot = state.create_snapshot();
        assert!(snapshot.leaderboard.open);
        assert!(snapshot.leaderboard.rows.is_empty());
    }

    #[test]
    fn test_save_score_changes_nothing() {
        let mut state = state();
        let before = state.game().session().clone();
        state.handle_action(GameAction::SaveScore);
        assert_eq!(state.game().session(), &before);
        assert_eq!(state.handle_action(GameAction::Press(Color::Red)), Transition::None);
    }

    #[test]
    fn test_quit_exits() {
        let mut state = state();
        assert_eq!(state.handle_action(GameAction::Quit), Transition::Exit);
    }
}
