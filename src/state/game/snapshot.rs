//! Snapshot creation for the game machine.

use super::GameMachine;
use crate::logic::audio::AudioContext;
use crate::logic::feedback::Haptics;
use crate::shared::snapshot::GameplaySnapshot;

impl<A: AudioContext, H: Haptics> GameMachine<A, H> {
    /// Creates a snapshot of the board for rendering.
    pub fn get_snapshot(&self) -> GameplaySnapshot {
        GameplaySnapshot {
            phase: self.session.phase,
            score: self.session.score,
            mode: self.mode,
            audio_status: self.feedback.audio_status(),
            lit: self.feedback.lit(),
            buttons_enabled: self.buttons_enabled(),
            round: self.session.sequence.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::super::Phase;
    use crate::logic::audio::AudioStatus;
    use crate::models::settings::GameMode;

    #[test]
    fn test_snapshot_of_fresh_machine() {
        let machine = machine(1);
        let snapshot = machine.get_snapshot();
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.mode, GameMode::Sound);
        assert_eq!(snapshot.audio_status, AudioStatus::Ready);
        assert!(!snapshot.buttons_enabled);
        assert_eq!(snapshot.round, 0);
    }

    #[test]
    fn test_snapshot_enables_buttons_on_player_turn() {
        let mut machine = machine(1);
        machine.start_game();
        run_until(&mut machine, Phase::AwaitingInput);
        let snapshot = machine.get_snapshot();
        assert!(snapshot.buttons_enabled);
        assert_eq!(snapshot.round, 1);
        assert!(snapshot.lit.iter().all(|&lit| !lit));
    }
}
