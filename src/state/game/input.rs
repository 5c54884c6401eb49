//! Player input handling for the game machine: presses and mode changes.

use super::{GameMachine, Phase, TimerEvent};
use crate::logic::audio::AudioContext;
use crate::logic::feedback::Haptics;
use crate::logic::judge::{self, Outcome};
use crate::models::color::Color;
use crate::models::settings::GameMode;
use crate::models::timing::{INPUT_FLASH, ROUND_COMPLETE_DELAY};

impl<A: AudioContext, H: Haptics> GameMachine<A, H> {
    /// Handles a press on a color button.
    ///
    /// Returns `None` when the press is ignored (outside `AwaitingInput` or
    /// during playback); the machine is left untouched in that case.
    pub fn submit(&mut self, color: Color) -> Option<Outcome> {
        if !self.buttons_enabled() {
            return None;
        }

        let generation = self.session.generation;
        self.feedback.press(color, self.mode);
        self.scheduler.schedule(
            INPUT_FLASH,
            generation,
            TimerEvent::Release {
                color,
                resume: false,
            },
        );

        let outcome = judge::submit(&self.session.sequence, &mut self.session.user_input, color);
        match outcome {
            Outcome::Fail => {
                self.session.phase = Phase::GameOver;
                log::info!("LOGIC: Game over, final score {}", self.session.score);
            }
            Outcome::RoundComplete => {
                self.session.score = self.session.sequence.len() as u32;
                self.session.phase = Phase::RoundComplete;
                self.scheduler
                    .schedule(ROUND_COMPLETE_DELAY, generation, TimerEvent::NextRound);
            }
            Outcome::Continue => {}
        }
        Some(outcome)
    }

    /// Switches between sound and silent. Takes effect on the next cue.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use std::time::Duration;
    use Color::*;

    #[test]
    fn test_full_repeat_scores_sequence_length() {
        let mut machine = machine(1);
        machine.start_game();
        run_until(&mut machine, Phase::AwaitingInput);
        force_sequence(&mut machine, vec![Red, Green, Blue]);

        assert_eq!(machine.submit(Red), Some(Outcome::Continue));
        assert_eq!(machine.submit(Green), Some(Outcome::Continue));
        assert_eq!(machine.submit(Blue), Some(Outcome::RoundComplete));
        assert_eq!(machine.session().score, 3);
        assert_eq!(machine.phase(), Phase::RoundComplete);
    }

    #[test]
    fn test_wrong_press_fails_immediately() {
        let mut machine = machine(1);
        machine.start_game();
        run_until(&mut machine, Phase::AwaitingInput);
        force_sequence(&mut machine, vec![Red, Green, Blue]);

        assert_eq!(machine.submit(Red), Some(Outcome::Continue));
        assert_eq!(machine.submit(Yellow), Some(Outcome::Fail));
        assert_eq!(machine.phase(), Phase::GameOver);
        assert_eq!(machine.session().score, 0);

        // Terminal: further presses are ignored.
        assert_eq!(machine.submit(Green), None);
    }

    #[test]
    fn test_round_complete_extends_after_delay() {
        let mut machine = machine(4);
        machine.start_game();
        run_until(&mut machine, Phase::AwaitingInput);
        let first = machine.session().sequence.clone();
        machine.submit(first[0]);

        machine.update(ROUND_COMPLETE_DELAY - Duration::from_millis(1));
        assert_eq!(machine.session().sequence.len(), 1);
        assert_eq!(machine.phase(), Phase::RoundComplete);
        assert_eq!(machine.submit(first[0]), None);

        machine.update(Duration::from_millis(1));
        assert_eq!(machine.session().sequence.len(), 2);
        assert_eq!(machine.session().sequence[0], first[0]);
        assert!(machine.session().user_input.is_empty());
        assert_eq!(machine.phase(), Phase::Playing);
    }

    #[test]
    fn test_presses_outside_awaiting_input_are_no_ops() {
        let mut machine = machine(8);

        let before = machine.session().clone();
        assert_eq!(machine.submit(Red), None);
        assert_eq!(machine.session(), &before);

        machine.start_game();
        machine.update(Duration::from_millis(500));
        assert_eq!(machine.phase(), Phase::Playing);

        let before = machine.session().clone();
        let pending = machine.pending_timers();
        let lit = machine.feedback().lit();
        assert_eq!(machine.submit(Blue), None);
        assert_eq!(machine.session(), &before);
        assert_eq!(machine.pending_timers(), pending);
        assert_eq!(machine.feedback().lit(), lit);
    }

    #[test]
    fn test_press_flashes_for_input_duration() {
        let mut machine = machine(1);
        machine.start_game();
        run_until(&mut machine, Phase::AwaitingInput);
        force_sequence(&mut machine, vec![Red, Red]);

        machine.submit(Red);
        assert!(machine.feedback().is_lit(Red));
        machine.update(INPUT_FLASH - Duration::from_millis(1));
        assert!(machine.feedback().is_lit(Red));
        machine.update(Duration::from_millis(1));
        assert!(!machine.feedback().is_lit(Red));
    }

    #[test]
    fn test_quick_repeat_press_keeps_its_own_flash() {
        let mut machine = machine(1);
        machine.start_game();
        run_until(&mut machine, Phase::AwaitingInput);
        force_sequence(&mut machine, vec![Red, Red, Blue]);

        machine.submit(Red);
        machine.update(Duration::from_millis(100));
        machine.submit(Red);

        // First flash ends at 150 ms, the second holds until 250 ms.
        machine.update(Duration::from_millis(60));
        assert!(machine.feedback().is_lit(Red));
        machine.update(Duration::from_millis(89));
        assert!(machine.feedback().is_lit(Red));
        machine.update(Duration::from_millis(1));
        assert!(!machine.feedback().is_lit(Red));
    }

    #[test]
    fn test_mode_toggle_only_affects_cues() {
        let mut machine = machine(6);
        machine.start_game();
        run_until(&mut machine, Phase::AwaitingInput);
        force_sequence(&mut machine, vec![Yellow, Blue]);
        machine.submit(Yellow);

        let before = machine.session().clone();
        let played = machine.feedback().audio().played.len();
        machine.toggle_mode();
        assert_eq!(machine.mode(), GameMode::Silent);
        assert_eq!(machine.session(), &before);

        machine.submit(Blue);
        assert_eq!(machine.feedback().audio().played.len(), played);
        assert_eq!(machine.session().score, 2);

        machine.set_mode(GameMode::Sound);
        run_until(&mut machine, Phase::AwaitingInput);
        assert_eq!(machine.feedback().audio().played.len(), played + 3);
    }

    #[test]
    fn test_toggling_mid_playback_silences_next_cue() {
        let mut machine = machine(10);
        machine.start_game();
        machine.update(Duration::from_millis(100));
        machine.toggle_mode();
        run_until(&mut machine, Phase::AwaitingInput);
        assert!(machine.feedback().audio().played.is_empty());
        assert_eq!(machine.feedback().haptics().pulses.len(), 1);
    }
}
