//! Feedback pulse: the visual flash, the tone and the haptic buzz of one cue.
//!
//! A pulse is split in two halves. `press` lights the button and fires the
//! tone and haptics; `release` clears the light once the hold has elapsed.
//! The hold itself is a timer owned by the game machine. Overlapping pulses
//! on one color are counted, so the light stays on until the last one ends.

use crate::logic::audio::{AudioContext, AudioStatus};
use crate::logic::cue;
use crate::models::color::{Color, NUM_COLORS};
use crate::models::settings::GameMode;

/// Host vibration capability.
pub trait Haptics {
    fn supported(&self) -> bool;
    fn vibrate(&mut self, ms: u32);
}

/// Host without a vibration motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn supported(&self) -> bool {
        false
    }

    fn vibrate(&mut self, _ms: u32) {}
}

pub struct FeedbackController<A, H> {
    audio: A,
    haptics: H,
    haptic_pulse_ms: u32,
    /// Pulses still holding each color.
    held: [u32; NUM_COLORS],
}

impl<A: AudioContext, H: Haptics> FeedbackController<A, H> {
    pub fn new(audio: A, haptics: H, haptic_pulse_ms: u32) -> Self {
        Self {
            audio,
            haptics,
            haptic_pulse_ms,
            held: [0; NUM_COLORS],
        }
    }

    /// Lights `color` and fires its tone and haptic pulse.
    ///
    /// Audio failures are logged and never stop the flash.
    pub fn press(&mut self, color: Color, mode: GameMode) {
        let held = &mut self.held[color.index()];
        *held = held.saturating_add(1);

        if !self.audio.is_running()
            && let Err(e) = self.audio.start()
        {
            log::warn!("AUDIO: Could not start context: {}", e);
        }

        if let Err(e) = cue::play(&mut self.audio, mode, color) {
            log::warn!("AUDIO: Error playing sound: {}", e);
        }

        if self.haptics.supported() {
            self.haptics.vibrate(self.haptic_pulse_ms);
        }
    }

    /// Ends one pulse on `color`.
    pub fn release(&mut self, color: Color) {
        let held = &mut self.held[color.index()];
        *held = held.saturating_sub(1);
    }

    pub fn release_all(&mut self) {
        self.held = [0; NUM_COLORS];
    }

    pub fn lit(&self) -> [bool; NUM_COLORS] {
        self.held.map(|count| count > 0)
    }

    pub fn is_lit(&self, color: Color) -> bool {
        self.held[color.index()] > 0
    }

    pub fn play_test_tone(&mut self) {
        cue::play_test_tone(&mut self.audio);
    }

    pub fn audio_status(&self) -> AudioStatus {
        self.audio.status()
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::Haptics;

    #[derive(Debug, Default)]
    pub struct RecordingHaptics {
        pub pulses: Vec<u32>,
    }

    impl Haptics for RecordingHaptics {
        fn supported(&self) -> bool {
            true
        }

        fn vibrate(&mut self, ms: u32) {
            self.pulses.push(ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::RecordingHaptics;
    use super::*;
    use crate::logic::cue::fakes::RecordingAudio;
    use crate::models::color::Pitch;

    #[test]
    fn test_press_lights_plays_and_vibrates() {
        let mut feedback =
            FeedbackController::new(RecordingAudio::ready(), RecordingHaptics::default(), 60);
        feedback.press(Color::Blue, GameMode::Sound);

        assert!(feedback.is_lit(Color::Blue));
        assert!(!feedback.is_lit(Color::Red));
        assert_eq!(feedback.audio().starts, 1);
        assert_eq!(feedback.audio().played[0].0, Pitch::B4);
        assert_eq!(feedback.haptics().pulses, vec![60]);

        feedback.release(Color::Blue);
        assert!(!feedback.is_lit(Color::Blue));
    }

    #[test]
    fn test_running_context_is_not_restarted() {
        let mut feedback = FeedbackController::new(RecordingAudio::ready(), NoHaptics, 60);
        feedback.press(Color::Red, GameMode::Sound);
        feedback.press(Color::Red, GameMode::Sound);
        assert_eq!(feedback.audio().starts, 1);
        assert_eq!(feedback.audio().played.len(), 2);
    }

    #[test]
    fn test_playback_failure_keeps_visual_and_haptics() {
        let audio = RecordingAudio {
            fail_playback: true,
            ..RecordingAudio::ready()
        };
        let mut feedback = FeedbackController::new(audio, RecordingHaptics::default(), 60);
        feedback.press(Color::Yellow, GameMode::Sound);

        assert!(feedback.is_lit(Color::Yellow));
        assert_eq!(feedback.haptics().pulses.len(), 1);
    }

    #[test]
    fn test_failed_context_start_keeps_visual_and_haptics() {
        let audio = RecordingAudio {
            fail_start: true,
            ..RecordingAudio::ready()
        };
        let mut feedback = FeedbackController::new(audio, RecordingHaptics::default(), 60);
        feedback.press(Color::Green, GameMode::Sound);

        assert!(feedback.is_lit(Color::Green));
        assert_eq!(feedback.audio().starts, 1);
        assert!(!feedback.audio().running);
        assert_eq!(feedback.audio().played.len(), 1);
        assert_eq!(feedback.haptics().pulses, vec![60]);

        // The next press tries to start the context again.
        feedback.press(Color::Green, GameMode::Sound);
        assert_eq!(feedback.audio().starts, 2);
    }

    #[test]
    fn test_overlapping_pulses_hold_until_the_last_release() {
        let mut feedback = FeedbackController::new(RecordingAudio::ready(), NoHaptics, 60);
        feedback.press(Color::Red, GameMode::Silent);
        feedback.press(Color::Red, GameMode::Silent);

        feedback.release(Color::Red);
        assert!(feedback.is_lit(Color::Red));
        feedback.release(Color::Red);
        assert!(!feedback.is_lit(Color::Red));

        // Extra releases never underflow.
        feedback.release(Color::Red);
        feedback.press(Color::Red, GameMode::Silent);
        assert!(feedback.is_lit(Color::Red));
    }

    #[test]
    fn test_release_all() {
        let mut feedback = FeedbackController::new(RecordingAudio::ready(), NoHaptics, 60);
        feedback.press(Color::Red, GameMode::Silent);
        feedback.press(Color::Green, GameMode::Silent);
        feedback.release_all();
        assert_eq!(feedback.lit(), [false; NUM_COLORS]);
    }
}
