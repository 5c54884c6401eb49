//! Audio cue player: one fixed tone per color.

use crate::logic::audio::{AudioContext, AudioError};
use crate::models::color::{Color, Pitch};
use crate::models::settings::GameMode;
use std::time::Duration;

/// Length of the tone played for each cue, independent of the flash length.
pub const CUE_LENGTH: Duration = Duration::from_millis(150);

/// Length of the tone played by the test-sound control.
pub const TEST_TONE_LENGTH: Duration = Duration::from_millis(200);

/// Plays the tone of `color`.
///
/// Silent mode and a synthesizer that is still initializing are both
/// treated as a successful no-op.
pub fn play(audio: &mut dyn AudioContext, mode: GameMode, color: Color) -> Result<(), AudioError> {
    if mode == GameMode::Silent || !audio.synth_ready() {
        return Ok(());
    }

    let pitch = color.pitch();
    audio.trigger_attack_release(pitch, CUE_LENGTH)?;
    log::debug!("AUDIO: Playing note {}", pitch.name());
    Ok(())
}

/// Plays C4 regardless of mode, starting the context first.
pub fn play_test_tone(audio: &mut dyn AudioContext) {
    if let Err(e) = audio.start() {
        log::error!("AUDIO: Test sound error: {}", e);
        return;
    }
    if !audio.synth_ready() {
        return;
    }
    match audio.trigger_attack_release(Pitch::C4, TEST_TONE_LENGTH) {
        Ok(()) => log::info!("AUDIO: Test sound played"),
        Err(e) => log::error!("AUDIO: Test sound error: {}", e),
    }
}
