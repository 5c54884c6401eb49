//! Positional judging of player presses against the sequence.

use crate::models::color::Color;

/// Result of one accepted press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Correct so far, more presses expected.
    Continue,
    /// The whole sequence was repeated.
    RoundComplete,
    /// Wrong color: the game ends.
    Fail,
}

/// Appends `color` to `input` and judges it against `sequence`.
///
/// `input` must be shorter than `sequence` before the call.
pub fn submit(sequence: &[Color], input: &mut Vec<Color>, color: Color) -> Outcome {
    input.push(color);
    let idx = input.len() - 1;

    if sequence.get(idx) != Some(&color) {
        return Outcome::Fail;
    }

    if input.len() == sequence.len() {
        Outcome::RoundComplete
    } else {
        Outcome::Continue
    }
}
