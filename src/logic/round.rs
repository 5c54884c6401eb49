//! Round generation and sequence playback.
//!
//! Playback is a finite list of steps pulled one at a time by the game
//! machine, which turns each step into a timer. Nothing here sleeps.

use crate::models::color::Color;
use crate::models::timing::TimingProfile;
use rand::Rng;
use std::time::Duration;

/// Extends `sequence` with one uniformly chosen color.
///
/// Returns the timing profile for the new round, computed from the length
/// before extension.
pub fn advance<R: Rng>(sequence: &mut Vec<Color>, rng: &mut R) -> TimingProfile {
    let timing = TimingProfile::for_previous_len(sequence.len());
    let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
    sequence.push(color);
    timing
}

/// One step of a sequence replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStep {
    /// Silence before the next flash.
    Wait(Duration),
    /// Light `color` for `hold`.
    Flash { color: Color, hold: Duration },
}

/// Replay of a full sequence: wait, flash, wait, flash...
#[derive(Debug, Clone)]
pub struct Playback {
    sequence: Vec<Color>,
    timing: TimingProfile,
    cursor: usize,
}

impl Playback {
    pub fn new(sequence: Vec<Color>, timing: TimingProfile) -> Self {
        Self {
            sequence,
            timing,
            cursor: 0,
        }
    }

    /// Rewinds to the first step.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.cursor >= self.sequence.len() * 2
    }
}

impl Iterator for Playback {
    type Item = PlaybackStep;

    fn next(&mut self) -> Option<PlaybackStep> {
        let color = *self.sequence.get(self.cursor / 2)?;
        let step = if self.cursor % 2 == 0 {
            PlaybackStep::Wait(self.timing.gap)
        } else {
            PlaybackStep::Flash {
                color,
                hold: self.timing.highlight,
            }
        };
        self.cursor += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sequence.len() * 2).saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sequences_grow_by_prefix_extension() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sequence = Vec::new();
        let mut previous = Vec::new();

        for round in 1..=40 {
            advance(&mut sequence, &mut rng);
            assert_eq!(sequence.len(), round);
            assert_eq!(&sequence[..previous.len()], previous.as_slice());
            previous = sequence.clone();
        }
    }

    #[test]
    fn test_every_color_eventually_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sequence = Vec::new();
        for _ in 0..200 {
            advance(&mut sequence, &mut rng);
        }
        for color in Color::ALL {
            assert!(sequence.contains(&color), "{} never drawn", color);
        }
    }

    #[test]
    fn test_advance_uses_length_before_extension() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sequence = vec![Color::Red; 5];
        let timing = advance(&mut sequence, &mut rng);
        assert_eq!(timing, TimingProfile::for_previous_len(5));
        assert_eq!(timing.highlight, Duration::from_millis(440));
    }

    #[test]
    fn test_playback_steps_in_order() {
        let timing = TimingProfile::for_previous_len(0);
        let steps: Vec<_> = Playback::new(vec![Color::Red, Color::Blue], timing).collect();

        assert_eq!(
            steps,
            vec![
                PlaybackStep::Wait(timing.gap),
                PlaybackStep::Flash { color: Color::Red, hold: timing.highlight },
                PlaybackStep::Wait(timing.gap),
                PlaybackStep::Flash { color: Color::Blue, hold: timing.highlight },
            ]
        );
    }

    #[test]
    fn test_playback_restart() {
        let timing = TimingProfile::for_previous_len(0);
        let mut playback = Playback::new(vec![Color::Green], timing);
        assert_eq!(playback.len(), 2);
        playback.by_ref().for_each(drop);
        assert!(playback.is_finished());
        assert_eq!(playback.next(), None);

        playback.restart();
        assert_eq!(playback.next(), Some(PlaybackStep::Wait(timing.gap)));
    }
}
