//! Difficulty-scaled timing for sequence playback.

use std::time::Duration;

/// Sequence lengths per difficulty level.
pub const LEVEL_STEP: usize = 5;

/// Lead-in between "start game" and the first round.
pub const LEAD_IN: Duration = Duration::from_millis(400);
/// Pause after a completed round before the sequence grows.
pub const ROUND_COMPLETE_DELAY: Duration = Duration::from_millis(900);
/// Flash length for a player press.
pub const INPUT_FLASH: Duration = Duration::from_millis(150);

const BASE_HIGHLIGHT_MS: u64 = 500;
const HIGHLIGHT_STEP_MS: u64 = 60;
const MIN_HIGHLIGHT_MS: u64 = 180;

const BASE_GAP_MS: u64 = 350;
const GAP_STEP_MS: u64 = 40;
const MIN_GAP_MS: u64 = 140;

/// Highlight and gap durations for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingProfile {
    /// How long each button stays lit.
    pub highlight: Duration,
    /// Silence before each flash.
    pub gap: Duration,
}

impl TimingProfile {
    /// Difficulty level for a sequence of `len` colors.
    pub fn level(len: usize) -> u64 {
        (len / LEVEL_STEP) as u64
    }

    /// Profile for the round that extends a sequence of `previous_len` colors.
    ///
    /// Round 1 extends the empty sequence and therefore plays at level 0.
    pub fn for_previous_len(previous_len: usize) -> Self {
        let level = Self::level(previous_len);

        // Floors keep the game playable at high scores.
        let highlight_ms = BASE_HIGHLIGHT_MS
            .saturating_sub(HIGHLIGHT_STEP_MS.saturating_mul(level))
            .max(MIN_HIGHLIGHT_MS);
        let gap_ms = BASE_GAP_MS
            .saturating_sub(GAP_STEP_MS.saturating_mul(level))
            .max(MIN_GAP_MS);

        Self {
            highlight: Duration::from_millis(highlight_ms),
            gap: Duration::from_millis(gap_ms),
        }
    }

    /// Total playback time for a sequence of `len` colors.
    pub fn playback_duration(&self, len: usize) -> Duration {
        (self.gap + self.highlight) * len as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_levels() {
        let p = TimingProfile::for_previous_len(0);
        assert_eq!(p.highlight, Duration::from_millis(500));
        assert_eq!(p.gap, Duration::from_millis(350));

        let p = TimingProfile::for_previous_len(4);
        assert_eq!(p.highlight, Duration::from_millis(500));

        let p = TimingProfile::for_previous_len(5);
        assert_eq!(p.highlight, Duration::from_millis(440));
        assert_eq!(p.gap, Duration::from_millis(310));
    }

    #[test]
    fn test_monotonic_and_floored() {
        let mut last = TimingProfile::for_previous_len(0);
        for len in 1..500 {
            let p = TimingProfile::for_previous_len(len);
            assert!(p.highlight <= last.highlight);
            assert!(p.gap <= last.gap);
            assert!(p.highlight >= Duration::from_millis(MIN_HIGHLIGHT_MS));
            assert!(p.gap >= Duration::from_millis(MIN_GAP_MS));
            last = p;
        }
        assert_eq!(last.highlight, Duration::from_millis(180));
        assert_eq!(last.gap, Duration::from_millis(140));
    }

    #[test]
    fn test_huge_lengths_do_not_overflow() {
        let p = TimingProfile::for_previous_len(usize::MAX);
        assert_eq!(p.highlight, Duration::from_millis(180));
        assert_eq!(p.gap, Duration::from_millis(140));
    }

    #[test]
    fn test_playback_duration_is_linear() {
        let p = TimingProfile::for_previous_len(0);
        assert_eq!(p.playback_duration(3), Duration::from_millis(3 * 850));
    }
}
