//! Board colors and the pitch bound to each of them.

use serde::{Deserialize, Serialize};

/// Number of buttons on the board.
pub const NUM_COLORS: usize = 4;

/// One of the four board buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Every color in board order.
    pub const ALL: [Color; NUM_COLORS] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// Position of the button on the board.
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Blue => 3,
        }
    }

    /// Fixed tone played for this button.
    pub fn pitch(self) -> Pitch {
        match self {
            Color::Red => Pitch::C4,
            Color::Yellow => Pitch::E4,
            Color::Green => Pitch::G4,
            Color::Blue => Pitch::B4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    /// RGBA tint used when the button is lit.
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Color::Red => [1.0, 0.0, 0.0, 1.0],
            Color::Yellow => [1.0, 1.0, 0.0, 1.0],
            Color::Green => [0.0, 1.0, 0.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            other => Err(format!("Unknown color: {}", other)),
        }
    }
}

/// Musical pitch of a cue (C major seventh: C, E, G, B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pitch {
    C4,
    E4,
    G4,
    B4,
}

impl Pitch {
    /// Semitone distance from A4.
    fn semitones_from_a4(self) -> i32 {
        match self {
            Pitch::C4 => -9,
            Pitch::E4 => -5,
            Pitch::G4 => -2,
            Pitch::B4 => 2,
        }
    }

    /// Equal-tempered frequency in Hz (A4 = 440 Hz).
    pub fn frequency(self) -> f32 {
        440.0 * 2f32.powf(self.semitones_from_a4() as f32 / 12.0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Pitch::C4 => "C4",
            Pitch::E4 => "E4",
            Pitch::G4 => "G4",
            Pitch::B4 => "B4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_color_has_a_distinct_pitch() {
        let mut pitches: Vec<Pitch> = Color::ALL.iter().map(|c| c.pitch()).collect();
        pitches.dedup();
        assert_eq!(pitches.len(), NUM_COLORS);
    }

    #[test]
    fn test_pitch_frequencies() {
        assert!((Pitch::C4.frequency() - 261.63).abs() < 0.01);
        assert!((Pitch::E4.frequency() - 329.63).abs() < 0.01);
        assert!((Pitch::G4.frequency() - 392.00).abs() < 0.01);
        assert!((Pitch::B4.frequency() - 493.88).abs() < 0.01);
    }

    #[test]
    fn test_index_matches_board_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("Green".parse::<Color>(), Ok(Color::Green));
        assert!("purple".parse::<Color>().is_err());
    }
}
