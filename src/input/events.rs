use crate::models::color::Color;
use crate::models::settings::GameMode;

/// One key read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInputEvent {
    pub key: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // Gameplay
    Press(Color),
    StartGame,

    // Mode
    ToggleMode,
    SetMode(GameMode),

    // Panels
    ToggleLeaderboard,
    DismissGameOver,

    // Extras
    TestSound,
    /// Disabled on the game-over panel; logged only.
    SaveScore,

    // System
    Quit,
}

impl GameAction {
    /// Parses an action name used in the `[keybinds]` settings table.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Ok(color) = name.parse::<Color>() {
            return Some(GameAction::Press(color));
        }
        match name {
            "start" => Some(GameAction::StartGame),
            "toggle_mode" => Some(GameAction::ToggleMode),
            "sound" => Some(GameAction::SetMode(GameMode::Sound)),
            "silent" => Some(GameAction::SetMode(GameMode::Silent)),
            "leaderboard" => Some(GameAction::ToggleLeaderboard),
            "dismiss" => Some(GameAction::DismissGameOver),
            "test_sound" => Some(GameAction::TestSound),
            "save_score" => Some(GameAction::SaveScore),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }
}
