//! User settings persisted as `settings.toml`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.toml";

/// Whether cues are audible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Sound,
    Silent,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Sound => GameMode::Silent,
            GameMode::Silent => GameMode::Sound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode selected at launch.
    pub mode: GameMode,
    /// Length of the haptic pulse fired with each cue.
    pub haptic_pulse_ms: u32,
    /// Master volume (0.0 to 1.0).
    pub master_volume: f32,
    /// SQLite file backing the leaderboard.
    pub leaderboard_db: PathBuf,
    /// Key -> action name overrides (e.g. `"w" = "yellow"`).
    pub keybinds: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Sound,
            haptic_pulse_ms: 60,
            master_volume: 0.5,
            leaderboard_db: PathBuf::from("leaderboard.db"),
            keybinds: HashMap::new(),
        }
    }
}

impl Settings {
    /// Loads `settings.toml`, writing defaults when it is missing or broken.
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        match load_toml::<Settings>(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("SETTINGS: Using defaults ({})", e);
                let settings = Settings::default();
                if let Err(e) = settings.save_to(path) {
                    log::warn!("SETTINGS: Could not write defaults: {}", e);
                }
                settings
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, content).map_err(|e| e.to_string())
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    match toml::from_str(&content) {
        Ok(data) => Ok(data),
        Err(e) => {
            log::error!("Failed to parse TOML file {:?}: {}", path, e);
            Err(e.to_string())
        }
    }
}
