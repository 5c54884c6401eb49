use super::events::{GameAction, RawInputEvent};
use crate::models::color::Color;
use crate::models::settings::GameMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

pub struct InputManager {
    bindings: HashMap<char, GameAction>,
}

impl InputManager {
    pub fn new(keybinds: &HashMap<String, String>) -> Self {
        let mut manager = Self {
            bindings: HashMap::new(),
        };
        manager.load_default_bindings();
        manager.reload_keybinds(keybinds);
        manager
    }

    pub fn process(&self, event: RawInputEvent) -> Option<GameAction> {
        self.bindings.get(&event.key.to_ascii_lowercase()).copied()
    }

    /// Maps a terminal key event. Esc and Ctrl+C always quit, since raw mode
    /// swallows the interrupt signal.
    pub fn process_key(&self, event: &KeyEvent) -> Option<GameAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

        match event.code {
            KeyCode::Esc => Some(GameAction::Quit),
            KeyCode::Char('c') if ctrl => Some(GameAction::Quit),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(key) => self.process(RawInputEvent { key }),
            _ => None,
        }
    }

    /// Applies `key = "action"` overrides on top of the current bindings.
    pub fn reload_keybinds(&mut self, keybinds: &HashMap<String, String>) {
        for (key, name) in keybinds {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                log::warn!("INPUT: Ignoring binding for multi-character key {:?}", key);
                continue;
            };
            let Some(action) = GameAction::from_name(name) else {
                log::warn!("INPUT: Unknown action in settings: {}", name);
                continue;
            };

            // A remapped action leaves its old key.
            self.bindings.retain(|_, bound| *bound != action);
            self.bindings.insert(c.to_ascii_lowercase(), action);
        }
    }

    fn load_default_bindings(&mut self) {
        // Board
        self.bindings.insert('r', GameAction::Press(Color::Red));
        self.bindings.insert('y', GameAction::Press(Color::Yellow));
        self.bindings.insert('g', GameAction::Press(Color::Green));
        self.bindings.insert('b', GameAction::Press(Color::Blue));

        self.bindings.insert('s', GameAction::StartGame);
        self.bindings.insert('m', GameAction::ToggleMode);
        self.bindings.insert('1', GameAction::SetMode(GameMode::Sound));
        self.bindings.insert('2', GameAction::SetMode(GameMode::Silent));

        self.bindings.insert('l', GameAction::ToggleLeaderboard);
        self.bindings.insert('d', GameAction::DismissGameOver);
        self.bindings.insert('t', GameAction::TestSound);
        self.bindings.insert('v', GameAction::SaveScore);
        self.bindings.insert('q', GameAction::Quit);
    }
}
