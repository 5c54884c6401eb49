//! Layout of the board, HUD and panels as styled text spans.

use crate::logic::audio::AudioStatus;
use crate::models::color::Color;
use crate::models::settings::GameMode;
use crate::shared::snapshot::{GameplaySnapshot, LeaderboardSnapshot, RenderState};
use crate::state::Phase;

/// How a span is styled on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// A flashing button, drawn bold in its own color.
    Lit(Color),
    /// A button that does not accept presses right now.
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }
}

pub type Line = Vec<Span>;

fn button(color: Color, lit: bool, enabled: bool) -> Span {
    let label = color.name().to_uppercase();
    if lit {
        Span {
            text: format!("[{:^8}]", label),
            tone: Tone::Lit(color),
        }
    } else if enabled {
        Span::plain(format!("[{:^8}]", label.to_lowercase()))
    } else {
        Span {
            text: format!("[{:^8}]", label.to_lowercase()),
            tone: Tone::Dim,
        }
    }
}

fn button_row(game: &GameplaySnapshot, colors: [Color; 2]) -> Line {
    let [left, right] = colors.map(|c| button(c, game.lit[c.index()], game.buttons_enabled));
    vec![left, Span::plain(" "), right]
}

fn hud(game: &GameplaySnapshot) -> String {
    let mode = match game.mode {
        GameMode::Sound => "🔊",
        GameMode::Silent => "🔇",
    };
    let warning = if game.audio_status == AudioStatus::Error {
        " ⚠️"
    } else {
        ""
    };
    format!("SCORE {:<4} MODE {}{}", game.score, mode, warning)
}

fn center_panel(game: &GameplaySnapshot) -> Vec<String> {
    match game.phase {
        Phase::Idle => {
            let (sound, silent) = match game.mode {
                GameMode::Sound => ("*", " "),
                GameMode::Silent => (" ", "*"),
            };
            vec![
                "BASE MEMORY".to_string(),
                "[s] START GAME".to_string(),
                format!("[1]{} Classic   [2]{} Silent", sound, silent),
            ]
        }
        Phase::Playing => vec!["Watch the sequence...".to_string()],
        Phase::AwaitingInput => vec!["Your turn! Repeat the sequence.".to_string()],
        Phase::RoundComplete => vec![format!("Round {} complete!", game.round)],
        Phase::GameOver => vec![
            "GAME OVER".to_string(),
            format!("Final Score: {}", game.score),
            "[s] PLAY AGAIN   [v] SAVE (unavailable)".to_string(),
        ],
    }
}

fn leaderboard(panel: &LeaderboardSnapshot) -> Vec<String> {
    if !panel.open {
        return vec!["[l] 🏆 Global Leaderboard".to_string()];
    }

    let mut lines = vec!["TOP 10 PLAYERS".to_string()];
    if panel.rows.is_empty() {
        lines.push("No scores on-chain yet. Be the first!".to_string());
    }
    for row in &panel.rows {
        lines.push(format!("#{:<3} {:<12} {}", row.rank, row.player, row.score));
    }
    lines
}

/// Lays out one full frame, top to bottom.
pub fn layout(state: &RenderState) -> Vec<Line> {
    let game = &state.game;
    let mut lines = vec![vec![Span::plain(hud(game))]];

    lines.push(button_row(game, [Color::Red, Color::Yellow]));
    for text in center_panel(game) {
        lines.push(vec![Span::plain(format!("  {}", text))]);
    }
    lines.push(button_row(game, [Color::Green, Color::Blue]));

    for text in leaderboard(&state.leaderboard) {
        lines.push(vec![Span::plain(text)]);
    }
    lines
}
