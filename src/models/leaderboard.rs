//! Read-only leaderboard panel state.

use crate::database::models::LeaderboardEntry;

/// Rows shown in the panel.
pub const LEADERBOARD_SIZE: usize = 10;

const PREFIX_CHARS: usize = 6;
const SUFFIX_CHARS: usize = 4;

/// Shortens a player id to its first 6 and last 4 characters.
///
/// Ids that already fit are shown as-is.
pub fn short_player(player: &str) -> String {
    let chars: Vec<char> = player.chars().collect();
    if chars.len() <= PREFIX_CHARS + SUFFIX_CHARS {
        return player.to_string();
    }
    let head: String = chars[..PREFIX_CHARS].iter().collect();
    let tail: String = chars[chars.len() - SUFFIX_CHARS..].iter().collect();
    format!("{}…{}", head, tail)
}

/// One formatted row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub player: String,
    pub score: i64,
}

/// Collapsible leaderboard panel fed from an external source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardView {
    pub open: bool,
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Replaces the entries, keeping the top 10 by descending score.
    pub fn update_entries(&mut self, mut entries: Vec<LeaderboardEntry>) {
        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.player.cmp(&b.player)));
        entries.truncate(LEADERBOARD_SIZE);
        self.entries = entries;
    }

    pub fn rows(&self) -> Vec<LeaderboardRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardRow {
                rank: i + 1,
                player: short_player(&entry.player),
                score: entry.score,
            })
            .collect()
    }
}
