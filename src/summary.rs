//! End-of-run summary for the success and game-over panels

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

/// Format seconds as `MM:SS`
pub fn format_play_time(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Summarize who killed the player.
///
/// Repeats are grouped in first-seen order ("Bug (2 times)"), then joined
/// with ", " except for the final pair, which gets " and ".
pub fn format_death_causes<S: AsRef<str>>(causes: &[S]) -> String {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for cause in causes {
        let cause = cause.as_ref();
        match counts.iter_mut().find(|(name, _)| *name == cause) {
            Some((_, count)) => *count += 1,
            None => counts.push((cause, 1)),
        }
    }

    let parts: Vec<String> = counts
        .into_iter()
        .map(|(name, count)| {
            if count > 1 {
                format!("{name} ({count} times)")
            } else {
                name.to_string()
            }
        })
        .collect();

    match parts.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

/// What the result panels show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub phase: GamePhase,
    /// `MM:SS`
    pub play_time: String,
    pub remaining_lives: u8,
    /// Empty if the player never died
    pub killed_by: String,
}

impl RunSummary {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            play_time: format_play_time(state.elapsed_secs()),
            remaining_lives: state.lives,
            killed_by: format_death_causes(state.death_causes.as_slice()),
        }
    }
}
