//! Text lines for front-ends that render a session.

use crate::session::{RoundRecord, SessionState};

/// Rows the history panel shows before scrolling
pub const HISTORY_ROWS: usize = 8;

/// "You chose: rock    Computer chose: scissors"
pub fn choices_line(record: &RoundRecord) -> String {
    format!(
        "You chose: {}    Computer chose: {}",
        record.player_move, record.computer_move
    )
}

pub fn scoreboard(state: &SessionState) -> String {
    format!(
        "You: {}   Computer: {}   Ties: {}",
        state.player_wins, state.computer_wins, state.ties
    )
}

/// Last `rows` history lines, oldest first
pub fn history_window(state: &SessionState, rows: usize) -> Vec<String> {
    let skip = state.history.len().saturating_sub(rows);
    state.history[skip..].iter().map(ToString::to_string).collect()
}
