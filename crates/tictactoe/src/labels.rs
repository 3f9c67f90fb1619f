//! Display strings a view binds to, derived from an engine snapshot.

use crate::settings::Settings;
use derive_getters::Getters;
use tictactoe_core::{GameSnapshot, Player, Position, Square, TerminalState};

/// Label on the end-of-round prompt's only action.
pub const PLAY_AGAIN: &str = "Play Again";

/// The prompt shown when a round ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EndOfRoundPrompt {
    /// Prompt title, e.g. "Player X won! 🎉".
    title: String,
    /// Action label wired to play-again.
    #[getter(skip)]
    action: &'static str,
}

impl EndOfRoundPrompt {
    /// Builds the prompt for a finished round, `None` while it is open.
    pub fn for_terminal(terminal: TerminalState, settings: &Settings) -> Option<Self> {
        let title = match terminal {
            TerminalState::None => return None,
            TerminalState::Won(player) => format!("Player {} won! 🎉", settings.label(player)),
            TerminalState::Tie => "It is a tie!".to_string(),
        };
        Some(Self {
            title,
            action: PLAY_AGAIN,
        })
    }

    /// Action label wired to play-again.
    pub fn action(&self) -> &'static str {
        self.action
    }
}

/// Everything a view renders for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct UiState {
    /// Row-major cell texts; empty cells are "".
    grid: [[String; 3]; 3],
    /// "X Turn" / "O Turn".
    turn_text: String,
    /// "X - 2 wins".
    x_score_text: String,
    /// "O - 0 wins".
    o_score_text: String,
    /// Present once the round has ended.
    prompt: Option<EndOfRoundPrompt>,
}

impl UiState {
    /// Derives every label from `snapshot`.
    pub fn from_snapshot(snapshot: &GameSnapshot, settings: &Settings) -> Self {
        let mut grid: [[String; 3]; 3] = Default::default();
        for pos in Position::ALL {
            if let Square::Occupied(player) = snapshot.board().get(pos) {
                grid[pos.row()][pos.col()] = settings.label(player).to_string();
            }
        }

        let score = snapshot.score();
        Self {
            grid,
            turn_text: format!("{} Turn", settings.label(*snapshot.current_player())),
            x_score_text: score_text(settings.label(Player::X), score.x_wins()),
            o_score_text: score_text(settings.label(Player::O), score.o_wins()),
            prompt: EndOfRoundPrompt::for_terminal(*snapshot.terminal(), settings),
        }
    }

    /// Text of the cell at `(row, col)`; "" when empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn score_text(label: &str, wins: u32) -> String {
    format!("{} - {} wins", label, wins)
}
