//! Line-based driver: reads taps and button presses, prints the labels.

use crate::labels::UiState;
use crate::views::GameView;
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, warn};
use unicode_width::UnicodeWidthStr;

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `<row> <col>`: tap a cell.
    Tap {
        /// Row, 0-2.
        row: usize,
        /// Column, 0-2.
        col: usize,
    },
    /// `again`: start a new round, keeping the score.
    PlayAgain,
    /// `reset`: new round and zeroed score.
    Reset,
    /// `quit`: leave.
    Quit,
}

/// An input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?}: expected '<row> <col>', 'again', 'reset' or 'quit'", input)]
pub struct InputError {
    /// The offending line, trimmed.
    pub input: String,
}

impl ConsoleCommand {
    /// Parses one input line.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let trimmed = line.trim();
        let err = || InputError {
            input: trimmed.to_string(),
        };

        match trimmed.to_lowercase().as_str() {
            "again" | "play again" => return Ok(Self::PlayAgain),
            "reset" => return Ok(Self::Reset),
            "quit" | "exit" | "q" => return Ok(Self::Quit),
            _ => {}
        }

        let mut parts = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty());
        let row = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let col = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self::Tap { row, col })
    }
}

/// Renders the grid and labels as text.
///
/// Occupied cells show the configured player label; empty cells show
/// their `row,col` so the next tap can be typed as is.
pub fn render(state: &UiState) -> String {
    let texts: Vec<Vec<String>> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| match state.cell(row, col) {
                    "" => format!("{},{}", row, col),
                    label => label.to_string(),
                })
                .collect()
        })
        .collect();
    let width = texts.iter().flatten().map(|t| t.width()).max().unwrap_or(3);

    let rows: Vec<String> = texts
        .iter()
        .map(|row| {
            row.iter()
                .map(|t| format!("{}{}", t, " ".repeat(width - t.width())))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();
    let separator = vec!["-".repeat(width); 3].join("-+-");

    let mut out = rows.join(&format!("\n{}\n", separator));
    out.push_str(&format!(
        "\n\n{}\n{}    {}\n",
        state.turn_text(),
        state.x_score_text(),
        state.o_score_text()
    ));
    if let Some(prompt) = state.prompt() {
        out.push_str(&format!("{}  [{}: type 'again']\n", prompt.title(), prompt.action()));
    }
    out
}

/// Runs the read-eval-print loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run(view: &mut dyn GameView, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    write!(output, "{}", render(&view.ui_state()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match ConsoleCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Ignoring input line");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::PlayAgain => view.press_play_again(),
            ConsoleCommand::Reset => view.press_reset(),
            ConsoleCommand::Tap { row, col } => {
                if let Err(e) = view.tap(row, col) {
                    warn!(error = %e, "Tap outside the board");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            }
        }

        write!(output, "{}", render(&view.ui_state()))?;
    }

    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use tictactoe_core::GameEngine;

    #[test]
    fn test_parse_tap() {
        assert_eq!(ConsoleCommand::parse("1 2"), Ok(ConsoleCommand::Tap { row: 1, col: 2 }));
        assert_eq!(ConsoleCommand::parse(" 0,0 "), Ok(ConsoleCommand::Tap { row: 0, col: 0 }));
    }

    #[test]
    fn test_parse_buttons() {
        assert_eq!(ConsoleCommand::parse("again"), Ok(ConsoleCommand::PlayAgain));
        assert_eq!(ConsoleCommand::parse("RESET"), Ok(ConsoleCommand::Reset));
        assert_eq!(ConsoleCommand::parse("quit"), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(ConsoleCommand::parse("1").is_err());
        assert!(ConsoleCommand::parse("1 2 3").is_err());
        assert!(ConsoleCommand::parse("a b").is_err());
        assert!(ConsoleCommand::parse("-1 0").is_err());
    }

    #[test]
    fn test_render_uses_configured_labels() {
        let settings =
            Settings::from_toml("player_x_label = \"Alice\"\nplayer_o_label = \"Bob\"").unwrap();
        let mut engine = GameEngine::new();
        engine.apply_move(1, 1).unwrap();
        let out = render(&UiState::from_snapshot(&engine.snapshot(), &settings));

        assert!(out.contains("0,0   | 0,1   | 0,2  "));
        assert!(out.contains("1,0   | Alice | 1,2  "));
        assert!(!out.contains("X"));
        assert!(out.contains("Bob Turn"));
    }

    #[test]
    fn test_render_empty_grid_shows_coordinates() {
        let out = render(&UiState::from_snapshot(
            &GameEngine::new().snapshot(),
            &Settings::default(),
        ));

        assert!(out.starts_with("0,0 | 0,1 | 0,2\n----+-----+----\n1,0 | 1,1 | 1,2\n"));
        assert!(!out.contains('9'));
    }

    #[test]
    fn test_parse_keeps_out_of_range_for_the_engine() {
        // Range is the engine's call; the parser only reads numbers.
        assert_eq!(ConsoleCommand::parse("5 0"), Ok(ConsoleCommand::Tap { row: 5, col: 0 }));
    }
}
