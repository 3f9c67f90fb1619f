//! Command-line interface for the console front end.

use crate::settings::ViewKind;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe on one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Presentation style, overriding the settings file
    #[arg(long, value_enum)]
    pub view: Option<ViewKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.view.is_none());
    }

    #[test]
    fn test_view_override() {
        let cli =
            Cli::try_parse_from(["tictactoe", "--view", "reactive", "-c", "game.toml"]).unwrap();
        assert_eq!(cli.view, Some(ViewKind::Reactive));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_unknown_view_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--view", "sideways"]).is_err());
    }
}
