//! Settings file loading.

use std::io::Write;
use tictactoe::{Settings, ViewKind};
use tictactoe_core::Player;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x_label = \"Alice\"").unwrap();
    writeln!(file, "player_o_label = \"Bob\"").unwrap();
    writeln!(file, "view = \"reactive\"").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.label(Player::X), "Alice");
    assert_eq!(settings.label(Player::O), "Bob");
    assert_eq!(*settings.view(), ViewKind::Reactive);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x_label = ").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}
