//! Scripted games through the terminal view.

use std::io::Cursor;
use tictactoe::{
    Board, BoardError, Cell, GameConfig, GameError, Mark, Match, Outcome, Player, TerminalView,
};

type ScriptedView = TerminalView<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(input: &str) -> ScriptedView {
    TerminalView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

fn transcript(view: ScriptedView) -> String {
    String::from_utf8(view.into_output()).expect("Output is UTF-8")
}

fn players() -> [Player; 2] {
    [Player::new("Ada", Mark::X), Player::new("Bob", Mark::O)]
}

#[test]
fn test_row_win_ends_game() {
    let mut view = scripted("1\n4\n2\n5\n3\n");
    let mut game = Match::new(Board::new(3, 3).unwrap(), players());

    let outcome = game.play(&mut view).expect("Game finishes");

    assert_eq!(outcome, Outcome::Winner(Player::new("Ada", Mark::X)));
    assert_eq!(game.board().cells_filled(), 5);
    let out = transcript(view);
    assert!(out.ends_with(" x | x | x\n------------\n o | o | 6\n------------\n 7 | 8 | 9\n\nCongratulations Ada! You have won.\n"));
}

#[test]
fn test_second_player_can_win() {
    let mut view = scripted("1\n3\n2\n5\n9\n7\n");
    let mut game = Match::new(Board::new(3, 3).unwrap(), players());

    let outcome = game.play(&mut view).unwrap();

    assert_eq!(outcome.winner().map(|p| *p.mark()), Some(Mark::O));
    assert!(transcript(view).contains("Congratulations Bob! You have won."));
}

#[test]
fn test_full_board_is_draw() {
    let mut view = scripted("1\n2\n3\n5\n4\n6\n8\n7\n9\n");
    let mut game = Match::new(Board::new(3, 3).unwrap(), players());

    let outcome = game.play(&mut view).unwrap();

    assert!(outcome.is_draw());
    assert!(game.board().is_full());
    let out = transcript(view);
    assert!(out.ends_with("This game has ended in a draw!\n"));
    assert!(out.contains(" o | x | 9\n"));
    assert!(!out.contains(" o | x | x"));
}

#[test]
fn test_occupied_box_reprompts_same_player() {
    let mut view = scripted("5\n5\n1\n");
    let mut game = Match::new(Board::new(3, 3).unwrap(), players());

    let result = game.play(&mut view);

    assert!(matches!(result, Err(GameError::InputClosed)));
    assert_eq!(game.board().cell_at(1, 1), Ok(Cell::Occupied(Mark::X)));
    assert_eq!(game.board().cell_at(0, 0), Ok(Cell::Occupied(Mark::O)));
    let out = transcript(view);
    assert!(out.contains("Box 5 already holds an 'x', choose another."));
    assert_eq!(out.matches("Bob, choose a box").count(), 2);
}

#[test]
fn test_off_board_choice_reprompts() {
    let mut view = scripted("0\n10\n");
    let mut game = Match::new(Board::new(3, 3).unwrap(), players());

    assert!(matches!(game.play(&mut view), Err(GameError::InputClosed)));
    assert_eq!(game.board().cells_filled(), 0);
    let out = transcript(view);
    assert!(out.contains("There is no box 0, choose a number from 1 to 9."));
    assert!(out.contains("There is no box 10, choose a number from 1 to 9."));
}

#[test]
fn test_longer_line_on_bigger_board() {
    // x: 1 7 13 19 25 (main diagonal of 5x5), o: 2 3 4 5
    let mut view = scripted("1\n2\n7\n3\n13\n4\n19\n5\n25\n");
    let mut game = Match::new(Board::new(5, 5).unwrap(), players());

    let outcome = game.play(&mut view).unwrap();

    assert_eq!(outcome.winner().map(|p| p.name().as_str()), Some("Ada"));
}

#[test]
fn test_run_prompts_for_missing_settings() {
    let mut view = scripted("Ada\nBob\n3\n1\n4\n2\n5\n3\n");

    let outcome = tictactoe::run(&mut view, &GameConfig::default()).unwrap();

    assert_eq!(outcome.to_string(), "Ada (x) wins");
    let out = transcript(view);
    let name_one = out.find("Enter name for Player 1").unwrap();
    let name_two = out.find("Enter name for Player 2").unwrap();
    let dimension = out.find("Enter game dimensions for tictactoe:").unwrap();
    assert!(name_one < name_two && name_two < dimension);
    assert!(out.contains("Bob, choose a box to place an 'o' into:"));
}

#[test]
fn test_run_uses_configured_settings() {
    let config = GameConfig::default()
        .with_dimension(Some(4))
        .with_win_count(Some(2))
        .with_player_one(Some("Ada".into()))
        .with_player_two(Some("Bob".into()));
    let mut view = scripted("1\n16\n6\n");

    let outcome = tictactoe::run(&mut view, &config).unwrap();

    assert_eq!(outcome.winner().map(|p| p.name().as_str()), Some("Ada"));
    assert!(!transcript(view).contains("Enter"));
}

#[test]
fn test_run_rejects_invalid_dimension() {
    let mut view = scripted("Ada\nBob\n0\n");

    let result = tictactoe::run(&mut view, &GameConfig::default());

    assert!(matches!(
        result,
        Err(GameError::Board(BoardError::InvalidDimension(0)))
    ));
}

#[test]
fn test_run_rejects_invalid_win_count() {
    let config = GameConfig::default()
        .with_dimension(Some(3))
        .with_win_count(Some(-1))
        .with_player_one(Some("Ada".into()))
        .with_player_two(Some("Bob".into()));
    let mut view = scripted("");

    let result = tictactoe::run(&mut view, &config);

    assert!(matches!(
        result,
        Err(GameError::Board(BoardError::InvalidWinCount(-1)))
    ));
}
