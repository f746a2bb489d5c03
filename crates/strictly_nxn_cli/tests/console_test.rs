//! Scripted console sessions.

use std::io::Cursor;
use strictly_nxn::{BoardSize, GameSession, Glyphs, Outcome, Player, SessionConfig};
use strictly_nxn_cli::Console;

fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("utf-8 output")
}

#[test]
fn test_board_size_reprompts_until_valid() {
    let mut console = console("abc\n4\n27\n5\n");
    let size = console.prompt_board_size().expect("valid size eventually");
    assert_eq!(size.get(), 5);

    let out = output(console);
    assert_eq!(out.matches("Sorry, that's not a valid integer!").count(), 1);
    assert_eq!(
        out.matches("Please enter an odd number for board size (between 3-25): ")
            .count(),
        4
    );
}

#[test]
fn test_index_reprompts_out_of_range() {
    let mut console = console("3\n-1\nx\n2\n");
    assert_eq!(console.prompt_index("row", 3).expect("valid index"), 2);
    let out = output(console);
    assert_eq!(out.matches("Which row? ").count(), 4);
    // Only "x" is rejected as junk; 3 and -1 are integers out of range.
    assert_eq!(out.matches("Sorry, that's not a valid integer input.").count(), 1);
}

#[test]
fn test_repeat_prompt() {
    let mut yes = console("maybe\nYes\n");
    assert!(yes.prompt_repeat().expect("answer given"));
    let mut no = console("N\n");
    assert!(!no.prompt_repeat().expect("answer given"));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut console = console("");
    assert!(console.prompt_board_size().is_err());
}

#[test]
fn test_play_game_with_occupied_retry() {
    let mut session = GameSession::new();
    session.start_new_game(3).expect("valid size");

    // X (0,0), O tries (0,0) then (1,0), X (0,1), O (1,1), X (0,2) wins.
    let mut console = console("0\n0\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n");
    let outcome = console.play_game(&mut session).expect("game finishes");
    assert_eq!(outcome, Outcome::Winner(Player::X));
    assert_eq!(session.statistics_snapshot().wins(Player::X), 1);
    assert!(session.is_finalized());

    let out = output(console);
    assert_eq!(out.matches("Bad location, try again...").count(), 1);
    assert_eq!(out.matches("X, it is your turn.").count(), 3);
    assert_eq!(out.matches("O, it is your turn.").count(), 2);
    assert!(out.contains("X, you have won the game!"));
}

#[test]
fn test_full_session_with_fixed_size() {
    let mut session = GameSession::new();
    let size = BoardSize::new(3).expect("valid size");

    // Game 1: X wins top row. Game 2: tie. Then quit.
    let script = concat!(
        "0\n0\n", "1\n0\n", "0\n1\n", "1\n1\n", "0\n2\n",
        "y\n",
        "0\n0\n", "0\n1\n", "0\n2\n", "1\n1\n", "1\n0\n", "1\n2\n", "2\n1\n", "2\n0\n", "2\n2\n",
        "n\n",
    );
    let mut console = console(script);
    console
        .run(&mut session, Some(size))
        .expect("session completes");

    let stats = session.statistics_snapshot();
    assert_eq!(stats.wins(Player::X), 1);
    assert_eq!(stats.ties(), 1);
    assert_eq!(stats.total(), 2);

    let out = output(console);
    assert!(out.starts_with("\nWelcome to TicTacToe!\n"));
    assert!(out.contains("No winner, - it was a tie!"));
    assert!(out.contains("X has won 1 games."));
    assert!(out.contains("There have been 1 tie games."));
    assert!(out.ends_with("\nThanks for playing! ;)\n\n"));
}

#[test]
fn test_session_prompts_size_each_game() {
    let mut session = GameSession::new();
    let script = concat!(
        "3\n",
        "0\n0\n", "1\n0\n", "0\n1\n", "1\n1\n", "0\n2\n",
        "y\n",
        "5\n",
        "0\n0\n", "0\n4\n", "0\n1\n", "1\n4\n", "1\n0\n",
        "2\n4\n", "1\n1\n", "3\n4\n", "2\n0\n", "4\n4\n",
        "n\n",
    );
    let mut console = console(script);
    console.run(&mut session, None).expect("session completes");

    let stats = session.statistics_snapshot();
    assert_eq!(stats.wins(Player::X), 1);
    assert_eq!(stats.wins(Player::O), 1);
    assert_eq!(session.board().map(|b| b.size()), Some(5));
}

#[test]
fn test_session_glyphs_are_rendered() {
    let config = SessionConfig::new(Player::X, Glyphs::new("#", "@", "."));
    let mut session = GameSession::with_config(config);
    session.start_new_game(3).expect("valid size");

    let mut console = console("0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n");
    let outcome = console.play_game(&mut session).expect("game finishes");
    assert_eq!(outcome, Outcome::Winner(Player::X));

    let out = output(console);
    assert!(out.contains(" 0 #| #| #|"));
    assert!(out.contains(" 1 @| @| .|"));
    assert!(out.contains("#, it is your turn."));
    assert!(out.contains("@, it is your turn."));
    assert!(out.contains("#, you have won the game!"));
    assert!(!out.contains("X, it is your turn."));
}
