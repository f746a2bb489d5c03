//! Tests for the game session: turn rotation, rejected moves and scoring.

use strictly_nxn::{
    BoardError, GameSession, GameStatus, Glyphs, Outcome, Player, Position, SessionConfig,
    SessionError,
};

fn started(size: usize) -> GameSession {
    let mut session = GameSession::new();
    session.start_new_game(size).expect("valid size");
    session
}

fn play_all(session: &mut GameSession, moves: &[(usize, usize)]) -> GameStatus {
    let mut status = GameStatus::InProgress;
    for &(row, col) in moves {
        status = session.play_turn(row, col).expect("legal move");
    }
    status
}

#[test]
fn test_start_new_game_every_valid_size() {
    let mut session = GameSession::new();
    for size in (3..=25).step_by(2) {
        session.start_new_game(size).expect("valid size");
        let board = session.board().expect("board created");
        assert_eq!(board.size(), size);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(session.current_outcome(), GameStatus::InProgress);
        assert_eq!(session.to_move(), Player::X);
    }
}

#[test]
fn test_invalid_sizes_rejected() {
    for size in [4, 26, 2] {
        let mut session = GameSession::new();
        assert_eq!(session.start_new_game(size), Err(BoardError::InvalidSize(size)));
        assert!(session.board().is_none());
    }
}

#[test]
fn test_top_row_scenario() {
    let mut session = started(3);
    // X: (0,0) (0,1) (0,2); O: (1,0) (1,1)
    let status = play_all(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(status, GameStatus::InProgress);

    assert_eq!(session.play_turn(0, 2), Ok(GameStatus::Won(Player::X)));
    assert_eq!(session.current_outcome(), GameStatus::Won(Player::X));
}

#[test]
fn test_tie_scenario() {
    // X O X / X O O / O X X, alternating from X.
    let mut session = started(3);
    let status = play_all(
        &mut session,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(status, GameStatus::Tie);
    assert_eq!(session.board().map(|b| b.occupied_count()), Some(9));
}

#[test]
fn test_five_by_five_diagonal_scenario() {
    let mut session = started(5);
    let o_moves = [(0, 4), (1, 0), (2, 4), (3, 0)];
    for i in 0..4 {
        assert_eq!(session.play_turn(i, i), Ok(GameStatus::InProgress));
        let (row, col) = o_moves[i];
        assert_eq!(session.play_turn(row, col), Ok(GameStatus::InProgress));
    }
    assert_eq!(session.play_turn(4, 4), Ok(GameStatus::Won(Player::X)));
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut session = started(3);
    session.play_turn(1, 1).expect("legal move");
    let occupied = session.board().map(|b| b.occupied_count());
    let cursor = session.to_move();

    let occupied_err = session.play_turn(1, 1).unwrap_err();
    assert_eq!(
        occupied_err,
        SessionError::Board(BoardError::CellOccupied(Position::new(1, 1)))
    );
    assert!(occupied_err.is_retryable());

    let bounds_err = session.play_turn(0, 3).unwrap_err();
    assert!(matches!(
        bounds_err,
        SessionError::Board(BoardError::OutOfBounds { row: 0, col: 3, size: 3 })
    ));
    assert!(bounds_err.is_retryable());

    assert_eq!(session.board().map(|b| b.occupied_count()), occupied);
    assert_eq!(session.to_move(), cursor);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_turns_alternate_despite_failures() {
    let mut session = started(5);
    let mut expected = Player::X;
    for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)] {
        assert_eq!(session.to_move(), expected);
        // A failed attempt before every real move.
        let off_board = session.play_turn(9, 9).unwrap_err();
        assert!(matches!(
            off_board,
            SessionError::Board(BoardError::OutOfBounds { .. })
        ));
        assert!(off_board.is_retryable());
        if row > 0 {
            let taken = session.play_turn(0, 0).unwrap_err();
            assert_eq!(
                taken,
                SessionError::Board(BoardError::CellOccupied(Position::new(0, 0)))
            );
            assert!(taken.is_retryable());
        }
        assert_eq!(session.to_move(), expected);

        session.play_turn(row, col).expect("legal move");
        expected = expected.opponent();
    }
    let players: Vec<Player> = session.history().iter().map(|m| m.player).collect();
    assert_eq!(
        players,
        vec![Player::X, Player::O, Player::X, Player::O, Player::X, Player::O]
    );
}

#[test]
fn test_no_moves_after_terminal_outcome() {
    let mut session = started(3);
    play_all(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(session.play_turn(2, 2), Err(SessionError::GameOver));
    assert_eq!(session.history().len(), 5);
}

#[test]
fn test_finalize_requires_terminal_outcome() {
    let mut session = started(3);
    session.play_turn(0, 0).expect("legal move");
    assert_eq!(session.finalize_game(), Err(SessionError::GameNotFinished));
    assert_eq!(session.statistics_snapshot().total(), 0);
}

#[test]
fn test_scoreboard_sums_to_games_played() {
    let mut session = GameSession::new();
    let games: [&[(usize, usize)]; 4] = [
        // X wins top row
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
        // O wins middle column
        &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)],
        // tie
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
        // X wins anti-diagonal
        &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)],
    ];

    for (played, moves) in games.iter().enumerate() {
        session.start_new_game(3).expect("valid size");
        assert_eq!(session.to_move(), Player::X);
        let status = play_all(&mut session, moves);
        assert!(status.is_terminal());
        session.finalize_game().expect("terminal game");
        assert_eq!(session.statistics_snapshot().total() as usize, played + 1);
    }

    let stats = session.statistics_snapshot();
    assert_eq!(stats.count(Outcome::Winner(Player::X)), 2);
    assert_eq!(stats.count(Outcome::Winner(Player::O)), 1);
    assert_eq!(stats.count(Outcome::Tie), 1);
    assert_eq!(stats.iter().map(|(_, n)| n).sum::<u32>(), 4);
}

#[test]
fn test_start_new_game_keeps_scoreboard() {
    let mut session = started(3);
    play_all(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    session.finalize_game().expect("terminal game");

    session.start_new_game(5).expect("valid size");
    assert_eq!(session.statistics_snapshot().wins(Player::X), 1);
    assert!(session.history().is_empty());
    assert!(!session.is_finalized());
}

#[test]
fn test_configured_first_player_starts_every_game() {
    let config = SessionConfig::new(Player::O, Glyphs::default());
    let mut session = GameSession::with_config(config);
    for _ in 0..3 {
        session.start_new_game(3).expect("valid size");
        assert_eq!(session.to_move(), Player::O);
        session.play_turn(0, 0).expect("legal move");
        assert_eq!(session.to_move(), Player::X);
    }
}
