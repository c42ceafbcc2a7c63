use super::*;
use crate::config::Rules;

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

fn standard() -> Session {
    Session::standard(&RuleConfig::default())
}

#[test]
fn test_initial_state() {
    let game = standard();
    assert_eq!(game.status(), Status::InProgress);
    assert_eq!(game.side_to_move(), Side::Red);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.full_move_number(), 1);
    assert!(!game.is_in_check(Side::Red).unwrap());
}

#[test]
fn test_first_to_move_from_config() {
    let config = RuleConfig {
        first_to_move: Side::Black,
        ..RuleConfig::default()
    };
    let mut game = Session::standard(&config);
    assert_eq!(game.side_to_move(), Side::Black);
    assert_eq!(
        game.attempt_move(sq(6, 0), sq(5, 0)).unwrap_err().rejection(),
        Some(MoveRejection::NotYourPiece {
            square: sq(6, 0),
            owner: Side::Red,
            side_to_move: Side::Black,
        })
    );
    game.attempt_move(sq(3, 0), sq(4, 0)).unwrap();
    assert_eq!(game.full_move_number(), 1);
    game.attempt_move(sq(6, 0), sq(5, 0)).unwrap();
    assert_eq!(game.full_move_number(), 2);
}

#[test]
fn test_counters_advance() {
    let mut game = standard();
    game.attempt_move(sq(6, 0), sq(5, 0)).unwrap();
    assert_eq!(game.full_move_number(), 1);
    game.attempt_move(sq(3, 0), sq(4, 0)).unwrap();
    assert_eq!(game.full_move_number(), 2);
    assert_eq!(game.move_count(), 2);

    let notations: Vec<&str> = game.history().iter().map(|r| r.notation.as_str()).collect();
    assert_eq!(notations, vec!["P9+1", "p1+1"]);
}

#[test]
fn test_rejection_kinds() {
    let mut game = standard();
    assert_eq!(
        game.attempt_move(sq(5, 5), sq(4, 5)).unwrap_err(),
        MoveError::Rejected(MoveRejection::NoPiece(sq(5, 5)))
    );
    assert_eq!(
        game.attempt_move(sq(9, 0), sq(5, 0)).unwrap_err(),
        MoveError::Rejected(MoveRejection::Unreachable {
            from: sq(9, 0),
            to: sq(5, 0)
        })
    );
    // Own piece on the destination.
    assert!(matches!(
        game.attempt_move(sq(9, 0), sq(9, 1)),
        Err(MoveError::Rejected(MoveRejection::Unreachable { .. }))
    ));
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_exposing_general_rejected() {
    let mut board = Board::empty(Rules::default());
    board.place(PieceKind::General, Side::Red, sq(9, 4)).unwrap();
    board.place(PieceKind::General, Side::Black, sq(0, 4)).unwrap();
    board.place(PieceKind::Horse, Side::Red, sq(5, 4)).unwrap();
    let mut game = Session::from_board(board, Side::Red).unwrap();

    let before = game.board_snapshot();
    assert_eq!(
        game.attempt_move(sq(5, 4), sq(3, 3)).unwrap_err(),
        MoveError::Rejected(MoveRejection::ExposesGeneral(Side::Red))
    );
    assert_eq!(game.board_snapshot(), before);
    assert_eq!(game.side_to_move(), Side::Red);
}

#[test]
fn test_from_board_rejects_waiting_side_in_check() {
    let mut board = Board::empty(Rules::default());
    board.place(PieceKind::General, Side::Red, sq(9, 4)).unwrap();
    board.place(PieceKind::General, Side::Black, sq(0, 3)).unwrap();
    board.place(PieceKind::Chariot, Side::Red, sq(0, 0)).unwrap();

    assert!(matches!(
        Session::from_board(board.clone(), Side::Red),
        Err(InputError::OpponentInCheck(Side::Black))
    ));
    // Black to move out of check is fine.
    assert!(Session::from_board(board, Side::Black).is_ok());
}

#[test]
fn test_resign_and_draw() {
    let mut game = standard();
    assert_eq!(
        game.resign(),
        Ok(Status::Over {
            winner: Some(Side::Black)
        })
    );
    assert_eq!(game.resign(), Err(MoveRejection::GameOver));
    assert_eq!(game.agree_draw(), Err(MoveRejection::GameOver));

    let mut game = standard();
    assert_eq!(
        game.resign_side(Side::Black),
        Ok(Status::Over {
            winner: Some(Side::Red)
        })
    );

    let mut game = standard();
    assert_eq!(game.agree_draw(), Ok(Status::Over { winner: None }));
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = standard();
    game.agree_draw().unwrap();
    assert_eq!(
        game.attempt_move(sq(6, 0), sq(5, 0)).unwrap_err(),
        MoveError::Rejected(MoveRejection::GameOver)
    );
    assert!(game.history().is_empty());
}

#[test]
fn test_checkmate_ends_game() {
    let mut board = Board::empty(Rules::default());
    board.place(PieceKind::General, Side::Red, sq(9, 3)).unwrap();
    board.place(PieceKind::General, Side::Black, sq(0, 4)).unwrap();
    board.place(PieceKind::Chariot, Side::Red, sq(1, 8)).unwrap();
    board.place(PieceKind::Chariot, Side::Red, sq(5, 0)).unwrap();
    let mut game = Session::from_board(board, Side::Red).unwrap();

    let record = game.attempt_move(sq(5, 0), sq(0, 0)).unwrap();
    assert_eq!(record.notation, "R9+5");
    assert!(game.is_in_check(Side::Black).unwrap());
    assert_eq!(
        game.status(),
        Status::Over {
            winner: Some(Side::Red)
        }
    );
    assert!(game.legal_moves().unwrap().is_empty());
}

#[test]
fn test_legal_destinations() {
    let game = standard();
    let mut targets = game.legal_destinations(sq(9, 1)).unwrap();
    targets.sort_by_key(|s| (s.row(), s.col()));
    assert_eq!(targets, vec![sq(7, 0), sq(7, 2), sq(8, 3)]);
    assert!(game.legal_destinations(sq(5, 5)).unwrap().is_empty());
}

#[test]
fn test_invariant_failure_leaves_session_untouched() {
    let mut game = standard();
    // Swap in a board that lost the black general.
    let mut corrupt = Board::empty(Rules::default());
    corrupt.place(PieceKind::General, Side::Red, sq(9, 4)).unwrap();
    corrupt.place(PieceKind::Pawn, Side::Red, sq(6, 0)).unwrap();
    game.board = corrupt.clone();

    let err = game.attempt_move(sq(6, 0), sq(5, 0)).unwrap_err();
    assert!(matches!(err, MoveError::Invariant(_)));
    assert_eq!(err.rejection(), None);
    assert_eq!(game.board, corrupt);
    assert!(game.history().is_empty());
    assert_eq!(game.side_to_move(), Side::Red);
    assert_eq!(game.full_move_number(), 1);
    assert_eq!(game.status(), Status::InProgress);
}
