use rayon::prelude::*;

use xiangqi_core::{RuleConfig, Session, Side, Status};

const SESSIONS: usize = 32;
const MAX_PLIES: usize = 60;

/// Play the first legal move every turn until the game ends or the ply cap.
fn play_out(seed: usize) -> (Vec<String>, Status) {
    let config = RuleConfig {
        first_to_move: if seed % 2 == 0 { Side::Red } else { Side::Black },
        ..RuleConfig::default()
    };
    let mut game = Session::standard(&config);
    while game.status() == Status::InProgress && game.move_count() < MAX_PLIES {
        let moves = game.legal_moves().unwrap();
        let mv = moves[(seed + game.move_count()) % moves.len()];
        game.attempt_move(mv.from, mv.to).unwrap();
        assert!(game.board().verify().is_ok());
        assert!(game.board().find_general(Side::Red).is_some());
        assert!(game.board().find_general(Side::Black).is_some());
    }
    let notations = game.history().iter().map(|r| r.notation.clone()).collect();
    (notations, game.status())
}

#[test]
fn test_independent_sessions_in_parallel() {
    let parallel: Vec<_> = (0..SESSIONS).into_par_iter().map(play_out).collect();
    let serial: Vec<_> = (0..SESSIONS).map(play_out).collect();
    assert_eq!(parallel, serial);
}
