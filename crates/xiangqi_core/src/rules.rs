//! Per-kind movement predicates.
//!
//! `can_reach` answers a purely geometric question: given the occupancy of
//! the board, may this piece travel to that square by its own movement rule?
//! Check is not considered here; see [`crate::safety`].

use crate::board::Board;
use crate::types::*;

/// Whether `piece` can move to `to` following its kind's rule.
///
/// Never mutates the board and never returns an error; an unreachable
/// square is simply `false`.
pub fn can_reach(piece: &Piece, to: Square, board: &Board) -> bool {
    let from = piece.position();
    if from == to {
        return false;
    }
    let target = board.piece_at(to);
    if let Some(t) = target
        && t.side() == piece.side()
    {
        return false;
    }

    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();

    match piece.kind() {
        PieceKind::General => general(piece, to, target, d_row, d_col, board),
        PieceKind::Advisor => {
            d_row.abs() == 1 && d_col.abs() == 1 && to.in_palace(piece.side())
        }
        PieceKind::Elephant => elephant(piece, to, d_row, d_col, board),
        PieceKind::Horse => horse(from, d_row, d_col, board),
        PieceKind::Chariot => board.count_between(from, to) == Some(0),
        // One screen to capture, none to move.
        PieceKind::Cannon => board.count_between(from, to) == Some(usize::from(target.is_some())),
        PieceKind::Pawn => pawn(piece, d_row, d_col),
    }
}

/// Every square `piece` can reach geometrically.
pub fn reachable_squares<'a>(
    piece: &'a Piece,
    board: &'a Board,
) -> impl Iterator<Item = Square> + 'a {
    Square::all().filter(move |&to| can_reach(piece, to, board))
}

fn general(
    piece: &Piece,
    to: Square,
    target: Option<Piece>,
    d_row: i8,
    d_col: i8,
    board: &Board,
) -> bool {
    if d_row.abs() + d_col.abs() == 1 {
        return to.in_palace(piece.side());
    }
    // Facing generals: an open line to the enemy general counts as reach,
    // which is what turns the danger scan into the flying-general rule.
    matches!(target, Some(t) if t.kind() == PieceKind::General)
        && board.count_between(piece.position(), to) == Some(0)
}

fn elephant(piece: &Piece, to: Square, d_row: i8, d_col: i8, board: &Board) -> bool {
    if d_row.abs() != 2 || d_col.abs() != 2 || !to.on_home_side(piece.side()) {
        return false;
    }
    match piece.position().offset(d_row / 2, d_col / 2) {
        Some(eye) => !board.is_occupied(eye),
        None => false,
    }
}

fn horse(from: Square, d_row: i8, d_col: i8, board: &Board) -> bool {
    let jump = matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1));
    if !jump {
        return false;
    }
    if !board.rules().horse_leg_blocking {
        return true;
    }
    // The leg is the orthogonal neighbour on the long side of the L.
    let leg = if d_row.abs() == 2 {
        from.offset(d_row / 2, 0)
    } else {
        from.offset(0, d_col / 2)
    };
    leg.is_some_and(|leg| !board.is_occupied(leg))
}

fn pawn(piece: &Piece, d_row: i8, d_col: i8) -> bool {
    let forward = piece.side().forward();
    if d_row == forward && d_col == 0 {
        return true;
    }
    let crossed = !piece.position().on_home_side(piece.side());
    crossed && d_row == 0 && d_col.abs() == 1
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
