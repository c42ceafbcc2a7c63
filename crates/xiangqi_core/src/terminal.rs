//! Legal-move search and terminal-state detection.
//!
//! The search is exhaustive: every piece of the side is tried
//! against all 90 squares, and a candidate counts only if it passes both the
//! geometric predicate and the safety simulation.

use crate::board::Board;
use crate::error::InvariantViolation;
use crate::rules::can_reach;
use crate::safety::is_safe_after_move;
use crate::types::*;

/// Geometry plus king safety.
pub fn is_legal(piece: &Piece, to: Square, board: &Board) -> Result<bool, InvariantViolation> {
    Ok(can_reach(piece, to, board) && is_safe_after_move(piece, to, board)?)
}

/// Does `side` have at least one legal move? Stops at the first one found.
pub fn has_any_legal_move(side: Side, board: &Board) -> Result<bool, InvariantViolation> {
    for piece in board.pieces(side) {
        for to in Square::all() {
            if is_legal(&piece, to, board)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// The winner if `side_to_move` has no legal move, else `None`.
///
/// Checkmate and stalemate are the same outcome here: the side that cannot
/// move loses.
pub fn check_winner(side_to_move: Side, board: &Board) -> Result<Option<Side>, InvariantViolation> {
    if has_any_legal_move(side_to_move, board)? {
        Ok(None)
    } else {
        Ok(Some(side_to_move.other()))
    }
}

/// All legal moves for `side`, in board order.
pub fn legal_moves(side: Side, board: &Board) -> Result<Vec<Move>, InvariantViolation> {
    let mut out = Vec::with_capacity(64);
    for piece in board.pieces(side) {
        for to in Square::all() {
            if is_legal(&piece, to, board)? {
                out.push(Move::new(piece.position(), to));
            }
        }
    }
    Ok(out)
}

/// Legal targets for the piece on `from`; empty if the square is empty.
pub fn legal_destinations(from: Square, board: &Board) -> Result<Vec<Square>, InvariantViolation> {
    let Some(piece) = board.piece_at(from) else {
        return Ok(Vec::new());
    };
    let mut out = Vec::new();
    for to in Square::all() {
        if is_legal(&piece, to, board)? {
            out.push(to);
        }
    }
    Ok(out)
}
