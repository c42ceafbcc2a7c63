//! King-safety layer: turns geometric reach into chess-legal moves.

use crate::board::Board;
use crate::error::InvariantViolation;
use crate::rules::can_reach;
use crate::types::*;

/// Whether any enemy piece can reach `side`'s general.
///
/// Facing generals are covered because the general's own predicate reaches
/// the enemy general along an open file.
pub fn is_general_in_danger(side: Side, board: &Board) -> Result<bool, InvariantViolation> {
    let general = board
        .find_general(side)
        .ok_or(InvariantViolation::GeneralMissing(side))?;
    Ok(board
        .pieces(side.other())
        .any(|enemy| can_reach(&enemy, general, board)))
}

/// Danger scan on the live board.
pub fn is_in_check(side: Side, board: &Board) -> Result<bool, InvariantViolation> {
    is_general_in_danger(side, board)
}

/// Play `piece` to `to` on a scratch copy and report whether the mover's
/// general is out of danger afterwards. The caller's board is not touched.
pub fn is_safe_after_move(
    piece: &Piece,
    to: Square,
    board: &Board,
) -> Result<bool, InvariantViolation> {
    let mut scratch = board.clone();
    scratch.relocate(piece.position(), to)?;
    Ok(!is_general_in_danger(piece.side(), &scratch)?)
}

#[cfg(test)]
#[path = "safety_tests.rs"]
mod safety_tests;
