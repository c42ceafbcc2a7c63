//! WXF-style move notation, for history display only.
//!
//! Format: piece letter, origin file, operator, operand.
//! - Files are counted 1-9 from the mover's right hand.
//! - `+` forward, `-` backward, `.` sideways.
//! - Advisors, elephants and horses name the destination file; everything
//!   else names the number of ranks moved, or the destination file when
//!   moving sideways.
//! - When exactly two pieces of the same kind and side share the origin
//!   file, the file digit is replaced by `+` (front piece) or `-` (rear).
//!
//! Red letters are upper case, Black lower case. Letters are the WXF set
//! (`H` horse, `E` elephant) and sideways moves use `.`, not the `N`/`B`
//! letters and `=` operator of western-style variants.

use crate::board::Board;
use crate::types::*;

fn file_of(sq: Square, side: Side) -> i8 {
    match side {
        Side::Red => Square::COLS - sq.col(),
        Side::Black => sq.col() + 1,
    }
}

/// Ranks advanced toward the enemy; negative when retreating.
fn advance(from: Square, to: Square, side: Side) -> i8 {
    (to.row() - from.row()) * side.forward()
}

/// Notation for moving the piece on `from` to `to`, computed against the
/// board *before* the move. `None` if `from` is empty.
pub fn describe(before: &Board, from: Square, to: Square) -> Option<String> {
    let piece = before.piece_at(from)?;
    let side = piece.side();
    let mut out = String::with_capacity(4);
    out.push(piece.letter());

    let twins: Vec<Piece> = before
        .pieces(side)
        .filter(|pc| pc.kind() == piece.kind() && pc.position().col() == from.col())
        .collect();
    if twins.len() == 2 {
        let front = twins
            .iter()
            .all(|pc| advance(pc.position(), from, side) >= 0);
        out.push(if front { '+' } else { '-' });
    } else {
        out.push_str(&file_of(from, side).to_string());
    }

    let steps = advance(from, to, side);
    out.push(match steps {
        s if s > 0 => '+',
        s if s < 0 => '-',
        _ => '.',
    });

    let diagonal = matches!(
        piece.kind(),
        PieceKind::Advisor | PieceKind::Elephant | PieceKind::Horse
    );
    let operand = if diagonal || steps == 0 {
        file_of(to, side)
    } else {
        steps.abs()
    };
    out.push_str(&operand.to_string());
    Some(out)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
