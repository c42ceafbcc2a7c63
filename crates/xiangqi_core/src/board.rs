use std::fmt;

use crate::config::Rules;
use crate::error::{InputError, InvariantViolation};
use crate::placement::{self, PlacementEntry};
use crate::types::*;

const ROWS: usize = Square::ROWS as usize;
const COLS: usize = Square::COLS as usize;

type Grid = [[Option<Piece>; COLS]; ROWS];

/// The 10x9 grid. Pieces are plain values, so `clone` is a full deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    rules: Rules,
}

impl Board {
    pub fn empty(rules: Rules) -> Self {
        Board {
            grid: [[None; COLS]; ROWS],
            rules,
        }
    }

    pub fn standard(rules: Rules) -> Self {
        let mut board = Board::empty(rules);
        for entry in placement::standard() {
            // Standard squares are distinct and in bounds.
            if let Ok(sq) = Square::new(entry.row, entry.col) {
                board.grid[sq.row() as usize][sq.col() as usize] =
                    Some(Piece::new(entry.kind, entry.side, sq));
            }
        }
        board
    }

    /// Build a board from a placement, checking the shape of the input:
    /// squares in bounds, no square used twice, exactly one general per side.
    pub fn from_placement(entries: &[PlacementEntry], rules: Rules) -> Result<Self, InputError> {
        let mut board = Board::empty(rules);
        for entry in entries {
            let sq = Square::new(entry.row, entry.col)?;
            board.place(entry.kind, entry.side, sq)?;
        }
        board.check_generals()?;
        Ok(board)
    }

    pub(crate) fn check_generals(&self) -> Result<(), InputError> {
        for side in [Side::Red, Side::Black] {
            match self.general_count(side) {
                0 => return Err(InputError::MissingGeneral(side)),
                1 => {}
                _ => return Err(InputError::DuplicateGeneral(side)),
            }
        }
        Ok(())
    }

    fn general_count(&self, side: Side) -> usize {
        self.pieces(side)
            .filter(|pc| pc.kind() == PieceKind::General)
            .count()
    }

    /// Replace the contents with a new placement, keeping the rules.
    /// On error the board is left as it was.
    pub fn reset(&mut self, entries: &[PlacementEntry]) -> Result<(), InputError> {
        *self = Board::from_placement(entries, self.rules)?;
        Ok(())
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Insert a piece during setup.
    pub fn place(&mut self, kind: PieceKind, side: Side, sq: Square) -> Result<(), InputError> {
        let slot = self.slot_mut(sq);
        if slot.is_some() {
            return Err(InputError::SquareOccupied(sq));
        }
        *slot = Some(Piece::new(kind, side, sq));
        Ok(())
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    fn slot_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Move whatever stands on `from` to `to`, removing anything on `to`.
    /// No legality checks; returns the captured piece.
    pub fn relocate(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<Option<Piece>, InvariantViolation> {
        let mut moving = self
            .slot_mut(from)
            .take()
            .ok_or(InvariantViolation::EmptySource(from))?;
        debug_assert_eq!(moving.position(), from, "stored position out of sync");
        moving.set_position(to);
        Ok(self.slot_mut(to).replace(moving))
    }

    pub fn find_general(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .find(|pc| pc.kind() == PieceKind::General)
            .map(|pc| pc.position())
    }

    /// All pieces, row by row.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().flatten().copied()
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces().filter(move |pc| pc.side() == side)
    }

    /// Number of pieces strictly between two squares on the same rank or
    /// file. `None` when the squares are not aligned (or are equal).
    pub fn count_between(&self, a: Square, b: Square) -> Option<usize> {
        if a == b || (a.row() != b.row() && a.col() != b.col()) {
            return None;
        }
        let d_row = (b.row() - a.row()).signum();
        let d_col = (b.col() - a.col()).signum();
        let mut count = 0;
        let mut cur = a.offset(d_row, d_col)?;
        while cur != b {
            if self.is_occupied(cur) {
                count += 1;
            }
            cur = cur.offset(d_row, d_col)?;
        }
        Some(count)
    }

    /// Check the structural invariants: one general per side, and every
    /// piece's stored position matching its slot.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        for slot in Square::all() {
            if let Some(pc) = self.piece_at(slot)
                && pc.position() != slot
            {
                return Err(InvariantViolation::PositionMismatch {
                    slot,
                    stored: pc.position(),
                });
            }
        }
        for side in [Side::Red, Side::Black] {
            let count = self.general_count(side);
            if count != 1 {
                return Err(InvariantViolation::GeneralCount { side, count });
            }
        }
        Ok(())
    }

    /// Read-only copy of the grid for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { grid: self.grid }
    }
}

/// A detached view of the grid. Row 0 first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    grid: Grid,
}

impl Snapshot {
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    pub fn rows(&self) -> &[[Option<Piece>; COLS]; ROWS] {
        &self.grid
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                match cell {
                    Some(pc) => write!(f, " {}", pc.letter())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..COLS {
            write!(f, " {col}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
