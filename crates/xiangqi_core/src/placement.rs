//! Starting placements.
//!
//! A placement is a flat, order-independent list of `(kind, side, row, col)`
//! entries. The JSON form accepts either objects or 4-element arrays:
//!
//! ```json
//! [
//!   {"kind": "general", "side": "red", "row": 9, "col": 4},
//!   ["general", "black", 0, 4]
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::types::{PieceKind, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementEntry {
    pub kind: PieceKind,
    pub side: Side,
    pub row: i32,
    pub col: i32,
}

impl PlacementEntry {
    pub fn new(kind: PieceKind, side: Side, row: i32, col: i32) -> Self {
        Self {
            kind,
            side,
            row,
            col,
        }
    }
}

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// The standard opening: Black on rows 0-3, Red on rows 6-9.
pub fn standard() -> Vec<PlacementEntry> {
    let mut entries = Vec::with_capacity(32);
    for (side, back, cannons, pawns) in [(Side::Black, 0, 2, 3), (Side::Red, 9, 7, 6)] {
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            entries.push(PlacementEntry::new(kind, side, back, col as i32));
        }
        for col in [1, 7] {
            entries.push(PlacementEntry::new(PieceKind::Cannon, side, cannons, col));
        }
        for col in (0..9).step_by(2) {
            entries.push(PlacementEntry::new(PieceKind::Pawn, side, pawns, col));
        }
    }
    entries
}

/// Parse a placement from a JSON array.
pub fn from_json(text: &str) -> Result<Vec<PlacementEntry>, InputError> {
    Ok(serde_json::from_str(text)?)
}

pub fn to_json(entries: &[PlacementEntry]) -> Result<String, InputError> {
    Ok(serde_json::to_string_pretty(entries)?)
}
