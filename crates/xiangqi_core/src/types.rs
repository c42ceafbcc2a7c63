use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of one step toward the enemy back rank.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.write_str("red"),
            Side::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    #[serde(alias = "king")]
    General,
    Advisor,
    #[serde(alias = "minister", alias = "bishop")]
    Elephant,
    #[serde(alias = "knight")]
    Horse,
    #[serde(alias = "rook")]
    Chariot,
    Cannon,
    #[serde(alias = "soldier")]
    Pawn,
}

impl PieceKind {
    /// WXF letter, upper case.
    pub fn letter(self) -> char {
        match self {
            PieceKind::General => 'K',
            PieceKind::Advisor => 'A',
            PieceKind::Elephant => 'E',
            PieceKind::Horse => 'H',
            PieceKind::Chariot => 'R',
            PieceKind::Cannon => 'C',
            PieceKind::Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::General => "general",
            PieceKind::Advisor => "advisor",
            PieceKind::Elephant => "elephant",
            PieceKind::Horse => "horse",
            PieceKind::Chariot => "chariot",
            PieceKind::Cannon => "cannon",
            PieceKind::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// A board coordinate. Always inside the 10x9 grid.
///
/// Row 0 is Black's back rank, row 9 is Red's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    pub const ROWS: i8 = 10;
    pub const COLS: i8 = 9;

    /// Bounds-checked constructor for coordinates coming from outside.
    pub fn new(row: i32, col: i32) -> Result<Self, InputError> {
        if (0..Self::ROWS as i32).contains(&row) && (0..Self::COLS as i32).contains(&col) {
            Ok(Self {
                row: row as i8,
                col: col as i8,
            })
        } else {
            Err(InputError::SquareOutOfBounds { row, col })
        }
    }

    pub(crate) fn at(row: i8, col: i8) -> Option<Self> {
        if (0..Self::ROWS).contains(&row) && (0..Self::COLS).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(self) -> i8 {
        self.row
    }

    pub fn col(self) -> i8 {
        self.col
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::at(self.row + d_row, self.col + d_col)
    }

    /// All 90 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::ROWS).flat_map(|row| (0..Self::COLS).map(move |col| Square { row, col }))
    }

    /// Inside `side`'s 3x3 palace.
    pub fn in_palace(self, side: Side) -> bool {
        let rows = match side {
            Side::Red => 7..=9,
            Side::Black => 0..=2,
        };
        rows.contains(&self.row) && (3..=5).contains(&self.col)
    }

    /// On `side`'s half of the river.
    pub fn on_home_side(self, side: Side) -> bool {
        match side {
            Side::Red => self.row >= 5,
            Side::Black => self.row <= 4,
        }
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = InputError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (i32, i32) {
    fn from(sq: Square) -> Self {
        (sq.row as i32, sq.col as i32)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Accepts `row,col`, optionally wrapped in parentheses.
impl FromStr for Square {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InputError::MalformedSquare(s.to_string());
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(malformed)?;
        let row: i32 = row.trim().parse().map_err(|_| malformed())?;
        let col: i32 = col.trim().parse().map_err(|_| malformed())?;
        Square::new(row, col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    position: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, position: Square) -> Self {
        Self {
            kind,
            side,
            position,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Square {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Square) {
        self.position = position;
    }

    /// FEN-style letter: upper case for Red, lower case for Black.
    pub fn letter(&self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::Red => c,
            Side::Black => c.to_ascii_lowercase(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
