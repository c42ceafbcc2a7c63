//! Error types for the engine.
//!
//! Three families are kept apart:
//! - [`MoveRejection`]: an ordinary illegal move. Expected and frequent.
//! - [`InputError`]: bad data at the boundary (placement, config, coordinates).
//! - [`InvariantViolation`]: the engine's own board state is corrupt.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Side, Square};

/// Malformed input rejected before any engine state is built or touched.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("square ({row},{col}) is outside the 10x9 board")]
    SquareOutOfBounds { row: i32, col: i32 },

    #[error("cannot parse square from '{0}', expected 'row,col'")]
    MalformedSquare(String),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("{0} has no general in the placement")]
    MissingGeneral(Side),

    #[error("{0} has more than one general in the placement")]
    DuplicateGeneral(Side),

    #[error("{0} is already in check although it is not to move")]
    OpponentInCheck(Side),

    #[error("invalid placement JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A board state the engine should never be able to reach.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{0} general is missing from a live board")]
    GeneralMissing(Side),

    #[error("{side} has {count} generals on the board")]
    GeneralCount { side: Side, count: usize },

    #[error("piece in slot {slot} believes it stands on {stored}")]
    PositionMismatch { slot: Square, stored: Square },

    #[error("relocation from empty square {0}")]
    EmptySource(Square),
}

/// Why a requested move was refused. The board is never modified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("the game is already over")]
    GameOver,

    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("piece on {square} belongs to {owner}, but {side_to_move} is to move")]
    NotYourPiece {
        square: Square,
        owner: Side,
        side_to_move: Side,
    },

    #[error("piece on {from} cannot reach {to}")]
    Unreachable { from: Square, to: Square },

    #[error("move would leave the {0} general in danger")]
    ExposesGeneral(Side),
}

/// Failure of [`crate::Session::attempt_move`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Rejected(#[from] MoveRejection),

    #[error("engine invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl MoveError {
    /// The rejection reason, if this is an ordinary illegal move.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveError::Rejected(r) => Some(*r),
            MoveError::Invariant(_) => None,
        }
    }
}
