//! Game session: turn order, move application and game status.

use serde::Serialize;
use tracing::{debug, error, info, trace};

use crate::board::{Board, Snapshot};
use crate::config::RuleConfig;
use crate::error::{InputError, InvariantViolation, MoveError, MoveRejection};
use crate::notation;
use crate::placement::PlacementEntry;
use crate::rules::can_reach;
use crate::safety::{is_in_check, is_safe_after_move};
use crate::terminal::{check_winner, legal_destinations, legal_moves};
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    InProgress,
    /// `winner` is `None` for an agreed draw.
    Over { winner: Option<Side> },
}

/// One applied move, kept for history display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub kind: PieceKind,
    pub side: Side,
    pub captured: Option<PieceKind>,
    /// WXF-style text, see [`crate::notation`].
    pub notation: String,
}

/// The single unit of game state. One per game; not shared between games.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    side_to_move: Side,
    first_to_move: Side,
    status: Status,
    history: Vec<MoveRecord>,
    full_move_number: u32,
}

impl Session {
    /// Start a game from an arbitrary placement.
    pub fn new(placement: &[PlacementEntry], config: &RuleConfig) -> Result<Self, InputError> {
        let board = Board::from_placement(placement, config.rules())?;
        Self::from_board(board, config.first_to_move)
    }

    /// Start a game from the standard opening.
    pub fn standard(config: &RuleConfig) -> Self {
        Self::start(Board::standard(config.rules()), config.first_to_move)
    }

    /// Start from a prepared board. The side not to move must not already
    /// be in check, otherwise the position could never have been reached.
    pub fn from_board(board: Board, side_to_move: Side) -> Result<Self, InputError> {
        board.check_generals()?;
        let waiting = side_to_move.other();
        if let Ok(true) = is_in_check(waiting, &board) {
            return Err(InputError::OpponentInCheck(waiting));
        }
        Ok(Self::start(board, side_to_move))
    }

    fn start(board: Board, side_to_move: Side) -> Self {
        Session {
            board,
            side_to_move,
            first_to_move: side_to_move,
            status: Status::InProgress,
            history: Vec::new(),
            full_move_number: 1,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Plies applied so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Starts at 1 and advances once both sides have moved.
    pub fn full_move_number(&self) -> u32 {
        self.full_move_number
    }

    pub fn is_in_check(&self, side: Side) -> Result<bool, InvariantViolation> {
        is_in_check(side, &self.board)
    }

    pub fn legal_destinations(&self, from: Square) -> Result<Vec<Square>, InvariantViolation> {
        legal_destinations(from, &self.board)
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>, InvariantViolation> {
        legal_moves(self.side_to_move, &self.board)
    }

    /// Validate and apply a move for the side to move.
    ///
    /// On rejection nothing changes. On success the turn passes and the
    /// status is updated if the new side to move has no legal reply.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        match self.apply(from, to) {
            Ok(record) => Ok(record),
            Err(MoveError::Rejected(reason)) => {
                trace!(%from, %to, %reason, "move rejected");
                Err(reason.into())
            }
            Err(MoveError::Invariant(violation)) => {
                error!(%from, %to, %violation, "board invariant violated");
                Err(violation.into())
            }
        }
    }

    fn apply(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        if self.status != Status::InProgress {
            return Err(MoveRejection::GameOver.into());
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveRejection::NoPiece(from))?;
        if piece.side() != self.side_to_move {
            return Err(MoveRejection::NotYourPiece {
                square: from,
                owner: piece.side(),
                side_to_move: self.side_to_move,
            }
            .into());
        }
        if !can_reach(&piece, to, &self.board) {
            return Err(MoveRejection::Unreachable { from, to }.into());
        }
        if !is_safe_after_move(&piece, to, &self.board)? {
            return Err(MoveRejection::ExposesGeneral(piece.side()).into());
        }

        // Everything fallible runs on the copy; the session is only touched
        // once the new position has checked out.
        let mut next = self.board.clone();
        let captured = next.relocate(from, to)?;
        next.verify()?;
        let replying = self.side_to_move.other();
        let winner = check_winner(replying, &next)?;

        let notation = notation::describe(&self.board, from, to).unwrap_or_default();
        self.board = next;
        let record = MoveRecord {
            from,
            to,
            kind: piece.kind(),
            side: piece.side(),
            captured: captured.map(|pc| pc.kind()),
            notation,
        };
        debug!(
            side = %record.side,
            notation = %record.notation,
            captured = ?record.captured,
            "move applied"
        );
        self.history.push(record.clone());

        if self.side_to_move != self.first_to_move {
            self.full_move_number += 1;
        }
        self.side_to_move = replying;

        if let Some(winner) = winner {
            info!(%winner, moves = self.history.len(), "no legal reply, game over");
            self.status = Status::Over {
                winner: Some(winner),
            };
        }
        Ok(record)
    }

    /// The side to move resigns.
    pub fn resign(&mut self) -> Result<Status, MoveRejection> {
        self.resign_side(self.side_to_move)
    }

    /// `side` resigns, whether or not it is to move.
    pub fn resign_side(&mut self, side: Side) -> Result<Status, MoveRejection> {
        self.finish(Some(side.other()))?;
        info!(%side, "resigned");
        Ok(self.status)
    }

    /// Both players agreed to a draw.
    pub fn agree_draw(&mut self) -> Result<Status, MoveRejection> {
        self.finish(None)?;
        info!("draw agreed");
        Ok(self.status)
    }

    fn finish(&mut self, winner: Option<Side>) -> Result<(), MoveRejection> {
        if self.status != Status::InProgress {
            return Err(MoveRejection::GameOver);
        }
        self.status = Status::Over { winner };
        Ok(())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
