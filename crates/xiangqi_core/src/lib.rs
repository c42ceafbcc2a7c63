//! Xiangqi rules engine.
//!
//! The layers, leaves first:
//! - [`rules`]: per-kind movement predicates (geometry and occupancy only).
//! - [`board`]: the 10x9 grid, placement and raw relocation.
//! - [`safety`]: simulate a move on a copy and check the mover's general.
//! - [`terminal`]: exhaustive legal-move search, checkmate/stalemate.
//! - [`game`]: the session that enforces turn order and records history.
//!
//! ```
//! use xiangqi_core::{RuleConfig, Session, Side, Square};
//!
//! let mut game = Session::standard(&RuleConfig::default());
//! let from = Square::new(6, 0).unwrap();
//! let to = Square::new(5, 0).unwrap();
//! let record = game.attempt_move(from, to).unwrap();
//! assert_eq!(record.notation, "P9+1");
//! assert_eq!(game.side_to_move(), Side::Black);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod placement;
pub mod rules;
pub mod safety;
pub mod terminal;
pub mod types;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use placement::PlacementEntry;
pub use rules::*;
pub use safety::*;
pub use terminal::*;
pub use types::*;
