//! Core engine types: coordinates, paths, the board, players, RNG, errors.
//!
//! Everything else in the crate is built on these value types.

pub mod board;
pub mod coord;
pub mod error;
pub mod path;
pub mod player;
pub mod rng;

pub use board::{Board, PlacedWord, MAX_BOARD_LENGTH};
pub use coord::{Coord, Direction};
pub use error::{GameError, MismatchReason, Result};
pub use path::Path;
pub use player::{Difficulty, PlayerId, PlayerKind, PlayerProfile, Record};
pub use rng::GameRng;
