//! Error taxonomy for the game engine.
//!
//! `NoLegalPath` and `NoCandidateWord` are expected signals: callers pick
//! another start or conclude a resignation. `InvalidStart` and
//! `WordMismatch` reject caller input without retrying. `CorruptReplay` is
//! surfaced to whoever is loading the replay.

use thiserror::Error;

use super::coord::Coord;

/// Why a submitted word was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MismatchReason {
    /// The word does not have one letter per path cell.
    WrongLength { expected: usize, actual: usize },
    /// The word is not in the full dictionary.
    NotInDictionary,
    /// The word has already been placed this game.
    AlreadyUsed,
    /// The word disagrees with a letter already on the path.
    ConflictsWithBoard { position: usize },
}

impl std::fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchReason::WrongLength { expected, actual } if actual < expected => {
                write!(f, "word is too short (needs {expected} letters)")
            }
            MismatchReason::WrongLength { expected, .. } => {
                write!(f, "word is too long (needs {expected} letters)")
            }
            MismatchReason::NotInDictionary => write!(f, "that's not a word"),
            MismatchReason::AlreadyUsed => write!(f, "that word has already been used"),
            MismatchReason::ConflictsWithBoard { position } => {
                write!(f, "word not in order with the selected path (letter {})", position + 1)
            }
        }
    }
}

/// Errors raised by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{0} is not a boundary cell of the board")]
    InvalidStart(Coord),

    #[error("every path from {0} is already full")]
    NoLegalPath(Coord),

    #[error("cannot place {word:?}: {reason}")]
    WordMismatch { word: String, reason: MismatchReason },

    #[error("no candidate word fits the path")]
    NoCandidateWord,

    #[error("corrupt replay: {0}")]
    CorruptReplay(String),

    #[error("board length must be between 1 and {max}, got {0}", max = crate::core::board::MAX_BOARD_LENGTH)]
    InvalidBoardLength(usize),

    #[error("invalid player setup: {0}")]
    InvalidPlayer(String),

    #[error("path number {0} is not on offer")]
    InvalidPathIndex(usize),

    #[error("action not allowed while {0}")]
    WrongPhase(&'static str),
}

impl GameError {
    /// Build a `CorruptReplay` from anything printable.
    pub fn corrupt(detail: impl std::fmt::Display) -> Self {
        GameError::CorruptReplay(detail.to_string())
    }

    /// Whether the caller is expected to recover (pick another start,
    /// resign) rather than report a failure.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::NoLegalPath(_) | GameError::NoCandidateWord)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;
