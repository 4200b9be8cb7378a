//! # word-battle
//!
//! Engine for a turn-based grid word game: players claim a straight or
//! diagonal path from a boundary cell of an N×N board and fill it with a
//! dictionary word that agrees with the letters already there.
//!
//! ## Design Principles
//!
//! 1. **No search tree**: computer players sample random self-play
//!    rollouts and rank their openings; difficulty is vocabulary breadth
//!    and rollout count, not depth.
//!
//! 2. **Immutable snapshots**: the agent is a pure function of a board
//!    snapshot, the used words and its vocabulary. Boards and word sets
//!    clone in O(1) via `im`.
//!
//! 3. **Deterministic**: every random choice flows from a seeded
//!    [`GameRng`], forked per rollout and per game.
//!
//! ## Modules
//!
//! - `core`: coordinates, paths, the board, players, RNG, errors
//! - `geometry`: paths offered by a boundary cell, full-path pruning
//! - `vocab`: vocabularies, used words, the word-constraint matcher
//! - `agent`: the rollout-based simulation agent
//! - `game`: the turn state machine and series of games
//! - `replay`: replay logs, their byte encoding and files
//! - `settings`: the settings file

pub mod agent;
pub mod core;
pub mod game;
pub mod geometry;
pub mod replay;
pub mod settings;
pub mod vocab;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, Difficulty, Direction, GameError, GameRng, MismatchReason, Path, PlayerId,
    PlayerKind, PlayerProfile, Record, Result,
};

pub use crate::geometry::{generate_paths, open_moves, open_starts, prune_full};

pub use crate::vocab::{match_word, verify_word, UsedWords, Vocabularies, Vocabulary};

pub use crate::agent::{
    AgentConfig, AgentPool, Analysis, Decision, RankedOutcome, RandomRollout, RolloutPolicy,
    RolloutSample, RolloutStats, SelectionPolicy, SimulationAgent,
};

pub use crate::game::{Actor, Game, GameEvent, GameResult, Phase, Series, SeriesConfig};

pub use crate::replay::{ReplayHeader, ReplayLog};

pub use crate::settings::{Settings, SettingsError};
