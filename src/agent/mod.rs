//! Rollout-based computer players.
//!
//! ## Overview
//!
//! There is no game tree here. For each real turn the agent plays a fixed
//! number of random two-sided games from the current position, remembers
//! how each one began and ended, and ranks those openings:
//!
//! - **Outcome** first (win over draw over loss)
//! - **Confidence** next: the earliest win, or the longest survival
//! - **Word strength** last, from a fixed per-letter point table
//!
//! Difficulty picks the vocabulary the agent draws from and its rollout
//! count; see [`AgentConfig`].
//!
//! ## Custom Policies
//!
//! ```rust,ignore
//! use word_battle::agent::{AgentConfig, SimulationAgent};
//!
//! let agent = SimulationAgent::new(difficulty, &vocabularies, AgentConfig::default())
//!     .with_selection(MyPolicy);
//! ```

pub mod config;
pub mod policy;
pub mod rollout;
pub mod simulation;
pub mod stats;

pub use config::AgentConfig;
pub use policy::{confidence, word_strength, RankedOutcome, SelectionPolicy, LETTER_VALUES};
pub use rollout::{random_move, Move, Outcome, RandomRollout, RolloutPolicy, RolloutSample};
pub use simulation::{AgentPool, Analysis, Decision, SimulationAgent};
pub use stats::RolloutStats;
