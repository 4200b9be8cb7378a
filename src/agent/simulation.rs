//! The simulation agent: repeated random self-play, then a ranking pass.
//!
//! The agent holds no per-turn state. Each call to [`SimulationAgent::play`]
//! takes an immutable board snapshot and the game's used words, runs the
//! configured number of rollouts on private clones, and reduces the samples
//! to a [`Decision`].
//!
//! ## Example
//!
//! ```
//! use word_battle::agent::{AgentConfig, Decision, SimulationAgent};
//! use word_battle::core::{Board, Difficulty, GameRng};
//! use word_battle::vocab::{UsedWords, Vocabularies, Vocabulary};
//!
//! let vocab = Vocabularies::uniform(Vocabulary::from_words("demo", ["AT", "TO", "CAT", "TOE"]));
//! let agent = SimulationAgent::new(Difficulty::Hard, &vocab, AgentConfig::default());
//!
//! let board = Board::new(3).unwrap();
//! let mut rng = GameRng::new(42);
//! match agent.play(&board, &UsedWords::new(), &mut rng) {
//!     Decision::Move { word, .. } => assert!(vocab.full.contains(&word)),
//!     other => panic!("expected a move, got {other:?}"),
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Coord, Difficulty, GameRng, Path};
use crate::geometry::{open_moves, open_starts};
use crate::vocab::{UsedWords, Vocabularies, Vocabulary};

use super::config::AgentConfig;
use super::policy::{RankedOutcome, SelectionPolicy};
use super::rollout::{RandomRollout, RolloutPolicy, RolloutSample};
use super::stats::RolloutStats;

/// What the agent wants to do this turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Place `word` along `path`.
    Move { path: Path, word: String },

    /// No rollout found an opening move.
    Resign,

    /// The board was already full.
    Draw,
}

impl Decision {
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Decision::Move { .. })
    }
}

/// A decision together with the evidence behind it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Analysis {
    pub decision: Decision,

    /// Every rollout sample, in the order the rollouts ran.
    pub samples: Vec<RolloutSample>,

    /// Boundary cells with at least one open path when analysis began.
    pub starting_positions: Vec<Coord>,

    pub stats: RolloutStats,
}

/// Rollout-based move selection for one computer player.
pub struct SimulationAgent {
    difficulty: Difficulty,
    vocabulary: Arc<Vocabulary>,
    config: AgentConfig,
    selection: Box<dyn SelectionPolicy>,
    rollout: Box<dyn RolloutPolicy>,
}

impl SimulationAgent {
    /// Create an agent drawing words from the vocabulary for `difficulty`.
    pub fn new(difficulty: Difficulty, vocabularies: &Vocabularies, config: AgentConfig) -> Self {
        Self {
            difficulty,
            vocabulary: Arc::clone(vocabularies.for_difficulty(difficulty)),
            config,
            selection: Box::new(RankedOutcome),
            rollout: Box::new(RandomRollout),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom rollout policy.
    pub fn with_rollout<R: RolloutPolicy + 'static>(mut self, rollout: R) -> Self {
        self.rollout = Box::new(rollout);
        self
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Rollouts played per turn.
    #[must_use]
    pub fn rollouts(&self) -> u32 {
        self.config.rollouts_for(self.difficulty)
    }

    /// Choose a move for the current position.
    pub fn play(&self, board: &Board, used: &UsedWords, rng: &mut GameRng) -> Decision {
        self.analyse(board, used, rng).decision
    }

    /// Run the rollouts and return the decision with its samples.
    ///
    /// A full board is a draw without any rollouts. Each rollout runs on its
    /// own fork of `rng`, so the samples do not depend on one another.
    pub fn analyse(&self, board: &Board, used: &UsedWords, rng: &mut GameRng) -> Analysis {
        let start = Instant::now();
        let mut stats = RolloutStats::new();

        if board.is_full() {
            debug!(difficulty = %self.difficulty, "board full, no rollouts");
            return Analysis {
                decision: Decision::Draw,
                samples: Vec::new(),
                starting_positions: Vec::new(),
                stats,
            };
        }

        let starting_positions = open_starts(board);
        let pool = open_moves(board);

        let samples: Vec<RolloutSample> = (0..self.rollouts())
            .map(|_| {
                let mut rollout_rng = rng.fork();
                let sample = self.rollout.rollout(
                    board,
                    used,
                    &pool,
                    &self.vocabulary,
                    self.config.max_rollout_turns,
                    &mut rollout_rng,
                );
                stats.record(&sample);
                sample
            })
            .collect();

        let decision = match self.selection.select(&samples) {
            Some(mv) => Decision::Move {
                path: mv.path.clone(),
                word: mv.word.clone(),
            },
            None => Decision::Resign,
        };

        stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            difficulty = %self.difficulty,
            starts = starting_positions.len(),
            pool = pool.len(),
            rollouts = stats.rollouts,
            wins = stats.wins,
            losses = stats.losses,
            draws = stats.draws,
            ?decision,
            "agent analysed turn"
        );

        Analysis {
            decision,
            samples,
            starting_positions,
            stats,
        }
    }
}

/// One agent per difficulty, sharing a configuration.
#[derive(Debug)]
pub struct AgentPool {
    easy: SimulationAgent,
    medium: SimulationAgent,
    hard: SimulationAgent,
}

impl AgentPool {
    pub fn new(vocabularies: &Vocabularies, config: AgentConfig) -> Self {
        Self {
            easy: SimulationAgent::new(Difficulty::Easy, vocabularies, config.clone()),
            medium: SimulationAgent::new(Difficulty::Medium, vocabularies, config.clone()),
            hard: SimulationAgent::new(Difficulty::Hard, vocabularies, config),
        }
    }

    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &SimulationAgent {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

impl std::fmt::Debug for SimulationAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationAgent")
            .field("difficulty", &self.difficulty)
            .field("vocabulary", &self.vocabulary.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
