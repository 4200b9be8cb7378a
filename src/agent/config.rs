//! Agent configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Rollout budget per difficulty.
///
/// Difficulty mostly comes from vocabulary breadth; the rollout count only
/// sets how many self-play samples back each real move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Rollouts per turn for EASY agents (default: 3).
    pub easy_rollouts: u32,

    /// Rollouts per turn for MEDIUM agents (default: 8).
    pub medium_rollouts: u32,

    /// Rollouts per turn for HARD agents (default: 8).
    pub hard_rollouts: u32,

    /// Placed words after which a rollout is scored as a draw (0 = unlimited).
    pub max_rollout_turns: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            easy_rollouts: 3,
            medium_rollouts: 8,
            hard_rollouts: 8,
            max_rollout_turns: 0,
        }
    }
}

impl AgentConfig {
    #[must_use]
    pub fn rollouts_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_rollouts,
            Difficulty::Medium => self.medium_rollouts,
            Difficulty::Hard => self.hard_rollouts,
        }
    }

    /// Override the rollout count for one difficulty.
    pub fn with_rollouts(mut self, difficulty: Difficulty, rollouts: u32) -> Self {
        match difficulty {
            Difficulty::Easy => self.easy_rollouts = rollouts,
            Difficulty::Medium => self.medium_rollouts = rollouts,
            Difficulty::Hard => self.hard_rollouts = rollouts,
        }
        self
    }

    pub fn with_max_rollout_turns(mut self, turns: u32) -> Self {
        self.max_rollout_turns = turns;
        self
    }
}
