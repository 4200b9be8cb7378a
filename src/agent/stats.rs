//! Per-turn rollout statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use super::rollout::{Outcome, RolloutSample};

/// Statistics collected while the agent analyses one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutStats {
    /// Rollouts played.
    pub rollouts: u32,

    /// Samples that carried a first move.
    pub samples_kept: u32,

    pub wins: u32,
    pub losses: u32,
    pub draws: u32,

    /// Total time spent analysing (microseconds).
    pub time_us: u64,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished rollout.
    pub fn record(&mut self, sample: &RolloutSample) {
        self.rollouts += 1;
        if sample.first_move.is_some() {
            self.samples_kept += 1;
        }
        match sample.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.rollouts) / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of rollouts the agent won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rollouts == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.rollouts)
        }
    }
}
