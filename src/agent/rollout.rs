//! Randomized two-sided self-play from a board snapshot.
//!
//! Side 0 is the agent itself, side 1 stands in for every opponent. The
//! sides alternate, each drawing paths from the move pool without
//! replacement until one yields a word. A side that exhausts the pool is
//! stuck and loses; a board that fills first is a draw.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, GameRng, Path};
use crate::vocab::{pick_word, UsedWords, Vocabulary};

/// Result of a rollout from the agent's point of view.
///
/// Ordered `Loss < Draw < Win`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    /// -1, 0 or +1.
    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            Outcome::Loss => -1,
            Outcome::Draw => 0,
            Outcome::Win => 1,
        }
    }
}

/// A path and the word written into it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub path: Path,
    pub word: String,
}

/// One rollout's verdict on its opening move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutSample {
    pub outcome: Outcome,

    /// Words placed before the rollout resolved.
    pub turn_number: u32,

    /// The first move of the rollout; `None` if the agent was stuck at once.
    pub first_move: Option<Move>,
}

impl RolloutSample {
    #[must_use]
    pub fn new(outcome: Outcome, turn_number: u32, first_move: Option<Move>) -> Self {
        Self {
            outcome,
            turn_number,
            first_move,
        }
    }
}

/// Policy for playing out a rollout.
pub trait RolloutPolicy: Send + Sync {
    /// Play one rollout on private copies of `board` and `used`.
    fn rollout(
        &self,
        board: &Board,
        used: &UsedWords,
        pool: &[Path],
        vocabulary: &Vocabulary,
        max_turns: u32,
        rng: &mut GameRng,
    ) -> RolloutSample;
}

/// Uniform random self-play.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl RolloutPolicy for RandomRollout {
    fn rollout(
        &self,
        board: &Board,
        used: &UsedWords,
        pool: &[Path],
        vocabulary: &Vocabulary,
        max_turns: u32,
        rng: &mut GameRng,
    ) -> RolloutSample {
        let mut board = board.clone();
        let mut used = used.clone();
        let mut first_move: Option<Move> = None;
        let mut turn = 0u32;

        loop {
            for side in 0..2u8 {
                if board.is_full() || (max_turns > 0 && turn >= max_turns) {
                    trace!(turn, "rollout drawn");
                    return RolloutSample::new(Outcome::Draw, turn, first_move);
                }

                let placed = random_move(&board, pool, &used, vocabulary, rng)
                    .filter(|mv| board.place_word(&mv.path, &mv.word).is_ok());

                let Some(mv) = placed else {
                    let outcome = if side == 0 { Outcome::Loss } else { Outcome::Win };
                    trace!(turn, side, ?outcome, "rollout side stuck");
                    return RolloutSample::new(outcome, turn, first_move);
                };

                used.insert(mv.word.clone());
                first_move.get_or_insert(mv);
                turn += 1;
            }
        }
    }
}

/// Draw paths from `pool` without replacement until one takes a word.
pub fn random_move(
    board: &Board,
    pool: &[Path],
    used: &UsedWords,
    vocabulary: &Vocabulary,
    rng: &mut GameRng,
) -> Option<Move> {
    let mut remaining: Vec<&Path> = pool.iter().collect();
    while let Some(path) = rng.take(&mut remaining) {
        if let Ok(word) = pick_word(vocabulary, &board.letters(path), used, rng) {
            return Some(Move {
                path: path.clone(),
                word,
            });
        }
    }
    None
}
