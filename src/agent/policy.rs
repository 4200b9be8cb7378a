//! Ranking rollout samples into a real move.
//!
//! The default policy keeps only samples with the best outcome, then
//! prefers the earliest win or the latest loss/draw, then the stronger
//! word. Any remaining tie goes to the alphabetically first word, then the
//! lexicographically first path, so the result never depends on the order
//! rollouts finished in.

use std::cmp::Reverse;

use crate::core::Coord;

use super::rollout::{Move, Outcome, RolloutSample};

/// Point value of each letter, `A` through `Z`.
pub const LETTER_VALUES: [u32; 26] = [
    3, 9, 8, 7, 1, 8, 8, 5, 5, 10, 10, 7, 8, 5, 4, 9, 10, 6, 5, 2, 8, 10, 8, 10, 9, 10,
];

/// Sum of letter values; a word with any letter outside `A..=Z` scores 0.
#[must_use]
pub fn word_strength(word: &str) -> u32 {
    word.chars()
        .map(|c| {
            c.is_ascii_uppercase()
                .then(|| LETTER_VALUES[(c as u8 - b'A') as usize])
        })
        .sum::<Option<u32>>()
        .unwrap_or(0)
}

/// Earlier wins rank higher; later losses and draws rank higher.
#[must_use]
pub fn confidence(sample: &RolloutSample) -> i64 {
    let turn = i64::from(sample.turn_number);
    if sample.outcome == Outcome::Win {
        -turn
    } else {
        turn
    }
}

/// Policy for turning rollout samples into a move.
pub trait SelectionPolicy: Send + Sync {
    /// Choose a move, or `None` when no sample carries one.
    fn select<'a>(&self, samples: &'a [RolloutSample]) -> Option<&'a Move>;
}

/// Outcome, then confidence, then word strength.
#[derive(Clone, Debug, Default)]
pub struct RankedOutcome;

impl SelectionPolicy for RankedOutcome {
    fn select<'a>(&self, samples: &'a [RolloutSample]) -> Option<&'a Move> {
        let playable = || {
            samples
                .iter()
                .filter_map(|s| s.first_move.as_ref().map(|mv| (s, mv)))
        };

        let best = playable().map(|(s, _)| s.outcome).max()?;

        playable()
            .filter(|(s, _)| s.outcome == best)
            .max_by(|(a, move_a), (b, move_b)| rank(a, move_a).cmp(&rank(b, move_b)))
            .map(|(_, mv)| mv)
    }
}

fn rank<'m>(sample: &RolloutSample, mv: &'m Move) -> (i64, u32, Reverse<&'m str>, Reverse<&'m [Coord]>) {
    (
        confidence(sample),
        word_strength(&mv.word),
        Reverse(mv.word.as_str()),
        Reverse(mv.path.cells()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Direction, Path};

    fn path(row: usize) -> Path {
        Path::walk(Coord::new(row, 0), Direction::E, 3).unwrap()
    }

    fn sample(outcome: Outcome, turn: u32, row: usize, word: &str) -> RolloutSample {
        RolloutSample::new(
            outcome,
            turn,
            Some(Move {
                path: path(row),
                word: word.to_string(),
            }),
        )
    }

    #[test]
    fn test_word_strength() {
        assert_eq!(word_strength("AT"), 5);
        assert_eq!(word_strength("OX"), 14);
        assert_eq!(word_strength("CAT"), 13);
        assert_eq!(word_strength(""), 0);
        assert_eq!(word_strength("CAT1"), 0);
        assert_eq!(word_strength("cat"), 0);
    }

    #[test]
    fn test_letter_table_total() {
        assert_eq!(LETTER_VALUES.iter().sum::<u32>(), 185);
    }

    #[test]
    fn test_confidence_sign() {
        assert_eq!(confidence(&sample(Outcome::Win, 4, 0, "AT")), -4);
        assert_eq!(confidence(&sample(Outcome::Loss, 4, 0, "AT")), 4);
        assert_eq!(confidence(&sample(Outcome::Draw, 4, 0, "AT")), 4);
    }

    #[test]
    fn test_prefers_earliest_win() {
        let samples = vec![
            sample(Outcome::Win, 2, 0, "CAT"),
            sample(Outcome::Win, 5, 1, "DOG"),
            sample(Outcome::Loss, 9, 2, "ANT"),
        ];
        let chosen = RankedOutcome.select(&samples).unwrap();
        assert_eq!(chosen.word, "CAT");
        assert_eq!(chosen.path, path(0));
    }

    #[test]
    fn test_prefers_latest_loss() {
        let samples = vec![
            sample(Outcome::Loss, 1, 0, "CAT"),
            sample(Outcome::Loss, 6, 1, "DOG"),
        ];
        assert_eq!(RankedOutcome.select(&samples).unwrap().word, "DOG");
    }

    #[test]
    fn test_draw_beats_loss() {
        let samples = vec![
            sample(Outcome::Loss, 9, 0, "CAT"),
            sample(Outcome::Draw, 1, 1, "DOG"),
        ];
        assert_eq!(RankedOutcome.select(&samples).unwrap().word, "DOG");
    }

    #[test]
    fn test_word_strength_breaks_ties() {
        let samples = vec![
            sample(Outcome::Draw, 4, 0, "AT"),
            sample(Outcome::Draw, 4, 1, "OX"),
        ];
        let chosen = RankedOutcome.select(&samples).unwrap();
        assert_eq!(chosen.word, "OX");
        assert_eq!(chosen.path, path(1));
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![
            sample(Outcome::Draw, 4, 0, "TA"),
            sample(Outcome::Draw, 4, 1, "AT"),
        ];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();

        let a = RankedOutcome.select(&forward).unwrap();
        let b = RankedOutcome.select(&backward).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.word, "AT");
    }

    #[test]
    fn test_samples_without_move_ignored() {
        let samples = vec![
            RolloutSample::new(Outcome::Win, 0, None),
            sample(Outcome::Loss, 3, 0, "CAT"),
        ];
        assert_eq!(RankedOutcome.select(&samples).unwrap().word, "CAT");
    }

    #[test]
    fn test_no_playable_samples() {
        let samples = vec![RolloutSample::new(Outcome::Loss, 0, None)];
        assert!(RankedOutcome.select(&samples).is_none());
        assert!(RankedOutcome.select(&[]).is_none());
    }
}
