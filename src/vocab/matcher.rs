//! Resolving a partially filled path against a vocabulary.
//!
//! A path's current letters become a fixed-length pattern: literal letters
//! where the board is filled, wildcards where it is empty. Machine players
//! draw uniformly from the unused words matching the pattern; human words
//! are verified against it position by position.

use crate::core::{GameError, GameRng, MismatchReason, Result};

use super::used::UsedWords;
use super::vocabulary::Vocabulary;

/// Fixed-length pattern of literals and wildcards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPattern {
    slots: Vec<Option<char>>,
}

impl WordPattern {
    #[must_use]
    pub fn new(letters: &[Option<char>]) -> Self {
        Self {
            slots: letters.to_vec(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// No wildcard left: the path is already full.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Position of the first literal `word` disagrees with, if any.
    ///
    /// Assumes `word` has the pattern's length.
    #[must_use]
    pub fn first_conflict(&self, word: &str) -> Option<usize> {
        self.slots
            .iter()
            .zip(word.chars())
            .position(|(slot, letter)| slot.is_some_and(|fixed| fixed != letter))
    }

    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.slots.len() && self.first_conflict(word).is_none()
    }
}

impl std::fmt::Display for WordPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or('.'))?;
        }
        Ok(())
    }
}

/// Unused vocabulary words fitting `pattern`, in vocabulary order.
///
/// Empty for a complete pattern.
#[must_use]
pub fn candidates<'v>(
    vocabulary: &'v Vocabulary,
    pattern: &WordPattern,
    used: &UsedWords,
) -> Vec<&'v str> {
    if pattern.is_complete() {
        return Vec::new();
    }
    vocabulary
        .words_of_length(pattern.len())
        .iter()
        .filter(|word| pattern.matches(word) && !used.contains(word))
        .map(String::as_str)
        .collect()
}

/// Pick a word for a machine player, uniformly among the candidates.
///
/// Fails with `NoCandidateWord` when the path is full or nothing fits.
pub fn pick_word(
    vocabulary: &Vocabulary,
    path_letters: &[Option<char>],
    used: &UsedWords,
    rng: &mut GameRng,
) -> Result<String> {
    let pattern = WordPattern::new(path_letters);
    let found = candidates(vocabulary, &pattern, used);
    rng.choose(&found)
        .map(|word| (*word).to_string())
        .ok_or(GameError::NoCandidateWord)
}

/// [`pick_word`] as an option.
#[must_use]
pub fn match_word(
    vocabulary: &Vocabulary,
    path_letters: &[Option<char>],
    used: &UsedWords,
    rng: &mut GameRng,
) -> Option<String> {
    pick_word(vocabulary, path_letters, used, rng).ok()
}

/// Check a human-submitted word against the path.
///
/// The word must have one letter per cell, be in `dictionary`, be unused,
/// and agree with every letter already on the path at the same position.
pub fn verify_word(
    dictionary: &Vocabulary,
    path_letters: &[Option<char>],
    used: &UsedWords,
    word: &str,
) -> Result<()> {
    let mismatch = |reason| GameError::WordMismatch {
        word: word.to_string(),
        reason,
    };

    let actual = word.chars().count();
    if actual != path_letters.len() {
        return Err(mismatch(MismatchReason::WrongLength {
            expected: path_letters.len(),
            actual,
        }));
    }
    if !dictionary.contains(word) {
        return Err(mismatch(MismatchReason::NotInDictionary));
    }
    if used.contains(word) {
        return Err(mismatch(MismatchReason::AlreadyUsed));
    }
    if let Some(position) = WordPattern::new(path_letters).first_conflict(word) {
        return Err(mismatch(MismatchReason::ConflictsWithBoard { position }));
    }
    Ok(())
}
