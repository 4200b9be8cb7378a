//! Length-indexed word lists.
//!
//! Vocabularies are built once, wrapped in `Arc`, and shared read-only by
//! every game and agent for the life of the process.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Uppercase words grouped by length.
///
/// Each bucket is sorted and de-duplicated so membership is a binary
/// search and iteration order is stable across runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    name: String,
    by_length: FxHashMap<usize, Vec<String>>,
    total: usize,
}

impl Vocabulary {
    /// Build from any word iterator; words are trimmed and uppercased and
    /// blanks are skipped.
    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_uppercase();
            by_length.entry(word.chars().count()).or_default().push(word);
        }

        let mut total = 0;
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
            total += bucket.len();
        }

        Self {
            name: name.into(),
            by_length,
            total,
        }
    }

    /// Parse newline-delimited text.
    pub fn parse(name: impl Into<String>, text: &str) -> Self {
        Self::from_words(name, text.lines())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Words of exactly `length` characters, sorted.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Case-sensitive membership; words are stored uppercase.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words_of_length(word.chars().count())
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }
}

/// The three vocabularies a game needs.
#[derive(Clone, Debug)]
pub struct Vocabularies {
    /// Full dictionary: HARD agents and human word checks.
    pub full: Arc<Vocabulary>,
    /// Restricted list for EASY agents.
    pub easy: Arc<Vocabulary>,
    /// Restricted list for MEDIUM agents.
    pub medium: Arc<Vocabulary>,
}

impl Vocabularies {
    #[must_use]
    pub fn new(full: Vocabulary, easy: Vocabulary, medium: Vocabulary) -> Self {
        Self {
            full: Arc::new(full),
            easy: Arc::new(easy),
            medium: Arc::new(medium),
        }
    }

    /// Use one list for every difficulty.
    #[must_use]
    pub fn uniform(vocabulary: Vocabulary) -> Self {
        let shared = Arc::new(vocabulary);
        Self {
            full: Arc::clone(&shared),
            easy: Arc::clone(&shared),
            medium: shared,
        }
    }

    /// The list an agent of `difficulty` draws candidate words from.
    #[must_use]
    pub fn for_difficulty(&self, difficulty: Difficulty) -> &Arc<Vocabulary> {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.full,
        }
    }
}
