//! Words already placed in a game.

use im::OrdSet;
use serde::{Deserialize, Serialize};

/// Per-game set of placed words.
///
/// Backed by `im::OrdSet`: rollouts clone it once each in O(1), and
/// iteration is alphabetical.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWords {
    words: OrdSet<String>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns false if the word was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into()).is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for UsedWords {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut used = UsedWords::new();
        for word in iter {
            used.insert(word);
        }
        used
    }
}
