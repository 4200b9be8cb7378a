//! Vocabularies, the used-word set, and the word-constraint matcher.

pub mod matcher;
pub mod used;
pub mod vocabulary;

pub use matcher::{candidates, match_word, pick_word, verify_word, WordPattern};
pub use used::UsedWords;
pub use vocabulary::{Vocabularies, Vocabulary};
