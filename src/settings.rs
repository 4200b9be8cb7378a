//! Settings file loading.
//!
//! Settings come from `word-battle.toml` (or an explicit path) with every
//! section optional, then environment overrides:
//!
//! - `WORD_BATTLE_SEED`: RNG seed
//!
//! ```toml
//! seed = 7
//!
//! [board]
//! min_length = 3
//! max_length = 15
//!
//! [agent]
//! hard_rollouts = 12
//!
//! [vocabulary]
//! full = "English.txt"
//!
//! [replay]
//! dir = "Replays"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::agent::AgentConfig;
use crate::game::DEFAULT_NAME_LIMIT;
use crate::vocab::{Vocabularies, Vocabulary};

/// File looked for in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "word-battle.toml";

/// Environment variable overriding [`Settings::seed`].
pub const SEED_ENV: &str = "WORD_BATTLE_SEED";

/// Failure loading settings or the files they point to.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("board length {length} is outside {min}..={max}")]
    BoardLength { length: usize, min: usize, max: usize },
}

/// `[board]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 15,
        }
    }
}

/// `[players]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub name_limit: usize,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            name_limit: DEFAULT_NAME_LIMIT,
        }
    }
}

/// `[vocabulary]`: newline-delimited word lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularySettings {
    /// Full dictionary; HARD agents and human words.
    pub full: PathBuf,
    /// EASY agents.
    pub easy: PathBuf,
    /// MEDIUM agents.
    pub medium: PathBuf,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        Self {
            full: PathBuf::from("English.txt"),
            easy: PathBuf::from("Vocabulary/vocab_1.txt"),
            medium: PathBuf::from("Vocabulary/vocab_2.txt"),
        }
    }
}

impl VocabularySettings {
    /// Read and index the three word lists.
    pub fn load(&self) -> Result<Vocabularies, SettingsError> {
        let read = |name: &str, path: &Path| -> Result<Vocabulary, SettingsError> {
            let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let vocabulary = Vocabulary::parse(name, &text);
            info!(name, path = %path.display(), words = vocabulary.len(), "vocabulary loaded");
            Ok(vocabulary)
        };

        Ok(Vocabularies::new(
            read("full", &self.full)?,
            read("easy", &self.easy)?,
            read("medium", &self.medium)?,
        ))
    }
}

/// `[replay]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplaySettings {
    pub dir: PathBuf,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("Replays"),
            extension: "wbr".to_string(),
        }
    }
}

/// Everything configurable from the settings file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
    pub board: BoardSettings,
    pub players: PlayerSettings,
    pub agent: AgentConfig,
    pub vocabulary: VocabularySettings,
    pub replay: ReplaySettings,
}

impl Settings {
    /// Parse settings from TOML text. `origin` only labels errors.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load settings from `path`, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading settings");
        Ok(Self::from_toml(&text, path)?.with_env_overrides())
    }

    /// Load `path`, or [`DEFAULT_SETTINGS_FILE`] when `path` is `None`.
    ///
    /// A missing file falls back to defaults with a warning; a file that
    /// exists but does not parse is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        };

        if path.exists() {
            return Self::load(&path);
        }
        if explicit {
            warn!(path = %path.display(), "settings file not found, using defaults");
        } else {
            debug!("no {DEFAULT_SETTINGS_FILE} found, using built-in defaults");
        }
        Ok(Self::default().with_env_overrides())
    }

    /// Apply `WORD_BATTLE_SEED` if set and numeric.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        let value = std::env::var(SEED_ENV).ok();
        self.with_seed_override(value.as_deref())
    }

    fn with_seed_override(mut self, value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => {}
            Some(raw) => match raw.parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!(value = raw, "ignoring {SEED_ENV}: not a number"),
            },
        }
        self
    }

    /// Check a board length against `[board]`.
    pub fn validate_board_length(&self, length: usize) -> Result<usize, SettingsError> {
        let (min, max) = (self.board.min_length, self.board.max_length);
        if (min..=max).contains(&length) {
            Ok(length)
        } else {
            Err(SettingsError::BoardLength { length, min, max })
        }
    }
}
