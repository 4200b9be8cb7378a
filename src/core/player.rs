//! Player identity, kind and lifetime record.
//!
//! ## PlayerId
//!
//! Seat index within one game, 0-based in seating order.
//!
//! ## PlayerProfile
//!
//! Name, kind (human or computer with a difficulty) and the win/loss/draw
//! record carried across the games of a series.

use serde::{Deserialize, Serialize};

/// Seat index within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Computer player strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Upper-case label used in replays and summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty {other:?}")),
        }
    }
}

/// Human or computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer(Difficulty),
}

impl PlayerKind {
    #[must_use]
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Computer(d) => Some(d),
        }
    }

    #[must_use]
    pub fn is_computer(self) -> bool {
        matches!(self, PlayerKind::Computer(_))
    }

    /// `"human"` or `"computer"`, as written to replays.
    #[must_use]
    pub fn type_label(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer(_) => "computer",
        }
    }
}

/// Lifetime results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Record {
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WINS: {} LOSSES: {} DRAWS: {}", self.wins, self.losses, self.draws)
    }
}

/// A participant in one or more games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub kind: PlayerKind,
    pub record: Record,
}

impl PlayerProfile {
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
            record: Record::default(),
        }
    }

    #[must_use]
    pub fn computer(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Computer(difficulty),
            record: Record::default(),
        }
    }

    /// Name with difficulty suffix for computers: `"Bot (HARD)"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.kind {
            PlayerKind::Human => self.name.clone(),
            PlayerKind::Computer(d) => format!("{} ({})", self.name, d),
        }
    }
}
