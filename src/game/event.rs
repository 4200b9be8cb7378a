//! Game events and results.
//!
//! Every event names the player it concerns. The ordered event list of a
//! game, under a [`ReplayHeader`](crate::replay::ReplayHeader), is its
//! replay log.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, Path, PlayerId, PlayerKind, PlayerProfile};

/// The player an event is about, as written to a replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub kind: PlayerKind,
}

impl Actor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.kind.difficulty()
    }

    /// `"Bot (HARD)"` for computers, the bare name for humans.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.kind {
            PlayerKind::Human => self.name.clone(),
            PlayerKind::Computer(d) => format!("{} ({})", self.name, d),
        }
    }
}

impl From<&PlayerProfile> for Actor {
    fn from(profile: &PlayerProfile) -> Self {
        Self::new(profile.name.clone(), profile.kind)
    }
}

/// One entry of the replay log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A word was placed along a path.
    Playing {
        player: Actor,
        path: Path,
        word: String,
    },
    /// The last active player.
    Won { player: Actor },
    /// The board filled; `player` is the one whose turn found it full.
    Draw { player: Actor },
    /// The player resigned or had no move.
    Resigned { player: Actor },
}

impl GameEvent {
    #[must_use]
    pub fn player(&self) -> &Actor {
        match self {
            GameEvent::Playing { player, .. }
            | GameEvent::Won { player }
            | GameEvent::Draw { player }
            | GameEvent::Resigned { player } => player,
        }
    }

    /// Upper-case label as written to replays.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GameEvent::Playing { .. } => "PLAYING",
            GameEvent::Won { .. } => "WON",
            GameEvent::Draw { .. } => "DRAW",
            GameEvent::Resigned { .. } => "RESIGNED",
        }
    }

    /// Won and Draw end the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Won { .. } | GameEvent::Draw { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let who = self.player().display_name();
        match self {
            GameEvent::Playing { path, word, .. } => write!(f, "{who} played {word} ({path})"),
            GameEvent::Won { .. } => write!(f, "{who} won!"),
            GameEvent::Draw { .. } => write!(f, "Draw!"),
            GameEvent::Resigned { .. } => write!(f, "{who} resigned"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// The board filled with two or more players left.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Direction};

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!GameResult::Draw.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_event_labels() {
        let bot = Actor::new("Bot", PlayerKind::Computer(Difficulty::Hard));
        let path = Path::walk(Coord::new(0, 0), Direction::E, 3).unwrap();

        let playing = GameEvent::Playing {
            player: bot.clone(),
            path,
            word: "CAT".into(),
        };
        assert_eq!(playing.label(), "PLAYING");
        assert!(!playing.is_terminal());
        assert_eq!(playing.player().display_name(), "Bot (HARD)");

        assert!(GameEvent::Won { player: bot.clone() }.is_terminal());
        assert!(GameEvent::Draw { player: bot.clone() }.is_terminal());
        assert!(!GameEvent::Resigned { player: bot }.is_terminal());
    }

    #[test]
    fn test_event_display() {
        let ada = Actor::new("Ada", PlayerKind::Human);
        assert_eq!(GameEvent::Won { player: ada.clone() }.to_string(), "Ada won!");
        assert_eq!(GameEvent::Resigned { player: ada }.to_string(), "Ada resigned");
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::Resigned {
            player: Actor::new("Ada", PlayerKind::Human),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
