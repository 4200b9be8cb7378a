//! The replay log and playback.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameError, Result};
use crate::game::GameEvent;

/// Duration written when a replay carries none.
pub const ZERO_DURATION: &str = "00:00:00";

/// Replay header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayHeader {
    /// 1-based position of the game within its series.
    pub game_number: u32,
    pub board_length: usize,
    /// `HH:MM:SS`.
    pub game_duration: String,
}

impl ReplayHeader {
    #[must_use]
    pub fn new(game_number: u32, board_length: usize) -> Self {
        Self {
            game_number,
            board_length,
            game_duration: ZERO_DURATION.to_string(),
        }
    }
}

/// A header and the ordered events of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub header: ReplayHeader,
    pub events: Vec<GameEvent>,
}

/// Board state after one event.
#[derive(Clone, Debug)]
pub struct Frame {
    pub board: Board,
    pub event: GameEvent,
}

impl ReplayLog {
    #[must_use]
    pub fn new(header: ReplayHeader) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Words placed.
    #[must_use]
    pub fn plays(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Playing { .. }))
            .count()
    }

    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        super::codec::encode(&self.header, &self.events)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (header, events) = super::codec::decode(bytes)?;
        Ok(Self { header, events })
    }

    /// Rebuild the board after every event.
    ///
    /// Fails with `CorruptReplay` if a placed path leaves the board or its
    /// word has the wrong number of letters.
    pub fn frames(&self) -> Result<Vec<Frame>> {
        let mut board = Board::new(self.header.board_length)
            .map_err(GameError::corrupt)?;
        let length = board.length();

        let mut frames = Vec::with_capacity(self.events.len());
        for (index, event) in self.events.iter().enumerate() {
            if let GameEvent::Playing { player, path, word } = event {
                if let Some(cell) = path.iter().find(|c| !c.in_bounds(length)) {
                    return Err(GameError::corrupt(format!(
                        "event {index}: cell {cell} is off a {length}x{length} board"
                    )));
                }
                if word.chars().count() != path.len() {
                    return Err(GameError::corrupt(format!(
                        "event {index}: {word:?} does not fit a path of {} cells",
                        path.len()
                    )));
                }
                board.starting_position = Some(path.start());
                board.commit(&player.name, path, word)?;
            }
            frames.push(Frame {
                board: board.clone(),
                event: event.clone(),
            });
        }
        Ok(frames)
    }
}
