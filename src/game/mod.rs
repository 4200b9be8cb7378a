//! Game flow: the turn state machine, its events, and series of games.

pub mod event;
pub mod machine;
pub mod series;

pub use event::{Actor, GameEvent, GameResult};
pub use machine::{format_duration, validate_players, Game, Phase, DEFAULT_NAME_LIMIT};
pub use series::{CompletedGame, Series, SeriesConfig};
