//! Back-to-back computer games on one board size.
//!
//! Seating rotates between games so that every player gets to open: with
//! two players the order flips, with more the last seat moves to the front.
//! Records accumulate across the series.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agent::{AgentConfig, AgentPool};
use crate::core::{Board, GameError, GameRng, PlayerProfile, Result};
use crate::replay::{replay_title, ReplayLog};
use crate::vocab::{Vocabularies, Vocabulary};

use super::event::GameResult;
use super::machine::{validate_players, Game, DEFAULT_NAME_LIMIT};

/// Series parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Games to play (default: 1).
    pub games: u32,

    /// Board side length (default: 5).
    pub board_length: usize,

    /// Seed for the series RNG (default: 0).
    pub seed: u64,

    /// Longest accepted player name (default: 20).
    pub name_limit: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 1,
            board_length: 5,
            seed: 0,
            name_limit: DEFAULT_NAME_LIMIT,
        }
    }
}

impl SeriesConfig {
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    pub fn with_board_length(mut self, length: usize) -> Self {
        self.board_length = length;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_name_limit(mut self, limit: usize) -> Self {
        self.name_limit = limit;
        self
    }
}

/// A finished game of the series.
#[derive(Clone, Debug)]
pub struct CompletedGame {
    /// `"A (HARD) VS B (EASY) [5x5]"`, in that game's seating order.
    pub title: String,
    pub result: GameResult,
    pub log: ReplayLog,
}

/// A run of computer-only games.
#[derive(Debug)]
pub struct Series {
    config: SeriesConfig,
    /// Players in the order they were entered.
    players: Vec<PlayerProfile>,
    /// Indices into `players` in the next game's seating order.
    seating: Vec<usize>,
    agents: AgentPool,
    dictionary: Arc<Vocabulary>,
    rng: GameRng,
    completed: Vec<CompletedGame>,
}

impl Series {
    /// Set up a series; every player must be a computer.
    pub fn new(
        config: SeriesConfig,
        players: Vec<PlayerProfile>,
        vocabularies: &Vocabularies,
        agent_config: AgentConfig,
    ) -> Result<Self> {
        validate_players(&players, config.name_limit)?;
        if let Some(human) = players.iter().find(|p| !p.kind.is_computer()) {
            return Err(GameError::InvalidPlayer(format!(
                "{:?} is human; series games are computer only",
                human.name
            )));
        }
        Board::new(config.board_length)?;

        Ok(Self {
            seating: (0..players.len()).collect(),
            rng: GameRng::new(config.seed),
            agents: AgentPool::new(vocabularies, agent_config),
            dictionary: Arc::clone(&vocabularies.full),
            players,
            config,
            completed: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Players in entry order, with their records so far.
    #[must_use]
    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    #[must_use]
    pub fn completed(&self) -> &[CompletedGame] {
        &self.completed
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.completed.len() as u32
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.games_played() >= self.config.games
    }

    /// Play the next game; `None` once all games are played.
    pub fn play_next(&mut self) -> Result<Option<&CompletedGame>> {
        if self.is_done() {
            return Ok(None);
        }

        let game_number = self.games_played() + 1;
        let seated: Vec<PlayerProfile> = self.seating.iter().map(|&i| self.players[i].clone()).collect();
        let title = replay_title(&seated, self.config.board_length);

        let mut game = Game::with_name_limit(
            game_number,
            self.config.board_length,
            seated,
            Arc::clone(&self.dictionary),
            self.config.name_limit,
        )?;
        let mut game_rng = self.rng.fork();
        let result = game.run_to_end(&self.agents, &mut game_rng)?;

        let (seated, log) = game.into_parts();
        for (&index, profile) in self.seating.iter().zip(seated) {
            self.players[index].record = profile.record;
        }
        self.seating.rotate_right(1);

        info!(
            game = game_number,
            of = self.config.games,
            events = log.len(),
            duration = %log.header.game_duration,
            "series game finished"
        );

        self.completed.push(CompletedGame { title, result, log });
        Ok(self.completed.last())
    }

    /// Play every remaining game.
    pub fn run(&mut self) -> Result<&[CompletedGame]> {
        while self.play_next()?.is_some() {}
        Ok(&self.completed)
    }

    /// `Played N game(s) on an LxL board.` then each player's record.
    #[must_use]
    pub fn summary(&self) -> String {
        let length = self.config.board_length;
        let mut text = format!(
            "Played {} game(s) on an {length}x{length} board.",
            self.games_played()
        );
        for player in &self.players {
            text.push_str(&format!("\n\n{}\n{}", player.display_name(), player.record));
        }
        text
    }
}
