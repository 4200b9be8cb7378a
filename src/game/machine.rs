//! The turn loop.
//!
//! ## Phases
//!
//! A turn moves through `AwaitingStart → AwaitingPath → AwaitingWord` and
//! then commits, passing play to the next active player. Humans drive each
//! step with [`Game::select_start`], [`Game::select_path`] and
//! [`Game::submit_word`]; computers take the whole turn at once with
//! [`Game::play_computer_turn`].
//!
//! ## Ending
//!
//! A player who resigns, or a computer with no move, leaves the active set.
//! The game is won when one player remains and drawn when the board is full
//! at the start of a turn. Each outcome is appended to the replay log and
//! applied to the players' records.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::agent::{AgentPool, Decision};
use crate::core::{Board, Coord, GameError, GameRng, Path, PlayerId, PlayerKind, PlayerProfile, Result};
use crate::geometry::open_paths;
use crate::replay::{ReplayHeader, ReplayLog};
use crate::vocab::{verify_word, UsedWords, Vocabulary};

use super::event::{Actor, GameEvent, GameResult};

/// Longest player name accepted by default.
pub const DEFAULT_NAME_LIMIT: usize = 20;

/// Where the current turn stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current player must pick a boundary cell.
    AwaitingStart,
    /// The current player must pick one of `paths`.
    AwaitingPath { start: Coord, paths: Vec<Path> },
    /// The current player must enter a word for `path`.
    AwaitingWord { path: Path },
    Finished(GameResult),
}

impl Phase {
    fn describe(&self) -> &'static str {
        match self {
            Phase::AwaitingStart => "awaiting a starting position",
            Phase::AwaitingPath { .. } => "awaiting a path",
            Phase::AwaitingWord { .. } => "awaiting a word",
            Phase::Finished(_) => "the game is over",
        }
    }
}

/// Check a seating: two or more players with unique, non-empty names of at
/// most `name_limit` characters.
pub fn validate_players(players: &[PlayerProfile], name_limit: usize) -> Result<()> {
    if players.len() < 2 {
        return Err(GameError::InvalidPlayer("at least two players are needed".into()));
    }
    if players.len() > usize::from(u8::MAX) {
        return Err(GameError::InvalidPlayer("too many players".into()));
    }
    for (i, player) in players.iter().enumerate() {
        if player.name.is_empty() {
            return Err(GameError::InvalidPlayer("name cannot be empty".into()));
        }
        if player.name.chars().count() > name_limit {
            return Err(GameError::InvalidPlayer(format!(
                "{:?} exceeds {name_limit} characters",
                player.name
            )));
        }
        if players[..i].iter().any(|p| p.name == player.name) {
            return Err(GameError::InvalidPlayer(format!("name {:?} is taken", player.name)));
        }
    }
    Ok(())
}

/// `HH:MM:SS`.
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

/// One game on one board.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: Vec<PlayerProfile>,
    /// Seats still playing, in seating order.
    active: Vec<PlayerId>,
    /// Index into `active` of the player to move.
    turn: usize,
    used: UsedWords,
    dictionary: Arc<Vocabulary>,
    phase: Phase,
    log: ReplayLog,
    started: Instant,
}

impl Game {
    /// Seat `players` (in turn order) at an empty `board_length` board.
    ///
    /// `dictionary` verifies human words.
    pub fn new(
        game_number: u32,
        board_length: usize,
        players: Vec<PlayerProfile>,
        dictionary: Arc<Vocabulary>,
    ) -> Result<Self> {
        Self::with_name_limit(game_number, board_length, players, dictionary, DEFAULT_NAME_LIMIT)
    }

    pub fn with_name_limit(
        game_number: u32,
        board_length: usize,
        players: Vec<PlayerProfile>,
        dictionary: Arc<Vocabulary>,
        name_limit: usize,
    ) -> Result<Self> {
        validate_players(&players, name_limit)?;
        let board = Board::new(board_length)?;
        // validate_players caps the seat count at u8::MAX.
        let active = (0..players.len()).map(|i| PlayerId::new(i as u8)).collect();

        Ok(Self {
            board,
            players,
            active,
            turn: 0,
            used: UsedWords::new(),
            dictionary,
            phase: Phase::AwaitingStart,
            log: ReplayLog::new(ReplayHeader::new(game_number, board_length)),
            started: Instant::now(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerProfile> {
        self.players.get(id.index())
    }

    /// Seats still in the game.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn used_words(&self) -> &UsedWords {
        &self.used
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn log(&self) -> &ReplayLog {
        &self.log
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Finished(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result().is_some()
    }

    /// Seat to move; `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.is_finished() {
            None
        } else {
            self.active.get(self.turn).copied()
        }
    }

    /// Hand back the players (with updated records) and the replay log.
    #[must_use]
    pub fn into_parts(self) -> (Vec<PlayerProfile>, ReplayLog) {
        (self.players, self.log)
    }

    // === Human actions ===

    /// Choose the starting cell for this turn and list its open paths.
    ///
    /// `InvalidStart` and `NoLegalPath` leave the phase unchanged.
    pub fn select_start(&mut self, start: Coord) -> Result<Vec<Path>> {
        self.require_human()?;
        if self.phase != Phase::AwaitingStart {
            return Err(GameError::WrongPhase(self.phase.describe()));
        }

        let paths = open_paths(&self.board, start)?;
        self.board.starting_position = Some(start);
        self.phase = Phase::AwaitingPath {
            start,
            paths: paths.clone(),
        };
        Ok(paths)
    }

    /// Choose one of the offered paths by its 0-based index.
    pub fn select_path(&mut self, index: usize) -> Result<Path> {
        self.require_human()?;
        let Phase::AwaitingPath { paths, .. } = &self.phase else {
            return Err(GameError::WrongPhase(self.phase.describe()));
        };
        let path = paths.get(index).cloned().ok_or(GameError::InvalidPathIndex(index))?;
        self.phase = Phase::AwaitingWord { path: path.clone() };
        Ok(path)
    }

    /// Place a word on the selected path.
    ///
    /// The word is trimmed and upper-cased, then checked against the full
    /// dictionary, the used words and the letters on the path. A rejected
    /// word leaves the phase unchanged so the player can try again.
    pub fn submit_word(&mut self, word: &str) -> Result<()> {
        self.require_human()?;
        let Phase::AwaitingWord { path } = &self.phase else {
            return Err(GameError::WrongPhase(self.phase.describe()));
        };
        let word = word.trim().to_uppercase();
        verify_word(&self.dictionary, &self.board.letters(path), &self.used, &word)?;

        let path = path.clone();
        self.commit(path, word)
    }

    /// Abandon the chosen start or path and pick a new start.
    pub fn go_back(&mut self) -> Result<()> {
        self.require_human()?;
        match self.phase {
            Phase::AwaitingPath { .. } | Phase::AwaitingWord { .. } => {
                self.board.starting_position = None;
                self.phase = Phase::AwaitingStart;
                Ok(())
            }
            _ => Err(GameError::WrongPhase(self.phase.describe())),
        }
    }

    /// The current human player leaves the game.
    pub fn resign(&mut self) -> Result<()> {
        self.require_human()?;
        self.remove_current();
        Ok(())
    }

    // === Computer turns ===

    /// Let the current computer player take its whole turn.
    ///
    /// Returns the event the turn produced (the play or resignation; a
    /// terminal event may follow it in the log).
    pub fn play_computer_turn(&mut self, agents: &AgentPool, rng: &mut GameRng) -> Result<GameEvent> {
        let seat = self.current_seat()?;
        let PlayerKind::Computer(difficulty) = self.players[seat.index()].kind else {
            return Err(GameError::WrongPhase("waiting for a human player"));
        };
        if self.phase != Phase::AwaitingStart {
            return Err(GameError::WrongPhase(self.phase.describe()));
        }

        let analysis = agents.get(difficulty).analyse(&self.board, &self.used, rng);
        debug!(
            player = %self.players[seat.index()].display_name(),
            starts = analysis.starting_positions.len(),
            rollouts = analysis.stats.rollouts,
            time_us = analysis.stats.time_us,
            "computer turn analysed"
        );

        let before = self.log.len();
        match analysis.decision {
            Decision::Move { path, word } => {
                self.board.starting_position = Some(path.start());
                self.commit(path, word)?;
            }
            Decision::Resign => self.remove_current(),
            Decision::Draw => self.finish_draw(),
        }

        self.log
            .events
            .get(before)
            .cloned()
            .ok_or(GameError::WrongPhase("no event recorded"))
    }

    /// Play computer turns until the game ends.
    ///
    /// Fails with `WrongPhase` if a human is seated at the table.
    pub fn run_to_end(&mut self, agents: &AgentPool, rng: &mut GameRng) -> Result<GameResult> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.play_computer_turn(agents, rng)?;
        }
    }

    // === Transitions ===

    fn current_seat(&self) -> Result<PlayerId> {
        self.current_player()
            .ok_or(GameError::WrongPhase("the game is over"))
    }

    fn require_human(&self) -> Result<PlayerId> {
        let seat = self.current_seat()?;
        if self.players[seat.index()].kind.is_computer() {
            return Err(GameError::WrongPhase("waiting for a computer player"));
        }
        Ok(seat)
    }

    fn actor(&self, seat: PlayerId) -> Actor {
        Actor::from(&self.players[seat.index()])
    }

    fn commit(&mut self, path: Path, word: String) -> Result<()> {
        let seat = self.current_seat()?;
        let player = self.actor(seat);

        self.board.commit(&player.name, &path, &word)?;
        self.used.insert(word.clone());
        info!(player = %player.display_name(), %word, %path, turn = self.board.turn_counter, "word placed");
        self.log.push(GameEvent::Playing { player, path, word });

        self.turn = (self.turn + 1) % self.active.len();
        self.begin_turn();
        Ok(())
    }

    /// Remove the player to move, counting a loss.
    fn remove_current(&mut self) {
        let seat = self.active.remove(self.turn);
        self.players[seat.index()].record.losses += 1;

        let player = self.actor(seat);
        info!(player = %player.display_name(), "player resigned");
        self.log.push(GameEvent::Resigned { player });

        if self.turn >= self.active.len() {
            self.turn = 0;
        }
        self.begin_turn();
    }

    /// Decide whether the next turn starts or the game ends.
    fn begin_turn(&mut self) {
        self.board.starting_position = None;
        if self.active.len() < 2 {
            self.finish_won();
        } else if self.board.is_full() {
            self.finish_draw();
        } else {
            self.phase = Phase::AwaitingStart;
        }
    }

    fn finish_won(&mut self) {
        let Some(&seat) = self.active.first() else {
            self.finish(GameResult::Draw);
            return;
        };
        self.players[seat.index()].record.wins += 1;

        let player = self.actor(seat);
        info!(player = %player.display_name(), "game won");
        self.log.push(GameEvent::Won { player });
        self.finish(GameResult::Winner(seat));
    }

    fn finish_draw(&mut self) {
        for seat in &self.active {
            self.players[seat.index()].record.draws += 1;
        }

        let seat = self.active[self.turn % self.active.len()];
        let player = self.actor(seat);
        info!(turn = self.board.turn_counter, "game drawn");
        self.log.push(GameEvent::Draw { player });
        self.finish(GameResult::Draw);
    }

    fn finish(&mut self, result: GameResult) {
        self.log.header.game_duration = format_duration(self.started.elapsed());
        self.phase = Phase::Finished(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentConfig;
    use crate::core::{Difficulty, Direction, MismatchReason};
    use crate::vocab::Vocabularies;

    fn dictionary() -> Arc<Vocabulary> {
        Arc::new(Vocabulary::from_words(
            "test",
            ["CAT", "COW", "TOE", "AXE", "OWL", "ACE", "AT", "TO", "OX", "AX"],
        ))
    }

    fn humans() -> Vec<PlayerProfile> {
        vec![PlayerProfile::human("Ada"), PlayerProfile::human("Bob")]
    }

    fn human_game() -> Game {
        Game::new(1, 3, humans(), dictionary()).unwrap()
    }

    fn play(game: &mut Game, start: Coord, index: usize, word: &str) {
        game.select_start(start).unwrap();
        game.select_path(index).unwrap();
        game.submit_word(word).unwrap();
    }

    #[test]
    fn test_validate_players() {
        assert!(validate_players(&humans(), 20).is_ok());
        assert!(validate_players(&humans()[..1], 20).is_err());

        let dup = vec![PlayerProfile::human("Ada"), PlayerProfile::human("Ada")];
        assert!(matches!(validate_players(&dup, 20), Err(GameError::InvalidPlayer(_))));

        let empty = vec![PlayerProfile::human(""), PlayerProfile::human("Bob")];
        assert!(validate_players(&empty, 20).is_err());

        let long = vec![PlayerProfile::human("A".repeat(21)), PlayerProfile::human("Bob")];
        assert!(validate_players(&long, 20).is_err());
        assert!(validate_players(&long, 21).is_ok());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_duration(Duration::from_secs(3723)), "01:02:03");
        assert_eq!(format_duration(Duration::from_millis(59_999)), "00:00:59");
    }

    #[test]
    fn test_human_turn_flow() {
        let mut game = human_game();
        assert_eq!(game.current_player(), Some(PlayerId::new(0)));

        let paths = game.select_start(Coord::new(0, 0)).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(game.board().starting_position, Some(Coord::new(0, 0)));

        let east = paths
            .iter()
            .position(|p| p.direction() == Some(Direction::E))
            .unwrap();
        game.select_path(east).unwrap();
        game.submit_word(" cat ").unwrap();

        assert_eq!(game.board().get(Coord::new(0, 1)), Some('A'));
        assert!(game.used_words().contains("CAT"));
        assert_eq!(game.current_player(), Some(PlayerId::new(1)));
        assert_eq!(game.phase(), &Phase::AwaitingStart);
        assert_eq!(game.board().turn_counter, 1);
        assert_eq!(game.board().previous_move.as_ref().unwrap().player, "Ada");
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn test_rejected_word_keeps_phase() {
        let mut game = human_game();
        game.select_start(Coord::new(0, 0)).unwrap();
        game.select_path(0).unwrap();

        let err = game.submit_word("ZZZ").unwrap_err();
        assert!(matches!(
            err,
            GameError::WordMismatch { reason: MismatchReason::NotInDictionary, .. }
        ));
        assert!(matches!(game.phase(), Phase::AwaitingWord { .. }));
        assert_eq!(game.current_player(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_used_word_rejected() {
        let mut game = human_game();
        game.select_start(Coord::new(0, 0)).unwrap();
        let err = game.select_start(Coord::new(0, 0)).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase(_)));
        game.go_back().unwrap();

        let paths = game.select_start(Coord::new(2, 0)).unwrap();
        let east = paths.iter().position(|p| p.direction() == Some(Direction::E)).unwrap();
        game.select_path(east).unwrap();
        game.submit_word("CAT").unwrap();

        let paths = game.select_start(Coord::new(0, 0)).unwrap();
        let east = paths.iter().position(|p| p.direction() == Some(Direction::E)).unwrap();
        game.select_path(east).unwrap();
        assert!(matches!(
            game.submit_word("CAT"),
            Err(GameError::WordMismatch { reason: MismatchReason::AlreadyUsed, .. })
        ));
    }

    #[test]
    fn test_invalid_start_and_index() {
        let mut game = human_game();
        assert!(matches!(
            game.select_start(Coord::new(1, 1)),
            Err(GameError::InvalidStart(_))
        ));
        assert_eq!(game.phase(), &Phase::AwaitingStart);

        game.select_start(Coord::new(0, 0)).unwrap();
        assert!(matches!(game.select_path(7), Err(GameError::InvalidPathIndex(7))));
        assert!(game.submit_word("CAT").is_err());
    }

    #[test]
    fn test_go_back() {
        let mut game = human_game();
        assert!(game.go_back().is_err());

        game.select_start(Coord::new(0, 0)).unwrap();
        game.select_path(0).unwrap();
        game.go_back().unwrap();
        assert_eq!(game.phase(), &Phase::AwaitingStart);
        assert_eq!(game.board().starting_position, None);
    }

    #[test]
    fn test_resign_two_players() {
        let mut game = human_game();
        game.resign().unwrap();

        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::new(1))));
        assert_eq!(game.current_player(), None);
        assert_eq!(game.players()[0].record.losses, 1);
        assert_eq!(game.players()[1].record.wins, 1);

        let labels: Vec<_> = game.log().events.iter().map(GameEvent::label).collect();
        assert_eq!(labels, vec!["RESIGNED", "WON"]);
        assert!(game.resign().is_err());
    }

    #[test]
    fn test_resign_passes_to_next_active() {
        let players = vec![
            PlayerProfile::human("Ada"),
            PlayerProfile::human("Bob"),
            PlayerProfile::human("Cy"),
        ];
        let mut game = Game::new(1, 3, players, dictionary()).unwrap();

        play(&mut game, Coord::new(0, 0), 0, "CAT");
        assert_eq!(game.current_player(), Some(PlayerId::new(1)));
        game.resign().unwrap();

        assert_eq!(game.current_player(), Some(PlayerId::new(2)));
        assert_eq!(game.active_players(), &[PlayerId::new(0), PlayerId::new(2)]);
        assert!(!game.is_finished());

        game.resign().unwrap();
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::new(0))));
    }

    #[test]
    fn test_full_board_draws() {
        let dictionary = Arc::new(Vocabulary::from_words("test", ["AB", "CD"]));
        let mut game = Game::new(1, 2, humans(), dictionary).unwrap();

        for (row, word) in [(0, "AB"), (1, "cd")] {
            let paths = game.select_start(Coord::new(row, 0)).unwrap();
            let east = paths.iter().position(|p| p.direction() == Some(Direction::E)).unwrap();
            game.select_path(east).unwrap();
            game.submit_word(word).unwrap();
        }

        assert_eq!(game.result(), Some(GameResult::Draw));
        assert!(game.players().iter().all(|p| p.record.draws == 1));
        let last = game.log().last().unwrap();
        assert_eq!(last.label(), "DRAW");
        assert_eq!(last.player().name, "Ada");
    }

    #[test]
    fn test_computer_turns() {
        let vocab = Vocabularies::uniform(Vocabulary::from_words("test", ["AT", "TO", "OX", "CAT", "TOE"]));
        let agents = AgentPool::new(&vocab, AgentConfig::default());
        let players = vec![
            PlayerProfile::computer("Bot 1", Difficulty::Hard),
            PlayerProfile::computer("Bot 2", Difficulty::Easy),
        ];
        let mut game = Game::new(1, 3, players, Arc::clone(&vocab.full)).unwrap();
        let mut rng = GameRng::new(11);

        let event = game.play_computer_turn(&agents, &mut rng).unwrap();
        assert_eq!(event.player().name, "Bot 1");

        let result = game.run_to_end(&agents, &mut rng).unwrap();
        assert_eq!(game.result(), Some(result));
        assert!(game.log().last().unwrap().is_terminal());
        assert_ne!(game.log().header.game_duration, "");
    }

    #[test]
    fn test_computer_turn_refused_for_human() {
        let vocab = Vocabularies::uniform(Vocabulary::from_words("test", ["AT"]));
        let agents = AgentPool::new(&vocab, AgentConfig::default());
        let mut game = human_game();
        assert!(matches!(
            game.play_computer_turn(&agents, &mut GameRng::new(0)),
            Err(GameError::WrongPhase(_))
        ));

        let players = vec![
            PlayerProfile::computer("Bot", Difficulty::Hard),
            PlayerProfile::human("Ada"),
        ];
        let mut game = Game::new(1, 3, players, dictionary()).unwrap();
        assert!(matches!(game.resign(), Err(GameError::WrongPhase(_))));
    }
}
