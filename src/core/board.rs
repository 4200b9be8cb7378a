//! The N×N letter grid.
//!
//! Cells are stored in an `im::Vector` so the agent can clone the board
//! once per rollout in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::{GameError, MismatchReason, Result};
use super::path::Path;

/// Longest supported board side; a path along it stays inline in `Path`.
pub const MAX_BOARD_LENGTH: usize = 16;

/// The most recent word placed, kept for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub player: String,
    pub path: Path,
    pub word: String,
}

/// Square game board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    length: usize,
    cells: Vector<Option<char>>,
    filled: usize,

    /// Start cell chosen for the current turn, if any.
    pub starting_position: Option<Coord>,

    /// Last committed move.
    pub previous_move: Option<PlacedWord>,

    /// Words placed so far.
    pub turn_counter: u32,
}

impl Board {
    /// Create an empty board of `length × length` cells.
    ///
    /// Fails with `InvalidBoardLength` outside `1..=MAX_BOARD_LENGTH`.
    pub fn new(length: usize) -> Result<Self> {
        if !(1..=MAX_BOARD_LENGTH).contains(&length) {
            return Err(GameError::InvalidBoardLength(length));
        }
        let size = length
            .checked_mul(length)
            .ok_or(GameError::InvalidBoardLength(length))?;
        Ok(Self {
            length,
            cells: std::iter::repeat(None).take(size).collect(),
            filled: 0,
            starting_position: None,
            previous_move: None,
            turn_counter: 0,
        })
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        coord
            .in_bounds(self.length)
            .then_some(coord.row * self.length + coord.col)
    }

    /// Letter at `coord`; `None` when empty or off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.index(coord).and_then(|i| self.cells[i])
    }

    #[must_use]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|i| self.cells[i].is_none())
    }

    /// Every cell holds a letter.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let length = self.length;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| Coord::new(i / length, i % length))
    }

    /// Boundary cells in row-major order.
    pub fn boundary_cells(&self) -> impl Iterator<Item = Coord> {
        let length = self.length;
        (0..length)
            .flat_map(move |row| (0..length).map(move |col| Coord::new(row, col)))
            .filter(move |c| c.is_boundary(length))
    }

    /// Current letters along `path`, in path order.
    #[must_use]
    pub fn letters(&self, path: &Path) -> Vec<Option<char>> {
        path.iter().map(|c| self.get(c)).collect()
    }

    /// A path is full when none of its cells is empty.
    #[must_use]
    pub fn is_path_full(&self, path: &Path) -> bool {
        path.iter().all(|c| self.get(c).is_some())
    }

    /// Write `word` into `path`, one letter per cell in path order.
    ///
    /// Letters already on the board are overwritten with the word's letter
    /// at that position; the matcher guarantees they agree.
    pub fn place_word(&mut self, path: &Path, word: &str) -> Result<()> {
        let letters: Vec<char> = word.chars().collect();
        if letters.len() != path.len() {
            return Err(GameError::WordMismatch {
                word: word.to_string(),
                reason: MismatchReason::WrongLength {
                    expected: path.len(),
                    actual: letters.len(),
                },
            });
        }
        if let Some(outside) = path.iter().find(|c| !c.in_bounds(self.length)) {
            return Err(GameError::InvalidStart(outside));
        }

        for (coord, letter) in path.iter().zip(letters) {
            let i = coord.row * self.length + coord.col;
            if self.cells[i].is_none() {
                self.filled += 1;
            }
            self.cells.set(i, Some(letter));
        }
        Ok(())
    }

    /// Place a word and remember it as the previous move.
    pub fn commit(&mut self, player: &str, path: &Path, word: &str) -> Result<()> {
        self.place_word(path, word)?;
        self.previous_move = Some(PlacedWord {
            player: player.to_string(),
            path: path.clone(),
            word: word.to_string(),
        });
        self.turn_counter += 1;
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.length {
            let line: Vec<String> = (0..self.length)
                .map(|col| self.get(Coord::new(row, col)).unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
