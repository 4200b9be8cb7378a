//! Board coordinates and step directions.
//!
//! Coordinates are 0-based `(row, col)` pairs. A `Direction` is one of the
//! eight unit steps a path may take.

use serde::{Deserialize, Serialize};

/// A cell position on the board, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Take one step in `dir`, or `None` if it would leave `[0, length)²`.
    #[must_use]
    pub fn step(self, dir: Direction, length: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dir.dr as isize)?;
        let col = self.col.checked_add_signed(dir.dc as isize)?;
        (row < length && col < length).then_some(Coord { row, col })
    }

    /// Whether this cell lies on `[0, length)²`.
    #[must_use]
    pub fn in_bounds(self, length: usize) -> bool {
        self.row < length && self.col < length
    }

    /// Whether this cell lies on the outer ring of a board of `length`.
    #[must_use]
    pub fn is_boundary(self, length: usize) -> bool {
        let last = length.saturating_sub(1);
        self.in_bounds(length)
            && (self.row == 0 || self.col == 0 || self.row == last || self.col == last)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A unit step: straight or diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const N: Direction = Direction { dr: -1, dc: 0 };
    pub const NE: Direction = Direction { dr: -1, dc: 1 };
    pub const E: Direction = Direction { dr: 0, dc: 1 };
    pub const SE: Direction = Direction { dr: 1, dc: 1 };
    pub const S: Direction = Direction { dr: 1, dc: 0 };
    pub const SW: Direction = Direction { dr: 1, dc: -1 };
    pub const W: Direction = Direction { dr: 0, dc: -1 };
    pub const NW: Direction = Direction { dr: -1, dc: -1 };

    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// The direction taking `from` to `to` in one step, if they are adjacent.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        Self::ALL
            .into_iter()
            .find(|d| d.dr as isize == dr && d.dc as isize == dc)
    }
}
