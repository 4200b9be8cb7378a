//! Path enumeration from a boundary cell.
//!
//! A start is classified as one of the four corners or one of the four
//! edges. Each class maps to three step directions; every candidate path is
//! a straight walk in one of them until the board edge.
//!
//! | Start        | Directions        |
//! |--------------|-------------------|
//! | top-left     | E, SE, S          |
//! | top-right    | W, SW, S          |
//! | bottom-left  | N, NE, E          |
//! | bottom-right | N, NW, W          |
//! | top edge     | SW, S, SE         |
//! | left edge    | NE, E, SE         |
//! | right edge   | NW, W, SW         |
//! | bottom edge  | NW, N, NE         |
//!
//! The order is the order paths are offered to a human player.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{Board, Coord, Direction, GameError, Path, Result};

/// Where a start cell sits on the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartClass {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Left,
    Right,
    Bottom,
}

impl StartClass {
    /// Classify `start` on a board of `length`; `None` if it is not a
    /// boundary cell.
    #[must_use]
    pub fn of(start: Coord, length: usize) -> Option<Self> {
        if !start.is_boundary(length) {
            return None;
        }
        let last = length - 1;
        let class = match (start.row, start.col) {
            (0, 0) => StartClass::TopLeft,
            (0, c) if c == last => StartClass::TopRight,
            (r, 0) if r == last => StartClass::BottomLeft,
            (r, c) if r == last && c == last => StartClass::BottomRight,
            (0, _) => StartClass::Top,
            (_, 0) => StartClass::Left,
            (_, c) if c == last => StartClass::Right,
            _ => StartClass::Bottom,
        };
        Some(class)
    }

    /// The three step directions for this class.
    #[must_use]
    pub fn directions(self) -> [Direction; 3] {
        use Direction as D;
        match self {
            StartClass::TopLeft => [D::E, D::SE, D::S],
            StartClass::TopRight => [D::W, D::SW, D::S],
            StartClass::BottomLeft => [D::N, D::NE, D::E],
            StartClass::BottomRight => [D::N, D::NW, D::W],
            StartClass::Top => [D::SW, D::S, D::SE],
            StartClass::Left => [D::NE, D::E, D::SE],
            StartClass::Right => [D::NW, D::W, D::SW],
            StartClass::Bottom => [D::NW, D::N, D::NE],
        }
    }
}

/// All three candidate paths from `start`, full or not.
///
/// Fails with `InvalidStart` unless `start` is a boundary cell.
pub fn generate_paths(board: &Board, start: Coord) -> Result<Vec<Path>> {
    let length = board.length();
    let class = StartClass::of(start, length).ok_or(GameError::InvalidStart(start))?;

    Ok(class
        .directions()
        .into_iter()
        .filter_map(|dir| Path::walk(start, dir, length))
        .collect())
}

/// Drop every path whose cells are all occupied.
///
/// Filters rather than removing by position, so any combination of full
/// paths is pruned correctly.
#[must_use]
pub fn prune_full(board: &Board, paths: Vec<Path>) -> Vec<Path> {
    paths
        .into_iter()
        .filter(|path| !board.is_path_full(path))
        .collect()
}

/// Candidate paths from `start` that still have an empty cell.
///
/// Fails with `NoLegalPath` when all of them are full.
pub fn open_paths(board: &Board, start: Coord) -> Result<Vec<Path>> {
    let paths = prune_full(board, generate_paths(board, start)?);
    if paths.is_empty() {
        debug!(%start, "all paths from start are full");
        return Err(GameError::NoLegalPath(start));
    }
    Ok(paths)
}

/// Boundary cells with at least one open path, in row-major order.
#[must_use]
pub fn open_starts(board: &Board) -> Vec<Coord> {
    board
        .boundary_cells()
        .filter(|&start| open_paths(board, start).is_ok())
        .collect()
}

/// Every open path on the board, from every boundary cell.
///
/// A line appears once per reading direction; identical paths reached from
/// different starts (only possible on a 1×1 board) are kept once.
#[must_use]
pub fn open_moves(board: &Board) -> Vec<Path> {
    let mut seen = FxHashSet::default();
    let mut moves = Vec::new();
    for start in board.boundary_cells() {
        let Ok(paths) = open_paths(board, start) else {
            continue;
        };
        for path in paths {
            if seen.insert(path.clone()) {
                moves.push(path);
            }
        }
    }
    moves
}
