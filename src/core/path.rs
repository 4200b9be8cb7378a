//! Paths: ordered runs of cells between two boundary cells.
//!
//! A path is what a player claims on their turn. It always starts at the
//! chosen boundary cell and steps in a single fixed direction until the
//! next step would leave the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, Direction};

/// An ordered, non-empty run of distinct cells.
///
/// SmallVec holds a full side of the largest supported board without heap
/// allocation.
///
/// Serialises as a plain list of cells; an empty list is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct Path {
    cells: SmallVec<[Coord; 16]>,
}

impl Path {
    /// Walk from `start` in `dir` until the board edge, inclusive.
    ///
    /// Returns `None` if `start` is off the board.
    #[must_use]
    pub fn walk(start: Coord, dir: Direction, length: usize) -> Option<Self> {
        if !start.in_bounds(length) {
            return None;
        }
        let mut cells = SmallVec::new();
        let mut current = Some(start);
        while let Some(cell) = current {
            cells.push(cell);
            current = cell.step(dir, length);
        }
        Some(Self { cells })
    }

    /// Build a path from explicit cells.
    ///
    /// Used when reading paths back from a replay; callers check geometry
    /// with [`Path::is_straight`] where it matters.
    #[must_use]
    pub fn from_cells(cells: &[Coord]) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self {
            cells: SmallVec::from_slice(cells),
        })
    }

    #[must_use]
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    #[must_use]
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; paths hold at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// The single step direction of this path, `None` for one-cell paths
    /// or paths that bend.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        let first = Direction::between(self.cells[0], *self.cells.get(1)?)?;
        self.is_straight().then_some(first)
    }

    /// Every consecutive pair differs by the same unit step.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let Some(&second) = self.cells.get(1) else {
            return true;
        };
        let Some(dir) = Direction::between(self.cells[0], second) else {
            return false;
        };
        self.cells
            .windows(2)
            .all(|pair| Direction::between(pair[0], pair[1]) == Some(dir))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start(), self.end())
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = &'static str;

    fn try_from(cells: Vec<Coord>) -> Result<Self, Self::Error> {
        Path::from_cells(&cells).ok_or("a path needs at least one cell")
    }
}

impl From<Path> for Vec<Coord> {
    fn from(path: Path) -> Self {
        path.cells.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_row() {
        let path = Path::walk(Coord::new(0, 0), Direction::E, 4).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.start(), Coord::new(0, 0));
        assert_eq!(path.end(), Coord::new(0, 3));
        assert_eq!(path.direction(), Some(Direction::E));
    }

    #[test]
    fn test_walk_diagonal_stops_at_edge() {
        let path = Path::walk(Coord::new(0, 1), Direction::SW, 5).unwrap();
        assert_eq!(path.cells(), &[Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn test_walk_off_board() {
        assert!(Path::walk(Coord::new(7, 0), Direction::E, 5).is_none());
    }

    #[test]
    fn test_straightness() {
        let bent = Path::from_cells(&[Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]).unwrap();
        assert!(!bent.is_straight());
        assert_eq!(bent.direction(), None);

        let single = Path::from_cells(&[Coord::new(2, 2)]).unwrap();
        assert!(single.is_straight());
        assert_eq!(single.direction(), None);

        assert!(Path::from_cells(&[]).is_none());
    }

    #[test]
    fn test_path_serialization() {
        let path = Path::walk(Coord::new(2, 0), Direction::NE, 3).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn test_empty_path_not_deserialized() {
        assert!(serde_json::from_str::<Path>("[]").is_err());
        assert!(serde_json::from_str::<Path>(r#"{"cells":[]}"#).is_err());

        let single: Path = serde_json::from_str(r#"[{"row":1,"col":2}]"#).unwrap();
        assert_eq!(single.start(), Coord::new(1, 2));
    }
}
