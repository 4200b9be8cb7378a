//! Path geometry and word matching properties.

use proptest::prelude::*;
use proptest::sample::Index;

use word_battle::core::{Board, Coord, Direction, GameError, GameRng, Path};
use word_battle::geometry::{generate_paths, open_moves, open_paths, open_starts, prune_full};
use word_battle::vocab::{candidates, match_word, UsedWords, Vocabulary, WordPattern};

fn boundary(length: usize, index: Index) -> Coord {
    let cells: Vec<Coord> = Board::new(length).unwrap().boundary_cells().collect();
    cells[index.index(cells.len())]
}

/// Fill the cells flagged in `mask` (row-major) with `'A'`.
fn board_with(length: usize, mask: &[bool]) -> Board {
    let mut board = Board::new(length).unwrap();
    for (i, _) in mask.iter().enumerate().take(length * length).filter(|(_, on)| **on) {
        let cell = Path::from_cells(&[Coord::new(i / length, i % length)]).unwrap();
        board.place_word(&cell, "A").unwrap();
    }
    board
}

// =============================================================================
// Path Generation
// =============================================================================

proptest! {
    #[test]
    fn prop_three_paths_per_boundary_cell(length in 2usize..=12, index in any::<Index>()) {
        let board = Board::new(length).unwrap();
        let start = boundary(length, index);
        let paths = generate_paths(&board, start).unwrap();

        prop_assert_eq!(paths.len(), 3);
        for path in &paths {
            prop_assert_eq!(path.start(), start);
            prop_assert!(path.len() >= 2);
            prop_assert!(path.is_straight());
            prop_assert!(path.iter().all(|c| c.in_bounds(length)));
            prop_assert!(path.end().is_boundary(length));

            let dir = path.direction().unwrap();
            prop_assert!(path.end().step(dir, length).is_none());
        }

        let mut dirs: Vec<Direction> = paths.iter().filter_map(Path::direction).collect();
        dirs.dedup();
        prop_assert_eq!(dirs.len(), 3);
    }

    #[test]
    fn prop_interior_start_rejected(length in 3usize..=12, row in 1usize..11, col in 1usize..11) {
        prop_assume!(row < length - 1 && col < length - 1);
        let board = Board::new(length).unwrap();
        let start = Coord::new(row, col);
        prop_assert!(matches!(generate_paths(&board, start), Err(GameError::InvalidStart(c)) if c == start));
    }

    #[test]
    fn prop_prune_keeps_paths_with_empty_cell(
        length in 2usize..=6,
        mask in prop::collection::vec(any::<bool>(), 36),
        index in any::<Index>(),
    ) {
        let board = board_with(length, &mask);
        let start = boundary(length, index);
        let all = generate_paths(&board, start).unwrap();
        let kept = prune_full(&board, all.clone());

        for path in &all {
            let open = path.iter().any(|c| board.is_empty_cell(c));
            prop_assert_eq!(kept.contains(path), open);
        }
        match open_paths(&board, start) {
            Ok(paths) => prop_assert_eq!(paths, kept),
            Err(err) => {
                prop_assert!(kept.is_empty());
                prop_assert!(matches!(err, GameError::NoLegalPath(c) if c == start));
            }
        }
    }

    #[test]
    fn prop_open_moves_are_open(length in 2usize..=6, mask in prop::collection::vec(any::<bool>(), 36)) {
        let board = board_with(length, &mask);
        let moves = open_moves(&board);
        let starts = open_starts(&board);

        prop_assert!(moves.iter().all(|p| !board.is_path_full(p)));
        prop_assert!(moves.iter().all(|p| starts.contains(&p.start())));
        prop_assert_eq!(moves.is_empty(), board.is_full());
    }
}

#[test]
fn test_corner_directions() {
    let board = Board::new(4).unwrap();
    let dirs = |start| -> Vec<Direction> {
        generate_paths(&board, start)
            .unwrap()
            .iter()
            .filter_map(Path::direction)
            .collect()
    };

    assert_eq!(dirs(Coord::new(0, 0)), vec![Direction::E, Direction::SE, Direction::S]);
    assert_eq!(dirs(Coord::new(3, 3)), vec![Direction::N, Direction::NW, Direction::W]);
    assert_eq!(dirs(Coord::new(0, 2)), vec![Direction::SW, Direction::S, Direction::SE]);
    assert_eq!(dirs(Coord::new(2, 0)), vec![Direction::NE, Direction::E, Direction::SE]);
}

#[test]
fn test_full_row_pruned() {
    let mut board = Board::new(3).unwrap();
    let row = Path::walk(Coord::new(0, 0), Direction::E, 3).unwrap();
    board.place_word(&row, "CAT").unwrap();

    let paths = open_paths(&board, Coord::new(0, 0)).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(!paths.contains(&row));
}

// =============================================================================
// Word Matching
// =============================================================================

const WORDS: &[&str] = &["AT", "TA", "AA", "TT", "CAT", "ACT", "TAT", "CAA", "ATT", "TAC"];

fn letter() -> impl Strategy<Value = Option<char>> {
    prop_oneof![Just(None), Just(Some('A')), Just(Some('T')), Just(Some('C'))]
}

proptest! {
    #[test]
    fn prop_matcher_respects_literals_and_used(
        pattern in prop::collection::vec(letter(), 2..=3),
        used_mask in prop::collection::vec(any::<bool>(), WORDS.len()),
        seed in any::<u64>(),
    ) {
        let vocabulary = Vocabulary::from_words("props", WORDS.iter().copied());
        let used: UsedWords = WORDS
            .iter()
            .zip(&used_mask)
            .filter(|(_, on)| **on)
            .map(|(w, _)| *w)
            .collect();

        let compiled = WordPattern::new(&pattern);
        let found = candidates(&vocabulary, &compiled, &used);
        for word in &found {
            prop_assert!(!used.contains(word));
            prop_assert!(compiled.matches(word));
        }

        let picked = match_word(&vocabulary, &pattern, &used, &mut GameRng::new(seed));
        if compiled.is_complete() {
            prop_assert!(picked.is_none());
        }
        match picked {
            Some(word) => prop_assert!(found.contains(&word.as_str())),
            None => prop_assert!(found.is_empty()),
        }
    }
}

#[test]
fn test_matcher_skips_used_word() {
    let vocabulary = Vocabulary::from_words("test", ["CAT", "COT"]);
    let used: UsedWords = ["CAT"].into_iter().collect();
    let pattern = [Some('C'), None, Some('T')];

    for seed in 0..20 {
        let word = match_word(&vocabulary, &pattern, &used, &mut GameRng::new(seed));
        assert_eq!(word.as_deref(), Some("COT"));
    }
}
