use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use word_battle::core::{Board, Coord, Difficulty, Direction, GameRng, Path};
use word_battle::geometry::open_moves;
use word_battle::vocab::{UsedWords, Vocabularies, Vocabulary};
use word_battle::{AgentConfig, SimulationAgent};

const WORDS: &[&str] = &[
    "AT", "TO", "OX", "AX", "IT", "ON", "NO", "GO", "CAT", "COT", "ACT", "TOE", "DOG", "GOD", "ANT",
    "TAN", "NET", "TEN", "CART", "DOTE", "TONE", "NOTE", "CRATE", "TRACE", "STONE", "NOTES",
];

fn vocabularies() -> Vocabularies {
    Vocabularies::uniform(Vocabulary::from_words("bench", WORDS.iter().copied()))
}

fn half_board() -> (Board, UsedWords) {
    let mut board = Board::new(5).unwrap();
    let mut used = UsedWords::new();
    for (row, word) in [(0, "CRATE"), (2, "STONE")] {
        let path = Path::walk(Coord::new(row, 0), Direction::E, 5).unwrap();
        board.place_word(&path, word).unwrap();
        used.insert(word);
    }
    (board, used)
}

fn bench_open_moves(c: &mut Criterion) {
    let empty = Board::new(5).unwrap();
    let (half, _) = half_board();
    c.bench_function("geometry/open_moves/empty_5x5", |b| b.iter(|| black_box(open_moves(&empty))));
    c.bench_function("geometry/open_moves/half_5x5", |b| b.iter(|| black_box(open_moves(&half))));
}

fn bench_agent_turn(c: &mut Criterion) {
    let vocab = vocabularies();
    let empty = Board::new(5).unwrap();
    let (half, used) = half_board();

    for difficulty in Difficulty::ALL {
        let agent = SimulationAgent::new(difficulty, &vocab, AgentConfig::default());
        let name = difficulty.label().to_lowercase();

        c.bench_function(&format!("agent/{name}/empty_5x5"), |b| {
            b.iter_batched(
                || GameRng::new(7),
                |mut rng| black_box(agent.play(&empty, &UsedWords::new(), &mut rng)),
                BatchSize::SmallInput,
            )
        });
        c.bench_function(&format!("agent/{name}/half_5x5"), |b| {
            b.iter_batched(
                || GameRng::new(7),
                |mut rng| black_box(agent.play(&half, &used, &mut rng)),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_open_moves, bench_agent_turn);
criterion_main!(benches);
