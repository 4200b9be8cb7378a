//! Path geometry: which straight or diagonal routes a boundary cell offers.

pub mod generator;

pub use generator::{generate_paths, open_moves, open_paths, open_starts, prune_full, StartClass};
