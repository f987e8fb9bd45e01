//! Cross-number puzzle generation.
//!
//! This crate places randomly generated multi-digit numbers on a square grid
//! so that they weave together like crossword words. The placement search is
//! a bounded Monte-Carlo loop: each number gets a fixed budget of randomized
//! trials and is silently dropped when the budget runs out, so generation is
//! best-effort and always succeeds.
//!
//! # Overview
//!
//! - [`config`]: the named tunables of the algorithm ([`GeneratorConfig`])
//! - [`seed`]: reproducible 32-byte seeds ([`PuzzleSeed`])
//! - [`placement`]: the validity rules a candidate position must satisfy
//! - [`generator`]: the generator itself ([`PuzzleGenerator`]) and its result
//!   ([`GeneratedPuzzle`])
//!
//! # Examples
//!
//! ```
//! use numcross_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::default();
//! let puzzle = generator.generate_with_seed(PuzzleSeed::derive(b"docs"));
//!
//! assert_eq!(puzzle.grid().size(), 12);
//! // The first number is always placed, so the puzzle is never empty.
//! assert!(!puzzle.placements().is_empty());
//! ```

pub mod config;
pub mod generator;
pub mod placement;
pub mod seed;

pub use self::{
    config::GeneratorConfig,
    generator::{GeneratedPuzzle, Placement, PuzzleGenerator},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};
