//! Example demonstrating cross-number puzzle generation.
//!
//! This example shows how to:
//! - Configure and create a `PuzzleGenerator`
//! - Generate a puzzle from a random, explicit, or phrase-derived seed
//! - Render the grid and the placed numbers
//! - Sample many puzzles in parallel and keep the densest one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex characters>
//! ```
//!
//! Derive the seed from a phrase instead:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "lazy sunday"
//! ```
//!
//! Sample 200 puzzles in parallel and print the one with the most numbers:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --densest 200
//! ```
//!
//! Emit the JSON wire form instead of the text rendering:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --json
//! ```

use std::process;

use clap::Parser;
use numcross_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "CELLS", default_value_t = 12)]
    size: usize,

    /// Numbers generated per puzzle.
    #[arg(long, value_name = "COUNT", default_value_t = 12)]
    batch: usize,

    /// Placement trials per number.
    #[arg(long, value_name = "COUNT", default_value_t = 220)]
    attempts: usize,

    /// Probability of rejecting a placement that touches no other number.
    #[arg(long, value_name = "PROB", default_value_t = 0.6)]
    bias: f64,

    /// Seed as 64 hex characters; random when omitted.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the seed by hashing this phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Sample this many random puzzles in parallel and keep the densest.
    #[arg(
        long,
        value_name = "COUNT",
        conflicts_with_all = ["seed", "phrase"]
    )]
    densest: Option<usize>,

    /// Print the JSON wire form instead of the text rendering.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = GeneratorConfig {
        grid_size: args.size,
        batch_size: args.batch,
        max_attempts: args.attempts,
        intersection_bias: args.bias,
        ..GeneratorConfig::default()
    };
    let generator = PuzzleGenerator::new(config);

    let puzzle = match args.densest {
        Some(0) => {
            eprintln!("--densest must be at least 1.");
            process::exit(1);
        }
        Some(samples) => (0..samples)
            .into_par_iter()
            .map(|_| generator.generate())
            .max_by_key(|puzzle| puzzle.placements().len())
            .expect("at least one sample"),
        None => {
            let seed = args
                .seed
                .or_else(|| args.phrase.as_deref().map(|phrase| PuzzleSeed::derive(phrase.as_bytes())))
                .unwrap_or_else(PuzzleSeed::random);
            generator.generate_with_seed(seed)
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&puzzle).expect("puzzle serializes")
        );
    } else {
        print_puzzle(&puzzle, &config);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, config: &GeneratorConfig) {
    println!("Seed:");
    println!("  {}", puzzle.seed());
    println!();

    println!(
        "Numbers ({} of {} placed):",
        puzzle.placements().len(),
        config.batch_size
    );
    for number in puzzle.numbers() {
        println!("  {number}");
    }
    println!();

    let grid = puzzle.grid();
    println!(
        "Grid ({size}x{size}, {occupied} cells occupied):",
        size = grid.size(),
        occupied = grid.occupied_cells()
    );
    for row in grid.to_rows() {
        let line: String = row.into_iter().collect();
        println!("  |{line}|");
    }
}
