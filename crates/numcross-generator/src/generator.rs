//! The randomized puzzle generator.

use numcross_core::{Grid, NumberEntry, Orientation, Position, Span};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{GeneratorConfig, PuzzleSeed, placement};

/// A number together with the cells it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    entry: NumberEntry,
    span: Span,
}

impl Placement {
    fn new(entry: NumberEntry, span: Span) -> Self {
        Self { entry, span }
    }

    /// Returns the placed number.
    #[must_use]
    pub fn entry(&self) -> &NumberEntry {
        &self.entry
    }

    /// Returns the cells the number covers.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Cross-number puzzle generator.
///
/// Generation is best-effort: each number after the first gets a bounded
/// budget of randomized placement trials and is dropped without error when
/// the budget runs out. A generation call therefore always produces a puzzle,
/// possibly with fewer numbers than requested, and never fewer than one.
///
/// The generator holds only its configuration, so a single instance can
/// serve any number of calls, including from multiple threads; every call
/// works on a fresh grid and a fresh random stream derived from its seed.
///
/// # Examples
///
/// ```
/// use numcross_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::default();
/// let puzzle = generator.generate_with_seed(PuzzleSeed::derive(b"docs"));
///
/// // The same seed reproduces the same puzzle.
/// assert_eq!(puzzle, generator.generate_with_seed(puzzle.seed()));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl PuzzleGenerator {
    /// Creates a generator with the given tunables.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is incoherent: a zero grid size, a zero
    /// minimum length, `min_length > max_length`, numbers longer than the
    /// grid side, or an `intersection_bias` outside `0.0..=1.0`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        assert!(config.grid_size > 0, "grid size must be nonzero");
        assert!(config.min_length > 0, "numbers need at least one digit");
        assert!(
            config.min_length <= config.max_length,
            "min_length must not exceed max_length"
        );
        assert!(
            config.max_length <= config.grid_size,
            "numbers must fit within the grid"
        );
        assert!(
            (0.0..=1.0).contains(&config.intersection_bias),
            "intersection_bias must be a probability"
        );
        Self { config }
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and configuration always produce the same puzzle. The
    /// first number of the batch is placed unconditionally across the grid
    /// center; every later number must attach to the growing structure or
    /// anchor at the grid edge, and is dropped if no valid position turns up
    /// within the attempt budget.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let mut grid = Grid::new(self.config.grid_size);
        let mut placements = Vec::with_capacity(self.config.batch_size);

        let mut numbers = self.generate_numbers(&mut rng).into_iter();
        if let Some(first) = numbers.next() {
            let span = self.place_first(&mut grid, &first, &mut rng);
            placements.push(Placement::new(first, span));
        }
        for entry in numbers {
            if let Some(span) = self.try_place(&mut grid, &entry, &mut rng) {
                placements.push(Placement::new(entry, span));
            } else {
                log::debug!(
                    "dropping {entry}: no valid position in {} attempts",
                    self.config.max_attempts
                );
            }
        }

        if placements.len() < self.config.min_placed {
            log::warn!(
                "sparse puzzle: placed {} of {} numbers (advisory target {})",
                placements.len(),
                self.config.batch_size,
                self.config.min_placed
            );
        }

        GeneratedPuzzle {
            grid,
            placements,
            seed,
        }
    }

    /// Draws the batch of candidate numbers for one puzzle.
    ///
    /// Lengths are uniform over the configured range; values are uniform over
    /// the full range a length admits (first digit 1-9, the rest 0-9).
    /// Duplicates are allowed.
    fn generate_numbers(&self, rng: &mut Pcg64) -> Vec<NumberEntry> {
        (0..self.config.batch_size)
            .map(|_| self.generate_number(rng))
            .collect()
    }

    fn generate_number(&self, rng: &mut Pcg64) -> NumberEntry {
        let len = rng.random_range(self.config.min_length..=self.config.max_length);
        let mut digits = String::with_capacity(len);
        digits.push(digit_char(rng.random_range(1..10)));
        for _ in 1..len {
            digits.push(digit_char(rng.random_range(0..10)));
        }
        NumberEntry::new(digits)
    }

    /// Places the first number of a batch across the grid center.
    ///
    /// The connectivity rule is vacuous on an empty grid, so the seed number
    /// skips the trial loop entirely.
    fn place_first(&self, grid: &mut Grid, entry: &NumberEntry, rng: &mut Pcg64) -> Span {
        let size = self.config.grid_size;
        let offset = (size - entry.len()) / 2;
        let mid = size / 2;
        let span = if rng.random_bool(0.5) {
            Span::new(Position::new(offset, mid), Orientation::Horizontal, entry.len())
        } else {
            Span::new(Position::new(mid, offset), Orientation::Vertical, entry.len())
        };
        grid.occupy(span);
        span
    }

    /// Runs the bounded Monte-Carlo search for one number.
    ///
    /// Marks the grid and returns the span on the first surviving trial;
    /// returns `None` with the grid untouched once the budget is exhausted.
    fn try_place(&self, grid: &mut Grid, entry: &NumberEntry, rng: &mut Pcg64) -> Option<Span> {
        let size = self.config.grid_size;
        for _ in 0..self.config.max_attempts {
            let start = Position::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let span = Span::new(start, orientation, entry.len());
            if !placement::is_valid(grid, span) {
                continue;
            }
            // Edge-anchored runs that touch nothing are accepted only some
            // of the time, steering the layout toward intersections.
            if !placement::has_intersection(grid, span)
                && rng.random_bool(self.config.intersection_bias)
            {
                continue;
            }
            grid.occupy(span);
            return Some(span);
        }
        None
    }
}

fn digit_char(value: u8) -> char {
    char::from(b'0' + value)
}

/// The result of one generation run.
///
/// Holds the final grid, every successful placement in placement order, and
/// the seed that produced them. The wire form serializes as
/// `{"puzzle": [[...]], "numbers": [...], "seed": "..."}` with the grid as
/// nested single-character rows and the numbers as digit strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    grid: Grid,
    placements: Vec<Placement>,
    seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the final grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns every successful placement, first-placed first.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the placed numbers in placement order.
    pub fn numbers(&self) -> impl Iterator<Item = &NumberEntry> {
        self.placements.iter().map(Placement::entry)
    }

    /// Returns the seed that produced this puzzle.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }
}

impl Serialize for GeneratedPuzzle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("GeneratedPuzzle", 3)?;
        state.serialize_field("puzzle", &self.grid)?;
        state.serialize_field("numbers", &self.numbers().collect::<Vec<_>>())?;
        state.serialize_field("seed", &self.seed)?;
        state.end()
    }
}
