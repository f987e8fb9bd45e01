//! Generation tunables.

/// Tunable parameters for [`PuzzleGenerator`].
///
/// All knobs of the algorithm live here as named fields, so callers vary
/// constants instead of code paths. [`GeneratorConfig::default`] reproduces
/// the standard puzzle: a 12×12 grid, twelve numbers of 3–6 digits, 220
/// placement trials per number.
///
/// [`PuzzleGenerator`]: crate::PuzzleGenerator
///
/// # Examples
///
/// ```
/// use numcross_generator::{GeneratorConfig, PuzzleGenerator};
///
/// let config = GeneratorConfig {
///     grid_size: 16,
///     batch_size: 18,
///     ..GeneratorConfig::default()
/// };
/// let generator = PuzzleGenerator::new(config);
/// assert_eq!(generator.config().grid_size, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Minimum digits per generated number.
    pub min_length: usize,
    /// Maximum digits per generated number.
    pub max_length: usize,
    /// How many numbers are generated per puzzle.
    pub batch_size: usize,
    /// Randomized placement trials allowed per number before it is dropped.
    pub max_attempts: usize,
    /// Probability that a valid trial touching no existing number is rejected
    /// anyway, pushing placements toward intersections. `0.0` accepts every
    /// edge-anchored run; `1.0` demands an intersection for everything but
    /// the first number.
    pub intersection_bias: f64,
    /// Advisory lower bound on placed numbers. Falling short logs a warning;
    /// the puzzle is still returned.
    pub min_placed: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 12,
            min_length: 3,
            max_length: 6,
            batch_size: 12,
            max_attempts: 220,
            intersection_bias: 0.6,
            min_placed: 8,
        }
    }
}
