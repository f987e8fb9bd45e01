//! Placement validity rules.
//!
//! A candidate placement is a [`Span`] over the current [`Grid`]. Validity is
//! a pure predicate of the two; the randomness of the search lives entirely
//! in the generator's trial loop.

use numcross_core::{Grid, Orientation, Span};

/// Returns whether `span` is a valid position for a new number on `grid`.
///
/// All of the following must hold:
///
/// 1. **Bounds** — the span lies entirely within the grid.
/// 2. **Collision** — covered cells may be empty or already occupied.
///    Covering an occupied cell is how two numbers intersect; since cells
///    are binary there is no third state to reject.
/// 3. **Spacing** — no cell to either side of the span (above/below a
///    horizontal run, left/right of a vertical one, along its full length)
///    is occupied, so parallel runs never touch.
/// 4. **Connectivity** — the span covers at least one occupied cell, or
///    starts at the grid edge (column 0 for horizontal, row 0 for vertical).
///
/// # Examples
///
/// ```
/// use numcross_core::{Grid, Orientation, Position, Span};
/// use numcross_generator::placement;
///
/// let grid = Grid::new(12);
/// // On an empty grid only edge-anchored runs are valid.
/// let at_edge = Span::new(Position::new(0, 5), Orientation::Horizontal, 4);
/// let adrift = Span::new(Position::new(3, 5), Orientation::Horizontal, 4);
/// assert!(placement::is_valid(&grid, at_edge));
/// assert!(!placement::is_valid(&grid, adrift));
/// ```
#[must_use]
pub fn is_valid(grid: &Grid, span: Span) -> bool {
    if !grid.contains_span(span) {
        return false;
    }
    if span.side_neighbors().any(|pos| grid.is_occupied(pos)) {
        return false;
    }
    has_intersection(grid, span) || starts_at_edge(span)
}

/// Returns whether `span` covers at least one occupied cell.
#[must_use]
pub fn has_intersection(grid: &Grid, span: Span) -> bool {
    span.positions().any(|pos| grid.is_occupied(pos))
}

fn starts_at_edge(span: Span) -> bool {
    match span.orientation() {
        Orientation::Horizontal => span.start().x() == 0,
        Orientation::Vertical => span.start().y() == 0,
    }
}
