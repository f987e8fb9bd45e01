//! The puzzle grid.
//!
//! A [`Grid`] is a square matrix of binary [`Cell`]s. Placed numbers carry no
//! digit values inside the grid — a cell only records whether some number
//! covers it. The rendered form uses [`Grid::OCCUPIED_MARKER`] for covered
//! cells and [`Grid::EMPTY_MARKER`] for the rest, and the serde form is the
//! same characters as nested sequences, one inner sequence per row.

use std::fmt::{self, Display, Write as _};

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{Position, Span};

/// The contents of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No placed number covers this cell.
    #[default]
    Empty,
    /// Some placed number covers this cell.
    Occupied,
}

impl Cell {
    /// Returns the character this cell renders as.
    #[must_use]
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Self::Empty => Grid::EMPTY_MARKER,
            Self::Occupied => Grid::OCCUPIED_MARKER,
        }
    }
}

/// A square grid of binary cells.
///
/// The dimensions are fixed at creation and never change. The only mutation
/// is [`Grid::occupy`], which marks the cells of a [`Span`] as covered.
///
/// # Examples
///
/// ```
/// use numcross_core::{Grid, Orientation, Position, Span};
///
/// let mut grid = Grid::new(4);
/// grid.occupy(Span::new(Position::new(0, 1), Orientation::Horizontal, 3));
///
/// assert_eq!(grid.to_rows()[1], ['*', '*', '*', ' ']);
/// assert_eq!(grid.occupied_cells(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Marker character for an occupied cell in rendered output.
    pub const OCCUPIED_MARKER: char = '*';

    /// Marker character for an empty cell in rendered output.
    pub const EMPTY_MARKER: char = ' ';

    /// Creates an empty `size`×`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be nonzero");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns whether `pos` lies within the grid.
    #[must_use]
    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x() < self.size && pos.y() < self.size
    }

    /// Returns whether every cell of `span` lies within the grid.
    ///
    /// Empty spans are not contained anywhere.
    #[must_use]
    pub fn contains_span(&self, span: Span) -> bool {
        span.len() > 0 && self.contains(span.position(span.len() - 1))
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        assert!(
            self.contains(pos),
            "position {pos} outside {size}x{size} grid",
            size = self.size
        );
        self.cells[self.index(pos)]
    }

    /// Returns whether the cell at `pos` is occupied.
    ///
    /// Positions outside the grid are reported unoccupied, so span
    /// neighborhood checks need no border special cases.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[self.index(pos)] == Cell::Occupied
    }

    /// Marks every cell covered by `span` as occupied.
    ///
    /// Already-occupied cells stay occupied; covering one is how two numbers
    /// intersect.
    ///
    /// # Panics
    ///
    /// Panics if the span extends outside the grid.
    pub fn occupy(&mut self, span: Span) {
        assert!(
            self.contains_span(span),
            "span extends outside {size}x{size} grid",
            size = self.size
        );
        for pos in span.positions() {
            let i = self.index(pos);
            self.cells[i] = Cell::Occupied;
        }
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Occupied))
            .count()
    }

    /// Returns an iterator over the rows of the grid, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Renders the grid as rows of marker characters.
    ///
    /// This is the shape external consumers expect: a size×size structure of
    /// single characters, [`Grid::OCCUPIED_MARKER`] or [`Grid::EMPTY_MARKER`].
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.marker()).collect())
            .collect()
    }

    #[inline]
    const fn index(&self, pos: Position) -> usize {
        pos.y() * self.size + pos.x()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.marker())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut rows = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            let markers: Vec<char> = row.iter().map(|cell| cell.marker()).collect();
            rows.serialize_element(&markers)?;
        }
        rows.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::Orientation;

    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(12);
        assert_eq!(grid.size(), 12);
        assert_eq!(grid.occupied_cells(), 0);
        for row in grid.rows() {
            assert_eq!(row.len(), 12);
            assert!(row.iter().all(|cell| *cell == Cell::Empty));
        }
    }

    #[test]
    fn test_occupy_marks_exactly_the_span() {
        let mut grid = Grid::new(6);
        let span = Span::new(Position::new(2, 3), Orientation::Vertical, 3);
        grid.occupy(span);

        for pos in span.positions() {
            assert_eq!(grid.cell(pos), Cell::Occupied);
        }
        assert_eq!(grid.occupied_cells(), 3);
        assert!(!grid.is_occupied(Position::new(2, 2)));
        assert!(!grid.is_occupied(Position::new(3, 3)));
    }

    #[test]
    fn test_occupy_tolerates_overlap() {
        let mut grid = Grid::new(6);
        grid.occupy(Span::new(Position::new(0, 2), Orientation::Horizontal, 4));
        grid.occupy(Span::new(Position::new(2, 2), Orientation::Horizontal, 4));
        assert_eq!(grid.occupied_cells(), 6);
    }

    #[test]
    fn test_out_of_bounds_is_unoccupied() {
        let grid = Grid::new(4);
        assert!(!grid.is_occupied(Position::new(4, 0)));
        assert!(!grid.is_occupied(Position::new(0, 17)));
    }

    #[test]
    fn test_contains_span_boundaries() {
        let grid = Grid::new(12);
        // Longest run that fits from column 6.
        assert!(grid.contains_span(Span::new(
            Position::new(6, 0),
            Orientation::Horizontal,
            6
        )));
        // One cell further does not fit.
        assert!(!grid.contains_span(Span::new(
            Position::new(7, 0),
            Orientation::Horizontal,
            6
        )));
        assert!(!grid.contains_span(Span::new(
            Position::new(0, 0),
            Orientation::Vertical,
            13
        )));
        assert!(!grid.contains_span(Span::new(Position::new(0, 0), Orientation::Vertical, 0)));
    }

    #[test]
    #[should_panic(expected = "grid size must be nonzero")]
    fn test_zero_size_panics() {
        let _ = Grid::new(0);
    }

    #[test]
    #[should_panic(expected = "span extends outside 4x4 grid")]
    fn test_occupy_out_of_bounds_panics() {
        let mut grid = Grid::new(4);
        grid.occupy(Span::new(Position::new(2, 0), Orientation::Horizontal, 3));
    }

    #[test]
    fn test_display_renders_markers() {
        let mut grid = Grid::new(3);
        grid.occupy(Span::new(Position::new(0, 1), Orientation::Horizontal, 2));
        assert_eq!(grid.to_string(), "   \n** \n   \n");
    }

    #[test]
    fn test_serialize_as_nested_character_rows() {
        let mut grid = Grid::new(3);
        grid.occupy(Span::new(Position::new(1, 0), Orientation::Vertical, 3));

        let value = serde_json::to_value(&grid).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        for row in rows {
            let row = row.as_array().unwrap();
            assert_eq!(row.len(), 3);
            assert_eq!(row[0], " ");
            assert_eq!(row[1], "*");
            assert_eq!(row[2], " ");
        }
    }
}
