//! Core data structures for cross-number puzzles.
//!
//! This crate provides the fundamental types for representing a cross-number
//! puzzle: a square grid of binary cells and the multi-digit numbers woven
//! into it. The generation algorithm itself lives in `numcross-generator`;
//! this crate carries no algorithmic content.
//!
//! # Overview
//!
//! - [`grid`]: the square puzzle grid of [`Cell`]s, with rendering and
//!   serialization of the occupied/empty cell contract
//! - [`position`]: zero-based `(x, y)` grid coordinates
//! - [`orientation`]: the horizontal/vertical placement direction
//! - [`span`]: the contiguous run of cells a placed number covers, with
//!   iteration over covered cells and their side neighbors
//! - [`entry`]: validated digit strings used as placeable puzzle pieces
//!
//! # Examples
//!
//! ```
//! use numcross_core::{Grid, Orientation, Position, Span};
//!
//! let mut grid = Grid::new(12);
//! let span = Span::new(Position::new(0, 6), Orientation::Horizontal, 4);
//! assert!(grid.contains_span(span));
//!
//! grid.occupy(span);
//! assert!(grid.is_occupied(Position::new(2, 6)));
//! assert!(!grid.is_occupied(Position::new(4, 6)));
//! ```

pub mod entry;
pub mod grid;
pub mod orientation;
pub mod position;
pub mod span;

pub use self::{
    entry::{NumberEntry, ParseNumberEntryError},
    grid::{Cell, Grid},
    orientation::Orientation,
    position::Position,
    span::Span,
};
