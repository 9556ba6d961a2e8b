//! Shared type definitions for swatchgrid.
//!
//! The types here are deliberately small and free of any rendering concerns:
//! a color value compared by identity of its channels, the identifier used to
//! reference a grid column, a validated column capacity, and the error kinds
//! surfaced by the palette engine.

mod capacity;
mod color;
mod error;

pub use capacity::{ColumnCapacity, DEFAULT_COLUMN_CAPACITY};
pub use color::{DEFAULT_PALETTE, HexParseError, Rgb};
pub use error::PaletteError;

use serde::{Deserialize, Serialize};

/// Opaque reference to a column of the current grid.
///
/// Identifiers are positional: the first column of a grid is `ColumnId(0)`.
/// They are only meaningful for the grid that produced them and are
/// invalidated whenever a new palette is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(usize);

impl ColumnId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the column within its grid.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.0)
    }
}
