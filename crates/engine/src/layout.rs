//! Palette layout: partitions an ordered palette into columns.
//!
//! Colors are taken in input order and packed into columns of exactly
//! `capacity` entries; whatever is left over forms one final, shorter column.
//! Concatenating the columns always reproduces the input.

use serde::Serialize;
use swatchgrid_types::{ColumnCapacity, ColumnId, PaletteError, Rgb};

/// Ordered columns covering a palette.
///
/// Every column is non-empty. An empty palette yields a grid with no columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    columns: Vec<Vec<Rgb>>,
}

impl Grid {
    /// Columns in display order.
    pub fn columns(&self) -> &[Vec<Rgb>] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&[Rgb]> {
        self.columns.get(id.index()).map(Vec::as_slice)
    }

    /// Iterate over `(ColumnId, colors)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &[Rgb])> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| (ColumnId::new(index), column.as_slice()))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Height of the tallest column, which is the first one.
    pub fn max_column_len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Color at `row` within `column`, if that slot is occupied.
    pub fn color_at(&self, column: ColumnId, row: usize) -> Option<Rgb> {
        self.columns.get(column.index())?.get(row).copied()
    }

    /// All colors, in palette order.
    pub fn flatten(&self) -> Vec<Rgb> {
        self.columns.iter().flatten().copied().collect()
    }

    pub fn into_columns(self) -> Vec<Vec<Rgb>> {
        self.columns
    }
}

/// Partitions `colors` into columns of at most `column_capacity` entries.
///
/// Produces `len / capacity` full columns followed by a single remainder
/// column when `len % capacity != 0`. A capacity larger than the palette
/// therefore yields exactly one column.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidArgument`] when `column_capacity` is zero.
pub fn layout(colors: &[Rgb], column_capacity: usize) -> Result<Grid, PaletteError> {
    let capacity = ColumnCapacity::new(column_capacity)?;
    Ok(partition(colors, capacity))
}

/// Infallible form of [`layout`] for an already validated capacity.
pub(crate) fn partition(colors: &[Rgb], capacity: ColumnCapacity) -> Grid {
    // `chunks` yields the full columns first and the remainder last, never an empty chunk.
    let columns = colors.chunks(capacity.get()).map(<[Rgb]>::to_vec).collect();
    Grid { columns }
}
