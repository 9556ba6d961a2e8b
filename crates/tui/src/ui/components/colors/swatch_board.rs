//! Terminal-side renderer for the selection controller.
//!
//! The board keeps whatever the controller hands it: the drawn columns, the
//! colors that were wired for clicks, and the selection label. During each
//! frame the colors component registers the screen rectangle of every
//! clickable swatch so mouse input can be resolved back to a color.

use ratatui::layout::{Position, Rect};
use swatchgrid_engine::PaletteRenderer;
use swatchgrid_types::Rgb;

use super::state::GridCursor;

/// One column as handed over by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawnColumn {
    colors: Vec<Rgb>,
    clickable: Vec<Rgb>,
}

impl DrawnColumn {
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn is_clickable(&self, color: Rgb) -> bool {
        self.clickable.contains(&color)
    }
}

#[derive(Debug, Default)]
pub struct SwatchBoard {
    columns: Vec<DrawnColumn>,
    selection_label: Option<String>,
    hit_areas: Vec<(Rect, Rgb)>,
}

impl SwatchBoard {
    pub fn columns(&self) -> &[DrawnColumn] {
        &self.columns
    }

    pub fn selection_label(&self) -> Option<&str> {
        self.selection_label.as_deref()
    }

    pub fn color_at(&self, slot: GridCursor) -> Option<Rgb> {
        self.columns.get(slot.column)?.colors.get(slot.row).copied()
    }

    /// Number of swatches in `column`, zero when out of range.
    pub fn column_len(&self, column: usize) -> usize {
        self.columns.get(column).map_or(0, |drawn| drawn.colors.len())
    }

    /// Slot of `color`. A repeated color resolves to its last occurrence.
    pub fn slot_of(&self, color: Rgb) -> Option<GridCursor> {
        self.columns.iter().enumerate().rev().find_map(|(column, drawn)| {
            drawn
                .colors
                .iter()
                .rposition(|candidate| *candidate == color)
                .map(|row| GridCursor::new(column, row))
        })
    }

    /// Forgets the click targets of the previous frame.
    pub(crate) fn begin_frame(&mut self) {
        self.hit_areas.clear();
    }

    pub(crate) fn register_hit_area(&mut self, area: Rect, color: Rgb) {
        self.hit_areas.push((area, color));
    }

    /// Color whose swatch was drawn under `position` in the last frame.
    pub fn hit_test(&self, position: Position) -> Option<Rgb> {
        self.hit_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, color)| *color)
    }
}

impl PaletteRenderer for SwatchBoard {
    type ColumnHandle = usize;

    fn render_column(&mut self, colors: &[Rgb]) -> usize {
        self.columns.push(DrawnColumn {
            colors: colors.to_vec(),
            clickable: Vec::with_capacity(colors.len()),
        });
        self.columns.len() - 1
    }

    fn attach_click_handler(&mut self, handle: &usize, color: Rgb) {
        if let Some(column) = self.columns.get_mut(*handle) {
            column.clickable.push(color);
        }
    }

    fn clear_all(&mut self) {
        self.columns.clear();
        self.hit_areas.clear();
    }

    fn display_selection(&mut self, label: &str) {
        self.selection_label = Some(label.to_string());
    }

    fn clear_selection_display(&mut self) {
        self.selection_label = None;
    }
}
