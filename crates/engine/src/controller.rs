//! Single-selection state machine over the current palette.
//!
//! The controller is either UNSELECTED or SELECTED(color). Applying a palette
//! always returns it to UNSELECTED; a successful [`SelectionController::select`]
//! moves it to SELECTED; a rejected one leaves it where it was.

use indexmap::IndexMap;
use swatchgrid_types::{ColumnCapacity, ColumnId, PaletteError, Rgb};
use tracing::{debug, trace};

use crate::layout::{Grid, partition};
use crate::renderer::PaletteRenderer;

/// Owns the palette membership map, the current selection and the renderer.
///
/// One instance per screen. It is not meant to be shared across threads.
#[derive(Debug)]
pub struct SelectionController<R: PaletteRenderer> {
    renderer: R,
    capacity: ColumnCapacity,
    grid: Grid,
    membership: IndexMap<Rgb, ColumnId>,
    selected: Option<Rgb>,
}

impl<R: PaletteRenderer> SelectionController<R> {
    /// Creates an empty, UNSELECTED controller.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidArgument`] when `column_capacity` is zero.
    pub fn new(column_capacity: usize, renderer: R) -> Result<Self, PaletteError> {
        Ok(Self::with_capacity(ColumnCapacity::new(column_capacity)?, renderer))
    }

    pub fn with_capacity(capacity: ColumnCapacity, renderer: R) -> Self {
        Self {
            renderer,
            capacity,
            grid: Grid::default(),
            membership: IndexMap::new(),
            selected: None,
        }
    }

    /// Replaces the palette on offer.
    ///
    /// All previous state is discarded first, so the controller is always
    /// UNSELECTED afterwards. Each column is then drawn in order and every
    /// color is registered against the column that holds it.
    pub fn set_available_colors(&mut self, colors: &[Rgb]) {
        self.reset();
        self.grid = partition(colors, self.capacity);

        for (column_id, column) in self.grid.iter() {
            let handle = self.renderer.render_column(column);
            for &color in column {
                // A repeated color keeps the last column that holds it.
                self.membership.insert(color, column_id);
                self.renderer.attach_click_handler(&handle, color);
            }
        }
        debug!(
            colors = colors.len(),
            columns = self.grid.len(),
            capacity = self.capacity.get(),
            "palette applied"
        );
    }

    /// Selects `color`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::NotRegistered`] when `color` is not part of the current
    /// palette. The selection is left untouched in that case.
    pub fn select(&mut self, color: Rgb) -> Result<(), PaletteError> {
        if !self.membership.contains_key(&color) {
            return Err(PaletteError::NotRegistered(color));
        }

        self.selected = Some(color);
        self.renderer.display_selection(&color.to_string());
        trace!(%color, "color selected");
        Ok(())
    }

    /// The selected color, if any.
    pub fn selected(&self) -> Option<Rgb> {
        self.selected
    }

    /// Clears the drawn columns, membership, selection and selection label.
    pub fn reset(&mut self) {
        self.renderer.clear_all();
        self.grid = Grid::default();
        self.membership.clear();
        self.selected = None;
        self.renderer.clear_selection_display();
    }

    /// Grid produced by the last palette change.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Column registered for `color`.
    pub fn column_of(&self, color: Rgb) -> Option<ColumnId> {
        self.membership.get(&color).copied()
    }

    pub fn contains(&self, color: Rgb) -> bool {
        self.membership.contains_key(&color)
    }

    /// Registered colors, in first-seen palette order.
    pub fn registered_colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.membership.keys().copied()
    }

    pub fn column_capacity(&self) -> ColumnCapacity {
        self.capacity
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
