//! Application state for the colors screen.
//!
//! The `App` owns the single selection controller for the lifetime of the
//! screen, the palette it was opened with, the keyboard cursor and a status
//! line for rejected selections.

use swatchgrid_engine::SelectionController;
use swatchgrid_types::{ColumnCapacity, DEFAULT_PALETTE, PaletteError, Rgb};
use tracing::warn;

use crate::ui::components::SwatchBoard;
use crate::ui::components::colors::GridCursor;
use crate::ui::theme::{DraculaTheme, Theme};

/// What the colors screen is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    pub colors: Vec<Rgb>,
    pub column_capacity: ColumnCapacity,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
            column_capacity: ColumnCapacity::default(),
        }
    }
}

/// Side effects requested by components and applied by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A swatch interaction resolved to this color.
    Select(Rgb),
    /// Re-apply the palette, discarding the selection.
    ResetPalette,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub(crate) controller: SelectionController<SwatchBoard>,
    pub(crate) cursor: GridCursor,
    pub(crate) theme: Box<dyn Theme>,
    palette: Vec<Rgb>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Builds the screen state and offers the configured palette.
    pub fn new(options: ScreenOptions) -> Self {
        let controller = SelectionController::with_capacity(options.column_capacity, SwatchBoard::default());
        let mut app = Self {
            controller,
            cursor: GridCursor::default(),
            theme: Box::new(DraculaTheme::new()),
            palette: options.colors,
            status: None,
            should_quit: false,
        };
        app.apply_palette();
        app
    }

    /// Offers the stored palette again, which also clears the selection.
    pub fn apply_palette(&mut self) {
        self.controller.set_available_colors(&self.palette);
        self.cursor = GridCursor::default();
        self.status = None;
    }

    /// Replaces the palette on offer.
    pub fn set_available_colors(&mut self, colors: Vec<Rgb>) {
        self.palette = colors;
        self.apply_palette();
    }

    /// Forwards a selection request to the controller.
    ///
    /// A rejected request is logged and surfaced on the status line; the
    /// screen keeps running with its previous selection.
    pub fn select(&mut self, color: Rgb) -> Result<(), PaletteError> {
        match self.controller.select(color) {
            Ok(()) => {
                self.status = None;
                if let Some(slot) = self.controller.renderer().slot_of(color) {
                    self.cursor = slot;
                }
                Ok(())
            }
            Err(error) => {
                warn!(%color, %error, "selection rejected");
                self.status = Some(error.to_string());
                Err(error)
            }
        }
    }

    pub fn selected(&self) -> Option<Rgb> {
        self.controller.selected()
    }

    /// Applies one effect. Returns `false` once the screen should close.
    pub fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::Select(color) => {
                let _ = self.select(color);
            }
            Effect::ResetPalette => self.apply_palette(),
            Effect::Quit => self.should_quit = true,
        }
        !self.should_quit
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub(crate) fn board(&self) -> &SwatchBoard {
        self.controller.renderer()
    }
}
