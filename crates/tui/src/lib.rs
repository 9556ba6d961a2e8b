//! # Swatchgrid TUI
//!
//! Terminal colors screen built on Ratatui and Crossterm. The palette is laid
//! out as bordered columns of swatches; clicking a swatch (or moving the cursor
//! and pressing Enter) selects it, and the current selection is shown as a
//! label above the grid.
//!
//! ## Architecture
//!
//! - [`App`] owns the selection controller for the lifetime of the screen.
//! - The controller reports every layout pass to a `SwatchBoard`, the
//!   terminal implementation of the engine's renderer trait.
//! - `ColorsComponent` draws the board and turns input into `Effect`s that
//!   the runtime applies back to the `App`.

mod app;
mod ui;

pub use app::{App, Effect, ScreenOptions};

use anyhow::Result;
use swatchgrid_types::Rgb;

/// Runs the colors screen until the user quits.
///
/// Returns the color that was selected when the screen closed, if any.
///
/// # Errors
///
/// Terminal setup, drawing or input failures.
pub fn run(options: ScreenOptions) -> Result<Option<Rgb>> {
    ui::runtime::run_app(options)
}
