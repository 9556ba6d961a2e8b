//! # Swatchgrid Engine
//!
//! Lays a palette of colors out as a grid of fixed-height columns and tracks
//! which single color is selected.
//!
//! ## Usage
//!
//! ```rust
//! use swatchgrid_engine::{RecordingRenderer, SelectionController};
//! use swatchgrid_types::Rgb;
//!
//! let mut controller = SelectionController::new(3, RecordingRenderer::default())?;
//! controller.set_available_colors(&[Rgb::RED, Rgb::BLUE, Rgb::YELLOW, Rgb::ORANGE]);
//! assert_eq!(controller.grid().len(), 2);
//!
//! controller.select(Rgb::ORANGE)?;
//! assert_eq!(controller.selected(), Some(Rgb::ORANGE));
//! assert!(controller.select(Rgb::GREEN).is_err());
//! # Ok::<(), swatchgrid_types::PaletteError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`layout`**: the pure partitioning of a palette into columns
//! - **`controller`**: membership bookkeeping and the single-selection state machine
//! - **`renderer`**: the drawing collaborator the controller reports to

pub mod controller;
pub mod layout;
pub mod renderer;

pub use controller::SelectionController;
pub use layout::{Grid, layout};
pub use renderer::{PaletteRenderer, RecordingRenderer, RenderEvent};
