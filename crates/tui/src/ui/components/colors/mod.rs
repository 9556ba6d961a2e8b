//! Colors screen: swatch grid, selection label and cursor.

mod colors_component;
mod state;
mod swatch_board;

pub use colors_component::ColorsComponent;
pub use state::GridCursor;
pub use swatch_board::SwatchBoard;
