use thiserror::Error;

use crate::Rgb;

/// Errors raised by palette layout and selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A caller contract violation, such as a zero column capacity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The requested color is not part of the palette currently offered.
    #[error("color {0} is not registered in the current palette")]
    NotRegistered(Rgb),
}
