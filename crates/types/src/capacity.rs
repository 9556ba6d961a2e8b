use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::PaletteError;

/// Number of swatches stacked in a column when nothing else is configured.
pub const DEFAULT_COLUMN_CAPACITY: usize = 3;

/// Maximum number of colors a single grid column may hold. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ColumnCapacity(NonZeroUsize);

impl ColumnCapacity {
    /// Validates a raw capacity; zero is rejected as [`PaletteError::InvalidArgument`].
    pub fn new(capacity: usize) -> Result<Self, PaletteError> {
        NonZeroUsize::new(capacity)
            .map(Self)
            .ok_or_else(|| PaletteError::InvalidArgument(format!("column capacity must be at least 1, got {capacity}")))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ColumnCapacity {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_COLUMN_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for ColumnCapacity {
    type Error = PaletteError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnCapacity> for usize {
    fn from(value: ColumnCapacity) -> Self {
        value.get()
    }
}

impl fmt::Display for ColumnCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
