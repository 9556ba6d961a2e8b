//! Theme styling for the colors screen.
//!
//! Chrome (borders, labels, hints) is drawn from semantic roles so the swatches
//! themselves are the only literal colors on screen.

pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use roles::{Theme, ThemeRoles};
