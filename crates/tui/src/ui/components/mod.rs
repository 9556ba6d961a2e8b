//! UI components.

pub mod colors;
pub mod component;

pub use colors::{ColorsComponent, SwatchBoard};
pub(crate) use component::Component;
