//! UI rendering module for the colors screen.

pub mod components;
pub mod runtime;
pub mod theme;
