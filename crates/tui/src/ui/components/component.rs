//! Component abstraction for the swatchgrid TUI.
//!
//! Components own only local UI behavior. They receive input, render into a
//! provided `Rect`, and report side effects back to the runtime as
//! [`Effect`]s instead of mutating application state directly.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::{App, Effect};

/// A UI element with its own input handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events` and
///    `handle_mouse_events`, which return effects for the runtime to apply.
/// 2. **Rendering**: `render` draws the component into the frame area. It may
///    record layout information (such as click targets) for later input
///    handling but must not change selection state.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that fall inside or around this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the footer.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
