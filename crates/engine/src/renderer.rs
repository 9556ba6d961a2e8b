//! Drawing collaborator for the selection controller.
//!
//! The controller never draws anything itself. It reports each layout pass
//! and each selection change through [`PaletteRenderer`]; hosts decide what
//! "drawing" means (terminal cells, widgets, or a recorded event log).

use swatchgrid_types::{ColumnId, Rgb};

/// Presentation layer the controller reports to.
///
/// Implementations only read the data they are handed. They must not reach
/// back into controller state; user interactions are routed to
/// [`SelectionController::select`](crate::SelectionController::select) by the host.
pub trait PaletteRenderer {
    /// Opaque reference to a drawn column, usable for later removal.
    type ColumnHandle;

    /// Draws one column. Called once per column, in grid order, on every palette change.
    fn render_column(&mut self, colors: &[Rgb]) -> Self::ColumnHandle;

    /// Wires an interaction on `color`, inside the column behind `handle`,
    /// that should select `color` when triggered.
    fn attach_click_handler(&mut self, handle: &Self::ColumnHandle, color: Rgb);

    /// Removes every previously rendered column.
    fn clear_all(&mut self);

    /// Shows a human-readable representation of the current selection.
    fn display_selection(&mut self, label: &str);

    fn clear_selection_display(&mut self);
}

/// One call made against a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    RenderColumn(Vec<Rgb>),
    AttachClickHandler { column: ColumnId, color: Rgb },
    ClearAll,
    DisplaySelection(String),
    ClearSelectionDisplay,
}

/// Headless renderer that keeps an ordered log of every call.
///
/// Column handles are positional [`ColumnId`]s, restarting at zero after
/// each `clear_all`.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
    rendered_columns: usize,
}

impl RecordingRenderer {
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Drains the log, leaving the renderer's column counter untouched.
    pub fn take_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of columns drawn since the last `clear_all`.
    pub fn rendered_columns(&self) -> usize {
        self.rendered_columns
    }

    /// Current selection label, replaying the log.
    pub fn selection_label(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            RenderEvent::DisplaySelection(label) => Some(Some(label.as_str())),
            RenderEvent::ClearSelectionDisplay => Some(None),
            _ => None,
        })?
    }
}

impl PaletteRenderer for RecordingRenderer {
    type ColumnHandle = ColumnId;

    fn render_column(&mut self, colors: &[Rgb]) -> ColumnId {
        let handle = ColumnId::new(self.rendered_columns);
        self.rendered_columns += 1;
        self.events.push(RenderEvent::RenderColumn(colors.to_vec()));
        handle
    }

    fn attach_click_handler(&mut self, handle: &ColumnId, color: Rgb) {
        self.events.push(RenderEvent::AttachClickHandler { column: *handle, color });
    }

    fn clear_all(&mut self) {
        self.rendered_columns = 0;
        self.events.push(RenderEvent::ClearAll);
    }

    fn display_selection(&mut self, label: &str) {
        self.events.push(RenderEvent::DisplaySelection(label.to_string()));
    }

    fn clear_selection_display(&mut self) {
        self.events.push(RenderEvent::ClearSelectionDisplay);
    }
}
