use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use swatchgrid_types::Rgb;
use unicode_width::UnicodeWidthChar;

use super::state::GridCursor;
use crate::app::{App, Effect};
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;

/// Inner width of a swatch, in cells.
const SWATCH_WIDTH: u16 = 6;
/// Blank rows between two swatches of the same column.
const SWATCH_SPACING: u16 = 1;
/// Blank cells between two columns.
const COLUMN_GAP: u16 = 1;
/// Column width including its border.
const COLUMN_WIDTH: u16 = SWATCH_WIDTH + 2;

/// Colors screen controller: draws the swatch grid and routes input.
#[derive(Debug, Default)]
pub struct ColorsComponent;

/// A swatch positioned for the current frame.
struct PlacedSwatch {
    area: Rect,
    color: Rgb,
    clickable: bool,
    is_cursor: bool,
    is_selected: bool,
}

impl ColorsComponent {
    fn render_selection_line(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.theme;
        let mut spans = vec![Span::styled("Selected: ", theme.text_secondary_style())];
        match app.board().selection_label() {
            Some(label) => {
                let available = usize::from(area.width).saturating_sub(spans[0].width());
                spans.push(Span::styled(truncate_to_width(label, available), theme.accent_emphasis_style()));
            }
            None => spans.push(Span::styled("none", theme.text_muted_style())),
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Places every column and swatch that fits inside `grid_area`.
    fn place_swatches(app: &App, grid_area: Rect) -> (Vec<(Rect, bool)>, Vec<PlacedSwatch>) {
        let board = app.board();
        let selected = app.selected();
        let mut columns = Vec::with_capacity(board.columns().len());
        let mut swatches = Vec::new();

        for (column_index, column) in board.columns().iter().enumerate() {
            let offset = (column_index as u16).saturating_mul(COLUMN_WIDTH + COLUMN_GAP);
            if offset.saturating_add(COLUMN_WIDTH) > grid_area.width {
                break;
            }
            let rows = u16::try_from(column.colors().len()).unwrap_or(u16::MAX);
            let height = rows
                .saturating_mul(1 + SWATCH_SPACING)
                .saturating_sub(SWATCH_SPACING)
                .saturating_add(2)
                .min(grid_area.height);
            let column_area = Rect::new(grid_area.x + offset, grid_area.y, COLUMN_WIDTH, height);
            columns.push((column_area, column_index == app.cursor.column));

            let inner = Rect::new(
                column_area.x + 1,
                column_area.y + 1,
                SWATCH_WIDTH,
                height.saturating_sub(2),
            );
            for (row, &color) in column.colors().iter().enumerate() {
                let y_offset = u16::try_from(row).unwrap_or(u16::MAX).saturating_mul(1 + SWATCH_SPACING);
                if y_offset >= inner.height {
                    break;
                }
                swatches.push(PlacedSwatch {
                    area: Rect::new(inner.x, inner.y + y_offset, inner.width, 1),
                    color,
                    clickable: column.is_clickable(color),
                    is_cursor: app.cursor == GridCursor::new(column_index, row),
                    is_selected: selected == Some(color),
                });
            }
        }
        (columns, swatches)
    }

    fn swatch_marker(swatch: &PlacedSwatch) -> &'static str {
        match (swatch.is_cursor, swatch.is_selected) {
            (true, true) => "[✓]",
            (true, false) => "[ ]",
            (false, true) => "✓",
            (false, false) => "",
        }
    }
}

impl Component for ColorsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let board = app.controller.renderer();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return vec![Effect::Quit],
            KeyCode::Esc | KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Up | KeyCode::Char('k') => app.cursor.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.cursor.move_down(board),
            KeyCode::Left | KeyCode::Char('h') => app.cursor.move_left(board),
            KeyCode::Right | KeyCode::Char('l') => app.cursor.move_right(board),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return board.color_at(app.cursor).map(Effect::Select).into_iter().collect();
            }
            KeyCode::Char('r') => return vec![Effect::ResetPalette],
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        app.board()
            .hit_test(Position::new(mouse.column, mouse.row))
            .map(Effect::Select)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let (columns, swatches) = {
            let theme = &*app.theme;
            let block = th::block(theme, Some("Colors"), true);
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let [label_area, grid_area, status_area, hint_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
                    .areas(inner);

            Self::render_selection_line(frame, label_area, app);
            if let Some(status) = app.status() {
                frame.render_widget(Paragraph::new(Span::styled(status.to_string(), theme.status_error())), status_area);
            }
            frame.render_widget(Paragraph::new(Line::from(self.get_hint_spans(app))), hint_area);

            Self::place_swatches(app, grid_area)
        };

        let theme = &*app.theme;
        for (column_area, is_cursor_column) in columns {
            frame.render_widget(th::block(theme, None, is_cursor_column), column_area);
        }
        for swatch in &swatches {
            let marker = Paragraph::new(Self::swatch_marker(swatch))
                .style(th::swatch_style(swatch.color))
                .alignment(Alignment::Center);
            frame.render_widget(marker, swatch.area);
        }

        let board = app.controller.renderer_mut();
        board.begin_frame();
        for swatch in swatches.iter().filter(|swatch| swatch.clickable) {
            board.register_hit_area(swatch.area, swatch.color);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(
            &*app.theme,
            &[
                (" ←↑↓→", " Move  "),
                (" Enter/Click", " Select  "),
                (" r", " Reset  "),
                (" q", " Quit "),
            ],
        )
    }
}

/// Cuts `text` to at most `max_width` terminal cells, marking the cut with `…`.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width + 1 > max_width {
            break;
        }
        used += width;
        out.push(ch);
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ScreenOptions;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;

    fn draw(app: &mut App, component: &mut ColorsComponent) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        terminal.draw(|frame| component.render(frame, frame.area(), app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn draws_one_bordered_column_per_grid_column() {
        let mut app = App::new(ScreenOptions::default());
        let buffer = draw(&mut app, &mut ColorsComponent);

        // Swatch fills: column 0 at x=2.., rows 3/5/7; column 1 starts at x=11.
        assert_eq!(buffer[(3, 3)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buffer[(3, 5)].bg, Color::Rgb(0, 0, 255));
        assert_eq!(buffer[(3, 7)].bg, Color::Rgb(255, 255, 0));
        assert_eq!(buffer[(12, 3)].bg, Color::Rgb(255, 200, 0));
        assert_eq!(buffer[(21, 3)].bg, Color::Rgb(255, 0, 255));
        assert!(row_text(&buffer, 1).contains("Selected: none"));
    }

    #[test]
    fn clicking_a_swatch_selects_it() {
        let mut app = App::new(ScreenOptions::default());
        let mut component = ColorsComponent;
        draw(&mut app, &mut component);

        let effects = component.handle_mouse_events(&mut app, left_click(3, 5));
        assert_eq!(effects, vec![Effect::Select(Rgb::BLUE)]);
        for effect in effects {
            app.apply(effect);
        }
        assert_eq!(app.selected(), Some(Rgb::BLUE));

        let buffer = draw(&mut app, &mut component);
        assert!(row_text(&buffer, 1).contains("Selected: rgb(0, 0, 255)"));
    }

    #[test]
    fn clicks_outside_swatches_are_ignored() {
        let mut app = App::new(ScreenOptions::default());
        let mut component = ColorsComponent;
        draw(&mut app, &mut component);

        assert!(component.handle_mouse_events(&mut app, left_click(3, 4)).is_empty());
        assert!(component.handle_mouse_events(&mut app, left_click(35, 3)).is_empty());
    }

    #[test]
    fn keyboard_moves_cursor_and_selects() {
        let mut app = App::new(ScreenOptions::default());
        let mut component = ColorsComponent;

        component.handle_key_events(&mut app, key(KeyCode::Right));
        component.handle_key_events(&mut app, key(KeyCode::Down));
        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Select(Rgb::CYAN)]);

        assert_eq!(component.handle_key_events(&mut app, key(KeyCode::Char('r'))), vec![Effect::ResetPalette]);
        assert_eq!(component.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
    }

    #[test]
    fn enter_on_empty_palette_does_nothing() {
        let mut app = App::new(ScreenOptions {
            colors: Vec::new(),
            ..ScreenOptions::default()
        });
        let mut component = ColorsComponent;
        assert!(component.handle_key_events(&mut app, key(KeyCode::Enter)).is_empty());
        let buffer = draw(&mut app, &mut component);
        assert!(row_text(&buffer, 1).contains("Selected: none"));
    }

    #[test]
    fn palette_reset_drops_stale_click_targets() {
        let mut app = App::new(ScreenOptions::default());
        let mut component = ColorsComponent;
        draw(&mut app, &mut component);

        app.set_available_colors(vec![Rgb::WHITE]);
        assert!(component.handle_mouse_events(&mut app, left_click(3, 5)).is_empty());
    }

    #[test]
    fn column_taller_than_terminal_is_clipped() {
        let colors: Vec<Rgb> = (0..40_000u32)
            .map(|n| Rgb::new((n >> 16) as u8, (n >> 8) as u8, n as u8))
            .collect();
        let mut app = App::new(ScreenOptions {
            colors,
            column_capacity: swatchgrid_types::ColumnCapacity::new(40_000).unwrap(),
        });
        let mut component = ColorsComponent;
        let buffer = draw(&mut app, &mut component);

        assert_eq!(buffer[(3, 3)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buffer[(3, 5)].bg, Color::Rgb(0, 0, 1));
        let effects = component.handle_mouse_events(&mut app, left_click(3, 5));
        assert_eq!(effects, vec![Effect::Select(Rgb::new(0, 0, 1))]);
    }

    #[test]
    fn truncation_respects_cell_width() {
        assert_eq!(truncate_to_width("rgb(1, 2, 3)", 40), "rgb(1, 2, 3)");
        assert_eq!(truncate_to_width("rgb(1, 2, 3)", 5), "rgb(…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
