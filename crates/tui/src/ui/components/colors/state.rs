use super::swatch_board::SwatchBoard;

/// Keyboard cursor over the swatch grid, addressed as column then row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub column: usize,
    pub row: usize,
}

impl GridCursor {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self, board: &SwatchBoard) {
        let len = board.column_len(self.column);
        if self.row + 1 < len {
            self.row += 1;
        }
    }

    pub fn move_left(&mut self, board: &SwatchBoard) {
        if self.column > 0 {
            self.column -= 1;
            self.clamp_row(board);
        }
    }

    /// Moves one column right; the row is pulled up when the next column is shorter.
    pub fn move_right(&mut self, board: &SwatchBoard) {
        if self.column + 1 < board.columns().len() {
            self.column += 1;
            self.clamp_row(board);
        }
    }

    fn clamp_row(&mut self, board: &SwatchBoard) {
        let len = board.column_len(self.column);
        self.row = self.row.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatchgrid_engine::PaletteRenderer;
    use swatchgrid_types::Rgb;

    fn board() -> SwatchBoard {
        let mut board = SwatchBoard::default();
        board.render_column(&[Rgb::RED, Rgb::BLUE, Rgb::YELLOW]);
        board.render_column(&[Rgb::ORANGE]);
        board
    }

    #[test]
    fn moving_into_shorter_column_clamps_row() {
        let board = board();
        let mut cursor = GridCursor::new(0, 2);
        cursor.move_right(&board);
        assert_eq!(cursor, GridCursor::new(1, 0));
        assert_eq!(board.color_at(cursor), Some(Rgb::ORANGE));
    }

    #[test]
    fn stays_inside_grid_edges() {
        let board = board();
        let mut cursor = GridCursor::default();
        cursor.move_up();
        cursor.move_left(&board);
        assert_eq!(cursor, GridCursor::new(0, 0));

        cursor.move_down(&board);
        cursor.move_down(&board);
        cursor.move_down(&board);
        assert_eq!(cursor, GridCursor::new(0, 2));

        cursor.move_right(&board);
        cursor.move_right(&board);
        assert_eq!(cursor, GridCursor::new(1, 0));
    }

    #[test]
    fn empty_board_points_nowhere() {
        let board = SwatchBoard::default();
        let mut cursor = GridCursor::default();
        cursor.move_right(&board);
        cursor.move_down(&board);
        assert_eq!(cursor, GridCursor::default());
        assert_eq!(board.color_at(cursor), None);
    }
}
