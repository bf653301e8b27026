use noxo_engine::{Board, Line, Side};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Text,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::style;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the 3×3 grid: marks, the keyboard cursor, the winning line, and
/// optionally one hidden cell (the computer's reply while its reveal is
/// still pending).
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    cursor: Option<usize>,
    winning_line: Option<Line>,
    hidden_cell: Option<usize>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            winning_line: None,
            hidden_cell: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: Option<usize>) -> Self {
        Self { cursor, ..self }
    }

    pub fn winning_line(self, winning_line: Option<Line>) -> Self {
        Self {
            winning_line,
            ..self
        }
    }

    pub fn hidden_cell(self, hidden_cell: Option<usize>) -> Self {
        Self {
            hidden_cell,
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        3 * CELL_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        3 * CELL_HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows: [Rect; 3] = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3])
            .flex(Flex::Start)
            .areas(area);
        for (row, row_area) in rows.into_iter().enumerate() {
            let cols: [Rect; 3] = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3])
                .flex(Flex::Start)
                .areas(row_area);
            for (col, cell_area) in cols.into_iter().enumerate() {
                self.render_cell(row * 3 + col, cell_area, buf);
            }
        }
    }
}

impl BoardDisplay<'_> {
    fn render_cell(&self, cell: usize, area: Rect, buf: &mut Buffer) {
        let mark = if self.hidden_cell == Some(cell) {
            None
        } else {
            self.board.get(cell)
        };

        let border_style = if self.winning_line.is_some_and(|line| line.contains(cell)) {
            style::WIN
        } else if self.cursor == Some(cell) {
            style::CURSOR
        } else {
            style::GRID
        };

        let block = BlockWidget::bordered().border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // Empty cells show their key binding (1-9) as a dim hint.
        let text = match mark {
            Some(side) => Text::styled(
                side.as_char().to_string(),
                match side {
                    Side::X => style::X_MARK,
                    Side::O => style::O_MARK,
                },
            ),
            None => Text::styled((cell + 1).to_string(), style::CELL_HINT),
        };
        text.centered().render(inner, buf);
    }
}
