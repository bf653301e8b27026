use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::board_display::*;

mod board_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(80, 80, 80);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg(color: ratatui::style::Color) -> Style {
        Style::new().fg(color)
    }

    pub const X_MARK: Style = fg(color::CYAN).add_modifier(Modifier::BOLD);
    pub const O_MARK: Style = fg(color::MAGENTA).add_modifier(Modifier::BOLD);
    pub const CELL_HINT: Style = fg(color::DARK_GRAY);
    pub const GRID: Style = fg(color::GRAY);
    pub const CURSOR: Style = fg(color::YELLOW);
    pub const WIN: Style = fg(color::GREEN);
    pub const STATUS: Style = fg(color::WHITE).add_modifier(Modifier::BOLD);
    pub const NOTICE: Style = fg(color::RED);
    pub const HELP: Style = fg(color::DARK_GRAY);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
