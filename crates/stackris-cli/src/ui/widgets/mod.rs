use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    reserve_display::*, session_display::*, session_stats_display::*, supply_display::*,
};

mod reserve_display;
mod session_display;
mod session_stats_display;
mod supply_display;

mod color {
    use ratatui::style::Color;

    // Common colors as associated constants
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};
    use stackris_engine::PieceShape;

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_SLOT: Style = fg_bg(color::GRAY, color::BLACK);

    pub const I_PIECE: Style = fg_bg(color::CYAN, color::BLACK);
    pub const O_PIECE: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const S_PIECE: Style = fg_bg(color::GREEN, color::BLACK);
    pub const Z_PIECE: Style = fg_bg(color::RED, color::BLACK);
    pub const J_PIECE: Style = fg_bg(color::BLUE, color::BLACK);
    pub const L_PIECE: Style = fg_bg(color::ORANGE, color::BLACK);
    pub const T_PIECE: Style = fg_bg(color::MAGENTA, color::BLACK);

    pub const fn for_shape(shape: PieceShape) -> Style {
        match shape {
            PieceShape::I => I_PIECE,
            PieceShape::O => O_PIECE,
            PieceShape::S => S_PIECE,
            PieceShape::Z => Z_PIECE,
            PieceShape::J => J_PIECE,
            PieceShape::L => L_PIECE,
            PieceShape::T => T_PIECE,
        }
    }
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
