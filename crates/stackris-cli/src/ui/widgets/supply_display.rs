use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use stackris_engine::PieceSupply;

use crate::ui::widgets::style;

/// Renders the supply queue on a single line, front piece first.
#[derive(Debug)]
pub struct SupplyDisplay<'a> {
    supply: &'a PieceSupply,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SupplyDisplay<'a> {
    pub fn new(supply: &'a PieceSupply) -> Self {
        Self {
            supply,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(self.line().width()).unwrap()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        1 + super::block_vertical_margin(self.block.as_ref())
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, piece) in self.supply.iter().enumerate() {
            if i == 0 {
                spans.push(Span::styled("-> ", style::DEFAULT));
            } else {
                spans.push(Span::from("  "));
            }
            spans.push(Span::styled(
                piece.to_string(),
                style::for_shape(piece.shape()),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for SupplyDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SupplyDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        self.line().left_aligned().render(area, buf);
    }
}
