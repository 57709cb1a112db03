use std::iter;

use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use stackris_engine::PieceReserve;

use crate::ui::widgets::style;

/// Renders the reserve stack one slot per row, top of the stack first.
///
/// Unfilled slots are drawn as dimmed `(empty)` rows so the panel keeps a
/// constant height while the reserve fills and drains.
#[derive(Debug)]
pub struct ReserveDisplay<'a> {
    reserve: &'a PieceReserve,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ReserveDisplay<'a> {
    pub fn new(reserve: &'a PieceReserve) -> Self {
        Self {
            reserve,
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
        let content = self
            .lines()
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or_default();
        u16::try_from(content).unwrap() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(PieceReserve::CAPACITY).unwrap()
            + super::block_vertical_margin(self.block.as_ref())
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let pieces: Vec<_> = self.reserve.iter().collect();
        let top_index = pieces.len().checked_sub(1);
        (0..PieceReserve::CAPACITY)
            .rev()
            .map(|slot| match pieces.get(slot) {
                Some(piece) => {
                    let mut spans = vec![Span::styled(
                        piece.to_string(),
                        style::for_shape(piece.shape()),
                    )];
                    if Some(slot) == top_index {
                        spans.push(Span::styled(" <- top", style::DEFAULT));
                    }
                    Line::from(spans)
                }
                None => Line::from(Span::styled("(empty)", style::EMPTY_SLOT)),
            })
            .collect()
    }
}

impl Widget for ReserveDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ReserveDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        let rows =
            Layout::vertical((0..PieceReserve::CAPACITY).map(|_| Constraint::Length(1))).split(area);
        for (line, row) in iter::zip(self.lines(), rows[..].iter().copied()) {
            line.left_aligned().render(row, buf);
        }
    }
}
