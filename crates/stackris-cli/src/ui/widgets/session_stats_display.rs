use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use stackris_engine::SessionStats;

use crate::ui::widgets::style;

pub struct SessionStatsDisplay<'a> {
    stats: &'a SessionStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SessionStatsDisplay<'a> {
    pub fn new(stats: &'a SessionStats) -> Self {
        Self { stats, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        26 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    LabelValue(&'static str, &'static dyn Fn(&SessionStats) -> String),
}

const ROWS: &[Row] = &[
    Row::LabelValue("PLAYED:", &|stats| stats.played().to_string()),
    Row::LabelValue("RESERVED:", &|stats| stats.reserved().to_string()),
    Row::LabelValue("RECALLED:", &|stats| stats.recalled().to_string()),
    Row::Empty,
    Row::LabelValue("FRONT SWAPS:", &|stats| stats.front_swaps().to_string()),
    Row::LabelValue("TRIPLE SWAPS:", &|stats| stats.triple_swaps().to_string()),
    Row::Empty,
    Row::LabelValue("COMMANDS:", &|stats| stats.total_commands().to_string()),
];

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.stats), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
