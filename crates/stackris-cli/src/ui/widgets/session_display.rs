use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block, Padding, Widget},
};
use stackris_engine::SupplySession;

use crate::ui::widgets::{ReserveDisplay, SessionStatsDisplay, SupplyDisplay, style};

/// Renders a whole [`SupplySession`]: the supply queue on top, with the
/// reserve stack and the command counters side by side below it.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a SupplySession,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a SupplySession) -> Self {
        Self {
            session,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }

    fn panels(
        &self,
    ) -> (
        SupplyDisplay<'a>,
        ReserveDisplay<'a>,
        SessionStatsDisplay<'a>,
    ) {
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let supply = SupplyDisplay::new(self.session.supply()).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .style(style::DEFAULT),
        );
        let reserve = ReserveDisplay::new(self.session.reserve()).block(
            Block::bordered()
                .title(Line::from("RESERVE").centered())
                .padding(block_padding)
                .style(style::DEFAULT),
        );
        let stats = SessionStatsDisplay::new(self.session.stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .style(style::DEFAULT),
        );
        (supply, reserve, stats)
    }

    pub fn width(&self) -> u16 {
        let (supply, reserve, stats) = self.panels();
        u16::max(supply.width(), reserve.width() + 1 + stats.width())
    }

    pub fn height(&self) -> u16 {
        let (supply, reserve, stats) = self.panels();
        supply.height() + 1 + u16::max(reserve.height(), stats.height())
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (supply, reserve, stats) = self.panels();

        let [column] = Layout::horizontal([Constraint::Length(self.width())])
            .flex(Flex::Center)
            .areas(area);
        let [supply_row, lower_row] = Layout::vertical([
            Constraint::Length(supply.height()),
            Constraint::Length(u16::max(reserve.height(), stats.height())),
        ])
        .spacing(1)
        .areas(column);

        supply.render(supply_row, buf);

        let [reserve_column, stats_column] = Layout::horizontal([
            Constraint::Length(reserve.width()),
            Constraint::Length(stats.width()),
        ])
        .spacing(1)
        .areas(lower_row);
        let [reserve_area] =
            Layout::vertical([Constraint::Length(reserve.height())]).areas(reserve_column);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(stats_column);
        reserve.render(reserve_area, buf);
        stats.render(stats_area, buf);
    }
}
