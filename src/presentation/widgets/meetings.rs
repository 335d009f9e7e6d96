use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
};

use super::{badge::Badge, card::card_block};
use crate::{
    domain::{text::gap_between, MeetingEntry},
    presentation::config::Theme,
};

const ROW_HEIGHT: u16 = 2;

pub struct MeetingsCard<'a> {
    entries: &'a [MeetingEntry],
    theme: Theme,
}

impl<'a> MeetingsCard<'a> {
    pub const TITLE: &'static str = "Upcoming Meetings";

    pub fn new(entries: &'a [MeetingEntry], theme: Theme) -> Self {
        Self { entries, theme }
    }

    /// Borders plus one row per entry.
    pub fn height(entries: &[MeetingEntry]) -> u16 {
        let rows = u16::try_from(entries.len()).unwrap_or(u16::MAX);
        rows.saturating_mul(ROW_HEIGHT).saturating_add(2)
    }

    /// One two-line row per entry, in input order: the title with the
    /// platform badge flush right, then the scheduled time.
    pub fn rows(&self, width: u16) -> Vec<Text<'a>> {
        self.entries
            .iter()
            .map(|entry| {
                let badge: Span = Badge::new(&entry.platform, self.theme.meeting_badge).into();
                let gap = gap_between(&entry.title, &badge.content, usize::from(width));
                Text::from(vec![
                    Line::from(vec![
                        Span::styled(&*entry.title, Style::default().bold()),
                        Span::raw(" ".repeat(gap)),
                        badge,
                    ]),
                    Line::styled(&*entry.scheduled_at, Style::default().fg(self.theme.muted)),
                ])
            })
            .collect()
    }
}

impl Widget for MeetingsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(Self::TITLE, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let items = self
            .rows(inner.width)
            .into_iter()
            .map(ListItem::new)
            .collect::<Vec<_>>();
        Widget::render(List::new(items), inner, buf);
    }
}
