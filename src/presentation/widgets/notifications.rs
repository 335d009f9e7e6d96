use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
};

use super::{card::card_block, shrink_text::ShrinkText};
use crate::{
    domain::{text::gap_between, NotificationEntry},
    presentation::config::Theme,
};

/// Message lines shown per notification before it is cut with "...".
const MESSAGE_LINES: usize = 2;

pub struct NotificationsCard<'a> {
    entries: &'a [NotificationEntry],
    theme: Theme,
}

impl<'a> NotificationsCard<'a> {
    pub const TITLE: &'static str = "Notifications";

    pub fn new(entries: &'a [NotificationEntry], theme: Theme) -> Self {
        Self { entries, theme }
    }

    /// Borders plus a heading line and at most two message lines per entry.
    pub fn height(entries: &[NotificationEntry]) -> u16 {
        let rows = u16::try_from(entries.len()).unwrap_or(u16::MAX);
        rows.saturating_mul(1 + MESSAGE_LINES as u16).saturating_add(2)
    }

    /// One row per entry, in input order: the title with the relative time
    /// flush right, then the message wrapped to `width`.
    pub fn rows(&self, width: u16) -> Vec<Text<'a>> {
        let width = usize::from(width);
        let muted = Style::default().fg(self.theme.muted);
        self.entries
            .iter()
            .map(|entry| {
                let gap = gap_between(&entry.title, &entry.received, width);
                let heading = Line::from(vec![
                    Span::styled(&*entry.title, Style::default().bold()),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(&*entry.received, muted),
                ]);
                let message = ShrinkText::new(&*entry.message, width, MESSAGE_LINES)
                    .lines()
                    .into_iter()
                    .map(|line| Line::styled(line, muted));
                Text::from(std::iter::once(heading).chain(message).collect::<Vec<_>>())
            })
            .collect()
    }
}

impl Widget for NotificationsCard<'_> {
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{domain::DashboardContent, presentation::snapshot::buffer_lines};

    fn entries(n: usize) -> Vec<NotificationEntry> {
        (0..n)
            .map(|i| {
                NotificationEntry::new(format!("Title {i}"), format!("Body {i}"), format!("{i}m"))
            })
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn test_one_row_per_entry_in_order(#[case] n: usize) {
        let entries = entries(n);
        let rows = NotificationsCard::new(&entries, Theme::default()).rows(30);
        assert_eq!(rows.len(), n);
        for (i, row) in rows.iter().enumerate() {
            let heading = row.lines[0].to_string();
            assert!(heading.starts_with(&format!("Title {i}")));
            assert!(heading.ends_with(&format!("{i}m")));
            assert_eq!(row.lines[1].to_string(), format!("Body {i}"));
        }
    }

    #[test]
    fn test_long_message_is_cut() {
        let entries = DashboardContent::default().notifications;
        let rows = NotificationsCard::new(&entries, Theme::default()).rows(16);
        let reminder = &rows[1];
        assert_eq!(reminder.lines.len(), 1 + MESSAGE_LINES);
        assert_eq!(reminder.lines[1].to_string(), "Don't forget to ");
        assert_eq!(reminder.lines[2].to_string(), "...");
    }

    #[test]
    fn test_height() {
        assert_eq!(NotificationsCard::height(&[]), 2);
        assert_eq!(NotificationsCard::height(&entries(2)), 8);
    }

    #[test]
    fn test_render_empty_list() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buffer = Buffer::empty(area);
        NotificationsCard::new(&[], Theme::default()).render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert!(lines[0].contains(" Notifications "));
        assert_eq!(lines[1].trim_matches('│').trim(), "");
        assert_eq!(lines[2].trim_matches('│').trim(), "");
    }

    #[test]
    fn test_render_default_entries() {
        let content = DashboardContent::default();
        let area = Rect::new(0, 0, 50, NotificationsCard::height(&content.notifications));
        let mut buffer = Buffer::empty(area);
        NotificationsCard::new(&content.notifications, Theme::default()).render(area, &mut buffer);

        let text = buffer_lines(&buffer).join("\n");
        for expected in [
            "New Message",
            "10 mins ago",
            "You have a new message from John Doe.",
            "Task Reminder",
            "1 hour ago",
        ] {
            assert!(text.contains(expected), "missing {expected}");
        }
    }
}
