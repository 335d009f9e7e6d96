use ratatui::{prelude::*, widgets::Paragraph};

use super::{badge::Badge, card::card_block};
use crate::{domain::TrackerStatus, presentation::config::Theme};

pub struct TrackersCard<'a> {
    status: &'a TrackerStatus,
    theme: Theme,
}

impl<'a> TrackersCard<'a> {
    pub const TITLE: &'static str = "Integrations";
    pub const HEIGHT: u16 = 4;

    pub fn new(status: &'a TrackerStatus, theme: Theme) -> Self {
        Self { status, theme }
    }
}

impl Widget for TrackersCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let badge_label = self.status.badge_label();
        let badge: Span = Badge::new(&badge_label, self.theme.tracker_badge).into();
        let text = Text::from(vec![Line::raw(&*self.status.label), Line::from(badge)]);
        Paragraph::new(text)
            .block(card_block(Self::TITLE, self.theme))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::snapshot::buffer_lines;

    #[test]
    fn test_render() {
        let status = TrackerStatus {
            label: Cow::Borrowed("Trackers connected:"),
            active_connections: 3,
        };
        let area = Rect::new(0, 0, 30, TrackersCard::HEIGHT);
        let mut buffer = Buffer::empty(area);
        TrackersCard::new(&status, Theme::default()).render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert!(lines[0].contains(" Integrations "));
        assert!(lines[1].contains("Trackers connected:"));
        assert!(lines[2].contains(" 3 active connections "));
        assert_eq!(buffer[(1, 2)].bg, Theme::default().tracker_badge);
    }
}
