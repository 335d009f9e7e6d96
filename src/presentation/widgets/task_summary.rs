use ratatui::{prelude::*, widgets::Paragraph};

use super::card::card_block;
use crate::{domain::TaskSummary, presentation::config::Theme};

pub struct TaskSummaryCard<'a> {
    summary: &'a TaskSummary,
    theme: Theme,
}

impl<'a> TaskSummaryCard<'a> {
    pub const TITLE: &'static str = "Summary";
    pub const HEIGHT: u16 = 4;

    pub fn new(summary: &'a TaskSummary, theme: Theme) -> Self {
        Self { summary, theme }
    }
}

impl<'a> From<&TaskSummaryCard<'a>> for Text<'a> {
    fn from(card: &TaskSummaryCard<'a>) -> Self {
        Text::from(vec![
            Line::styled(
                card.summary.completion.to_string(),
                Style::default().fg(card.theme.summary).bold(),
            ),
            Line::raw(&*card.summary.caption),
        ])
        .centered()
    }
}

impl Widget for TaskSummaryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let text = Text::from(&self);
        Paragraph::new(text)
            .centered()
            .block(card_block(Self::TITLE, self.theme))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::Percentage, presentation::snapshot::buffer_lines};

    fn summary(completion: f64) -> TaskSummary {
        TaskSummary {
            completion: Percentage::new(completion),
            caption: Cow::Borrowed("Tasks Completed"),
        }
    }

    #[test]
    fn test_text() {
        let summary = summary(83.0);
        let text = Text::from(&TaskSummaryCard::new(&summary, Theme::default()));
        assert_eq!(text.to_string(), "83%\nTasks Completed");
        assert_eq!(text.alignment, Some(Alignment::Center));
    }

    #[test]
    fn test_render_centered() {
        let summary = summary(83.0);
        let area = Rect::new(0, 0, 21, TaskSummaryCard::HEIGHT);
        let mut buffer = Buffer::empty(area);
        TaskSummaryCard::new(&summary, Theme::default()).render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert_eq!(lines[1], "│        83%        │");
        assert_eq!(lines[2], "│  Tasks Completed  │");
    }

    #[test]
    fn test_clamped_figure() {
        let summary = summary(180.0);
        let text = Text::from(&TaskSummaryCard::new(&summary, Theme::default()));
        assert!(text.to_string().starts_with("100%"));
    }
}
