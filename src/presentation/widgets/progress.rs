use ratatui::{prelude::*, widgets::Gauge};

use crate::domain::Percentage;

/// One-line progress indicator labelled with its percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressBar {
    value: Percentage,
    color: Color,
}

impl ProgressBar {
    pub fn new(value: Percentage, color: Color) -> Self {
        Self { value, color }
    }

    pub fn value(&self) -> Percentage {
        self.value
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Gauge::default()
            .gauge_style(Style::default().fg(self.color).bg(Color::DarkGray))
            .percent(u16::from(self.value.value()))
            .label(self.value.to_string())
            .use_unicode(true)
            .render(area, buf);
    }
}
