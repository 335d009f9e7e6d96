use ratatui::prelude::*;

/// A small colored tag such as a meeting platform or a connection count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge<'a> {
    label: &'a str,
    color: Color,
}

impl<'a> Badge<'a> {
    pub fn new(label: &'a str, color: Color) -> Self {
        Self { label, color }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.color).bold()
    }
}

impl<'a> From<Badge<'a>> for Span<'a> {
    fn from(badge: Badge<'a>) -> Self {
        let style = badge.style();
        Span::styled(format!(" {} ", badge.label), style)
    }
}
