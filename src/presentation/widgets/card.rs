use ratatui::{
    prelude::*,
    widgets::{Block, BorderType},
};

use crate::presentation::config::Theme;

/// The rounded frame every dashboard widget sits in.
pub fn card_block(title: &str, theme: Theme) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.muted))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.accent).bold(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::snapshot::buffer_lines;

    #[test]
    fn test_card_block_title() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buffer = Buffer::empty(area);
        card_block("Focusing", Theme::default()).render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert!(lines[0].contains(" Focusing "));
        assert!(lines[0].starts_with('╭'));
    }

    #[test]
    fn test_card_block_inner_area() {
        let block = card_block("x", Theme::default());
        assert_eq!(block.inner(Rect::new(0, 0, 10, 5)), Rect::new(1, 1, 8, 3));
    }
}
