use ratatui::buffer::Buffer;

/// The symbols of each buffer row joined into one string per row.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Plain-text rendering of a buffer with trailing spaces removed.
pub fn buffer_to_string(buf: &Buffer) -> String {
    buffer_lines(buf)
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{prelude::*, widgets::Paragraph};

    use super::*;

    #[test]
    fn test_buffer_lines() {
        let area = Rect::new(0, 0, 5, 2);
        let mut buffer = Buffer::empty(area);
        Paragraph::new("ab\ncd").render(area, &mut buffer);
        assert_eq!(buffer_lines(&buffer), vec!["ab   ", "cd   "]);
        assert_eq!(buffer_to_string(&buffer), "ab\ncd");
    }
}
