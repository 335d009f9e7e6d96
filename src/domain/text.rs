use unicode_width::UnicodeWidthStr;

pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));

        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }
        result.push(c);
    }

    result
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Number of spaces that push `right` flush against the right edge of a
/// line `width` columns wide that starts with `left`. At least one space
/// separates the two.
pub fn gap_between(left: &str, right: &str, width: usize) -> usize {
    width.saturating_sub(left.width() + right.width()).max(1)
}
