// Text formatters
//
// Shared width-aware text helpers. All widths are terminal display columns
// (unicode-width), not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate with an ellipsis if the text exceeds `max_width` columns
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_to_width("Marc Jacobs | Daisy", 8), "Marc Ja…");
/// assert_eq!(truncate_to_width("Tea", 8), "Tea");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave room for the ellipsis (1 column)
    let target_width = max_width - 1;
    let mut current_width = 0;
    let mut truncate_at = 0;
    for (i, c) in text.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncate_at = i + c.len_utf8();
    }

    let mut truncated = text[..truncate_at].to_string();
    truncated.push('…');
    truncated
}

/// Greedy word wrap into lines of at most `max_width` columns
///
/// Words longer than a line are hard-broken. Never returns an empty vec for
/// non-empty input.
pub fn wrap_to_width(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if line.is_empty() {
            word_width
        } else {
            line_width + 1 + word_width
        };

        if needed <= max_width {
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= max_width {
            line.push_str(word);
            line_width = word_width;
        } else {
            // Hard-break an oversized word
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if line_width + w > max_width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
