//! Text measuring and fitting helpers.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::palette::KNOWN_TAGS;
use crate::tags::{TagParser, TagTransform};

static TAG_STRIPPER: Lazy<TagParser> = Lazy::new(|| {
    let styles: HashMap<String, console::Style> = KNOWN_TAGS
        .iter()
        .map(|tag| (tag.to_string(), console::Style::new()))
        .collect();
    TagParser::new(styles, TagTransform::Remove)
});

/// Removes style tags (and ignores ANSI escapes) to get the on-screen text.
pub fn strip_tags(s: &str) -> String {
    TAG_STRIPPER.process(s)
}

/// Display width of a line once style tags are processed.
///
/// ```rust
/// use storefront_render::visible_width;
///
/// assert_eq!(visible_width("[price]$9.99[/price]"), 5);
/// assert_eq!(visible_width("plain"), 5);
/// ```
pub fn visible_width(s: &str) -> usize {
    console::measure_text_width(&strip_tags(s))
}

/// Pads `s` with spaces up to `width` visible columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = visible_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

/// Centers `s` within `width` visible columns.
pub fn center_to_width(s: &str, width: usize) -> String {
    let current = visible_width(s);
    if current >= width {
        return s.to_string();
    }
    let left = (width - current) / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(width - current - left))
}

/// Truncates a string to fit within a maximum display width, adding `…` if needed.
///
/// ```rust
/// use storefront_render::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

/// Greedy word wrap to `width` columns. Words longer than a line are truncated.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in s.split_whitespace() {
        let word = if word.width() > width {
            truncate_to_width(word, width)
        } else {
            word.to_string()
        };
        if line.is_empty() {
            line = word;
        } else if line.width() + 1 + word.width() <= width {
            line.push(' ');
            line.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
