//! Style tag processing for `[tag]content[/tag]` markup.
//!
//! Templates mark up text with tags named after the theme's style slots.
//! After template evaluation, [`TagParser`] turns the markup into ANSI
//! escapes, strips it, or leaves it visible, depending on [`TagTransform`].
//!
//! ```rust
//! use std::collections::HashMap;
//! use console::Style;
//! use storefront_render::tags::{TagParser, TagTransform};
//!
//! let mut styles = HashMap::new();
//! styles.insert("price".to_string(), Style::new().bold());
//!
//! let plain = TagParser::new(styles.clone(), TagTransform::Remove);
//! assert_eq!(plain.process("[price]$9.99[/price]"), "$9.99");
//!
//! let debug = TagParser::new(styles, TagTransform::Keep);
//! assert_eq!(debug.process("[price]$9.99[/price]"), "[price]$9.99[/price]");
//! ```
//!
//! # Tag Name Syntax
//!
//! Pattern: `[a-z_][a-z0-9_-]*`. Anything else between brackets is literal
//! text, as are tags without a matching close tag and tags with no style
//! registered.
//!
//! # Escaping
//!
//! Data interpolated into templates goes through [`escape_tags`], which
//! swaps every `[` for [`ESCAPED_BRACKET`]. The tokenizer never sees those,
//! so a product titled `[price]` stays text. [`unescape_tags`] puts the
//! brackets back after tag processing. The placeholder is one column wide,
//! like the bracket it replaces, so width measurements stay exact.

use std::collections::HashMap;

use console::Style;

/// Stand-in for a literal `[` coming from data (a private-use character).
pub const ESCAPED_BRACKET: char = '\u{E000}';

/// Hides every `[` in `text` from the tag tokenizer.
pub fn escape_tags(text: &str) -> String {
    text.replace('[', &ESCAPED_BRACKET.to_string())
}

/// Restores the brackets hidden by [`escape_tags`].
pub fn unescape_tags(text: &str) -> String {
    text.replace(ESCAPED_BRACKET, "[")
}

/// How to transform matched tags in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTransform {
    /// Apply ANSI escape codes from the associated style.
    Apply,
    /// Remove tags, keep content.
    Remove,
    /// Keep tags as-is.
    Keep,
}

/// Processes style tags against a fixed style map.
#[derive(Debug, Clone)]
pub struct TagParser {
    styles: HashMap<String, Style>,
    transform: TagTransform,
}

impl TagParser {
    pub fn new(styles: HashMap<String, Style>, transform: TagTransform) -> Self {
        Self { styles, transform }
    }

    pub fn transform(&self) -> TagTransform {
        self.transform
    }

    /// Transforms every known, well-formed tag in `input`.
    pub fn process(&self, input: &str) -> String {
        let tokens: Vec<Token<'_>> = Tokenizer::new(input).collect();
        let mut output = String::with_capacity(input.len());
        let mut stack: Vec<&str> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::Text(text) => self.emit_text(&mut output, text, &stack),
                Token::OpenTag(tag) => {
                    if self.styles.contains_key(*tag) && has_matching_close(&tokens[i + 1..], tag) {
                        stack.push(*tag);
                        if self.transform == TagTransform::Keep {
                            push_open(&mut output, tag);
                        }
                    } else {
                        self.emit_text(&mut output, &format!("[{}]", tag), &stack);
                    }
                }
                Token::CloseTag(tag) => {
                    if stack.contains(tag) {
                        // Close everything opened inside this tag, then the tag itself.
                        while let Some(open) = stack.pop() {
                            if self.transform == TagTransform::Keep {
                                push_close(&mut output, open);
                            }
                            if open == *tag {
                                break;
                            }
                        }
                    } else {
                        self.emit_text(&mut output, &format!("[/{}]", tag), &stack);
                    }
                }
                Token::InvalidTag(text) => self.emit_text(&mut output, text, &stack),
            }
        }

        if self.transform == TagTransform::Keep {
            while let Some(open) = stack.pop() {
                push_close(&mut output, open);
            }
        }

        output
    }

    fn emit_text(&self, output: &mut String, text: &str, stack: &[&str]) {
        if text.is_empty() {
            return;
        }
        if self.transform != TagTransform::Apply || stack.is_empty() {
            output.push_str(text);
            return;
        }

        // Style each line separately so padding and joins never split an
        // escape sequence across lines.
        let mut first = true;
        for line in text.split('\n') {
            if !first {
                output.push('\n');
            }
            first = false;
            if line.is_empty() {
                continue;
            }
            let mut current = line.to_string();
            for tag in stack {
                if let Some(style) = self.styles.get(*tag) {
                    current = style.apply_to(current).to_string();
                }
            }
            output.push_str(&current);
        }
    }
}

fn push_open(output: &mut String, tag: &str) {
    output.push('[');
    output.push_str(tag);
    output.push(']');
}

fn push_close(output: &mut String, tag: &str) {
    output.push_str("[/");
    output.push_str(tag);
    output.push(']');
}

fn has_matching_close(tokens: &[Token<'_>], tag: &str) -> bool {
    let mut depth = 1;
    for token in tokens {
        match token {
            Token::OpenTag(t) if *t == tag => depth += 1,
            Token::CloseTag(t) if *t == tag => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Names of all well-formed opening tags in `input`, in order of appearance.
pub fn tag_names(input: &str) -> Vec<&str> {
    Tokenizer::new(input)
        .filter_map(|t| match t {
            Token::OpenTag(name) => Some(name),
            _ => None,
        })
        .collect()
}

/// Tag names used in `input` that are not in `known`, deduplicated.
pub fn unknown_tags<'a>(input: &'a str, known: &[&str]) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = Vec::new();
    for name in tag_names(input) {
        if !known.contains(&name) && !unknown.contains(&name) {
            unknown.push(name);
        }
    }
    unknown
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    OpenTag(&'a str),
    CloseTag(&'a str),
    InvalidTag(&'a str),
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn is_valid_tag_name(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() || first == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];

        let Some(bracket_pos) = remaining.find('[') else {
            self.pos = self.input.len();
            return Some(Token::Text(remaining));
        };

        if bracket_pos > 0 {
            self.pos += bracket_pos;
            return Some(Token::Text(&remaining[..bracket_pos]));
        }

        // A tag never spans another '[' or a line break.
        let end = remaining[1..]
            .find(|c| c == ']' || c == '[' || c == '\n')
            .map(|i| i + 1);
        match end {
            Some(close) if remaining.as_bytes()[close] == b']' => {
                let content = &remaining[1..close];
                let full = &remaining[..=close];
                self.pos += close + 1;
                if let Some(name) = content.strip_prefix('/') {
                    if Self::is_valid_tag_name(name) {
                        return Some(Token::CloseTag(name));
                    }
                } else if Self::is_valid_tag_name(content) {
                    return Some(Token::OpenTag(content));
                }
                Some(Token::InvalidTag(full))
            }
            Some(stop) => {
                self.pos += stop;
                Some(Token::Text(&remaining[..stop]))
            }
            None => {
                self.pos = self.input.len();
                Some(Token::Text(remaining))
            }
        }
    }
}
