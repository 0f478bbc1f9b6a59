//! Terminal styles derived from a theme palette.
//!
//! Each style tag the templates use maps to one or two palette slots. The
//! mapping is fixed; only the colors change with the theme, so switching
//! themes is a matter of calling [`styles_for`] again with the new record.

use std::collections::HashMap;

use console::{Color, Style};
use storefront_theme::ThemeRecord;
use tracing::warn;

use crate::color::Hsl;

/// Every style tag templates may use.
pub const KNOWN_TAGS: &[&str] = &[
    "primary",
    "secondary",
    "accent",
    "foreground",
    "muted",
    "card",
    "border",
    "heading",
    "title",
    "price",
    "badge",
    "brand",
    "nav",
    "nav-active",
    "sidebar-active",
    "star",
    "star-empty",
    "pattern",
    "error",
    "success",
];

/// Resolves a palette slot to a terminal color.
fn slot_color(record: &ThemeRecord, slot: &str) -> Option<Color> {
    let value = record.colors.get(slot)?;
    match value.parse::<Hsl>() {
        Ok(hsl) => Some(hsl.to_console_color()),
        Err(e) => {
            warn!(theme = %record.id, slot, error = %e, "unusable palette color");
            None
        }
    }
}

/// Builds the style map for `record`.
///
/// With `force`, styles emit escapes even when stdout is not a terminal.
pub fn styles_for(record: &ThemeRecord, force: bool) -> HashMap<String, Style> {
    let fg = |slot: &str| match slot_color(record, slot) {
        Some(color) => Style::new().fg(color),
        None => Style::new(),
    };
    let on = |style: Style, slot: &str| match slot_color(record, slot) {
        Some(color) => style.bg(color),
        None => style,
    };

    let mut styles = HashMap::new();
    let mut add = |name: &str, style: Style| {
        let style = if force { style.force_styling(true) } else { style };
        styles.insert(name.to_string(), style);
    };

    add("primary", fg("primary"));
    add("secondary", fg("secondary"));
    add("accent", fg("accent"));
    add("foreground", fg("foreground"));
    add("muted", fg("mutedForeground"));
    add("card", fg("cardForeground"));
    add("border", fg("border"));
    add("heading", fg("foreground").bold());
    add("title", fg("cardForeground").bold());
    add("price", fg("primary").bold());
    add("badge", on(fg("foreground"), "secondary"));
    add("brand", fg("primary").bold());
    add("nav", fg("mutedForeground"));
    add("nav-active", fg("primary").bold().underlined());
    add("sidebar-active", on(fg("foreground"), "accent").bold());
    add("star", Style::new().fg(Color::Color256(220)));
    add("star-empty", Style::new().fg(Color::Color256(250)));
    add("pattern", fg("border").dim());
    add("error", Style::new().red().bold());
    add("success", Style::new().green());

    styles
}
