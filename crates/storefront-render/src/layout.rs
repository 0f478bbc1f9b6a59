//! Page arrangement decided by the theme's layout shape.
//!
//! The layout kind picks the page chrome (top navigation or a persistent
//! sidebar), whether the grid-pattern backdrop is drawn, and how many
//! columns each card region uses at full width:
//!
//! | region | standard | sidebar | grid |
//! |---|---|---|---|
//! | featured products | 3 | 3 | 3 |
//! | product grid | 4 | 3 | 4 |
//! | about stats | 4 | 4 | 4 |
//! | about features | 3 | 2 | 3 |
//! | about values | 3 | 2 | 3 |
//! | contact info cards | 3 | 3 | 3 |
//!
//! Narrow terminals drop columns until each card is at least
//! [`MIN_CELL_WIDTH`] wide.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use storefront_theme::{LayoutKind, ThemeRecord};

use crate::util::{pad_to_width, strip_tags, truncate_to_width, visible_width};

/// Narrowest card the column fitting accepts.
pub const MIN_CELL_WIDTH: usize = 20;

/// Horizontal gap between cards.
pub const GAP: usize = 2;

/// Gap between the sidebar and the page body.
pub const SIDEBAR_GAP: usize = 3;

/// A card region of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    FeaturedProducts,
    ProductGrid,
    AboutStats,
    AboutFeatures,
    AboutValues,
    ContactCards,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::FeaturedProducts,
        Region::ProductGrid,
        Region::AboutStats,
        Region::AboutFeatures,
        Region::AboutValues,
        Region::ContactCards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::FeaturedProducts => "featured",
            Region::ProductGrid => "products",
            Region::AboutStats => "stats",
            Region::AboutFeatures => "features",
            Region::AboutValues => "values",
            Region::ContactCards => "contact-cards",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown region '{}'", s))
    }
}

/// Column count for `region` at full width.
pub fn max_columns(kind: LayoutKind, region: Region) -> usize {
    match (region, kind) {
        (Region::FeaturedProducts, _) => 3,
        (Region::ProductGrid, LayoutKind::Sidebar) => 3,
        (Region::ProductGrid, _) => 4,
        (Region::AboutStats, _) => 4,
        (Region::AboutFeatures | Region::AboutValues, LayoutKind::Sidebar) => 2,
        (Region::AboutFeatures | Region::AboutValues, _) => 3,
        (Region::ContactCards, _) => 3,
    }
}

/// Width of each cell when `columns` cells share `available` columns.
pub fn cell_width(columns: usize, available: usize) -> usize {
    let columns = columns.max(1);
    available.saturating_sub(GAP * (columns - 1)) / columns
}

/// Largest column count up to `max` whose cells are still readable.
pub fn fit_columns(max: usize, available: usize) -> usize {
    (1..=max.max(1))
        .rev()
        .find(|&n| cell_width(n, available) >= MIN_CELL_WIDTH)
        .unwrap_or(1)
}

/// Surrounding page furniture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chrome {
    /// Header with brand, inline navigation and theme name.
    TopNav,
    /// Persistent side panel with brand and navigation; the header keeps
    /// only brand and theme name.
    Sidebar,
}

impl Chrome {
    pub fn for_layout(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Sidebar => Chrome::Sidebar,
            LayoutKind::Standard | LayoutKind::Grid => Chrome::TopNav,
        }
    }
}

/// Whether the page is framed by the grid-pattern backdrop.
pub fn shows_grid_pattern(kind: LayoutKind) -> bool {
    kind == LayoutKind::Grid
}

/// Terminal columns for a CSS length, at 16px per rem and 8px per column.
///
/// ```rust
/// use storefront_render::layout::length_to_columns;
///
/// assert_eq!(length_to_columns("16rem"), 32);
/// assert_eq!(length_to_columns("0"), 0);
/// ```
pub fn length_to_columns(length: &str) -> usize {
    let length = length.trim();
    let (number, px_per_unit) = if let Some(n) = length.strip_suffix("rem") {
        (n, 16.0)
    } else if let Some(n) = length.strip_suffix("px") {
        (n, 1.0)
    } else {
        (length, 1.0)
    };
    number
        .trim()
        .parse::<f64>()
        .map(|v| (v * px_per_unit / 8.0).max(0.0).round() as usize)
        .unwrap_or(0)
}

/// Horizontal card padding from a spacing class like `p-6`: one column per
/// four spacing units, at least one.
pub fn card_padding(spacing: &str) -> usize {
    spacing
        .rsplit('-')
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .map(|n| (n / 4).max(1))
        .unwrap_or(1)
}

/// Rounded corners for radii of 0.75rem and up.
pub fn rounded_corners(radius: &str) -> bool {
    radius
        .trim()
        .strip_suffix("rem")
        .and_then(|n| n.parse::<f64>().ok())
        .is_some_and(|v| v >= 0.75)
}

/// Everything templates and the composer need to know about the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrangement {
    pub kind: LayoutKind,
    pub chrome: Chrome,
    pub grid_pattern: bool,
    /// Full output width.
    pub width: usize,
    /// Sidebar width in columns, 0 without a sidebar.
    pub sidebar_width: usize,
    /// Width left for the page body.
    pub content_width: usize,
    pub card_padding: usize,
    pub rounded: bool,
    /// Fitted column count per region, keyed by [`Region::as_str`].
    pub columns: BTreeMap<&'static str, usize>,
}

impl Arrangement {
    pub fn new(record: &ThemeRecord, width: usize) -> Self {
        let kind = record.layout.kind;
        let chrome = Chrome::for_layout(kind);
        let sidebar_width = match chrome {
            Chrome::Sidebar => length_to_columns(record.layout.sidebar_width),
            Chrome::TopNav => 0,
        };
        let content_width = if sidebar_width > 0 {
            width.saturating_sub(sidebar_width + SIDEBAR_GAP)
        } else {
            width
        };

        let columns = Region::ALL
            .into_iter()
            .map(|region| {
                let n = fit_columns(max_columns(kind, region), content_width);
                (region.as_str(), n)
            })
            .collect();

        Self {
            kind,
            chrome,
            grid_pattern: shows_grid_pattern(kind),
            width,
            sidebar_width,
            content_width,
            card_padding: card_padding(record.spacing.card),
            rounded: rounded_corners(record.border_radius),
            columns,
        }
    }

    /// Columns `region` gets at this width.
    pub fn columns_for(&self, region: Region) -> usize {
        self.columns.get(region.as_str()).copied().unwrap_or(1)
    }
}

/// Draws a border around `lines`, padding each to `width` outer columns.
pub fn boxed(lines: &[String], width: usize, padding: usize, rounded: bool) -> Vec<String> {
    let (tl, tr, bl, br) = if rounded {
        ('╭', '╮', '╰', '╯')
    } else {
        ('┌', '┐', '└', '┘')
    };
    let inner = width.saturating_sub(2 + 2 * padding);
    let rule = "─".repeat(width.saturating_sub(2));
    let pad = " ".repeat(padding);

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("[border]{}{}{}[/border]", tl, rule, tr));
    for line in lines {
        // Overlong lines lose their styling rather than break the border.
        let fitted = if visible_width(line) > inner {
            truncate_to_width(&strip_tags(line), inner)
        } else {
            line.clone()
        };
        out.push(format!(
            "[border]│[/border]{}{}{}[border]│[/border]",
            pad,
            pad_to_width(&fitted, inner),
            pad
        ));
    }
    out.push(format!("[border]{}{}{}[/border]", bl, rule, br));
    out
}

/// Inner text width of a box drawn by [`boxed`].
pub fn boxed_inner_width(width: usize, padding: usize) -> usize {
    width.saturating_sub(2 + 2 * padding)
}

/// Places blocks side by side, each padded to its width.
pub fn join_columns(blocks: &[Vec<String>], widths: &[usize], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let spacer = " ".repeat(gap);

    (0..height)
        .map(|row| {
            let cells: Vec<String> = blocks
                .iter()
                .zip(widths)
                .map(|(block, width)| {
                    let line = block.get(row).map(String::as_str).unwrap_or("");
                    pad_to_width(line, *width)
                })
                .collect();
            cells.join(&spacer).trim_end().to_string()
        })
        .collect()
}

/// Lays out equally wide cells in rows of `columns`, with a blank line
/// between rows.
pub fn grid(cells: &[Vec<String>], columns: usize, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for (i, row) in cells.chunks(columns.max(1)).enumerate() {
        if i > 0 {
            out.push(String::new());
        }
        let widths = vec![width; row.len()];
        out.extend(join_columns(row, &widths, GAP));
    }
    out
}

/// Boxes card contents and lays them out in rows of `columns`. Cards in
/// the same row are stretched to the tallest one.
pub fn card_grid(
    contents: Vec<Vec<String>>,
    columns: usize,
    available: usize,
    padding: usize,
    rounded: bool,
) -> Vec<String> {
    let columns = columns.max(1);
    let width = cell_width(columns, available);
    let mut cards = Vec::with_capacity(contents.len());

    for row in contents.chunks(columns) {
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for content in row {
            let mut lines = content.clone();
            lines.resize(height, String::new());
            cards.push(boxed(&lines, width, padding, rounded));
        }
    }
    grid(&cards, columns, width)
}

/// Puts the sidebar to the left of the page body, separated by a rule.
pub fn beside(sidebar: &[String], body: &[String], sidebar_width: usize) -> Vec<String> {
    let height = sidebar.len().max(body.len());
    (0..height)
        .map(|row| {
            let side = sidebar.get(row).map(String::as_str).unwrap_or("");
            let main = body.get(row).map(String::as_str).unwrap_or("");
            let line = format!(
                "{} [border]│[/border] {}",
                pad_to_width(side, sidebar_width),
                main
            );
            line.trim_end().to_string()
        })
        .collect()
}

/// One row of the grid-pattern backdrop.
pub fn pattern_rule(width: usize) -> String {
    let cell = "┼───";
    let mut rule: String = cell.chars().cycle().take(width).collect();
    if width > 0 {
        rule.pop();
        rule.push('┼');
    }
    format!("[pattern]{}[/pattern]", rule)
}
