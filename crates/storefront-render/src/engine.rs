//! MiniJinja environment with the page templates, layout functions and
//! text filters.
//!
//! Templates emit style-tagged text. Besides the stock filters they get:
//!
//! | name | kind | effect |
//! |------|------|--------|
//! | `wrap(width)` | filter | list of word-wrapped lines |
//! | `truncate_to(width)` | filter | cut to `width` columns with `…` |
//! | `pad(width)` | filter | right-pad to `width` columns |
//! | `center_to(width)` | filter | left-pad so the text sits centered in `width` |
//! | `stars` | filter | rating as `★★★★½` with star tags |
//! | `nl` | filter | append a newline |
//! | `grid(template, items, region)` | function | render `template` per item as boxed cards in the region's columns |
//! | `filter_bar(filters, width)` | function | category buttons flowed over lines |
//! | `rule(width)` | function | horizontal border line |
//! | `pattern(width)` | function | one row of the grid backdrop |
//!
//! `grid` reads the `layout` context variable, so it only works inside a
//! page render.
//!
//! Interpolated values are data: the formatter escapes their brackets with
//! [`escape_tags`] so catalog text can never open a style tag. Markup built
//! by the filters and functions above is returned as safe strings and
//! written unchanged. Literal markup assembled inside an expression needs
//! `| safe`.

use std::fmt::Write;

use minijinja::value::Value;
use minijinja::{context, Environment, Error, ErrorKind, Output, State};
use serde::Serialize;
use storefront_catalog::StarBreakdown;

use crate::error::RenderError;
use crate::layout::{boxed_inner_width, card_grid, cell_width, pattern_rule, Region};
use crate::tags::escape_tags;
use crate::util::{center_to_width, pad_to_width, truncate_to_width, visible_width, wrap_to_width};

/// Template names and sources, compiled into the binary.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("header.jinja", include_str!("../templates/header.jinja")),
    ("sidebar.jinja", include_str!("../templates/sidebar.jinja")),
    ("home.jinja", include_str!("../templates/home.jinja")),
    ("product_card.jinja", include_str!("../templates/product_card.jinja")),
    ("product.jinja", include_str!("../templates/product.jinja")),
    ("about.jinja", include_str!("../templates/about.jinja")),
    ("stat_card.jinja", include_str!("../templates/stat_card.jinja")),
    ("blurb_card.jinja", include_str!("../templates/blurb_card.jinja")),
    ("contact.jinja", include_str!("../templates/contact.jinja")),
    ("contact_card.jinja", include_str!("../templates/contact_card.jinja")),
    ("themes.jinja", include_str!("../templates/themes.jinja")),
    ("theme.jinja", include_str!("../templates/theme.jinja")),
];

pub struct PageEngine {
    env: Environment<'static>,
}

impl PageEngine {
    /// Builds the environment and compiles every template.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_formatter(format_value);
        register_filters(&mut env);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(ctx)?)
    }

    /// Renders a one-off template string against this environment.
    pub fn render_str<S: Serialize>(&self, source: &str, ctx: S) -> Result<String, RenderError> {
        Ok(self.env.render_str(source, ctx)?)
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidOperation, msg.into())
}

fn layout_number(layout: &Value, key: &str) -> Result<usize, Error> {
    layout
        .get_attr(key)?
        .as_i64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| invalid(format!("layout.{} is not a column count", key)))
}

/// Writes `{{ ... }}` output, escaping brackets in anything not marked safe.
fn format_value(
    out: &mut Output<'_>,
    _state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    out.write_str(&text_of(value))
        .map_err(|_| Error::from(ErrorKind::WriteFailure))
}

/// A value as template text: safe strings are markup, anything else is data.
fn text_of(value: &Value) -> String {
    if value.is_safe() {
        value.to_string()
    } else {
        escape_tags(&value.to_string())
    }
}

fn markup(text: String) -> Value {
    Value::from_safe_string(text)
}

/// Registers the storefront filters and functions.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("nl", |value: Value| -> Value { markup(format!("{}\n", text_of(&value))) });

    env.add_filter("wrap", |value: Value, width: usize| -> Vec<Value> {
        wrap_to_width(&text_of(&value), width)
            .into_iter()
            .map(markup)
            .collect()
    });

    env.add_filter("truncate_to", |value: Value, width: usize| -> Value {
        markup(truncate_to_width(&text_of(&value), width))
    });

    env.add_filter("pad", |value: Value, width: usize| -> Value {
        markup(pad_to_width(&text_of(&value), width))
    });

    env.add_filter("center_to", |value: Value, width: usize| -> Value {
        markup(
            center_to_width(&text_of(&value), width)
                .trim_end()
                .to_string(),
        )
    });

    env.add_filter("stars", |rate: f64| -> Value { markup(stars(rate)) });

    env.add_function("rule", |width: usize| -> Value {
        markup(format!("[border]{}[/border]", "─".repeat(width)))
    });

    env.add_function("pattern", |width: usize| -> Value { markup(pattern_rule(width)) });

    env.add_function("grid", grid);
    env.add_function("filter_bar", filter_bar);
}

/// Rating as star glyphs: full stars, an optional half, then empty ones.
///
/// ```rust
/// use storefront_render::engine::stars;
///
/// assert_eq!(stars(4.5), "[star]★★★★½[/star]");
/// assert_eq!(stars(3.0), "[star]★★★[/star][star-empty]☆☆[/star-empty]");
/// ```
pub fn stars(rate: f64) -> String {
    let breakdown = StarBreakdown::from_rate(rate);
    let mut lit = "★".repeat(breakdown.full as usize);
    if breakdown.half {
        lit.push('½');
    }

    let mut out = String::new();
    if !lit.is_empty() {
        out.push_str(&format!("[star]{}[/star]", lit));
    }
    if breakdown.empty > 0 {
        out.push_str(&format!(
            "[star-empty]{}[/star-empty]",
            "☆".repeat(breakdown.empty as usize)
        ));
    }
    out
}

/// `grid(template, items, region)`: renders `template` once per item with
/// `item`, `width` (inner card width) and `layout` in context, boxes each
/// result and arranges the cards in the region's column count.
fn grid(state: &State, template: &str, items: Value, region: &str) -> Result<Value, Error> {
    let region: Region = region.parse().map_err(invalid)?;
    let layout = state
        .lookup("layout")
        .ok_or_else(|| invalid("grid() needs `layout` in the context"))?;

    let columns = layout_number(&layout.get_attr("columns")?, region.as_str())?;
    let available = layout_number(&layout, "content_width")?;
    let padding = layout_number(&layout, "card_padding")?;
    let rounded = layout.get_attr("rounded")?.is_true();
    let inner = boxed_inner_width(cell_width(columns, available), padding);

    let tmpl = state.env().get_template(template)?;
    let mut contents = Vec::new();
    for item in items.try_iter()? {
        let text = tmpl.render(context! {
            item => item,
            width => inner,
            layout => layout.clone(),
        })?;
        contents.push(text.lines().map(str::to_string).collect());
    }

    Ok(markup(
        card_grid(contents, columns, available, padding, rounded).join("\n"),
    ))
}

/// `filter_bar(filters, width)`: one button per category count, the active
/// one highlighted, flowed onto as many lines as `width` needs.
fn filter_bar(filters: Value, width: usize) -> Result<Value, Error> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for filter in filters.try_iter()? {
        let label = text_of(&filter.get_attr("label")?);
        let count = filter.get_attr("count")?;
        let button = if filter.get_attr("active")?.is_true() {
            format!("[nav-active]{} ({})[/nav-active]", label, count)
        } else {
            format!("[badge] {} ({}) [/badge]", label, count)
        };

        if line.is_empty() {
            line = button;
        } else if visible_width(&line) + 2 + visible_width(&button) <= width {
            line.push_str("  ");
            line.push_str(&button);
        } else {
            lines.push(std::mem::take(&mut line));
            line = button;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    Ok(markup(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::KNOWN_TAGS;
    use crate::tags::{tag_names, unescape_tags, unknown_tags};

    fn engine() -> PageEngine {
        PageEngine::new().expect("templates compile")
    }

    #[test]
    fn test_all_templates_compile() {
        let engine = engine();
        for (name, _) in TEMPLATES {
            assert!(engine.has_template(name), "{} missing", name);
        }
    }

    #[test]
    fn test_templates_use_only_known_tags() {
        for (name, source) in TEMPLATES {
            let unknown = unknown_tags(source, KNOWN_TAGS);
            assert!(unknown.is_empty(), "{} uses unknown tags {:?}", name, unknown);
        }
    }

    #[test]
    fn test_wrap_and_truncate_filters() {
        let out = engine()
            .render_str(
                "{% for l in text | wrap(10) %}<{{ l }}>{% endfor %}|{{ text | truncate_to(8) }}",
                context! { text => "alpha beta gamma" },
            )
            .unwrap();
        assert_eq!(out, "<alpha beta><gamma>|alpha b…");
    }

    #[test]
    fn test_pad_and_center_filters() {
        let out = engine()
            .render_str("{{ 'ab' | pad(4) }}|{{ 'ab' | center_to(6) }}|", context! {})
            .unwrap();
        assert_eq!(out, "ab  |  ab|");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(0.0), "[star-empty]☆☆☆☆☆[/star-empty]");
        assert_eq!(stars(4.7), "[star]★★★★½[/star]");
        assert_eq!(stars(5.0), "[star]★★★★★[/star]");
    }

    #[test]
    fn test_stars_filter_accepts_integers() {
        let out = engine()
            .render_str("{{ rate | stars }}", context! { rate => 4 })
            .unwrap();
        assert_eq!(out, "[star]★★★★[/star][star-empty]☆[/star-empty]");
    }

    #[test]
    fn test_grid_function_boxes_items() {
        let layout = context! {
            content_width => 50,
            card_padding => 1,
            rounded => false,
            columns => context! { featured => 2 },
        };
        let items = vec![
            context! { title => "One", value => 1 },
            context! { title => "Two", value => 2 },
            context! { title => "Three", value => 3 },
        ];
        let out = engine()
            .render_str(
                "{{ grid('blurb_card.jinja', items, 'featured') }}",
                context! { layout => layout, items => items },
            )
            .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("[border]┌"));
        assert_eq!(lines[0].matches('┌').count(), 2);
        assert!(out.contains("Three"));
        for line in lines.iter().filter(|l| !l.is_empty()) {
            assert!(visible_width(line) <= 50, "{:?} too wide", line);
        }
    }

    #[test]
    fn test_data_brackets_are_escaped() {
        let out = engine()
            .render_str(
                "[title]{{ name }}[/title]|{{ '[muted]x[/muted]' | safe }}",
                context! { name => "Bolt [price]M8[/price] pack" },
            )
            .unwrap();
        assert_eq!(tag_names(&out), vec!["title", "muted"]);
        assert!(unescape_tags(&out).contains("[title]Bolt [price]M8[/price] pack[/title]"));
    }

    #[test]
    fn test_escaped_data_pads_to_its_real_width() {
        let out = engine()
            .render_str("{{ code | pad(6) }}|", context! { code => "[a]" })
            .unwrap();
        assert_eq!(unescape_tags(&out), "[a]   |");
    }

    #[test]
    fn test_filter_bar_escapes_labels() {
        let filters = vec![context! { label => "[x]", count => 1, active => false }];
        let bar = filter_bar(Value::from_serialize(&filters), 80)
            .unwrap()
            .to_string();
        assert_eq!(tag_names(&bar), vec!["badge"]);
        assert!(unescape_tags(&bar).contains("[x] (1)"));
    }

    #[test]
    fn test_grid_rejects_unknown_region() {
        let err = engine()
            .render_str(
                "{{ grid('blurb_card.jinja', [], 'sideways') }}",
                context! { layout => context! { content_width => 10 } },
            )
            .unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_filter_bar_flows() {
        let filters = vec![
            context! { label => "All Products", count => 8, active => true },
            context! { label => "electronics", count => 2, active => false },
            context! { label => "clothing", count => 2, active => false },
        ];
        let wide = filter_bar(Value::from_serialize(&filters), 80)
            .unwrap()
            .to_string();
        assert_eq!(wide.lines().count(), 1);
        assert!(wide.starts_with("[nav-active]All Products (8)[/nav-active]"));
        assert!(wide.contains("[badge] electronics (2) [/badge]"));

        let narrow = filter_bar(Value::from_serialize(&filters), 20)
            .unwrap()
            .to_string();
        assert_eq!(narrow.lines().count(), 3);
    }
}
