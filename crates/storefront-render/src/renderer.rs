//! The themed page renderer.
//!
//! [`Renderer`] follows the active theme: it is created for one record and
//! re-resolves its styles and arrangement whenever [`Renderer::set_theme`]
//! is called, typically from a theme store listener. Rendering a page runs
//! the page template, wraps it in the chrome the layout asks for, and then
//! processes style tags once over the whole page for the output mode.

use serde::Serialize;
use storefront_theme::{ThemeChange, ThemeRecord};
use tracing::debug;

use crate::engine::PageEngine;
use crate::error::RenderError;
use crate::layout::{beside, pattern_rule, Arrangement, Chrome};
use crate::output::OutputMode;
use crate::palette::styles_for;
use crate::tags::{unescape_tags, TagParser};
use crate::views::{nav_items, NavItem, Page, PageView, ThemeSummary, BRAND};

/// Width used when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 100;

/// Narrower requests are widened to this.
pub const MIN_WIDTH: usize = 60;

/// Wider requests are narrowed to this.
pub const MAX_WIDTH: usize = 500;

/// Everything a page template can see. Also the JSON output document.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub brand: &'static str,
    pub page: Page,
    pub theme: ThemeSummary,
    pub nav: Vec<NavItem>,
    pub layout: &'a Arrangement,
    pub view: &'a PageView,
}

pub struct Renderer {
    engine: PageEngine,
    mode: OutputMode,
    width: usize,
    record: &'static ThemeRecord,
    arrangement: Arrangement,
    parser: TagParser,
}

impl Renderer {
    pub fn new(
        record: &'static ThemeRecord,
        mode: OutputMode,
        width: usize,
    ) -> Result<Self, RenderError> {
        let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        Ok(Self {
            engine: PageEngine::new()?,
            mode,
            width,
            record,
            arrangement: Arrangement::new(record, width),
            parser: Self::parser_for(record, mode),
        })
    }

    fn parser_for(record: &ThemeRecord, mode: OutputMode) -> TagParser {
        let force = mode == OutputMode::Term;
        TagParser::new(styles_for(record, force), mode.tag_transform())
    }

    /// Switches to `record`: new styles, new arrangement.
    pub fn set_theme(&mut self, record: &'static ThemeRecord) {
        debug!(theme = %record.id, layout = %record.layout.kind, "renderer following theme");
        self.record = record;
        self.arrangement = Arrangement::new(record, self.width);
        self.parser = Self::parser_for(record, self.mode);
    }

    /// Store listener entry point.
    pub fn on_theme_change(&mut self, change: &ThemeChange) {
        self.set_theme(change.record);
    }

    pub fn record(&self) -> &'static ThemeRecord {
        self.record
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    pub fn context<'a>(&'a self, view: &'a PageView) -> PageContext<'a> {
        let page = view.page();
        PageContext {
            brand: BRAND,
            page,
            theme: ThemeSummary::new(self.record, true),
            nav: nav_items(page),
            layout: &self.arrangement,
            view,
        }
    }

    /// Renders `view` for the output mode: a styled (or plain) page, or
    /// the page context as pretty JSON.
    pub fn render(&self, view: &PageView) -> Result<String, RenderError> {
        let ctx = self.context(view);
        if self.mode.is_structured() {
            return Ok(serde_json::to_string_pretty(&ctx)?);
        }

        let header = self.engine.render("header.jinja", &ctx)?;
        let body = self.engine.render(view.template(), &ctx)?;
        let body: Vec<String> = body.lines().map(str::to_string).collect();

        let mut lines: Vec<String> = header.lines().map(str::to_string).collect();
        lines.push(String::new());
        match self.arrangement.chrome {
            Chrome::Sidebar => {
                let sidebar = self.engine.render("sidebar.jinja", &ctx)?;
                let sidebar: Vec<String> = sidebar.lines().map(str::to_string).collect();
                lines.extend(beside(&sidebar, &body, self.arrangement.sidebar_width));
            }
            Chrome::TopNav => lines.extend(body),
        }
        if self.arrangement.grid_pattern {
            lines.push(String::new());
            lines.push(pattern_rule(self.width));
        }

        let mut page = unescape_tags(&self.parser.process(&lines.join("\n")));
        page.push('\n');
        Ok(page)
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("mode", &self.mode)
            .field("width", &self.width)
            .field("theme", &self.record.id)
            .field("arrangement", &self.arrangement)
            .finish()
    }
}
