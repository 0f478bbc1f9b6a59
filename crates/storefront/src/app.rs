//! The storefront session: one theme store, one renderer following it, one
//! catalog.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use storefront_catalog::{CatalogView, CategoryFilter, MockCatalog, ProductSource};
use storefront_render::{
    AboutView, ContactView, HomeView, NoticeKind, OutputMode, PageView, ProductDetailView,
    RenderError, Renderer, ThemeDetailView, ThemeListView,
};
use storefront_theme::{
    registry, FileStorage, ThemeId, ThemeStorage, ThemeStore, UnknownThemeError,
};
use tracing::{debug, info};

use crate::cli::{Command, ThemeAction};
use crate::config::Settings;
use crate::contact::{self, ContactForm};

pub struct Storefront<S: ThemeStorage> {
    store: ThemeStore<S>,
    renderer: Rc<RefCell<Renderer>>,
    catalog: MockCatalog,
    submit_delay: Duration,
}

impl Storefront<FileStorage> {
    /// Opens the session described by `settings`, with preferences in the
    /// config directory.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let catalog = match &settings.catalog {
            Some(path) => MockCatalog::from_file(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?,
            None => MockCatalog::new(),
        }
        .with_latency(settings.latency);

        debug!(dir = %settings.config_dir.display(), "using config directory");
        let storefront = Storefront::new(
            FileStorage::in_dir(&settings.config_dir),
            catalog,
            settings.output,
            settings.width,
        )?
        .with_submit_delay(settings.submit_delay());
        Ok(storefront)
    }
}

impl<S: ThemeStorage> Storefront<S> {
    /// Initializes the store from `storage` and subscribes a renderer to it.
    pub fn new(
        storage: S,
        catalog: MockCatalog,
        mode: OutputMode,
        width: usize,
    ) -> Result<Self, RenderError> {
        let mut store = ThemeStore::new(storage);
        let renderer = Rc::new(RefCell::new(Renderer::new(store.record(), mode, width)?));
        let follower = Rc::clone(&renderer);
        store.subscribe(move |change| follower.borrow_mut().on_theme_change(change));

        let submit_delay = catalog.latency() * 2;
        Ok(Self {
            store,
            renderer,
            catalog,
            submit_delay,
        })
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn store(&self) -> &ThemeStore<S> {
        &self.store
    }

    pub fn current_theme(&self) -> ThemeId {
        self.store.current()
    }

    fn mode(&self) -> OutputMode {
        self.renderer.borrow().mode()
    }

    /// Switches and persists the theme; the renderer follows.
    pub fn switch_theme(&mut self, name: &str) -> Result<(), UnknownThemeError> {
        self.store.set_theme_named(name)
    }

    fn render(&self, view: &PageView) -> anyhow::Result<String> {
        let out = self
            .renderer
            .borrow()
            .render(view)
            .with_context(|| format!("failed to render {} page", view.page().label()))?;
        Ok(out)
    }

    /// Runs one command and returns what it prints.
    pub async fn run(&mut self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::Home { category, limit } => {
                let filter = category
                    .parse::<CategoryFilter>()
                    .unwrap_or_else(|never| match never {});
                let mut view = CatalogView::new();
                view.set_filter(filter);
                view.load(&self.catalog, limit).await;
                self.render(&PageView::Home(HomeView::from(&view)))
            }
            Command::Product { id } => {
                let product = self
                    .catalog
                    .product(id)
                    .await
                    .with_context(|| format!("could not load product {}", id))?;
                self.render(&PageView::Product(ProductDetailView::from(&product)))
            }
            Command::About => self.render(&PageView::About(AboutView::default())),
            Command::Contact(args) => {
                let view = if args.is_submission() {
                    let form = ContactForm::from(args);
                    let message = contact::submit(&form, self.submit_delay)
                        .await
                        .context("message not sent")?;
                    ContactView::default().with_notice(NoticeKind::Success, message)
                } else {
                    ContactView::default()
                };
                self.render(&PageView::Contact(view))
            }
            Command::Themes => self.render(&PageView::Themes(ThemeListView::new(
                registry::records(),
                self.store.current(),
            ))),
            Command::Theme { action } => self.run_theme(action),
        }
    }

    fn run_theme(&mut self, action: ThemeAction) -> anyhow::Result<String> {
        match action {
            ThemeAction::Set { id } => {
                self.switch_theme(&id)?;
                info!(theme = %self.store.current(), "theme selection saved");
                let record = self.store.record();
                self.render(&PageView::Theme(ThemeDetailView::new(record, true)))
            }
            ThemeAction::Show { id } => {
                let id = match id {
                    Some(name) => name.parse::<ThemeId>()?,
                    None => self.store.current(),
                };
                let active = id == self.store.current();
                self.render(&PageView::Theme(ThemeDetailView::new(
                    registry::lookup(id),
                    active,
                )))
            }
            ThemeAction::Vars => {
                let root = self.store.root();
                if self.mode().is_structured() {
                    let map: BTreeMap<&str, &str> = root.properties().collect();
                    return Ok(format!("{}\n", serde_json::to_string_pretty(&map)?));
                }
                let mut out = String::new();
                if let Some(class) = root.class() {
                    out.push_str(&format!("class: {}\n", class));
                }
                for (name, value) in root.properties() {
                    out.push_str(&format!("{}: {}\n", name, value));
                }
                Ok(out)
            }
            ThemeAction::Css => {
                let root = self.store.root();
                if self.mode().is_structured() {
                    let css = serde_json::json!({
                        "class": root.class(),
                        "css": root.to_css(),
                    });
                    return Ok(format!("{}\n", serde_json::to_string_pretty(&css)?));
                }
                Ok(root.to_css())
            }
        }
    }
}

impl<S: ThemeStorage> std::fmt::Debug for Storefront<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("theme", &self.store.current())
            .field("renderer", &self.renderer.borrow())
            .field("submit_delay", &self.submit_delay)
            .finish()
    }
}
