//! # Storefront Render - Themed Terminal Pages
//!
//! Draws storefront pages in the terminal in the look of the active theme.
//! Pages are MiniJinja templates that emit `[tag]text[/tag]` markup; the tag
//! names are fixed (see [`KNOWN_TAGS`]) while the styles behind them come
//! from the theme palette.
//!
//! ## Pipeline
//!
//! 1. Page data is gathered into a serializable [`PageView`]
//! 2. The page template renders inside the chrome picked by the theme
//!    layout (top navigation or sidebar, grid backdrop)
//! 3. Card regions are laid out in the column counts of the layout
//! 4. Style tags are applied, stripped or kept, per [`OutputMode`]
//!
//! In [`OutputMode::Json`] step 2 onwards is skipped and the page context is
//! printed as JSON.
//!
//! ## Following the theme
//!
//! ```rust
//! use storefront_render::{OutputMode, PageView, Renderer, AboutView};
//! use storefront_theme::{registry, ThemeId};
//!
//! let mut renderer = Renderer::new(
//!     registry::lookup(ThemeId::Minimalist),
//!     OutputMode::Text,
//!     100,
//! ).unwrap();
//! renderer.set_theme(registry::lookup(ThemeId::DarkSidebar));
//!
//! let page = renderer.render(&PageView::About(AboutView::default())).unwrap();
//! assert!(page.contains("About Our Story"));
//! ```

mod color;
pub mod engine;
mod error;
pub mod layout;
mod output;
mod palette;
mod renderer;
pub mod tags;
mod util;
pub mod views;

pub use color::{rgb_to_ansi256, Hsl};
pub use engine::PageEngine;
pub use error::RenderError;
pub use layout::{Arrangement, Chrome, Region};
pub use output::OutputMode;
pub use palette::{styles_for, KNOWN_TAGS};
pub use renderer::{PageContext, Renderer, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
pub use util::{strip_tags, truncate_to_width, visible_width};
pub use views::{
    AboutView, ContactView, HomeView, NoticeKind, Page, PageView, ProductDetailView,
    ThemeDetailView, ThemeListView,
};
