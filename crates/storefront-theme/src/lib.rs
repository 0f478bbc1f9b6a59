//! # Storefront Theme - Registry, Store and Root Variables
//!
//! `storefront-theme` holds everything the storefront knows about visual
//! themes, independent of how pages are drawn.
//!
//! ## Core Concepts
//!
//! - [`ThemeId`]: closed set of theme keys (`minimalist`, `dark-sidebar`, `colorful-grid`)
//! - [`ThemeRecord`]: one immutable bundle of palette, fonts, spacing, layout and animation
//! - [`registry`]: compiled-in `ThemeId -> &'static ThemeRecord` table
//! - [`apply`]: projects a record onto a [`StyleTarget`] as `--name` variables
//! - [`ThemeStore`]: the active theme, with persistence and change listeners
//! - [`ThemeStorage`]: durable key/value boundary ([`FileStorage`], [`MemoryStorage`])
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_theme::{LayoutKind, MemoryStorage, ThemeId, ThemeStore};
//!
//! let mut store = ThemeStore::new(MemoryStorage::new());
//! store.set_theme(ThemeId::ColorfulGrid);
//!
//! assert_eq!(store.root().class(), Some("theme-colorful-grid"));
//! assert_eq!(store.root().get("--primary"), Some("262.1 83.3% 57.8%"));
//! assert_eq!(store.record().layout.kind, LayoutKind::Grid);
//! ```

mod apply;
mod error;
mod id;
mod record;
pub mod registry;
mod storage;
mod store;

pub use apply::{apply, css_var_name, variables, RootStyle, StyleTarget};
pub use error::{StorageError, UnknownThemeError};
pub use id::{LayoutKind, ThemeId};
pub use record::{Animation, Fonts, Layout, Palette, Spacing, ThemeRecord};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage, PREFERENCES_FILE, THEME_KEY};
pub use store::{ListenerFn, SubscriptionId, ThemeChange, ThemeStore};
