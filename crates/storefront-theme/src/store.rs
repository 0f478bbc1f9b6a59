//! The active-theme store.
//!
//! [`ThemeStore`] owns the only mutable theme state in the application: the
//! active [`ThemeId`], the [`RootStyle`] it was applied to, and the list of
//! change listeners. It is an explicit value rather than a global, so tests can
//! run any number of independent stores side by side.
//!
//! # Lifecycle
//!
//! ```text
//! new(storage)  ->  read "app-theme"  ->  validate or fall back  ->  apply once
//! set_theme(id) ->  update  ->  persist (best-effort)  ->  apply  ->  notify
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use storefront_theme::{MemoryStorage, ThemeId, ThemeStore};
//!
//! let storage = MemoryStorage::new();
//! let mut store = ThemeStore::new(storage.clone());
//! assert_eq!(store.current(), ThemeId::Minimalist);
//!
//! let seen = Rc::new(Cell::new(0));
//! let counter = seen.clone();
//! store.subscribe(move |_change| counter.set(counter.get() + 1));
//!
//! store.set_theme(ThemeId::ColorfulGrid);
//! assert_eq!(store.root().get("--primary"), Some("262.1 83.3% 57.8%"));
//! assert_eq!(seen.get(), 1);
//!
//! // A fresh store over the same storage picks the selection back up.
//! let restarted = ThemeStore::new(storage);
//! assert_eq!(restarted.current(), ThemeId::ColorfulGrid);
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::apply::{apply, RootStyle};
use crate::error::UnknownThemeError;
use crate::id::ThemeId;
use crate::record::ThemeRecord;
use crate::registry;
use crate::storage::{ThemeStorage, THEME_KEY};

/// Payload delivered to listeners after every [`ThemeStore::set_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: ThemeId,
    pub current: ThemeId,
    /// Record of `current`.
    pub record: &'static ThemeRecord,
}

impl ThemeChange {
    /// True when the setter was called with the already-active theme.
    pub fn is_reselect(&self) -> bool {
        self.previous == self.current
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Type alias for theme change listeners.
pub type ListenerFn = Rc<dyn Fn(&ThemeChange)>;

/// Session-scoped holder of the active theme.
pub struct ThemeStore<S: ThemeStorage> {
    storage: S,
    current: ThemeId,
    root: RootStyle,
    listeners: Vec<(SubscriptionId, ListenerFn)>,
    next_subscription: u64,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Initializes a store from `storage`.
    ///
    /// A missing or unrecognized persisted value resolves to
    /// [`ThemeId::DEFAULT`]; the rejected value is logged and nothing is
    /// written back. The resolved record is applied exactly once.
    pub fn new(storage: S) -> Self {
        let current = match storage.get(THEME_KEY) {
            Some(saved) => match saved.parse::<ThemeId>() {
                Ok(id) => {
                    debug!(theme = %id, "restored persisted theme");
                    id
                }
                Err(e) => {
                    warn!(value = %e.name, "discarding unrecognized persisted theme");
                    ThemeId::DEFAULT
                }
            },
            None => {
                debug!("no persisted theme, using default");
                ThemeId::DEFAULT
            }
        };

        let mut root = RootStyle::new();
        apply(registry::lookup(current), &mut root);

        Self {
            storage,
            current,
            root,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The active theme identifier.
    pub fn current(&self) -> ThemeId {
        self.current
    }

    /// The active theme record.
    pub fn record(&self) -> &'static ThemeRecord {
        registry::lookup(self.current)
    }

    /// The applied root namespace.
    pub fn root(&self) -> &RootStyle {
        &self.root
    }

    /// Every selectable theme, in selector order.
    pub fn available(&self) -> &'static [ThemeId] {
        registry::identifiers()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Switches the active theme.
    ///
    /// Persistence is best-effort: a failed write is logged and the in-memory
    /// switch stands. Listeners run in subscription order, once per call, even
    /// when `id` is already active.
    pub fn set_theme(&mut self, id: ThemeId) {
        let previous = self.current;
        self.current = id;

        if let Err(e) = self.storage.set(THEME_KEY, id.as_str()) {
            warn!(theme = %id, error = %e, "failed to persist theme selection");
        }

        let record = registry::lookup(id);
        apply(record, &mut self.root);

        if previous != id {
            info!(from = %previous, to = %id, "switched theme");
        }

        let change = ThemeChange {
            previous,
            current: id,
            record,
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
        debug!(listeners = self.listeners.len(), "notified theme listeners");
    }

    /// Parses `name` and switches to it.
    ///
    /// Invalid names leave the store untouched.
    pub fn set_theme_named(&mut self, name: &str) -> Result<(), UnknownThemeError> {
        let id = name.parse::<ThemeId>()?;
        self.set_theme(id);
        Ok(())
    }

    /// Registers a listener for subsequent changes.
    ///
    /// The listener is not invoked for the current state; read
    /// [`record`](Self::record) for that.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<S: ThemeStorage> fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;

    #[test]
    fn test_new_defaults_to_minimalist() {
        let store = ThemeStore::new(MemoryStorage::new());
        assert_eq!(store.current(), ThemeId::Minimalist);
        assert_eq!(store.root().class(), Some("theme-minimalist"));
        assert_eq!(store.root().len(), 20);
    }

    #[test]
    fn test_new_does_not_write_fallback() {
        let storage = MemoryStorage::with_entry(THEME_KEY, "neon");
        let store = ThemeStore::new(storage.clone());
        assert_eq!(store.current(), ThemeId::Minimalist);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("neon"));
    }

    #[test]
    fn test_set_theme_persists_and_applies() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::new(storage.clone());
        store.set_theme(ThemeId::DarkSidebar);

        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark-sidebar"));
        assert_eq!(store.root().get("--sidebar-width"), Some("16rem"));
        assert_eq!(store.record().name, "Dark Sidebar");
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::new(MemoryStorage::new());

        let first = log.clone();
        store.subscribe(move |c| first.borrow_mut().push(format!("a:{}", c.current)));
        let second = log.clone();
        store.subscribe(move |c| second.borrow_mut().push(format!("b:{}", c.current)));

        store.set_theme(ThemeId::ColorfulGrid);

        assert_eq!(*log.borrow(), vec!["a:colorful-grid", "b:colorful-grid"]);
    }

    #[test]
    fn test_change_carries_previous_and_record() {
        let seen = Rc::new(RefCell::new(None));
        let mut store = ThemeStore::new(MemoryStorage::new());
        let sink = seen.clone();
        store.subscribe(move |c| *sink.borrow_mut() = Some(*c));

        store.set_theme(ThemeId::DarkSidebar);

        let change = seen.borrow().expect("listener ran");
        assert_eq!(change.previous, ThemeId::Minimalist);
        assert_eq!(change.current, ThemeId::DarkSidebar);
        assert_eq!(change.record.id, ThemeId::DarkSidebar);
        assert!(!change.is_reselect());
    }

    #[test]
    fn test_set_theme_named_rejects_without_side_effects() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::new(storage.clone());
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let err = store.set_theme_named("nonexistent").unwrap_err();

        assert_eq!(err.name, "nonexistent");
        assert_eq!(store.current(), ThemeId::Minimalist);
        assert!(storage.is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = ThemeStore::new(MemoryStorage::new());
        let id = store.subscribe(|_| {});
        assert_eq!(store.listener_count(), 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_available_matches_registry() {
        let store = ThemeStore::new(MemoryStorage::new());
        assert_eq!(store.available(), registry::identifiers());
    }
}
