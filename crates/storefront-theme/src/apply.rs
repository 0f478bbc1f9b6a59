//! Projection of a theme record onto the root variable namespace.
//!
//! [`apply`] writes every slot of a [`ThemeRecord`] as a custom property on a
//! [`StyleTarget`] and replaces the target's root class with `theme-<id>`.
//! Variable names are derived from slot names: camelCase becomes hyphenated
//! (`mutedForeground` -> `--muted-foreground`), and non-color categories get
//! a category prefix:
//!
//! | Category | Variables |
//! |----------|-----------|
//! | colors | `--primary` ... `--muted-foreground`, `--border` |
//! | fonts | `--font-body`, `--font-heading` |
//! | spacing | `--spacing-container`, `--spacing-section`, `--spacing-card` |
//! | radius | `--radius` |
//! | animation | `--animation-duration`, `--animation-easing` |
//! | layout | `--header-height`, `--sidebar-width` |
//!
//! The name set is the same for every theme; only values differ.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing::debug;

use crate::record::ThemeRecord;

/// A sink for projected theme values.
///
/// [`RootStyle`] is the in-process implementation; anything that owns a
/// global style namespace (a document root, a generated stylesheet) can
/// implement this to receive the same writes.
pub trait StyleTarget {
    /// Sets a custom property. `name` includes the leading `--`.
    fn set_property(&mut self, name: &str, value: &str);

    /// Replaces the root-level theme class.
    fn set_root_class(&mut self, class: &str);
}

/// Converts a camelCase slot name to its hyphenated variable form.
///
/// ```rust
/// use storefront_theme::css_var_name;
///
/// assert_eq!(css_var_name("mutedForeground"), "muted-foreground");
/// assert_eq!(css_var_name("primary"), "primary");
/// ```
pub fn css_var_name(slot: &str) -> String {
    let mut out = String::with_capacity(slot.len() + 4);
    for c in slot.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Every `(variable, value)` pair that [`apply`] writes for `record`, in
/// category order.
pub fn variables(record: &ThemeRecord) -> Vec<(String, &'static str)> {
    let mut vars = Vec::with_capacity(20);

    for (slot, value) in record.colors.slots() {
        vars.push((format!("--{}", css_var_name(slot)), value));
    }
    for (slot, value) in record.fonts.slots() {
        vars.push((format!("--font-{}", css_var_name(slot)), value));
    }
    for (slot, value) in record.spacing.slots() {
        vars.push((format!("--spacing-{}", css_var_name(slot)), value));
    }
    vars.push(("--radius".to_string(), record.border_radius));
    for (slot, value) in record.animation.slots() {
        vars.push((format!("--animation-{}", css_var_name(slot)), value));
    }
    for (slot, value) in record.layout.slots() {
        vars.push((format!("--{}", css_var_name(slot)), value));
    }

    vars
}

/// Writes `record` into `target`.
pub fn apply<T: StyleTarget + ?Sized>(record: &ThemeRecord, target: &mut T) {
    let vars = variables(record);
    for (name, value) in &vars {
        target.set_property(name, value);
    }
    target.set_root_class(&record.id.root_class());
    debug!(theme = %record.id, variables = vars.len(), "applied theme");
}

/// The root variable namespace: custom properties plus one theme class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStyle {
    properties: BTreeMap<String, String>,
    class: Option<String>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a property by its full name (`"--primary"`).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// The current root class, if a theme was applied.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// All properties, sorted by name.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Renders the namespace as a stylesheet fragment.
    ///
    /// ```rust
    /// use storefront_theme::{apply, registry, RootStyle, ThemeId};
    ///
    /// let mut root = RootStyle::new();
    /// apply(registry::lookup(ThemeId::Minimalist), &mut root);
    /// let css = root.to_css();
    /// assert!(css.starts_with(":root {"));
    /// assert!(css.contains("  --radius: 0.5rem;"));
    /// assert!(css.contains("body.theme-minimalist"));
    /// ```
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push_str("}\n");
        if let Some(class) = &self.class {
            let _ = writeln!(css, "/* active theme */\nbody.{} {{}}", class);
        }
        css
    }
}

impl StyleTarget for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_root_class(&mut self, class: &str) {
        self.class = Some(class.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{lookup, records};
    use crate::ThemeId;
    use proptest::prelude::*;

    #[test]
    fn test_css_var_name_examples() {
        assert_eq!(css_var_name("cardForeground"), "card-foreground");
        assert_eq!(css_var_name("headerHeight"), "header-height");
        assert_eq!(css_var_name("border"), "border");
    }

    #[test]
    fn test_apply_round_trip_every_theme() {
        for record in records() {
            let mut root = RootStyle::new();
            apply(record, &mut root);

            assert_eq!(root.get("--primary"), Some(record.colors.primary));
            assert_eq!(root.get("--card-foreground"), Some(record.colors.card_foreground));
            assert_eq!(
                root.get("--muted-foreground"),
                Some(record.colors.muted_foreground)
            );
            assert_eq!(root.get("--font-body"), Some(record.fonts.body));
            assert_eq!(root.get("--font-heading"), Some(record.fonts.heading));
            assert_eq!(root.get("--spacing-card"), Some(record.spacing.card));
            assert_eq!(root.get("--radius"), Some(record.border_radius));
            assert_eq!(
                root.get("--animation-duration"),
                Some(record.animation.duration)
            );
            assert_eq!(root.get("--animation-easing"), Some(record.animation.easing));
            assert_eq!(root.get("--header-height"), Some(record.layout.header_height));
            assert_eq!(root.get("--sidebar-width"), Some(record.layout.sidebar_width));

            for (name, value) in variables(record) {
                assert_eq!(root.get(&name), Some(value), "{} dropped", name);
            }
        }
    }

    #[test]
    fn test_variable_names_identical_across_themes() {
        let names = |id| -> Vec<String> {
            variables(lookup(id)).into_iter().map(|(n, _)| n).collect()
        };
        let reference = names(ThemeId::Minimalist);
        assert_eq!(reference.len(), 20);
        assert_eq!(names(ThemeId::DarkSidebar), reference);
        assert_eq!(names(ThemeId::ColorfulGrid), reference);
    }

    #[test]
    fn test_apply_replaces_class_and_values() {
        let mut root = RootStyle::new();
        apply(lookup(ThemeId::DarkSidebar), &mut root);
        assert_eq!(root.class(), Some("theme-dark-sidebar"));

        apply(lookup(ThemeId::ColorfulGrid), &mut root);
        assert_eq!(root.class(), Some("theme-colorful-grid"));
        assert_eq!(root.get("--primary"), Some("262.1 83.3% 57.8%"));
        assert_eq!(root.len(), 20);
    }

    #[test]
    fn test_to_css_lists_every_property() {
        let mut root = RootStyle::new();
        apply(lookup(ThemeId::ColorfulGrid), &mut root);
        let css = root.to_css();
        assert_eq!(css.matches(";\n").count(), 20);
        assert!(css.contains("--animation-easing: cubic-bezier(0.4, 0, 0.2, 1);"));
    }

    proptest! {
        #[test]
        fn prop_css_var_name_is_lowercase_and_hyphen_per_capital(slot in "[a-z][a-zA-Z]{0,20}") {
            let name = css_var_name(&slot);
            let capitals = slot.chars().filter(|c| c.is_ascii_uppercase()).count();
            prop_assert!(!name.chars().any(|c| c.is_ascii_uppercase()));
            prop_assert_eq!(name.matches('-').count(), capitals);
            prop_assert_eq!(name.len(), slot.len() + capitals);
        }
    }
}
