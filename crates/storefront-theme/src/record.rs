//! The theme record: one complete, immutable bundle of visual configuration.
//!
//! Every record carries every field. Consumers that need to walk a category
//! generically (the [`apply`](crate::apply) projection, the palette-to-style
//! bridge in the renderer) use the `slots()` accessors, which yield
//! `(slot name, value)` pairs with camelCase slot names.

use serde::Serialize;

use crate::id::{LayoutKind, ThemeId};

/// A full theme definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub id: ThemeId,
    /// Display name shown in the theme selector.
    pub name: &'static str,
    /// One-line selector description.
    pub tagline: &'static str,
    pub colors: Palette,
    pub fonts: Fonts,
    pub spacing: Spacing,
    pub layout: Layout,
    pub border_radius: &'static str,
    pub animation: Animation,
}

/// Ten named color slots. Values are HSL triples (`"262.1 83.3% 57.8%"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub card: &'static str,
    pub card_foreground: &'static str,
    pub muted: &'static str,
    pub muted_foreground: &'static str,
    pub border: &'static str,
}

impl Palette {
    /// Slot names in declaration order.
    pub const SLOT_NAMES: [&'static str; 10] = [
        "primary",
        "secondary",
        "accent",
        "background",
        "foreground",
        "card",
        "cardForeground",
        "muted",
        "mutedForeground",
        "border",
    ];

    pub fn slots(&self) -> [(&'static str, &'static str); 10] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("cardForeground", self.card_foreground),
            ("muted", self.muted),
            ("mutedForeground", self.muted_foreground),
            ("border", self.border),
        ]
    }

    /// Looks up a slot by its camelCase name.
    pub fn get(&self, slot: &str) -> Option<&'static str> {
        self.slots()
            .into_iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fonts {
    pub body: &'static str,
    pub heading: &'static str,
}

impl Fonts {
    pub fn slots(&self) -> [(&'static str, &'static str); 2] {
        [("body", self.body), ("heading", self.heading)]
    }
}

/// Layout-class strings for the three spacing scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub container: &'static str,
    pub section: &'static str,
    pub card: &'static str,
}

impl Spacing {
    pub fn slots(&self) -> [(&'static str, &'static str); 3] {
        [
            ("container", self.container),
            ("section", self.section),
            ("card", self.card),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    pub header_height: &'static str,
    pub sidebar_width: &'static str,
}

impl Layout {
    /// Dimensional slots only; the layout kind is not a style variable.
    pub fn slots(&self) -> [(&'static str, &'static str); 2] {
        [
            ("headerHeight", self.header_height),
            ("sidebarWidth", self.sidebar_width),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animation {
    pub duration: &'static str,
    pub easing: &'static str,
}

impl Animation {
    pub fn slots(&self) -> [(&'static str, &'static str); 2] {
        [("duration", self.duration), ("easing", self.easing)]
    }
}

#[cfg(test)]
mod tests {
    use crate::registry;

    #[test]
    fn test_palette_slot_names_match_slots() {
        let record = registry::lookup(crate::ThemeId::Minimalist);
        let names: Vec<_> = record.colors.slots().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, super::Palette::SLOT_NAMES);
    }

    #[test]
    fn test_palette_get() {
        let record = registry::lookup(crate::ThemeId::DarkSidebar);
        assert_eq!(record.colors.get("mutedForeground"), Some("215 20.2% 65.1%"));
        assert_eq!(record.colors.get("muted-foreground"), None);
    }
}
