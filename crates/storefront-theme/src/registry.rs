//! Compiled-in theme table.
//!
//! The registry is constant data: [`lookup`] is total over [`ThemeId`] and
//! hands out `'static` references, so any number of readers can share
//! records without synchronization.

use crate::id::{LayoutKind, ThemeId};
use crate::record::{Animation, Fonts, Layout, Palette, Spacing, ThemeRecord};

static MINIMALIST: ThemeRecord = ThemeRecord {
    id: ThemeId::Minimalist,
    name: "Minimalist",
    tagline: "Clean & minimal design",
    colors: Palette {
        primary: "0 0% 9%",
        secondary: "0 0% 96%",
        accent: "0 0% 15%",
        background: "0 0% 100%",
        foreground: "0 0% 9%",
        card: "0 0% 100%",
        card_foreground: "0 0% 9%",
        muted: "0 0% 96%",
        muted_foreground: "0 0% 45%",
        border: "0 0% 90%",
    },
    fonts: Fonts {
        body: "'Inter', system-ui, sans-serif",
        heading: "'Inter', system-ui, sans-serif",
    },
    spacing: Spacing {
        container: "max-w-6xl mx-auto px-4",
        section: "py-16",
        card: "p-6",
    },
    layout: Layout {
        kind: LayoutKind::Standard,
        header_height: "4rem",
        sidebar_width: "0",
    },
    border_radius: "0.5rem",
    animation: Animation {
        duration: "200ms",
        easing: "ease-out",
    },
};

static DARK_SIDEBAR: ThemeRecord = ThemeRecord {
    id: ThemeId::DarkSidebar,
    name: "Dark Sidebar",
    tagline: "Dark theme with sidebar",
    colors: Palette {
        primary: "210 40% 98%",
        secondary: "217.2 32.6% 17.5%",
        accent: "224.3 76.3% 48%",
        background: "222.2 84% 4.9%",
        foreground: "210 40% 98%",
        card: "217.2 32.6% 17.5%",
        card_foreground: "210 40% 98%",
        muted: "217.2 32.6% 17.5%",
        muted_foreground: "215 20.2% 65.1%",
        border: "217.2 32.6% 17.5%",
    },
    fonts: Fonts {
        body: "'Roboto', system-ui, sans-serif",
        heading: "'Roboto Slab', serif",
    },
    spacing: Spacing {
        container: "max-w-7xl mx-auto px-6",
        section: "py-20",
        card: "p-8",
    },
    layout: Layout {
        kind: LayoutKind::Sidebar,
        header_height: "4.5rem",
        sidebar_width: "16rem",
    },
    border_radius: "0.75rem",
    animation: Animation {
        duration: "300ms",
        easing: "ease-in-out",
    },
};

static COLORFUL_GRID: ThemeRecord = ThemeRecord {
    id: ThemeId::ColorfulGrid,
    name: "Colorful Grid",
    tagline: "Vibrant grid layout",
    colors: Palette {
        primary: "262.1 83.3% 57.8%",
        secondary: "270 95.2% 95.1%",
        accent: "321.8 88% 60.4%",
        background: "270 20% 98%",
        foreground: "224 71.4% 4.1%",
        card: "0 0% 100%",
        card_foreground: "224 71.4% 4.1%",
        muted: "270 4.8% 94.9%",
        muted_foreground: "215.4 16.3% 46.9%",
        border: "270 7.9% 85.9%",
    },
    fonts: Fonts {
        body: "'Poppins', system-ui, sans-serif",
        heading: "'Poppins', system-ui, sans-serif",
    },
    spacing: Spacing {
        container: "max-w-8xl mx-auto px-8",
        section: "py-24",
        card: "p-6",
    },
    layout: Layout {
        kind: LayoutKind::Grid,
        header_height: "5rem",
        sidebar_width: "0",
    },
    border_radius: "1rem",
    animation: Animation {
        duration: "400ms",
        easing: "cubic-bezier(0.4, 0, 0.2, 1)",
    },
};

/// Resolves an identifier to its record.
pub fn lookup(id: ThemeId) -> &'static ThemeRecord {
    match id {
        ThemeId::Minimalist => &MINIMALIST,
        ThemeId::DarkSidebar => &DARK_SIDEBAR,
        ThemeId::ColorfulGrid => &COLORFUL_GRID,
    }
}

/// All identifiers in selector order.
pub fn identifiers() -> &'static [ThemeId] {
    &ThemeId::ALL
}

/// All records in selector order.
pub fn records() -> impl Iterator<Item = &'static ThemeRecord> {
    identifiers().iter().map(|id| lookup(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_values(record: &ThemeRecord) -> Vec<&'static str> {
        let mut values = vec![record.name, record.tagline, record.border_radius];
        values.extend(record.colors.slots().iter().map(|(_, v)| *v));
        values.extend(record.fonts.slots().iter().map(|(_, v)| *v));
        values.extend(record.spacing.slots().iter().map(|(_, v)| *v));
        values.extend(record.layout.slots().iter().map(|(_, v)| *v));
        values.extend(record.animation.slots().iter().map(|(_, v)| *v));
        values
    }

    #[test]
    fn test_lookup_returns_matching_id() {
        for id in identifiers() {
            assert_eq!(lookup(*id).id, *id);
        }
    }

    #[test]
    fn test_every_field_is_non_empty() {
        for record in records() {
            for value in all_values(record) {
                assert!(!value.trim().is_empty(), "{} has an empty field", record.id);
            }
        }
    }

    #[test]
    fn test_identifier_order() {
        assert_eq!(
            identifiers(),
            &[
                ThemeId::Minimalist,
                ThemeId::DarkSidebar,
                ThemeId::ColorfulGrid
            ]
        );
    }

    #[test]
    fn test_layout_kinds() {
        assert_eq!(lookup(ThemeId::Minimalist).layout.kind, LayoutKind::Standard);
        assert_eq!(lookup(ThemeId::DarkSidebar).layout.kind, LayoutKind::Sidebar);
        assert_eq!(lookup(ThemeId::ColorfulGrid).layout.kind, LayoutKind::Grid);
    }

    #[test]
    fn test_lookup_is_stable() {
        let a = lookup(ThemeId::ColorfulGrid);
        let b = lookup(ThemeId::ColorfulGrid);
        assert!(std::ptr::eq(a, b));
    }
}
