//! Closed identifier sets: theme ids and layout shapes.
//!
//! Both are plain enums so that every match over them is checked for
//! exhaustiveness. Their string forms are kebab-case and are the only
//! representation that crosses the storage or CLI boundary; anything else
//! is rejected by [`FromStr`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownThemeError;

/// Identifier of a registered theme.
///
/// # Example
///
/// ```rust
/// use storefront_theme::ThemeId;
///
/// let id: ThemeId = "dark-sidebar".parse().unwrap();
/// assert_eq!(id, ThemeId::DarkSidebar);
/// assert_eq!(id.to_string(), "dark-sidebar");
/// assert!("nonexistent".parse::<ThemeId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    Minimalist,
    DarkSidebar,
    ColorfulGrid,
}

impl ThemeId {
    /// Every theme, in selector order.
    pub const ALL: [ThemeId; 3] = [
        ThemeId::Minimalist,
        ThemeId::DarkSidebar,
        ThemeId::ColorfulGrid,
    ];

    /// The theme adopted when nothing valid was persisted.
    pub const DEFAULT: ThemeId = ThemeId::Minimalist;

    /// Returns the kebab-case key used in storage and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeId::Minimalist => "minimalist",
            ThemeId::DarkSidebar => "dark-sidebar",
            ThemeId::ColorfulGrid => "colorful-grid",
        }
    }

    /// Returns the root class written by [`apply`](crate::apply), e.g. `theme-minimalist`.
    pub fn root_class(self) -> String {
        format!("theme-{}", self.as_str())
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownThemeError::new(s))
    }
}

/// Page arrangement strategy selected by a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Top navigation bar over a centered column.
    Standard,
    /// Persistent side panel carrying the navigation.
    Sidebar,
    /// Grid emphasis with a patterned backdrop.
    Grid,
}

impl LayoutKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Standard => "standard",
            LayoutKind::Sidebar => "sidebar",
            LayoutKind::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_id_parses_every_key() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>().unwrap(), id);
        }
    }

    #[test]
    fn test_theme_id_rejects_unknown_and_case_variants() {
        assert!("nonexistent".parse::<ThemeId>().is_err());
        assert!("Minimalist".parse::<ThemeId>().is_err());
        assert!("dark_sidebar".parse::<ThemeId>().is_err());
        assert!("".parse::<ThemeId>().is_err());
    }

    #[test]
    fn test_theme_id_default_is_minimalist() {
        assert_eq!(ThemeId::default(), ThemeId::Minimalist);
    }

    #[test]
    fn test_root_class() {
        assert_eq!(ThemeId::ColorfulGrid.root_class(), "theme-colorful-grid");
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            theme: ThemeId,
            layout: LayoutKind,
        }

        let encoded = toml::to_string(&Wrapper {
            theme: ThemeId::DarkSidebar,
            layout: LayoutKind::Sidebar,
        })
        .unwrap();
        assert!(encoded.contains("theme = \"dark-sidebar\""));
        assert!(encoded.contains("layout = \"sidebar\""));

        let decoded: Wrapper = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.theme, ThemeId::DarkSidebar);
    }
}
