//! Output mode control.

use std::fmt;
use std::str::FromStr;

use console::Term;

use crate::tags::TagTransform;

/// Controls how pages are emitted.
///
/// # Variants
///
/// - `Auto` - Styled when stdout supports color, plain otherwise
/// - `Term` - Always apply terminal styling
/// - `Text` - Never apply styling (strip style tags)
/// - `TermDebug` - Keep style tags visible as `[name]text[/name]`
/// - `Json` - Serialize the page's view data instead of rendering it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Auto-detect terminal capabilities
    #[default]
    Auto,
    /// Always use ANSI escape codes
    Term,
    /// Never use ANSI escape codes
    Text,
    /// Render style names as bracket tags
    TermDebug,
    /// Structured output (skips template rendering)
    Json,
}

impl OutputMode {
    /// Every mode, in `--output` help order.
    pub const ALL: [OutputMode; 5] = [
        OutputMode::Auto,
        OutputMode::Term,
        OutputMode::Text,
        OutputMode::TermDebug,
        OutputMode::Json,
    ];

    /// Resolves the mode to a concrete decision about whether to use color.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json => false,
        }
    }

    /// Returns true if views are serialized instead of rendered.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }

    /// How style tags are processed in this mode.
    pub fn tag_transform(&self) -> TagTransform {
        match self {
            OutputMode::TermDebug => TagTransform::Keep,
            mode if mode.should_use_color() => TagTransform::Apply,
            _ => TagTransform::Remove,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
            OutputMode::Json => "json",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown output mode '{}' (expected auto, term, text, term-debug or json)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_default_is_auto() {
        assert_eq!(OutputMode::default(), OutputMode::Auto);
    }

    #[test]
    fn test_output_mode_color_decisions() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
    }

    #[test]
    fn test_output_mode_transforms() {
        assert_eq!(OutputMode::Term.tag_transform(), TagTransform::Apply);
        assert_eq!(OutputMode::Text.tag_transform(), TagTransform::Remove);
        assert_eq!(OutputMode::TermDebug.tag_transform(), TagTransform::Keep);
        assert_eq!(OutputMode::Json.tag_transform(), TagTransform::Remove);
    }

    #[test]
    fn test_output_mode_only_json_is_structured() {
        for mode in OutputMode::ALL {
            assert_eq!(mode.is_structured(), mode == OutputMode::Json);
        }
    }

    #[test]
    fn test_output_mode_parse() {
        assert_eq!("term-debug".parse::<OutputMode>(), Ok(OutputMode::TermDebug));
        for mode in OutputMode::ALL {
            assert_eq!(mode.to_string().parse::<OutputMode>(), Ok(mode));
        }
        assert!("yaml".parse::<OutputMode>().is_err());
    }
}
