//! Error type for page rendering.

use std::fmt;

/// Why a page could not be produced.
#[derive(Debug)]
pub enum RenderError {
    /// A page template failed to parse or evaluate.
    Template {
        /// Template file, when the engine knows it.
        template: Option<String>,
        line: Option<usize>,
        message: String,
    },

    /// A page asked for a template that is not bundled.
    MissingTemplate(String),

    /// The page context could not be serialized.
    Serialize(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Template {
                template,
                line,
                message,
            } => {
                f.write_str("template error")?;
                if let Some(name) = template {
                    write!(f, " in {}", name)?;
                }
                if let Some(line) = line {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", message)
            }
            RenderError::MissingTemplate(name) => write!(f, "no template named {}", name),
            RenderError::Serialize(msg) => write!(f, "could not serialize page: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialize(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => {
                RenderError::MissingTemplate(err.name().unwrap_or("<unknown>").to_string())
            }
            ErrorKind::BadSerialization => RenderError::Serialize(err.to_string()),
            kind => RenderError::Template {
                template: err.name().map(str::to_string),
                line: err.line(),
                message: err
                    .detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| kind.to_string()),
            },
        }
    }
}
