//! Command-line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use storefront_render::{OutputMode, MAX_WIDTH};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    version,
    about = "Themeable product catalog in the terminal",
    long_about = "Browse a product catalog rendered in one of three visual themes.\n\n\
                  The selected theme is remembered between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding preferences.toml [env: STOREFRONT_CONFIG_DIR]
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Simulated catalog latency in milliseconds [env: STOREFRONT_LATENCY_MS]
    #[arg(long, value_name = "MS", global = true)]
    pub latency_ms: Option<u64>,

    /// Output mode: auto, term, text, term-debug or json.
    #[arg(
        long,
        value_name = "MODE",
        default_value = "auto",
        value_parser = parse_output_mode,
        global = true
    )]
    pub output: OutputMode,

    /// Switch to this theme before running the command (remembered).
    #[arg(long, value_name = "ID", global = true)]
    pub theme: Option<String>,

    /// Read the catalog from a JSON file instead of the built-in products.
    #[arg(long, value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Page width in columns, at most 500 (default: terminal width).
    #[arg(long, value_name = "COLS", value_parser = parse_width, global = true)]
    pub width: Option<usize>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Diagnostic log format.
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Product catalog with featured products and category filter.
    Home {
        /// Category to show, or "all".
        #[arg(long, default_value = "all")]
        category: String,

        /// Load only the first N products.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// One product in detail.
    Product {
        /// Product id.
        id: u32,
    },

    /// Company story, stats and values.
    About,

    /// Contact details and FAQ. With form fields, sends a message.
    Contact(ContactArgs),

    /// List available themes.
    Themes,

    /// Inspect or change the active theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Home {
            category: "all".to_string(),
            limit: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub message: Option<String>,
}

impl ContactArgs {
    /// True when any form field was given, which means "send".
    pub fn is_submission(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.subject.is_some() || self.message.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ThemeAction {
    /// Switch to a theme and remember it.
    Set {
        /// minimalist, dark-sidebar or colorful-grid.
        id: String,
    },

    /// Show a theme's settings (default: the active theme).
    Show { id: Option<String> },

    /// Print the applied style variables.
    Vars,

    /// Print the applied style variables as CSS.
    Css,
}

fn parse_output_mode(s: &str) -> Result<OutputMode, String> {
    s.parse()
}

fn parse_width(s: &str) -> Result<usize, String> {
    let width: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a column count", s))?;
    if width > MAX_WIDTH {
        return Err(format!("width must be at most {} columns", MAX_WIDTH));
    }
    Ok(width)
}
