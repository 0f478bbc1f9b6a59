//! # Storefront
//!
//! A product catalog for the terminal, drawn in one of three themes. The
//! active theme is remembered in `preferences.toml` under the config
//! directory.
//!
//! The pieces come from the workspace crates:
//!
//! - `storefront-theme`: registry, store and root variables
//! - `storefront-catalog`: product source and catalog page state
//! - `storefront-render`: page templates, layout and output modes
//!
//! This crate adds the command line, settings resolution, logging and the
//! contact form, and ties them together in [`Storefront`].
//!
//! ```rust,no_run
//! use clap::Parser;
//! use storefront::{execute, Cli, RealEnv};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let cli = Cli::parse_from(["storefront", "--theme", "dark-sidebar", "about"]);
//! let page = execute(cli, &RealEnv).await.unwrap();
//! print!("{}", page);
//! # });
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod contact;
pub mod logging;

pub use app::Storefront;
pub use cli::{Cli, Command, ContactArgs, ThemeAction};
pub use config::{ConfigError, EnvReader, MockEnv, RealEnv, Settings};
pub use contact::{ContactError, ContactForm, SUCCESS_MESSAGE};
pub use logging::{init_logging, LogConfig, LogFormat};

use tracing::debug;

/// Resolves settings, applies `--theme`, runs the command and returns its
/// output.
pub async fn execute(cli: Cli, env: &impl EnvReader) -> anyhow::Result<String> {
    let settings = Settings::resolve(&cli, env)?;
    debug!(?settings, "resolved settings");

    let mut storefront = Storefront::from_settings(&settings)?;
    if let Some(theme) = &cli.theme {
        storefront.switch_theme(theme)?;
    }
    storefront.run(cli.command.unwrap_or_default()).await
}
