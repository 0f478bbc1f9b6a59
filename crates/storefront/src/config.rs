//! Settings resolution: command line, then environment, then defaults.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use storefront_catalog::DEFAULT_LATENCY;
use storefront_render::{OutputMode, DEFAULT_WIDTH};
use thiserror::Error;

use crate::cli::Cli;

pub const CONFIG_DIR_ENV: &str = "STOREFRONT_CONFIG_DIR";
pub const LATENCY_ENV: &str = "STOREFRONT_LATENCY_MS";

/// Abstraction over environment variables.
pub trait EnvReader {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed environment for tests.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{LATENCY_ENV} must be a whole number of milliseconds, got '{0}'")]
    InvalidLatency(String),

    #[error("no config directory: pass --config-dir or set {CONFIG_DIR_ENV}")]
    NoConfigDir,
}

/// Everything the application needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Where `preferences.toml` lives.
    pub config_dir: PathBuf,
    /// Simulated catalog latency.
    pub latency: Duration,
    pub output: OutputMode,
    pub width: usize,
    /// Catalog file replacing the built-in products.
    pub catalog: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: &Cli, env: &impl EnvReader) -> Result<Self, ConfigError> {
        let config_dir = match (&cli.config_dir, env.var(CONFIG_DIR_ENV)) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_config_dir().ok_or(ConfigError::NoConfigDir)?,
        };

        let latency = match (cli.latency_ms, env.var(LATENCY_ENV)) {
            (Some(ms), _) => Duration::from_millis(ms),
            (None, Some(raw)) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidLatency(raw.clone()))?,
            (None, None) => DEFAULT_LATENCY,
        };

        let width = cli
            .width
            .or_else(terminal_width)
            .unwrap_or(DEFAULT_WIDTH);

        Ok(Self {
            config_dir,
            latency,
            output: cli.output,
            width,
            catalog: cli.catalog.clone(),
        })
    }

    /// The simulated contact-form round trip: twice the catalog latency.
    pub fn submit_delay(&self) -> Duration {
        self.latency * 2
    }
}

/// Platform config directory for the app, e.g. `~/.config/storefront`.
pub fn default_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "storefront").map(|dirs| dirs.config_dir().to_path_buf())
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["storefront"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_flag_beats_environment() {
        let env = MockEnv::new()
            .with_var(CONFIG_DIR_ENV, "/from/env")
            .with_var(LATENCY_ENV, "20");
        let settings =
            Settings::resolve(&cli(&["--config-dir", "/from/flag", "--latency-ms", "5"]), &env)
                .unwrap();
        assert_eq!(settings.config_dir, PathBuf::from("/from/flag"));
        assert_eq!(settings.latency, Duration::from_millis(5));
    }

    #[test]
    fn test_environment_beats_default() {
        let env = MockEnv::new()
            .with_var(CONFIG_DIR_ENV, "/from/env")
            .with_var(LATENCY_ENV, " 20 ");
        let settings = Settings::resolve(&cli(&["--width", "90"]), &env).unwrap();
        assert_eq!(settings.config_dir, PathBuf::from("/from/env"));
        assert_eq!(settings.latency, Duration::from_millis(20));
        assert_eq!(settings.width, 90);
        assert_eq!(settings.submit_delay(), Duration::from_millis(40));
    }

    #[test]
    fn test_default_latency() {
        let env = MockEnv::new().with_var(CONFIG_DIR_ENV, "/cfg");
        let settings = Settings::resolve(&cli(&[]), &env).unwrap();
        assert_eq!(settings.latency, Duration::from_millis(500));
        assert_eq!(settings.submit_delay(), Duration::from_secs(1));
        assert_eq!(settings.output, OutputMode::Auto);
    }

    #[test]
    fn test_invalid_latency_is_an_error() {
        let env = MockEnv::new()
            .with_var(CONFIG_DIR_ENV, "/cfg")
            .with_var(LATENCY_ENV, "fast");
        let err = Settings::resolve(&cli(&[]), &env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLatency(ref v) if v == "fast"));
        assert!(err.to_string().contains("STOREFRONT_LATENCY_MS"));
    }
}
