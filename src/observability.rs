//! Logging setup for the report binary and the events it emits around a run.
//!
//! Library code logs through `tracing` with `component` and `event` fields;
//! this module only decides where those events go.

use std::env;
use std::path::Path;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LEVEL_VAR: &str = "IPOGMP_LOG_LEVEL";
const FORMAT_VAR: &str = "IPOGMP_LOG_FORMAT";
const TARGET_VAR: &str = "IPOGMP_LOG_TARGET";

const COMPONENT: &str = "heatmap_report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    /// Reads the `IPOGMP_LOG_*` keys through `lookup`. Blank or unrecognized
    /// values leave the default in place.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let level = lookup(LEVEL_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.level);
        let format = lookup(FORMAT_VAR)
            .and_then(|raw| parse_log_format(&raw))
            .unwrap_or(defaults.format);
        let include_target = lookup(TARGET_VAR)
            .and_then(|raw| parse_switch(&raw))
            .unwrap_or(defaults.include_target);

        Self {
            level,
            format,
            include_target,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingInitError {
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub fn logging_config_from_env() -> LoggingConfig {
    LoggingConfig::from_lookup(|key| env::var(key).ok())
}

/// Installs the global subscriber. Events go to stderr so stdout carries only
/// the report.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingInitError> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.include_target)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.json().with_ansi(false).finish())?
        }
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish())?,
    }
    Ok(())
}

pub fn log_app_start(config: &LoggingConfig) {
    info!(
        component = COMPONENT,
        event = "app.start",
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        log_format = ?config.format,
        include_target = config.include_target
    );
}

pub fn log_source_selected(path: &Path, refresh_interval_secs: Option<u64>) {
    match refresh_interval_secs {
        Some(refresh_interval_secs) => info!(
            component = COMPONENT,
            event = "source.selected",
            path = %path.display(),
            refresh_interval_secs
        ),
        None => info!(
            component = COMPONENT,
            event = "source.selected",
            path = %path.display()
        ),
    }
}

pub fn log_report_rendered(tiles: usize, json: bool) {
    info!(
        component = COMPONENT,
        event = "report.rendered",
        tiles,
        output = if json { "json" } else { "table" }
    );
}

fn parse_log_format(raw: &str) -> Option<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" | "text" => Some(LogFormat::Pretty),
        _ => None,
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> LoggingConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LoggingConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn unset_keys_keep_defaults() {
        assert_eq!(config_from(&[]), LoggingConfig::default());
    }

    #[test]
    fn reads_level_format_and_target() {
        let cfg = config_from(&[
            (LEVEL_VAR, " ipogmp=debug "),
            (FORMAT_VAR, "JSON"),
            (TARGET_VAR, "off"),
        ]);

        assert_eq!(cfg.level, "ipogmp=debug");
        assert_eq!(cfg.format, LogFormat::Json);
        assert!(!cfg.include_target);
    }

    #[test]
    fn blank_or_unknown_values_are_ignored() {
        let cfg = config_from(&[
            (LEVEL_VAR, "  "),
            (FORMAT_VAR, "yaml"),
            (TARGET_VAR, "maybe"),
        ]);

        assert_eq!(cfg, LoggingConfig::default());
    }

    #[test]
    fn text_is_an_alias_for_pretty() {
        assert_eq!(parse_log_format("Text"), Some(LogFormat::Pretty));
        assert_eq!(parse_switch(" YES "), Some(true));
    }
}
