//! Logging and tracing setup.
//!
//! Human-readable events go to stderr; a JSONL copy goes to a log file
//! (daily rolling in the log directory, or a single explicit file). Stdout is
//! left alone because command output and the MCP protocol both use it.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "LEGIBILITY_LOG_PATH";
const LOG_DIR_ENV: &str = "LEGIBILITY_LOG_DIR";
const LOG_FILE_PREFIX: &str = "legibility.jsonl";

/// Where the JSONL log goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `LEGIBILITY_LOG_PATH` / `LEGIBILITY_LOG_DIR`, falling back to the
    /// configured directory and then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_dir = env_dir.or(config_dir).or_else(|| {
            legibility_core::config::user_data_local_dir()
                .map(|dir| dir.join("logs").into_std_path_buf())
        });
        Self {
            log_path: env_path.filter(|p| !p.as_os_str().is_empty()),
            log_dir,
        }
    }
}

/// Keeps the background log writer alive; drop it last to flush.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Filter directive for the given verbosity flags and configured level.
fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the event filter: `RUST_LOG` if set, else `-q`/`-v`, else config.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

fn file_appender(config: &ObservabilityConfig) -> Option<RollingFileAppender> {
    if let Some(path) = &config.log_path {
        let dir = path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let name = path.file_name()?;
        std::fs::create_dir_all(dir).ok()?;
        return Some(tracing_appender::rolling::never(dir, name));
    }
    let dir = config.log_dir.as_deref()?;
    std::fs::create_dir_all(dir).ok()?;
    Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
}

/// Install the global subscriber.
///
/// A log file that cannot be created is skipped; stderr logging still works.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let (file_layer, guard) = match file_appender(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(ObservabilityGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_directive(true, 3, "debug"), "error");
    }

    #[test]
    fn verbosity_steps() {
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "warn"), "debug");
        assert_eq!(level_directive(false, 2, "warn"), "trace");
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env/logs")),
            Some(PathBuf::from("/config/logs")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/env/logs")));
        assert!(config.log_path.is_none());
    }

    #[test]
    fn config_dir_used_without_env() {
        let config = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/cfg")));
        assert_eq!(config.log_dir, Some(PathBuf::from("/cfg")));
    }

    #[test]
    fn empty_log_path_is_ignored() {
        let config = ObservabilityConfig::resolve(Some(PathBuf::new()), None, None);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn explicit_log_file_is_created_under_missing_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("run.jsonl");
        let config = ObservabilityConfig {
            log_path: Some(path),
            log_dir: None,
        };
        assert!(file_appender(&config).is_some());
        assert!(tmp.path().join("nested").is_dir());
    }
}
