//! Logging setup: a human-readable stderr layer plus an optional JSONL file.
//!
//! The file layer is enabled by, in order of precedence:
//! - `LEGIBILITY_LOG_PATH`: exact file path
//! - `LEGIBILITY_LOG_DIR`: directory, file named `legibility.jsonl`
//! - `log_dir` from the configuration file

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "LEGIBILITY_LOG_PATH";
const LOG_DIR_ENV: &str = "LEGIBILITY_LOG_DIR";
const LOG_FILE_NAME: &str = "legibility.jsonl";

/// Where log output goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file, if file logging is enabled.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(|key| std::env::var_os(key).map(PathBuf::from), config_log_dir)
    }

    fn resolve<F>(lookup: F, config_log_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let non_empty = |key: &str| lookup(key).filter(|p| !p.as_os_str().is_empty());

        let log_file = non_empty(LOG_PATH_ENV)
            .or_else(|| non_empty(LOG_DIR_ENV).map(|dir| dir.join(LOG_FILE_NAME)))
            .or_else(|| {
                config_log_dir
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map(|dir| dir.join(LOG_FILE_NAME))
            });

        Self { log_file }
    }
}

/// Keeps the background log writer alive. Drop it only at exit.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` limits output to errors, each
/// `-v` raises verbosity one step, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(filter_directive(quiet, verbose, default_level))
}

fn filter_directive(quiet: bool, verbose: u8, default_level: &str) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    // Dependencies stay at warn unless RUST_LOG says otherwise
    format!("warn,legibility={level},legibility_core={level}")
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, file_guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard {
        _file_guard: file_guard,
    })
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
