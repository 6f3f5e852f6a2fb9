//! Tracing subscriber setup used by the binary.
//!
//! `RUST_LOG` overrides the default filter. `LOG_DIR` adds a daily rolling
//! file next to stderr, `LOG_MAX_FILES` capping the amount of files kept.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Cargo traffic is logged by the crate itself, the HTTP stack stays quiet.
const DEFAULT_FILTER: &str = "info,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

const LOG_FILE_PREFIX: &str = "leaguepedia.log";

/// Guard to ensure buffered logs are flushed on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    filter: String,
    dir: Option<String>,
    max_files: Option<usize>,
}

impl LogSettings {
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            filter: var("RUST_LOG")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            dir: var("LOG_DIR").filter(|d| !d.trim().is_empty()),
            max_files: var("LOG_MAX_FILES")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0),
        }
    }
}

/// Installs the global subscriber. Later calls keep the first one.
pub fn init() {
    let settings = LogSettings::from_vars(|name| env::var(name).ok());
    let env_filter = EnvFilter::try_new(&settings.filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?}: {e}", settings.filter);
        EnvFilter::new(DEFAULT_FILTER)
    });

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_level(true);

    let res = match settings.dir.as_deref().and_then(|dir| file_writer(dir, settings.max_files)) {
        Some(file_writer) => {
            let stderr = std::io::stderr.with_max_level(tracing::Level::INFO);
            builder.with_writer(stderr.and(file_writer)).try_init()
        }
        None => builder.try_init(),
    };

    if res.is_ok() {
        tracing::debug!("logger initialized with {:?}", settings);
    }
}

fn file_writer(dir: &str, max_files: Option<usize>) -> Option<NonBlocking> {
    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX);

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = match file_builder.build(dir) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("failed to create log file in {dir}: {e}");
            return None;
        }
    };

    let (file_writer, guard) = non_blocking(file_appender);

    // A second init keeps the first guard alive, the new writer is still usable.
    let _ = LOG_GUARD.set(guard);

    Some(file_writer)
}
