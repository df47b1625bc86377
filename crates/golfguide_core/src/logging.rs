//! Process logging bootstrap.
//!
//! # Responsibility
//! - Start rolling file logs once per process.
//! - Route panics into the log, tagging broken top-items invariants.
//!
//! # Invariants
//! - Initialization never panics.
//! - Repeating initialization with the same level and directory is a no-op.
//! - Any other reconfiguration is rejected.

use crate::collection::projection::{INVARIANT_PANIC_PREFIX, TOP_ITEMS_CAP};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "golfguide";
const LOG_DIR_NAME: &str = "golfguide-logs";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 200;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

/// Active logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingStatus {
    pub level: LevelFilter,
    pub log_dir: PathBuf,
}

struct LoggingState {
    status: LoggingStatus,
    _logger: LoggerHandle,
}

impl LoggingStatus {
    fn check_same(&self, requested: &LoggingStatus) -> Result<(), String> {
        if self.log_dir != requested.log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                requested.log_dir.display()
            ));
        }
        if self.level != requested.level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                self.level, requested.level
            ));
        }
        Ok(())
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// `level` is one of `trace`, `debug`, `info`, `warn` or `error`, in any case.
///
/// # Errors
/// - Unknown level or `off`.
/// - Blank or relative `log_dir`, or a directory that cannot be created.
/// - Backend start failure.
/// - A previous call used a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LoggingStatus {
        level: parse_level(level)?,
        log_dir: absolute_dir(log_dir)?,
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(requested.clone()))?;
    // Covers both an earlier init and a racing caller with another config.
    state.status.check_same(&requested)
}

fn start_logger(status: LoggingStatus) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&status.log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            status.log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(status.level.as_str())
        .map_err(|err| format!("invalid log level `{}`: {err}", status.level))?
        .log_to_file(
            FileSpec::default()
                .directory(status.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} top_items_cap={} version={}",
        status.level,
        status.log_dir.display(),
        TOP_ITEMS_CAP,
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        status,
        _logger: logger,
    })
}

/// Active configuration, or `None` before initialization.
pub fn logging_status() -> Option<LoggingStatus> {
    LOGGING_STATE.get().map(|state| state.status.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// `golfguide-logs` under the system temp directory.
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join(LOG_DIR_NAME)
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().parse::<LevelFilter>() {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unsupported log level `{}`; expected trace|debug|info|warn|error",
            level.trim()
        )),
        Ok(parsed) => Ok(parsed),
    }
}

fn absolute_dir(log_dir: &str) -> Result<PathBuf, String> {
    let path = Path::new(log_dir.trim());
    if path.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    if !path.is_absolute() {
        return Err(format!(
            "log_dir must be an absolute path, got `{}`",
            path.display()
        ));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = panic_message(panic_info.payload());
        error!(
            "event=panic module=core status=error kind={} location={} payload={}",
            panic_kind(message),
            location,
            single_line(message, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

fn panic_kind(message: &str) -> &'static str {
    if message.starts_with(INVARIANT_PANIC_PREFIX) {
        "top_items_invariant"
    } else {
        "other"
    }
}

/// Flattens newlines and caps length so one event stays on one log line.
fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut capped: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::{
        absolute_dir, default_log_dir, init_logging, logging_status, panic_kind, panic_message,
        parse_level, single_line,
    };
    use log::LevelFilter;

    #[test]
    fn parse_level_accepts_named_levels_only() {
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::Warn);
        assert!(parse_level("off").unwrap_err().contains("unsupported"));
        assert!(parse_level("verbose").unwrap_err().contains("unsupported"));
    }

    #[test]
    fn absolute_dir_rejects_blank_and_relative() {
        assert!(absolute_dir("  ").is_err());
        let err = absolute_dir("logs/dev").unwrap_err();
        assert!(err.contains("absolute"));
        assert!(default_log_dir().is_absolute());
    }

    #[test]
    fn panic_payloads_are_classified() {
        let invariant: String = "top items invariant violated during remove: index 5".into();
        let message = panic_message(&invariant);
        assert_eq!(panic_kind(message), "top_items_invariant");

        let other: &'static str = "boom";
        assert_eq!(panic_kind(panic_message(&other)), "other");
        assert_eq!(panic_message(&42_u8), "non-string panic payload");
    }

    #[test]
    fn single_line_flattens_and_caps() {
        let value = single_line("index 13\nout of range\r", 10);
        assert!(!value.contains('\n'));
        assert!(!value.contains('\r'));
        assert_eq!(value, "index 13 o...");
    }

    #[test]
    fn init_is_idempotent_and_rejects_reconfiguration() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let first_path = first.path().to_str().unwrap().to_string();
        let second_path = second.path().to_str().unwrap().to_string();

        init_logging("info", &first_path).unwrap();
        init_logging("INFO", &first_path).unwrap();

        let level_err = init_logging("debug", &first_path).unwrap_err();
        assert!(level_err.contains("refusing to switch"));
        let dir_err = init_logging("info", &second_path).unwrap_err();
        assert!(dir_err.contains("refusing to switch"));

        let status = logging_status().unwrap();
        assert_eq!(status.level, LevelFilter::Info);
        assert_eq!(status.log_dir, first.path());
    }
}
