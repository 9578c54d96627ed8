//! Logging bootstrap for library and CLI callers.
//!
//! # Responsibility
//! - Validate logging configuration (level + absolute directory).
//! - Start the rolling file logger once and keep its handle alive.
//!
//! # Invariants
//! - Logging init is idempotent for the same configuration.
//! - Re-initialization with a different level or directory is rejected.
//! - Setup failures are returned as errors, never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Once;

const LOG_FILE_BASENAME: &str = "labsite";
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const ROTATE_AT_BYTES: u64 = 10 << 20;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_MESSAGE_LIMIT: usize = 160;

static LOGGER: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK: Once = Once::new();

struct LoggingState {
    config: LoggingConfig,
    _handle: LoggerHandle,
}

/// Logging configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
    /// Log directory could not be created.
    CreateDir { path: PathBuf, message: String },
    Backend(String),
    /// Logging is already active with a different configuration.
    AlreadyInitialized {
        active: LoggingConfig,
        requested: LoggingConfig,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{path}`")
            }
            Self::CreateDir { path, message } => write!(
                f,
                "failed to create log directory `{}`: {message}",
                path.display()
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized with level `{}` at `{}`; refusing to switch to level `{}` at `{}`",
                active.level,
                active.log_dir.display(),
                requested.level,
                requested.log_dir.display()
            ),
        }
    }
}

impl Error for LoggingError {}

/// Validated logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: &'static str,
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    /// Validates a level name and directory.
    ///
    /// Levels are case-insensitive; `warning` is accepted for `warn`.
    pub fn parse(level: &str, log_dir: &str) -> Result<Self, LoggingError> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }
}

/// Initializes logging with level and directory.
///
/// Fails on an unknown level, an empty or relative directory, a directory
/// that cannot be created, a backend error, or a conflicting earlier setup.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    init_logging_with(LoggingConfig::parse(level, log_dir)?)
}

/// Initializes logging from an already validated configuration.
pub fn init_logging_with(config: LoggingConfig) -> Result<(), LoggingError> {
    let state = LOGGER.get_or_try_init(|| start_logger(config.clone()))?;
    if state.config != config {
        return Err(LoggingError::AlreadyInitialized {
            active: state.config.clone(),
            requested: config,
        });
    }
    Ok(())
}

/// Returns the active logging configuration, if any.
pub fn logging_status() -> Option<LoggingConfig> {
    LOGGER.get().map(|state| state.config.clone())
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    match cfg!(debug_assertions) {
        true => "debug",
        false => "info",
    }
}

fn start_logger(config: LoggingConfig) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| LoggingError::CreateDir {
        path: config.log_dir.clone(),
        message: err.to_string(),
    })?;

    let files = FileSpec::default()
        .directory(&config.log_dir)
        .basename(LOG_FILE_BASENAME);
    let handle = Logger::try_with_str(config.level)
        .and_then(|logger| {
            logger
                .log_to_file(files)
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
                )
                .append()
                .write_mode(WriteMode::BufferAndFlush)
                .format_for_files(flexi_logger::detailed_format)
                .start()
        })
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    PANIC_HOOK.call_once(install_panic_hook);

    info!(
        "event=logging_init module=core status=ok level={} log_dir={} version={} os={}",
        config.level,
        config.log_dir.display(),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Ok(LoggingState {
        config,
        _handle: handle,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    let lowered = level.trim().to_ascii_lowercase();
    let canonical = if lowered == "warning" { "warn" } else { lowered.as_str() };
    LEVELS
        .iter()
        .copied()
        .find(|known| *known == canonical)
        .ok_or(LoggingError::UnsupportedLevel(lowered))
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let path = PathBuf::from(log_dir.trim());
    if path.as_os_str().is_empty() {
        Err(LoggingError::EmptyLogDir)
    } else if path.is_relative() {
        Err(LoggingError::RelativeLogDir(path.display().to_string()))
    } else {
        Ok(path)
    }
}

/// Chains a hook that records panics in the log file before the default output.
fn install_panic_hook() {
    let next = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let location = panic
            .location()
            .map_or_else(|| "unknown".to_string(), |at| format!("{}:{}", at.file(), at.line()));
        let payload = panic.payload();
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string payload>");
        error!(
            "event=panic module=core status=error location={location} message={}",
            single_line(message, PANIC_MESSAGE_LIMIT)
        );
        next(panic);
    }));
}

/// Flattens line breaks and caps `text` at `limit` characters.
fn single_line(text: &str, limit: usize) -> String {
    let mut chars = text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c });
    let mut line = chars.by_ref().take(limit).collect::<String>();
    if chars.next().is_some() {
        line.push_str("...");
    }
    line
}
