//! The process-wide singleton logger.
//!
//! One-shot lifecycle: [`init`] exactly once, log from anywhere in the
//! process, [`close`] at shutdown. `close` is terminal — the singleton
//! models one process lifetime and cannot be re-initialized afterwards.
//!
//! ```rust
//! use nanolog::global;
//!
//! let path = std::env::temp_dir().join("nanolog-doc-global.log");
//! global::init(&path).expect("Unable to create log file");
//! global::info("Hello, world!").unwrap();
//! assert!(std::fs::read_to_string(&path).unwrap().ends_with("[INFO]: Hello, world!\n"));
//! global::close().unwrap();
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, LazyLock, Mutex},
};

use crate::{
    clock::SystemClock, error::LogError, level::LogLevel, logger::LoggerCore,
};

/// Global logger state, shared across threads. The mutex serializes both
/// lifecycle transitions and writes, so two racing `init` calls cannot
/// both observe `Uninitialized` and both succeed.
static GLOBAL_LOGGER: LazyLock<Mutex<LoggerCore>> =
    LazyLock::new(|| Mutex::new(LoggerCore::new(Arc::new(SystemClock))));

/// Initializes the process-wide logger, creating the file at `path` if it
/// does not exist.
///
/// Fails with [`LogError::AlreadyInitialized`] if a global logger is
/// already active (the first file remains the target) and with
/// [`LogError::Closed`] after [`close`].
pub fn init<P: AsRef<Path>>(path: P) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().init(path.as_ref(), false)
}

/// Appends one record at `level`. Does not update [`last_log`].
pub fn log(message: &str, level: LogLevel) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().log(message, level)
}

/// Logs an 'info' message.
pub fn info(message: &str) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().leveled(message, LogLevel::Info)
}

/// Logs a 'success' message.
pub fn success(message: &str) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().leveled(message, LogLevel::Success)
}

/// Logs an 'error' message.
pub fn error(message: &str) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().leveled(message, LogLevel::Error)
}

/// Logs a 'debug' message.
pub fn debug(message: &str) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().leveled(message, LogLevel::Debug)
}

/// Logs a 'fatal' message.
pub fn fatal(message: &str) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().leveled(message, LogLevel::Fatal)
}

/// Logs a message with no category tag.
pub fn none(message: &str) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().leveled(message, LogLevel::None)
}

/// Logs `error` and its cause chain: a summary record at TRACE followed
/// by the formatted chain with no category tag.
pub fn stacktrace(error: &dyn std::error::Error) -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().stacktrace(error)
}

/// Closes the process-wide logger. Terminal: every later call, `init`
/// included, fails with [`LogError::Closed`].
pub fn close() -> Result<(), LogError> {
    GLOBAL_LOGGER.lock().unwrap().close()
}

/// The resolved absolute path of the log file, `None` unless initialized.
pub fn log_path() -> Option<PathBuf> {
    GLOBAL_LOGGER.lock().unwrap().log_path()
}

/// The most recently attempted message, `""` before any leveled write.
pub fn last_log() -> String {
    GLOBAL_LOGGER.lock().unwrap().last_log()
}

/// The date snapshot taken when [`init`] succeeded; does not change on
/// subsequent calls. `""` before initialization.
pub fn current_date() -> String {
    GLOBAL_LOGGER.lock().unwrap().created_at()
}
