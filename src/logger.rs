use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    clock::Clock,
    error::LogError,
    level::LogLevel,
    log_writer::LogFile,
    utils::{LINE_SEPARATOR, TIMESTAMP_FORMAT, format_error_chain},
};

/// Logger lifecycle. Transitions run one way only: re-initialization and
/// any transition out of `Closed` are rejected.
enum State {
    Uninitialized,
    Initialized(LogFile),
    Closed,
}

/// The engine behind both logger flavors.
///
/// [`NanoLogger`](crate::NanoLogger) owns one behind its own mutex; the
/// [`global`](crate::global) module keeps a single process-wide one. All
/// methods take `&mut self`, so the owning mutex serializes calls and the
/// two `init` races the lifecycle would otherwise allow cannot both succeed.
pub(crate) struct LoggerCore {
    state: State,
    clock: Arc<dyn Clock>,
    last_log: String,
    created_at: Option<String>,
}

impl LoggerCore {
    pub(crate) fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: State::Uninitialized,
            clock,
            last_log: String::new(),
            created_at: None,
        }
    }

    /// `Uninitialized -> Initialized`. Creates the backing file if absent,
    /// truncating a pre-existing one when requested.
    pub(crate) fn init(&mut self, path: &Path, truncate: bool) -> Result<(), LogError> {
        match self.state {
            State::Initialized(_) => return Err(LogError::AlreadyInitialized),
            State::Closed => return Err(LogError::Closed),
            State::Uninitialized => {}
        }
        let file = LogFile::new(path, truncate)?;
        self.created_at = Some(self.clock.now().format(TIMESTAMP_FORMAT).to_string());
        self.state = State::Initialized(file);
        Ok(())
    }

    /// Appends one record stamped with the current time. Does not touch
    /// `last_log`.
    pub(crate) fn log(&mut self, message: &str, level: LogLevel) -> Result<(), LogError> {
        let file = match &self.state {
            State::Uninitialized => return Err(LogError::Uninitialized),
            State::Closed => return Err(LogError::Closed),
            State::Initialized(file) => file,
        };
        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT);
        let record = format!("{timestamp} {}{message}{LINE_SEPARATOR}", level.prefix());
        file.append(&record)?;
        Ok(())
    }

    /// Leveled write backing the convenience methods: records the raw
    /// message as `last_log` before the write is attempted, so
    /// introspection sees failed attempts too.
    pub(crate) fn leveled(&mut self, message: &str, level: LogLevel) -> Result<(), LogError> {
        self.last_log = message.to_owned();
        self.log(message, level)
    }

    /// Two records: a summary line at TRACE, then the formatted cause
    /// chain with no category tag.
    pub(crate) fn stacktrace(&mut self, error: &dyn std::error::Error) -> Result<(), LogError> {
        self.log(&format!("Exception occurred: {error}"), LogLevel::Trace)?;
        self.log(&format_error_chain(error), LogLevel::None)
    }

    /// `Initialized -> Closed`. Terminal for this logger's lifetime.
    pub(crate) fn close(&mut self) -> Result<(), LogError> {
        match self.state {
            State::Uninitialized => Err(LogError::Uninitialized),
            State::Closed => Err(LogError::Closed),
            State::Initialized(_) => {
                self.state = State::Closed;
                Ok(())
            }
        }
    }

    pub(crate) fn log_path(&self) -> Option<PathBuf> {
        match &self.state {
            State::Initialized(file) => Some(file.path().to_path_buf()),
            _ => None,
        }
    }

    pub(crate) fn last_log(&self) -> String {
        self.last_log.clone()
    }

    /// The date snapshot taken when `init` succeeded, `""` before that.
    pub(crate) fn created_at(&self) -> String {
        self.created_at.clone().unwrap_or_default()
    }
}
