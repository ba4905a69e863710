use thiserror::Error;

/// Errors reported by logger construction, lifecycle and write operations.
///
/// The lifecycle variants (`Uninitialized`, `AlreadyInitialized`, `Closed`)
/// are precondition violations and never retried internally; `Io` is
/// environmental and reported per call so the caller decides what to do.
#[derive(Debug, Error)]
pub enum LogError {
    /// A write was attempted before the logger had a file to write to.
    #[error("unable to log without initializing the logger")]
    Uninitialized,

    /// `init` was called while the logger was already initialized.
    #[error("unable to have multiple loggers initiated at the same time")]
    AlreadyInitialized,

    /// The logger was closed; no further operations are valid.
    #[error("logger has been closed")]
    Closed,

    /// Creating, truncating, opening or writing the log file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
