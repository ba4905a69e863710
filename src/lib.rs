//! # nanolog
//! Minimal file-backed logger with leveled, timestamped writes.
//!
//! Every log call opens the target file in append mode, writes one
//! timestamped record and closes the handle again, so external readers
//! and tailing tools never contend with a held handle. Records look like
//! `2024/01/01 00:00:00 [INFO]: server started`.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! nanolog = "0.1.0"
//! ```
//!
//! ```rust
//! use nanolog::NanoLogger;
//!
//! let path = std::env::temp_dir().join("nanolog-doc-instance.log");
//! let logger = NanoLogger::truncate(&path).expect("Unable to create log file");
//! logger.info("Hello, world!").unwrap();
//! assert!(std::fs::read_to_string(&path).unwrap().ends_with("[INFO]: Hello, world!\n"));
//! ```
//!
//! ## Process-wide logging
//! The [`global`] module wraps the same behavior in a process-wide
//! singleton with a one-shot lifecycle: `init` once, log from anywhere,
//! `close` at shutdown. See the module docs for an example.
//!
//! ## Error reporting
//! Nothing is swallowed: construction, lifecycle violations and I/O
//! failures all surface as [`LogError`] values. The one deliberate
//! exception is [`last_log`](NanoLogger::last_log), which reflects the
//! most recently *attempted* message whether or not its write succeeded.

mod clock;
mod error;
pub mod global;
mod level;
mod log_writer;
mod logger;
mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::LogError;
pub use level::LogLevel;
pub use utils::format_error_chain;

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use logger::LoggerCore;

/// A logger owning a single log file, independently constructible any
/// number of times.
///
/// An internal mutex serializes calls from multiple threads on the same
/// instance; no cross-process exclusion is provided, since every call
/// re-opens the file rather than holding a lock on it.
pub struct NanoLogger {
    core: Mutex<LoggerCore>,
}

impl NanoLogger {
    /// Creates a logger writing to `path`, creating the file if it does
    /// not exist. A pre-existing file is appended to, not discarded.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        Self::with_clock(path, false, Arc::new(SystemClock))
    }

    /// Creates a logger writing to `path`, discarding the contents of a
    /// pre-existing file before any writes occur.
    pub fn truncate<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        Self::with_clock(path, true, Arc::new(SystemClock))
    }

    /// Creates a logger with an explicit time source. [`FixedClock`]
    /// makes log lines deterministic in tests.
    pub fn with_clock<P: AsRef<Path>>(
        path: P,
        truncate: bool,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, LogError> {
        let mut core = LoggerCore::new(clock);
        core.init(path.as_ref(), truncate)?;
        Ok(Self {
            core: Mutex::new(core),
        })
    }

    /// Appends one record at `level`, opening the file for the duration
    /// of the call. Does not update [`last_log`](Self::last_log).
    pub fn log(&self, message: &str, level: LogLevel) -> Result<(), LogError> {
        self.core.lock().unwrap().log(message, level)
    }

    /// Logs an 'info' message.
    pub fn info(&self, message: &str) -> Result<(), LogError> {
        self.core.lock().unwrap().leveled(message, LogLevel::Info)
    }

    /// Logs a 'success' message.
    pub fn success(&self, message: &str) -> Result<(), LogError> {
        self.core.lock().unwrap().leveled(message, LogLevel::Success)
    }

    /// Logs an 'error' message.
    pub fn error(&self, message: &str) -> Result<(), LogError> {
        self.core.lock().unwrap().leveled(message, LogLevel::Error)
    }

    /// Logs a 'debug' message.
    pub fn debug(&self, message: &str) -> Result<(), LogError> {
        self.core.lock().unwrap().leveled(message, LogLevel::Debug)
    }

    /// Logs a 'fatal' message.
    pub fn fatal(&self, message: &str) -> Result<(), LogError> {
        self.core.lock().unwrap().leveled(message, LogLevel::Fatal)
    }

    /// Logs a message with no category tag. The timestamp and the single
    /// separating space are still written.
    pub fn none(&self, message: &str) -> Result<(), LogError> {
        self.core.lock().unwrap().leveled(message, LogLevel::None)
    }

    /// Logs `error` and its cause chain: a summary record
    /// (`Exception occurred: ...`) at TRACE, then the formatted chain
    /// with no category tag.
    pub fn stacktrace(&self, error: &dyn std::error::Error) -> Result<(), LogError> {
        self.core.lock().unwrap().stacktrace(error)
    }

    /// Closes the logger. Terminal: every later operation fails with
    /// [`LogError::Closed`] and performs no filesystem write.
    pub fn close(&self) -> Result<(), LogError> {
        self.core.lock().unwrap().close()
    }

    /// The resolved absolute path of the log file, `None` after close.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.core.lock().unwrap().log_path()
    }

    /// The most recently attempted message, `""` before any leveled write.
    pub fn last_log(&self) -> String {
        self.core.lock().unwrap().last_log()
    }

    /// The date snapshot taken when this logger was constructed, in the
    /// same `YYYY/MM/DD HH:MM:SS` format as record stamps; it does not
    /// change on subsequent calls.
    pub fn current_date(&self) -> String {
        self.core.lock().unwrap().created_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};
    use std::sync::atomic::{AtomicI64, Ordering};

    fn jan_first() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn fixed_logger(path: &Path) -> NanoLogger {
        NanoLogger::with_clock(path, false, Arc::new(FixedClock(jan_first()))).unwrap()
    }

    /// Advances by one second on every reading.
    struct TickingClock {
        start: DateTime<Local>,
        ticks: AtomicI64,
    }

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Local> {
            let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
            self.start + chrono::Duration::seconds(tick)
        }
    }

    #[test]
    fn info_writes_exact_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = fixed_logger(&path);
        logger.info("server started").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2024/01/01 00:00:00 [INFO]: server started\n"
        );
    }

    #[test]
    fn every_level_writes_its_prefix_after_a_single_space() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.log");
        let logger = fixed_logger(&path);

        let levels = [
            LogLevel::Trace,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Error,
            LogLevel::Success,
            LogLevel::Fatal,
        ];
        for level in levels {
            logger.log("payload", level).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        for (line, level) in contents.lines().zip(levels) {
            assert_eq!(
                line,
                format!("2024/01/01 00:00:00 {}payload", level.prefix())
            );
        }
        assert_eq!(contents.lines().count(), levels.len());
    }

    #[test]
    fn none_omits_prefix_but_keeps_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.log");
        let logger = fixed_logger(&path);
        logger.none("untagged").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2024/01/01 00:00:00 untagged\n"
        );
    }

    #[test]
    fn convenience_methods_tag_their_level_and_update_last_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convenience.log");
        let logger = fixed_logger(&path);
        assert_eq!(logger.last_log(), "");

        logger.info("a").unwrap();
        logger.success("b").unwrap();
        logger.error("c").unwrap();
        logger.debug("d").unwrap();
        logger.fatal("e").unwrap();
        assert_eq!(logger.last_log(), "e");

        let contents = std::fs::read_to_string(&path).unwrap();
        let tags: Vec<&str> = contents
            .lines()
            .map(|line| &line[20..])
            .collect();
        assert_eq!(
            tags,
            [
                "[INFO]: a",
                "[SUCCESS]: b",
                "[ERROR]: c",
                "[DEBUG]: d",
                "[FATAL]: e"
            ]
        );
    }

    #[test]
    fn raw_log_does_not_update_last_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.log");
        let logger = fixed_logger(&path);
        logger.info("remembered").unwrap();
        logger.log("not remembered", LogLevel::Debug).unwrap();
        assert_eq!(logger.last_log(), "remembered");
    }

    #[test]
    fn truncate_discards_existing_contents_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.log");
        std::fs::write(&path, "stale line\n").unwrap();
        let logger = NanoLogger::truncate(&path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
        logger.info("fresh").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn new_appends_to_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appended.log");
        std::fs::write(&path, "older line\n").unwrap();
        let logger = NanoLogger::new(&path).unwrap();
        logger.info("newer line").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("older line\n"));
        assert!(contents.ends_with("[INFO]: newer line\n"));
    }

    #[test]
    fn construction_fails_on_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        assert!(matches!(NanoLogger::new(&path), Err(LogError::Io(_))));
    }

    #[test]
    fn close_rejects_further_writes_without_touching_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("closed.log");
        let logger = fixed_logger(&path);
        logger.info("only line").unwrap();
        let size = std::fs::metadata(&path).unwrap().len();

        logger.close().unwrap();
        assert!(matches!(logger.info("rejected"), Err(LogError::Closed)));
        assert!(matches!(
            logger.log("rejected", LogLevel::None),
            Err(LogError::Closed)
        ));
        assert!(matches!(logger.close(), Err(LogError::Closed)));
        assert_eq!(std::fs::metadata(&path).unwrap().len(), size);
        assert_eq!(logger.log_path(), None);
        // The attempted message is still observable.
        assert_eq!(logger.last_log(), "rejected");
    }

    #[test]
    fn sequential_writes_produce_one_line_each_in_call_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sequence.log");
        let logger = fixed_logger(&path);
        for i in 0..10 {
            logger.log(&format!("message {i}"), LogLevel::Info).unwrap();
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 10);
        for (i, line) in contents.lines().enumerate() {
            assert_eq!(
                line,
                format!("2024/01/01 00:00:00 [INFO]: message {i}")
            );
        }
    }

    #[test]
    fn records_are_stamped_per_call_while_current_date_is_frozen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticking.log");
        let clock = Arc::new(TickingClock {
            start: jan_first(),
            ticks: AtomicI64::new(0),
        });
        let logger = NanoLogger::with_clock(&path, false, clock).unwrap();

        // Construction consumed tick 0.
        assert_eq!(logger.current_date(), "2024/01/01 00:00:00");
        logger.info("first").unwrap();
        logger.info("second").unwrap();
        assert_eq!(logger.current_date(), "2024/01/01 00:00:00");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "2024/01/01 00:00:01 [INFO]: first");
        assert_eq!(lines[1], "2024/01/01 00:00:02 [INFO]: second");
    }

    #[test]
    fn log_path_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("path.log");
        let logger = NanoLogger::new(&path).unwrap();
        let resolved = logger.log_path().unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, std::path::absolute(&path).unwrap());
    }

    #[test]
    fn stacktrace_writes_summary_then_untagged_chain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stacktrace.log");
        let logger = fixed_logger(&path);

        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        logger.stacktrace(&inner).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "2024/01/01 00:00:00 [TRACE]: Exception occurred: connection reset"
        );
        assert_eq!(lines[1], "2024/01/01 00:00:00 connection reset");
        // No last_log update from stacktrace.
        assert_eq!(logger.last_log(), "");
    }

    #[test]
    fn concurrent_writers_never_interleave_within_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("threads.log");
        let logger = Arc::new(NanoLogger::new(&path).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        logger.info(&format!("thread {t} message {i}")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 100);
        for line in contents.lines() {
            assert!(line.contains("[INFO]: thread "));
        }
    }
}
