use chrono::{DateTime, Local};

/// Source of wall-clock time for stamping log records.
///
/// Loggers hold an `Arc<dyn Clock>`, so tests can substitute a
/// deterministic time source instead of the OS clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The system clock. Default for all loggers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a single instant, for asserting exact log lines in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
