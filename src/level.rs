/// The category tag attached to a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Info,
    Debug,
    Error,
    Success,
    Fatal,
    /// No category: the record carries only the timestamp and message.
    None,
}

impl LogLevel {
    /// The fixed textual prefix written between the timestamp and the message.
    pub const fn prefix(self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE]: ",
            LogLevel::Info => "[INFO]: ",
            LogLevel::Debug => "[DEBUG]: ",
            LogLevel::Error => "[ERROR]: ",
            LogLevel::Success => "[SUCCESS]: ",
            LogLevel::Fatal => "[FATAL]: ",
            LogLevel::None => "",
        }
    }
}
