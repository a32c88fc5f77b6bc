// tests/support/mocks/mod.rs
pub mod logger;
pub mod use_cases;

pub use logger::{LogEntry, LogLevel, RecordingLogger};
pub use use_cases::{StubFindUserById, StubListUsers};
