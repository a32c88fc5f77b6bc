// src/application/ports/logging.rs
use std::error::Error;

/// Logging capability handed to controllers at construction time.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);

    fn error(&self, message: &str, error: &(dyn Error + 'static));
}
