// src/infrastructure/logging.rs
use crate::application::ports::logging::Logger;
use std::error::Error;

/// Forwards controller log lines to `tracing`, tagged with the owning
/// component name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    context: &'static str,
}

impl TracingLogger {
    pub fn new(context: &'static str) -> Self {
        Self { context }
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(context = self.context, "{message}");
    }

    fn error(&self, message: &str, error: &(dyn Error + 'static)) {
        tracing::error!(context = self.context, error = %error, "{message}");
    }
}
