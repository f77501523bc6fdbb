use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::message::LogMessage;
use super::publisher::AuditSink;

/// Audit logger for the service layer.
///
/// Every event goes to the process log via `tracing`; when a sink is
/// configured the event is additionally published on the side channel.
/// Publishing is best-effort: a failed publish is logged at warn level and
/// otherwise ignored, so audit delivery can never fail or roll back the
/// operation being audited.
#[derive(Clone)]
pub struct AuditLogger {
    sink: Option<Arc<dyn AuditSink>>,
}

impl AuditLogger {
    /// Logger that only writes to the process log
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Logger that also publishes to the given sink
    pub fn with_sink(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn info(&self, message: &str, component: &str, operation: &str) {
        tracing::info!(component, operation, "{message}");
        self.forward(LogMessage::info(message, component, operation));
    }

    pub fn error(&self, message: &str, component: &str, operation: &str, cause: &dyn fmt::Display) {
        tracing::error!(component, operation, %cause, "{message}");
        self.forward(LogMessage::error(
            message,
            component,
            operation,
            Some(cause.to_string()),
        ));
    }

    fn forward(&self, message: LogMessage) {
        if let Some(sink) = &self.sink
            && let Err(e) = sink.publish(&message)
        {
            warn!("Failed to publish audit message: {e}");
        }
    }
}

impl fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditLogger")
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
