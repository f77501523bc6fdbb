use thiserror::Error;

/// Failures on the audit side channel. These are reported to the caller of
/// `publish` but are never allowed to fail the primary operation.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit queue is full, message rejected")]
    QueueFull,

    #[error("Audit queue is closed")]
    Closed,

    #[error("Failed to encode audit message: {0}")]
    Encode(#[from] serde_json::Error),
}
