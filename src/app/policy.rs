use crate::io::IoError;
use crate::service::ServiceError;

/// Policy for handling rejected operations during batch processing.
/// Rejections are recoverable by design, so the caller decides whether one
/// aborts the rest of the batch.
pub trait ErrorPolicy: Send + Sync {
    /// Handle an IO error (CSV parsing, reading).
    /// Return true to continue processing, false to abort
    fn handle_io_error(&self, error: IoError) -> bool;

    /// Handle a service error (rejected or failed operation).
    /// Return true to continue processing, false to abort
    fn handle_service_error(&self, error: ServiceError) -> bool;
}

/// Skip rejected operations and continue (log to stderr)
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_io_error(&self, error: IoError) -> bool {
        eprintln!("IO error (skipping): {}", error);
        true
    }

    fn handle_service_error(&self, error: ServiceError) -> bool {
        eprintln!("Operation rejected (skipping): {}", error);
        true
    }
}

/// Abort the batch on the first error
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_io_error(&self, error: IoError) -> bool {
        eprintln!("IO error (aborting): {}", error);
        false
    }

    fn handle_service_error(&self, error: ServiceError) -> bool {
        eprintln!("Operation rejected (aborting): {}", error);
        false
    }
}

/// Skip errors without logging
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_io_error(&self, _error: IoError) -> bool {
        true
    }

    fn handle_service_error(&self, _error: ServiceError) -> bool {
        true
    }
}
