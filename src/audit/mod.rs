pub mod error;
pub mod logger;
pub mod message;
pub mod publisher;

// Re-export commonly used types
pub use error::AuditError;
pub use logger::AuditLogger;
pub use message::{Level, LogMessage};
pub use publisher::{
    AuditReceiver, AuditSink, DEFAULT_QUEUE_CAPACITY, EXCHANGE_NAME, Envelope, MESSAGE_TTL_SECS,
    QUEUE_NAME, QueueSink,
};
