use chrono::{DateTime, Duration, Utc};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use super::error::AuditError;
use super::message::LogMessage;

/// Exchange the log queue is bound to
pub const EXCHANGE_NAME: &str = "banking_logs_exchange";

/// Name of the log queue
pub const QUEUE_NAME: &str = "banking_logs_queue";

/// Queue capacity; publishes beyond this are rejected
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// Messages older than this are dropped at the consumer
pub const MESSAGE_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// A routed, encoded audit message with its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub routing_key: String,
    pub payload: String,
    pub expires_at: DateTime<Utc>,
}

/// Sink for audit events. Publishing is fire-and-forget: it never blocks and
/// reports failure instead of propagating it.
pub trait AuditSink: Send + Sync {
    fn publish(&self, message: &LogMessage) -> Result<(), AuditError>;
}

/// Bounded in-process queue publisher modeling the log exchange: capacity
/// capped, severity/component routing keys, JSON payloads, per-message TTL.
#[derive(Clone)]
pub struct QueueSink {
    sender: mpsc::Sender<Envelope>,
}

impl QueueSink {
    /// Create a sink and its receiving end with the given capacity
    pub fn bounded(capacity: usize) -> (Self, AuditReceiver) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, AuditReceiver { receiver })
    }
}

impl AuditSink for QueueSink {
    fn publish(&self, message: &LogMessage) -> Result<(), AuditError> {
        let envelope = Envelope {
            routing_key: message.routing_key(),
            payload: serde_json::to_string(message)?,
            expires_at: message.timestamp + Duration::seconds(MESSAGE_TTL_SECS),
        };

        self.sender.try_send(envelope).map_err(|e| match e {
            TrySendError::Full(_) => AuditError::QueueFull,
            TrySendError::Closed(_) => AuditError::Closed,
        })
    }
}

/// Consuming end of the audit queue
pub struct AuditReceiver {
    receiver: mpsc::Receiver<Envelope>,
}

impl AuditReceiver {
    /// Receive the next unexpired envelope; expired messages are discarded.
    /// Returns None once all senders are dropped and the queue is drained.
    pub async fn recv(&mut self) -> Option<Envelope> {
        while let Some(envelope) = self.receiver.recv().await {
            if envelope.expires_at > Utc::now() {
                return Some(envelope);
            }
        }
        None
    }
}
