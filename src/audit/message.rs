use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// Structured audit event published on the log side channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: Level,
    pub message: String,
    pub component: String,
    pub operation: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl LogMessage {
    pub fn info(
        message: impl Into<String>,
        component: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
            component: component.into(),
            operation: operation.into(),
            timestamp: Utc::now(),
            stack_trace: None,
        }
    }

    pub fn error(
        message: impl Into<String>,
        component: impl Into<String>,
        operation: impl Into<String>,
        stack_trace: Option<String>,
    ) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            component: component.into(),
            operation: operation.into(),
            timestamp: Utc::now(),
            stack_trace,
        }
    }

    /// Routing key by severity and component, e.g. "error.AccountService"
    pub fn routing_key(&self) -> String {
        format!("{}.{}", self.level.as_str(), self.component)
    }
}
