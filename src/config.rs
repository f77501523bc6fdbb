use serde::Deserialize;

use crate::audit::DEFAULT_QUEUE_CAPACITY;

/// Configuration for the audit side channel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Whether events are published to the audit queue in addition to the
    /// process log
    pub enabled: bool,
    /// Queue capacity; publishes beyond it are rejected
    pub queue_capacity: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Parse a JSON configuration document
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Defaults with environment overrides applied.
    /// `SIMPLEBANK_AUDIT_ENABLED=1|true` turns audit publishing on.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("SIMPLEBANK_AUDIT_ENABLED") {
            config.audit.enabled = matches!(value.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_queue_parameters() {
        let config = AppConfig::default();

        assert!(!config.audit.enabled);
        assert_eq!(config.audit.queue_capacity, 1000);
    }

    #[test]
    fn parses_partial_json() {
        let config = AppConfig::from_json_str(r#"{"audit": {"enabled": true}}"#).unwrap();

        assert!(config.audit.enabled);
        assert_eq!(config.audit.queue_capacity, 1000);
    }

    #[test]
    fn parses_full_json() {
        let config =
            AppConfig::from_json_str(r#"{"audit": {"enabled": true, "queue_capacity": 50}}"#)
                .unwrap();

        assert!(config.audit.enabled);
        assert_eq!(config.audit.queue_capacity, 50);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AppConfig::from_json_str("{audit").is_err());
    }
}
