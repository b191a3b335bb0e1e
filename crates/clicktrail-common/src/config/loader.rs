use super::schema::ClickTrailConfig;
use crate::selector::join_css;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse and validate a JSON config, as handed over by the page.
    pub fn from_json(content: &str) -> Result<ClickTrailConfig, ConfigError> {
        let config: ClickTrailConfig = serde_json::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Parse and validate a YAML config file's contents.
    pub fn from_yaml(content: &str) -> Result<ClickTrailConfig, ConfigError> {
        let config: ClickTrailConfig = serde_yaml::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &ClickTrailConfig) -> Result<(), ConfigError> {
        let tracker = &config.tracker;
        if tracker.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("tracker.endpoint is empty".into()));
        }
        if tracker.selectors.is_empty() {
            return Err(ConfigError::Invalid("tracker.selectors is empty".into()));
        }
        if let Some(pos) = tracker.selectors.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "tracker.selectors[{}] is empty",
                pos
            )));
        }
        if config.banners.selector.trim().is_empty() {
            return Err(ConfigError::Invalid("banners.selector is empty".into()));
        }
        if config.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown logging.level '{}'",
                config.logging.level
            )));
        }
        Ok(())
    }
}

impl ClickTrailConfig {
    /// The tracked selectors as one CSS selector group.
    pub fn tracked_css(&self) -> String {
        join_css(self.tracker.selectors.as_slice())
    }

    pub fn log_level(&self) -> tracing::Level {
        self.logging
            .level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{BindingMode, DeliveryMode};

    #[test]
    fn test_default_values() {
        let config = ClickTrailConfig::default();
        assert!(config.tracker.enabled);
        assert_eq!(config.tracker.endpoint, "/api/track-click");
        assert_eq!(config.tracker.delivery, DeliveryMode::FetchKeepalive);
        assert_eq!(config.tracker.binding, BindingMode::PerElement);
        assert_eq!(config.banners.selector, ".alert");
        assert_eq!(config.banners.delay_ms, 4000);
        assert_eq!(config.log_level(), tracing::Level::INFO);
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = ConfigLoader::from_json("{}").unwrap();
        assert_eq!(config, ClickTrailConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = ConfigLoader::from_json(
            r#"{"tracker": {"delivery": "beacon", "binding": "delegated",
                "labels": {"contact_label": "Chat"}},
                "banners": {"delay_ms": 2500}}"#,
        )
        .unwrap();

        assert_eq!(config.tracker.delivery, DeliveryMode::Beacon);
        assert_eq!(config.tracker.binding, BindingMode::Delegated);
        assert_eq!(config.tracker.labels.contact_label, "Chat");
        assert_eq!(config.tracker.labels.contact_marker, "whatsapp-float");
        assert_eq!(config.banners.delay_ms, 2500);
        assert_eq!(config.banners.selector, ".alert");
    }

    #[test]
    fn test_yaml_replaces_selectors() {
        let config = ConfigLoader::from_yaml(
            r#"
tracker:
  endpoint: /collect
  selectors:
    - a
    - ".cta"
logging:
  level: debug
  ready_message: "Site loaded"
"#,
        )
        .unwrap();

        assert_eq!(config.tracker.endpoint, "/collect");
        assert_eq!(config.tracked_css(), "a, .cta");
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(config.logging.ready_message.as_deref(), Some("Site loaded"));
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            r#"{"tracker": {"endpoint": " "}}"#,
            r#"{"tracker": {"selectors": []}}"#,
            r#"{"tracker": {"selectors": ["a", ""]}}"#,
            r#"{"banners": {"selector": ""}}"#,
            r#"{"logging": {"level": "loud"}}"#,
        ];
        for case in cases {
            assert!(
                matches!(ConfigLoader::from_json(case), Err(ConfigError::Invalid(_))),
                "expected {case} to be invalid"
            );
        }
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            ConfigLoader::from_json("{"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ConfigLoader::from_yaml("tracker: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            ConfigLoader::from_json(r#"{"tracker": {"delivery": "carrier_pigeon"}}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
