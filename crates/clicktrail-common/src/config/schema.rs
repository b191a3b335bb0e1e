use crate::label::LabelRules;
use crate::protocol::DEFAULT_ENDPOINT;
use crate::selector::{DEFAULT_BANNER_SELECTOR, DEFAULT_TRACKED_SELECTORS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickTrailConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub banners: BannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How click reports leave the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// `fetch` with `keepalive: true`; reports non-2xx responses.
    #[default]
    FetchKeepalive,
    /// `navigator.sendBeacon`; no response is ever observed.
    Beacon,
}

/// How click listeners are attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingMode {
    /// One listener per element present when the page becomes ready.
    #[default]
    PerElement,
    /// One listener on the document, matched at dispatch time. Covers
    /// elements inserted later.
    Delegated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_selectors")]
    pub selectors: Vec<String>,
    #[serde(default)]
    pub delivery: DeliveryMode,
    #[serde(default)]
    pub binding: BindingMode,
    #[serde(default)]
    pub labels: LabelRules,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            selectors: default_selectors(),
            delivery: DeliveryMode::default(),
            binding: BindingMode::default(),
            labels: LabelRules::default(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_selectors() -> Vec<String> {
    DEFAULT_TRACKED_SELECTORS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_banner_selector")]
    pub selector: String,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
    /// Remove a banner from the page when its close behavior throws.
    #[serde(default = "default_remove_on_close_failure")]
    pub remove_on_close_failure: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            selector: default_banner_selector(),
            delay_ms: default_delay_ms(),
            remove_on_close_failure: default_remove_on_close_failure(),
        }
    }
}

fn default_banner_selector() -> String {
    DEFAULT_BANNER_SELECTOR.to_string()
}

fn default_delay_ms() -> u32 {
    4000
}

fn default_remove_on_close_failure() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Logged once at info when the page has been wired up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_message: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ready_message: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
