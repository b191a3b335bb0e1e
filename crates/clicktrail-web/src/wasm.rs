use crate::{banner, dom, logging, ready, tracker};
use clicktrail_common::config::{ConfigLoader, schema::ClickTrailConfig};
use tracing::{error, info};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ClickTrail {
    config: ClickTrailConfig,
}

#[wasm_bindgen]
impl ClickTrail {
    /// Create from an optional JSON config; defaults apply to anything omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ClickTrail, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => ConfigLoader::from_json(&json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => ClickTrailConfig::default(),
        };
        logging::init(config.log_level());
        Ok(Self { config })
    }

    /// Wire up banner dismissal and click tracking once the page is ready.
    pub fn install(&self) -> Result<(), JsValue> {
        let document = dom::document()?;
        let config = self.config.clone();
        let target = document.clone();

        ready::on_page_ready(&document, move || {
            if config.banners.enabled {
                if let Err(e) = banner::schedule_dismissal(config.banners.clone()) {
                    error!("banner dismissal not scheduled: {}", dom::js_error_text(&e));
                }
            }
            if config.tracker.enabled {
                if let Err(e) = tracker::install(&target, &config.tracker) {
                    error!("click tracking not attached: {}", dom::js_error_text(&e));
                }
            }
            if let Some(message) = &config.logging.ready_message {
                info!("{}", message);
            }
        })
    }

    /// The effective configuration as JSON.
    pub fn config(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {}", e)))
    }

    /// Get version information
    #[wasm_bindgen(js_name = getVersion)]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
