use crate::error::TrackError;
use serde::{Deserialize, Serialize};

/// Path the collector listens on.
pub const DEFAULT_ENDPOINT: &str = "/api/track-click";

/// Content type sent with every click report.
pub const CONTENT_TYPE: &str = "application/json";

/// Click report sent to the collector.
///
/// Field names on the wire are fixed by the collector's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(rename = "botao")]
    pub button_label: String,
    #[serde(rename = "pagina_origem")]
    pub origin_page: String,
    #[serde(rename = "url_destino")]
    pub destination_url: String,
}

impl ClickEvent {
    pub fn to_json(&self) -> Result<String, TrackError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_wire_field_names() {
        let event = ClickEvent {
            button_label: "Pricing".to_string(),
            origin_page: "/home".to_string(),
            destination_url: "/pricing".to_string(),
        };

        let value: Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "botao": "Pricing",
                "pagina_origem": "/home",
                "url_destino": "/pricing"
            })
        );
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let result = serde_json::from_str::<ClickEvent>(r#"{"label": "x"}"#);
        assert!(result.is_err());
    }
}
