//! Element View
//!
//! The minimal read-only surface of a page element that label derivation and
//! selector matching need. The browser crate implements it over live DOM
//! elements; `ElementSnapshot` implements it over captured page data.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

pub trait ElementView {
    /// Lowercase tag name (`a`, `button`, ...).
    fn tag_name(&self) -> String;

    /// Rendered text, untrimmed.
    fn visible_text(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    /// True when the element is a hyperlink with an `href` attribute.
    fn has_link_target(&self) -> bool {
        matches!(self.tag_name().as_str(), "a" | "area") && self.attribute("href").is_some()
    }
}

/// Filters out null attribute values, which page captures emit for missing attributes.
fn deserialize_nullable_string_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: HashMap<String, Option<String>> = HashMap::deserialize(deserializer)?;
    Ok(map
        .into_iter()
        .filter_map(|(k, v)| v.map(|val| (k, val)))
        .collect())
}

/// A captured element, as produced by a page capture or written by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub tag: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string_map")]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl ElementSnapshot {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }
}

impl ElementView for ElementSnapshot {
    fn tag_name(&self) -> String {
        self.tag.to_ascii_lowercase()
    }

    fn visible_text(&self) -> String {
        self.text.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn has_class(&self, class: &str) -> bool {
        // Captures sometimes carry the raw `class` attribute instead of a list.
        self.classes.iter().any(|c| c == class)
            || self
                .attributes
                .get("class")
                .is_some_and(|raw| raw.split_ascii_whitespace().any(|c| c == class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_attributes_dropped() {
        let snapshot: ElementSnapshot = serde_json::from_str(
            r#"{"tag": "A", "text": "Home", "attributes": {"href": "/", "title": null}}"#,
        )
        .unwrap();

        assert_eq!(snapshot.tag_name(), "a");
        assert_eq!(snapshot.attribute("href").as_deref(), Some("/"));
        assert_eq!(snapshot.attribute("title"), None);
    }

    #[test]
    fn test_link_target_requires_href() {
        assert!(ElementSnapshot::new("a").with_attr("href", "").has_link_target());
        assert!(!ElementSnapshot::new("a").has_link_target());
        assert!(!ElementSnapshot::new("button").with_attr("href", "/x").has_link_target());
    }

    #[test]
    fn test_class_from_raw_attribute() {
        let snapshot = ElementSnapshot::new("a").with_attr("class", "btn  whatsapp-float");
        assert!(snapshot.has_class("whatsapp-float"));
        assert!(!snapshot.has_class("whatsapp"));
    }
}
