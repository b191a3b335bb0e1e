//! Label Derivation
//!
//! Turns a clicked element into the human-readable name reported to the
//! collector. The fallback chain is ordered and the first non-empty source wins:
//!
//! 1. visible text (trimmed)
//! 2. `title`
//! 3. `aria-label`
//! 4. the contact label, for the floating contact element
//! 5. link prefix + raw `href`, for hyperlinks
//! 6. the unnamed fallback
//!
//! Step 4 only applies when 1-3 found nothing, so a titled contact button keeps
//! its title.

use crate::element::ElementView;
use crate::protocol::ClickEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRules {
    /// Class marking the icon-only floating contact element.
    #[serde(default = "default_contact_marker")]
    pub contact_marker: String,
    #[serde(default = "default_contact_label")]
    pub contact_label: String,
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,
    #[serde(default = "default_unnamed_label")]
    pub unnamed_label: String,
    /// Destination reported for elements without an `href`.
    #[serde(default = "default_local_action")]
    pub local_action: String,
}

impl Default for LabelRules {
    fn default() -> Self {
        Self {
            contact_marker: default_contact_marker(),
            contact_label: default_contact_label(),
            link_prefix: default_link_prefix(),
            unnamed_label: default_unnamed_label(),
            local_action: default_local_action(),
        }
    }
}

fn default_contact_marker() -> String {
    "whatsapp-float".to_string()
}

fn default_contact_label() -> String {
    "Floating WhatsApp Contact".to_string()
}

fn default_link_prefix() -> String {
    "Link: ".to_string()
}

fn default_unnamed_label() -> String {
    "Unnamed Button (Icon/Image)".to_string()
}

fn default_local_action() -> String {
    "Local Action".to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn derive_label(element: &impl ElementView, rules: &LabelRules) -> String {
    let text = element.visible_text();
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    if let Some(title) = non_empty(element.attribute("title")) {
        return title;
    }
    if let Some(aria) = non_empty(element.attribute("aria-label")) {
        return aria;
    }

    if element.has_class(&rules.contact_marker) {
        return rules.contact_label.clone();
    }

    if element.has_link_target() {
        let href = element.attribute("href").unwrap_or_default();
        return format!("{}{}", rules.link_prefix, href);
    }

    rules.unnamed_label.clone()
}

pub fn derive_destination(element: &impl ElementView, rules: &LabelRules) -> String {
    non_empty(element.attribute("href")).unwrap_or_else(|| rules.local_action.clone())
}

pub fn build_event(element: &impl ElementView, page_path: &str, rules: &LabelRules) -> ClickEvent {
    ClickEvent {
        button_label: derive_label(element, rules),
        origin_page: page_path.to_string(),
        destination_url: derive_destination(element, rules),
    }
}
