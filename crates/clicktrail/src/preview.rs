//! Offline preview of what the tracker would report for a captured page.

use clicktrail_common::config::schema::ClickTrailConfig;
use clicktrail_common::selector::SelectorList;
use clicktrail_common::{ClickEvent, ElementSnapshot, SelectorError, build_event};
use tracing::debug;

/// One tracked element and the event a click on it would send.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub index: usize,
    pub event: ClickEvent,
}

/// Keep the elements the tracker would bind and build their click events,
/// in document order.
pub fn preview(
    config: &ClickTrailConfig,
    elements: &[ElementSnapshot],
    page_path: &str,
) -> Result<Vec<PreviewEntry>, SelectorError> {
    let selectors = SelectorList::parse(config.tracker.selectors.as_slice())?;
    let rules = &config.tracker.labels;

    let entries: Vec<PreviewEntry> = elements
        .iter()
        .enumerate()
        .filter(|(_, el)| selectors.matches(*el))
        .map(|(index, el)| PreviewEntry {
            index,
            event: build_event(el, page_path, rules),
        })
        .collect();

    debug!(
        total = elements.len(),
        tracked = entries.len(),
        "preview computed"
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_filters_untracked() {
        let elements = vec![
            ElementSnapshot::new("a").with_text("Home").with_attr("href", "/"),
            ElementSnapshot::new("div").with_class("hero"),
            ElementSnapshot::new("button").with_attr("aria-label", "Open menu"),
            ElementSnapshot::new("span").with_class("btn-pricing").with_text("Buy"),
        ];

        let entries = preview(&ClickTrailConfig::default(), &elements, "/").unwrap();
        let labels: Vec<_> = entries.iter().map(|e| e.event.button_label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Open menu", "Buy"]);
        assert_eq!(entries[1].index, 2);
        assert_eq!(entries[2].event.destination_url, "Local Action");
    }

    #[test]
    fn test_preview_rejects_complex_selectors() {
        let mut config = ClickTrailConfig::default();
        config.tracker.selectors = vec!["nav > a".to_string()];
        assert!(preview(&config, &[], "/").is_err());
    }
}
