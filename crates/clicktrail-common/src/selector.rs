//! Selector Policy
//!
//! Which elements get click tracking and which get auto-dismissed. In the
//! browser the selectors go straight to `querySelectorAll`/`closest`; natively
//! `SelectorList` matches them against `ElementView`s, which only supports the
//! simple forms the policy uses (`tag`, `.class`, `tag.class`, `*`).

use crate::element::ElementView;
use crate::error::SelectorError;

pub const DEFAULT_TRACKED_SELECTORS: &[&str] = &[
    ".btn",
    ".btn-merlo",
    ".btn-pricing",
    ".nav-link",
    ".navbar-brand",
    ".whatsapp-float",
    "a",
    "button",
];

pub const DEFAULT_BANNER_SELECTOR: &str = ".alert";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleSelector {
    /// `None` matches any tag.
    tag: Option<String>,
    classes: Vec<String>,
}

impl SimpleSelector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let is_ident = |s: &str| {
            !s.is_empty()
                && s
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        let mut parts = input.split('.');
        let head = parts.next().unwrap_or_default();
        let tag = match head {
            "" | "*" => None,
            t if is_ident(t) => Some(t.to_ascii_lowercase()),
            _ => return Err(SelectorError::Unsupported(input.to_string())),
        };

        let mut classes = Vec::new();
        for class in parts {
            if !is_ident(class) {
                return Err(SelectorError::Unsupported(input.to_string()));
            }
            classes.push(class.to_string());
        }

        Ok(Self { tag, classes })
    }

    pub fn matches(&self, element: &impl ElementView) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag_name() != *tag {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

/// A compiled selector group, equivalent to a comma-joined CSS selector.
#[derive(Debug, Clone)]
pub struct SelectorList {
    sources: Vec<String>,
    compiled: Vec<SimpleSelector>,
}

impl SelectorList {
    pub fn parse<S: AsRef<str>>(selectors: &[S]) -> Result<Self, SelectorError> {
        if selectors.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut sources = Vec::with_capacity(selectors.len());
        let mut compiled = Vec::with_capacity(selectors.len());
        for selector in selectors {
            let selector = selector.as_ref();
            compiled.push(SimpleSelector::parse(selector)?);
            sources.push(selector.trim().to_string());
        }
        Ok(Self { sources, compiled })
    }

    pub fn tracked_defaults() -> Self {
        // Defaults are simple selectors and always compile.
        Self {
            sources: DEFAULT_TRACKED_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            compiled: DEFAULT_TRACKED_SELECTORS
                .iter()
                .filter_map(|s| SimpleSelector::parse(s).ok())
                .collect(),
        }
    }

    pub fn matches(&self, element: &impl ElementView) -> bool {
        self.compiled.iter().any(|s| s.matches(element))
    }

    /// The selector group as one CSS string, for DOM queries.
    pub fn to_css(&self) -> String {
        self.sources.join(", ")
    }
}

/// Joins selectors into a CSS selector group without validating them.
pub fn join_css<S: AsRef<str>>(selectors: &[S]) -> String {
    selectors
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementSnapshot;

    #[test]
    fn test_default_policy() {
        let list = SelectorList::tracked_defaults();

        assert!(list.matches(&ElementSnapshot::new("a")));
        assert!(list.matches(&ElementSnapshot::new("BUTTON")));
        assert!(list.matches(&ElementSnapshot::new("div").with_class("whatsapp-float")));
        assert!(list.matches(&ElementSnapshot::new("span").with_class("btn-pricing")));
        assert!(!list.matches(&ElementSnapshot::new("div").with_class("card")));
        assert!(!list.matches(&ElementSnapshot::new("input")));
    }

    #[test]
    fn test_css_rendering() {
        let list = SelectorList::tracked_defaults();
        assert_eq!(
            list.to_css(),
            ".btn, .btn-merlo, .btn-pricing, .nav-link, .navbar-brand, .whatsapp-float, a, button"
        );
        assert_eq!(join_css(&["a", " ", ".x "]), "a, .x");
    }

    #[test]
    fn test_compound_selector() {
        let sel = SimpleSelector::parse("a.btn.primary").unwrap();
        assert!(sel.matches(&ElementSnapshot::new("a").with_class("btn").with_class("primary")));
        assert!(!sel.matches(&ElementSnapshot::new("a").with_class("btn")));
        assert!(!sel.matches(&ElementSnapshot::new("button").with_class("btn").with_class("primary")));
    }

    #[test]
    fn test_wildcard() {
        let sel = SimpleSelector::parse("*").unwrap();
        assert!(sel.matches(&ElementSnapshot::new("section")));
    }

    #[test]
    fn test_unsupported_syntax() {
        for input in ["nav > a", "#logo", "a[href]", "a:hover", ".", "a..b"] {
            assert!(
                matches!(SimpleSelector::parse(input), Err(SelectorError::Unsupported(_))),
                "expected {input} to be rejected"
            );
        }
        assert_eq!(SimpleSelector::parse("  "), Err(SelectorError::Empty));
        assert!(SelectorList::parse::<&str>(&[]).is_err());
    }
}
