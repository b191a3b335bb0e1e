use clicktrail_common::ElementView;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// `ElementView` over a live DOM element.
pub struct DomElement<'a>(pub &'a Element);

impl ElementView for DomElement<'_> {
    fn tag_name(&self) -> String {
        self.0.tag_name().to_ascii_lowercase()
    }

    fn visible_text(&self) -> String {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(html) => html.inner_text(),
            None => self.0.text_content().unwrap_or_default(),
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window in this context"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document in this context"))
}

/// Path component of the current page URL.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Snapshot of every element currently matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Short `tag#id.class` description for logs.
pub fn describe(element: &Element) -> String {
    let mut out = element.tag_name().to_ascii_lowercase();
    let id = element.id();
    if !id.is_empty() {
        out.push('#');
        out.push_str(&id);
    }
    let classes = element.class_name();
    for class in classes.split_ascii_whitespace() {
        out.push('.');
        out.push_str(class);
    }
    out
}

/// Best-effort text for a thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.to_string());
    }
    format!("{:?}", value)
}
