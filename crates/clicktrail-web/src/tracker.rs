use crate::dom::{self, DomElement, js_error_text};
use crate::transport::BrowserTransport;
use clicktrail_common::config::schema::{BindingMode, TrackerConfig};
use clicktrail_common::ClickReporter;
use std::rc::Rc;
use tracing::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

type Reporter = Rc<ClickReporter<BrowserTransport>>;

/// Report a click on `element`. Returns as soon as the request is issued.
///
/// The event is built synchronously; only delivery is deferred. Nothing here
/// touches the event's default action.
fn report_click(reporter: &Reporter, element: &Element) {
    let page = dom::current_path();
    let click = match reporter.prepare(&DomElement(element), &page) {
        Ok(click) => click,
        Err(e) => {
            error!("silent tracker error: {}", e);
            return;
        }
    };

    let reporter = Rc::clone(reporter);
    wasm_bindgen_futures::spawn_local(async move {
        reporter.deliver(click).await;
    });
}

/// One listener per element present now.
fn bind_elements(document: &Document, selector: &str, reporter: &Reporter) -> Result<usize, JsValue> {
    let elements = dom::query_all(document, selector)?;
    for element in &elements {
        let reporter = Rc::clone(reporter);
        let target = element.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            report_click(&reporter, &target);
        });
        element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        handler.forget();
    }
    Ok(elements.len())
}

/// One listener on the document, resolved to the nearest tracked ancestor of
/// the click target at dispatch time.
fn bind_delegated(document: &Document, selector: String, reporter: &Reporter) -> Result<(), JsValue> {
    let reporter = Rc::clone(reporter);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        match target.closest(&selector) {
            Ok(Some(element)) => report_click(&reporter, &element),
            Ok(None) => {}
            Err(e) => error!("silent tracker error: {}", js_error_text(&e)),
        }
    });
    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

pub fn install(document: &Document, config: &TrackerConfig) -> Result<(), JsValue> {
    let selector = clicktrail_common::selector::join_css(config.selectors.as_slice());
    let reporter: Reporter = Rc::new(
        ClickReporter::new(BrowserTransport::from(config.delivery))
            .with_endpoint(config.endpoint.clone())
            .with_rules(config.labels.clone()),
    );

    match config.binding {
        BindingMode::PerElement => {
            let bound = bind_elements(document, &selector, &reporter)?;
            info!(elements = bound, "click tracking attached");
        }
        BindingMode::Delegated => {
            bind_delegated(document, selector, &reporter)?;
            info!("click tracking delegated to document");
        }
    }
    debug!(endpoint = %reporter.endpoint(), "click reports go to collector");
    Ok(())
}
