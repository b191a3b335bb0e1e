//! Banner Auto-Dismissal
//!
//! One-shot timer. When it fires, every element matching the banner selector
//! at that moment is closed through Bootstrap's alert component. Banners added
//! afterwards are left alone.

use crate::dom::{self, describe, js_error_text};
use clicktrail_common::config::schema::BannerConfig;
use clicktrail_common::dismiss::{DismissReport, Dismissible, dismiss_all};
use clicktrail_common::DismissError;
use tracing::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    type BootstrapAlert;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Alert")]
    fn new(element: &Element) -> Result<BootstrapAlert, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn close(this: &BootstrapAlert) -> Result<(), JsValue>;
}

pub struct BannerElement {
    element: Element,
    remove_on_failure: bool,
}

impl BannerElement {
    pub fn new(element: Element, remove_on_failure: bool) -> Self {
        Self {
            element,
            remove_on_failure,
        }
    }
}

impl Dismissible for BannerElement {
    fn describe(&self) -> String {
        describe(&self.element)
    }

    fn close(&self) -> Result<(), DismissError> {
        let closed = BootstrapAlert::new(&self.element).and_then(|alert| alert.close());
        match closed {
            Ok(()) => Ok(()),
            Err(e) => {
                let reason = js_error_text(&e);
                if self.remove_on_failure {
                    debug!(banner = %self.describe(), "close failed, removing element: {}", reason);
                    self.element.remove();
                    return Ok(());
                }
                Err(DismissError::Close {
                    target: self.describe(),
                    reason,
                })
            }
        }
    }
}

/// Close all banners currently on the page.
pub fn dismiss_now(config: &BannerConfig) -> Result<DismissReport, JsValue> {
    let document = dom::document()?;
    let banners = dom::query_all(&document, &config.selector)?
        .into_iter()
        .map(|el| BannerElement::new(el, config.remove_on_close_failure));
    Ok(dismiss_all(banners))
}

/// Arm the one-shot dismissal timer.
pub fn schedule_dismissal(config: BannerConfig) -> Result<i32, JsValue> {
    let window = dom::window()?;
    let delay = i32::try_from(config.delay_ms).unwrap_or(i32::MAX);

    let callback = Closure::once_into_js(move || match dismiss_now(&config) {
        Ok(report) if report.failed.is_empty() => {
            debug!(closed = report.closed, "banners dismissed")
        }
        Ok(report) => warn!(
            closed = report.closed,
            failed = report.failed.len(),
            "some banners could not be dismissed"
        ),
        Err(e) => warn!("banner dismissal skipped: {}", js_error_text(&e)),
    });

    let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay,
    )?;
    info!(delay_ms = delay, "banner dismissal scheduled");
    Ok(handle)
}
