//! Browser Transports
//!
//! Both mechanisms outlive the page: `fetch` with `keepalive` and
//! `navigator.sendBeacon` are allowed to finish after navigation starts.

use crate::dom::js_error_text;
use clicktrail_common::config::schema::DeliveryMode;
use clicktrail_common::{DeliveryReceipt, Transport, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Headers, RequestInit, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserTransport {
    FetchKeepalive,
    Beacon,
}

impl From<DeliveryMode> for BrowserTransport {
    fn from(mode: DeliveryMode) -> Self {
        match mode {
            DeliveryMode::FetchKeepalive => BrowserTransport::FetchKeepalive,
            DeliveryMode::Beacon => BrowserTransport::Beacon,
        }
    }
}

fn window() -> Result<web_sys::Window, TransportError> {
    web_sys::window().ok_or_else(|| TransportError::Unavailable("no window".to_string()))
}

async fn send_fetch(
    endpoint: &str,
    content_type: &str,
    body: String,
) -> Result<DeliveryReceipt, TransportError> {
    let window = window()?;

    let headers = Headers::new().map_err(|e| TransportError::Unavailable(js_error_text(&e)))?;
    headers
        .set("Content-Type", content_type)
        .map_err(|e| TransportError::Unavailable(js_error_text(&e)))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_keepalive(true);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let value = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
        .await
        .map_err(|e| TransportError::Network(js_error_text(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| TransportError::Network(js_error_text(&e)))?;

    if !response.ok() {
        return Err(TransportError::Status(response.status()));
    }
    Ok(DeliveryReceipt {
        status: Some(response.status()),
    })
}

fn send_beacon(
    endpoint: &str,
    content_type: &str,
    body: String,
) -> Result<DeliveryReceipt, TransportError> {
    let window = window()?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&body));
    let options = BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| TransportError::Unavailable(js_error_text(&e)))?;

    let queued = window
        .navigator()
        .send_beacon_with_opt_blob(endpoint, Some(&blob))
        .map_err(|e| TransportError::Network(js_error_text(&e)))?;
    if !queued {
        return Err(TransportError::Rejected(
            "sendBeacon refused to queue the report".to_string(),
        ));
    }
    Ok(DeliveryReceipt { status: None })
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn post(
        &self,
        endpoint: &str,
        content_type: &str,
        body: String,
    ) -> Result<DeliveryReceipt, TransportError> {
        match self {
            BrowserTransport::FetchKeepalive => send_fetch(endpoint, content_type, body).await,
            BrowserTransport::Beacon => send_beacon(endpoint, content_type, body),
        }
    }
}
