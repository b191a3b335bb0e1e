//! Transport Abstraction
//!
//! The single point where a click report leaves the page. Browser builds
//! implement it with `fetch`/`sendBeacon`; tests use recording mocks.

use crate::error::TransportError;

/// What the transport knows about a send that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryReceipt {
    /// HTTP status, when the mechanism exposes one. Beacons never do.
    pub status: Option<u16>,
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait Transport {
    /// POST `body` to `endpoint`. Must survive the page unloading mid-flight.
    async fn post(
        &self,
        endpoint: &str,
        content_type: &str,
        body: String,
    ) -> Result<DeliveryReceipt, TransportError>;
}
