use thiserror::Error;

/// Errors raised while sending a serialized click to the collector.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// No delivery mechanism exists in this context (no window, no navigator, etc.)
    #[error("Transport unavailable: {0}")]
    Unavailable(String),

    /// The browser refused to queue the request (e.g. sendBeacon returned false)
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The collector answered with a non-2xx status
    #[error("Collector responded with status {0}")]
    Status(u16),

    /// Network failure, CORS, abort, etc.
    #[error("Network error: {0}")]
    Network(String),
}

/// Errors in the click tracking pipeline.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Failed to serialize click event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A banner's close behavior threw.
#[derive(Debug, Clone, Error)]
pub enum DismissError {
    #[error("Failed to close banner {target}: {reason}")]
    Close { target: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unsupported selector syntax: {0}")]
    Unsupported(String),
}
