use crate::element::ElementView;
use crate::error::{TrackError, TransportError};
use crate::label::{LabelRules, build_event};
use crate::protocol::{CONTENT_TYPE, ClickEvent, DEFAULT_ENDPOINT};
use crate::transport::{DeliveryReceipt, Transport};
use tracing::{debug, error, warn};

/// A click event already serialized inside the click handler, ready to send.
#[derive(Debug, Clone)]
pub struct PreparedClick {
    pub event: ClickEvent,
    pub body: String,
}

#[derive(Debug)]
pub enum ReportOutcome {
    Delivered(DeliveryReceipt),
    Failed(TrackError),
}

impl ReportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ReportOutcome::Delivered(_))
    }
}

/// Builds click events and ships them through a `Transport`.
///
/// Delivery is best effort: no retries, no ordering between clicks, and no
/// failure is ever propagated to the caller. Outcomes are returned only so
/// they can be observed.
pub struct ClickReporter<T> {
    transport: T,
    endpoint: String,
    rules: LabelRules,
}

impl<T: Transport> ClickReporter<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            rules: LabelRules::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_rules(mut self, rules: LabelRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Derive and serialize the event synchronously, while the element is
    /// still in the page.
    pub fn prepare(
        &self,
        element: &impl ElementView,
        page_path: &str,
    ) -> Result<PreparedClick, TrackError> {
        let event = build_event(element, page_path, &self.rules);
        let body = event.to_json()?;
        Ok(PreparedClick { event, body })
    }

    pub async fn deliver(&self, click: PreparedClick) -> ReportOutcome {
        let label = click.event.button_label;
        match self
            .transport
            .post(&self.endpoint, CONTENT_TYPE, click.body)
            .await
        {
            Ok(receipt) => {
                debug!(label = %label, status = ?receipt.status, "click reported");
                ReportOutcome::Delivered(receipt)
            }
            Err(e) => {
                let e = TrackError::from(e);
                match &e {
                    TrackError::Transport(TransportError::Status(status)) => {
                        warn!(label = %label, status, "collector rejected click report")
                    }
                    _ => error!(label = %label, "silent tracker error: {}", e),
                }
                ReportOutcome::Failed(e)
            }
        }
    }

    pub async fn report(&self, element: &impl ElementView, page_path: &str) -> ReportOutcome {
        match self.prepare(element, page_path) {
            Ok(click) => self.deliver(click).await,
            Err(e) => {
                error!("silent tracker error: {}", e);
                ReportOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementSnapshot;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<(String, String, String)>>,
        fail_with: Option<TransportError>,
    }

    #[async_trait::async_trait]
    impl Transport for RecordingTransport {
        async fn post(
            &self,
            endpoint: &str,
            content_type: &str,
            body: String,
        ) -> Result<DeliveryReceipt, TransportError> {
            self.sent.lock().unwrap().push((
                endpoint.to_string(),
                content_type.to_string(),
                body,
            ));
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(DeliveryReceipt { status: Some(204) }),
            }
        }
    }

    fn nav_link() -> ElementSnapshot {
        ElementSnapshot::new("a")
            .with_class("nav-link")
            .with_text("Pricing")
            .with_attr("href", "/pricing")
    }

    #[tokio::test]
    async fn test_report_sends_event() {
        let reporter = ClickReporter::new(RecordingTransport::default());

        let outcome = reporter.report(&nav_link(), "/home").await;
        assert!(outcome.is_delivered());

        let sent = reporter.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (endpoint, content_type, body) = &sent[0];
        assert_eq!(endpoint, "/api/track-click");
        assert_eq!(content_type, "application/json");

        let event: ClickEvent = serde_json::from_str(body).unwrap();
        assert_eq!(
            event,
            ClickEvent {
                button_label: "Pricing".to_string(),
                origin_page: "/home".to_string(),
                destination_url: "/pricing".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_swallowed() {
        let transport = RecordingTransport {
            fail_with: Some(TransportError::Network("offline".to_string())),
            ..Default::default()
        };
        let reporter = ClickReporter::new(transport);

        let outcome = reporter.report(&nav_link(), "/home").await;
        assert!(matches!(
            outcome,
            ReportOutcome::Failed(TrackError::Transport(TransportError::Network(_)))
        ));
        // Attempted once, never retried.
        assert_eq!(reporter.transport().sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_swallowed() {
        let transport = RecordingTransport {
            fail_with: Some(TransportError::Status(500)),
            ..Default::default()
        };
        let reporter = ClickReporter::new(transport).with_endpoint("/collect");

        let outcome = reporter.report(&ElementSnapshot::new("button"), "/").await;
        assert!(!outcome.is_delivered());
        assert_eq!(reporter.transport().sent.lock().unwrap()[0].0, "/collect");
    }

    #[tokio::test]
    async fn test_each_click_is_independent() {
        let reporter = ClickReporter::new(RecordingTransport::default());

        let first = reporter.prepare(&nav_link(), "/home").unwrap();
        let second = reporter
            .prepare(&ElementSnapshot::new("button").with_attr("aria-label", "Menu"), "/home")
            .unwrap();

        reporter.deliver(second).await;
        reporter.deliver(first).await;

        let sent = reporter.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].2.contains("\"botao\":\"Menu\""));
        assert!(sent[0].2.contains("\"url_destino\":\"Local Action\""));
    }
}
