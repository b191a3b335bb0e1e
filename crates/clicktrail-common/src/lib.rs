pub mod config;
pub mod dismiss;
pub mod element;
pub mod error;
pub mod label;
pub mod protocol;
pub mod reporter;
pub mod selector;
pub mod transport;

pub use config::schema::ClickTrailConfig;
pub use element::{ElementSnapshot, ElementView};
pub use error::{DismissError, SelectorError, TrackError, TransportError};
pub use label::{LabelRules, build_event, derive_destination, derive_label};
pub use protocol::ClickEvent;
pub use reporter::{ClickReporter, PreparedClick, ReportOutcome};
pub use transport::{DeliveryReceipt, Transport};
