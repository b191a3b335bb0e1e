use crate::error::DismissError;
use tracing::{debug, warn};

/// Something on the page that can be told to close itself.
pub trait Dismissible {
    /// Short description for logs.
    fn describe(&self) -> String;

    fn close(&self) -> Result<(), DismissError>;
}

#[derive(Debug, Default)]
pub struct DismissReport {
    pub closed: usize,
    pub failed: Vec<DismissError>,
}

impl DismissReport {
    pub fn attempted(&self) -> usize {
        self.closed + self.failed.len()
    }
}

/// Close every banner in the batch. A failing banner never stops the rest.
pub fn dismiss_all<B, I>(banners: I) -> DismissReport
where
    B: Dismissible,
    I: IntoIterator<Item = B>,
{
    let mut report = DismissReport::default();
    for banner in banners {
        match banner.close() {
            Ok(()) => {
                debug!(banner = %banner.describe(), "banner dismissed");
                report.closed += 1;
            }
            Err(e) => {
                warn!("{}", e);
                report.failed.push(e);
            }
        }
    }
    report
}
