use crate::error::{HotboardError, Result};
use crate::infrastructure::PageAcquirer;
use tracing::{info, warn};

/// Tries each configured acquirer in order until one produces page text.
pub struct AcquisitionService {
    acquirers: Vec<Box<dyn PageAcquirer>>,
}

impl AcquisitionService {
    pub fn new(acquirers: Vec<Box<dyn PageAcquirer>>) -> Self {
        info!("Created new Acquisition service");
        Self { acquirers }
    }

    /// Page text plus whether a non-primary acquirer supplied it. Fails
    /// only when every acquirer failed, carrying the last error.
    pub async fn acquire(&self) -> Result<(String, bool)> {
        let mut last_error = None;

        for (attempt, acquirer) in self.acquirers.iter().enumerate() {
            info!("Acquiring page text via {} acquirer", acquirer.name());
            match acquirer.acquire().await {
                Ok(text) => return Ok((text, attempt > 0)),
                Err(e) => {
                    warn!("{} acquirer failed: {e}", acquirer.name());
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| HotboardError::Other("no page acquirers configured".to_string())))
    }
}
