use chrono::Local;
use serde::{Deserialize, Serialize};

/// Hard cap on how many entries a board keeps per run.
pub const MAX_ITEMS: usize = 10;

/// A single trending entry as displayed on the aggregator page.
///
/// `url` is part of the persisted shape but stays empty under the text
/// extraction strategy, which has no link information to work with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedItem {
    pub title: String,
    pub heat: String,
    pub url: String,
}

/// Everything one run scraped, plus when, plus the acquisition error if
/// no page text could be obtained at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub zhihu: Vec<RankedItem>,
    pub weibo: Vec<RankedItem>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchResult {
    pub fn new(zhihu: Vec<RankedItem>, weibo: Vec<RankedItem>) -> Self {
        Self {
            zhihu,
            weibo,
            timestamp: Local::now().to_rfc3339(),
            error: None,
        }
    }

    /// Degraded result for a run where both acquisition paths failed.
    pub fn empty_with_error(message: String) -> Self {
        Self {
            zhihu: Vec::new(),
            weibo: Vec::new(),
            timestamp: Local::now().to_rfc3339(),
            error: Some(message),
        }
    }
}

/// Render output for one run; regenerated wholesale every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub html: String,
    pub json: String,
}
