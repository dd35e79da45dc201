mod acquirers;
mod extract;
mod storage;

pub use acquirers::{browser::BrowserAcquirer, http::HttpAcquirer, PageAcquirer};
pub use extract::{text_pattern::TextPatternExtractor, TrendExtractor};
pub use storage::fs_store::FileSystemStore;
