use crate::error::Result;

/// Persistence seam for the rendered artifacts.
pub trait Storage: Send + Sync {
    fn save_report(&self, html: &str) -> Result<()>;
    fn save_snapshot(&self, json: &str) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const REPORT: &'static str = "index.html";
    pub const SNAPSHOT: &'static str = "data.json";
}
