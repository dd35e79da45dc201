use crate::error::Result;
use async_trait::async_trait;

pub(crate) mod browser;
pub(crate) mod http;

/// A way to obtain the rendered text of the trending page.
#[async_trait]
pub trait PageAcquirer: Send + Sync {
    /// Full visible text of the page body.
    async fn acquire(&self) -> Result<String>;

    fn name(&self) -> &'static str;
}
