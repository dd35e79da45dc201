use super::PageAcquirer;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Fallback acquirer: plain GET plus text-node extraction. Misses whatever
/// the page only fills in client-side; the pattern parser tolerates that
/// by yielding fewer items.
pub struct HttpAcquirer {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpAcquirer {
    pub fn new(client: Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl PageAcquirer for HttpAcquirer {
    async fn acquire(&self) -> Result<String> {
        let body = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let document = Html::parse_document(&body);
        Ok(document.root_element().text().collect::<String>())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
