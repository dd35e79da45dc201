use super::PageAcquirer;
use crate::error::{HotboardError, Result};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// CSS class of the dynamically loaded trending rows. The page counts as
/// ready once at least one is present.
const READY_SELECTOR: &str = ".list-item";

const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Primary acquirer: renders the page in headless Chromium so the
/// JS-populated board lists are present in the body text.
pub struct BrowserAcquirer {
    url: String,
    user_agent: String,
    wait_timeout: Duration,
}

impl BrowserAcquirer {
    pub fn new(
        url: impl Into<String>,
        user_agent: impl Into<String>,
        wait_timeout: Duration,
    ) -> Self {
        Self {
            url: url.into(),
            user_agent: user_agent.into(),
            wait_timeout,
        }
    }

    async fn launch(&self) -> Result<(Browser, JoinHandle<()>)> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(Duration::from_secs(30))
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--window-size=1920,1080")
            .build()
            .map_err(HotboardError::Browser)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| HotboardError::Browser(e.to_string()))?;

        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok((browser, events))
    }

    async fn read_page(&self, browser: &Browser) -> Result<String> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| HotboardError::Browser(e.to_string()))?;

        page.set_user_agent(self.user_agent.as_str())
            .await
            .map_err(|e| HotboardError::Browser(e.to_string()))?;

        page.goto(self.url.as_str())
            .await
            .map_err(|e| HotboardError::Browser(e.to_string()))?;

        self.wait_for_items(&page).await?;

        page.evaluate("document.body.innerText")
            .await
            .map_err(|e| HotboardError::Browser(e.to_string()))?
            .into_value::<String>()
            .map_err(|e| HotboardError::Browser(e.to_string()))
    }

    /// Polls for the readiness selector, bounded by `wait_timeout`.
    async fn wait_for_items(&self, page: &Page) -> Result<()> {
        tokio::time::timeout(self.wait_timeout, async {
            loop {
                if page.find_element(READY_SELECTOR).await.is_ok() {
                    break;
                }
                tokio::time::sleep(READY_POLL_INTERVAL).await;
            }
        })
        .await
        .map_err(|_| {
            HotboardError::Timeout(format!(
                "no {READY_SELECTOR} element within {:?}",
                self.wait_timeout
            ))
        })
    }
}

#[async_trait]
impl PageAcquirer for BrowserAcquirer {
    async fn acquire(&self) -> Result<String> {
        let (mut browser, events) = self.launch().await?;

        // The session must be released on every exit path, so the page work
        // runs in its own call whose result is held until after close.
        let result = self.read_page(&browser).await;

        if let Err(e) = browser.close().await {
            debug!("Browser close failed: {e}");
        }
        let _ = browser.wait().await;
        events.abort();

        result
    }

    fn name(&self) -> &'static str {
        "browser"
    }
}
