use crate::domain::storage::Storage;
use crate::domain::{Board, FetchResult};
use crate::error::Result;
use crate::infrastructure::TrendExtractor;
use crate::services::{AcquisitionService, RenderService};
use std::sync::Arc;
use tracing::info;

pub struct TrendingService {
    acquisition: AcquisitionService,
    extractor: Box<dyn TrendExtractor>,
    renderer: RenderService,
    store: Arc<dyn Storage>,
}

impl TrendingService {
    pub fn new(
        acquisition: AcquisitionService,
        extractor: Box<dyn TrendExtractor>,
        renderer: RenderService,
        store: Arc<dyn Storage + 'static>,
    ) -> Self {
        Self {
            acquisition,
            extractor,
            renderer,
            store,
        }
    }

    pub async fn run(&self) -> Result<()> {
        info!("Starting trending report pipeline");

        let result = self.fetch_boards().await;

        info!("{}: {} items", Board::Zhihu.display_name(), result.zhihu.len());
        info!("{}: {} items", Board::Weibo.display_name(), result.weibo.len());
        if let Some(error) = &result.error {
            info!("Acquisition error recorded: {error}");
        }

        let artifacts = self.renderer.render(&result)?;

        self.store.save_report(&artifacts.html)?;
        self.store.save_snapshot(&artifacts.json)?;
        info!("Report and snapshot written");

        Ok(())
    }

    /// Acquisition failure degrades to an empty result carrying the error
    /// message; only persistence failures abort the run.
    async fn fetch_boards(&self) -> FetchResult {
        match self.acquisition.acquire().await {
            Ok((page_text, used_fallback)) => {
                if used_fallback {
                    info!("Page text served by the fallback acquirer");
                }
                let zhihu = self.extractor.extract(&page_text, Board::Zhihu);
                let weibo = self.extractor.extract(&page_text, Board::Weibo);
                FetchResult::new(zhihu, weibo)
            }
            Err(e) => FetchResult::empty_with_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HotboardError;
    use crate::infrastructure::{PageAcquirer, TextPatternExtractor};
    use async_trait::async_trait;
    use std::sync::Mutex;

    const PAGE: &str = "今日热榜\n知乎\n知乎热榜\n1 示例标题一 3.5万热度\n2 示例标题二 2.1万热度\n微博\n微博热搜\n1 热搜话题甲 120万\n微信\n微信热文\n";

    struct StaticAcquirer(&'static str);

    #[async_trait]
    impl PageAcquirer for StaticAcquirer {
        async fn acquire(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    struct FailingAcquirer(&'static str);

    #[async_trait]
    impl PageAcquirer for FailingAcquirer {
        async fn acquire(&self) -> Result<String> {
            Err(HotboardError::Browser(self.0.to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        report: Mutex<Option<String>>,
        snapshot: Mutex<Option<String>>,
    }

    impl Storage for MemoryStore {
        fn save_report(&self, html: &str) -> Result<()> {
            *self.report.lock().unwrap() = Some(html.to_string());
            Ok(())
        }

        fn save_snapshot(&self, json: &str) -> Result<()> {
            *self.snapshot.lock().unwrap() = Some(json.to_string());
            Ok(())
        }
    }

    fn service_with(
        acquirers: Vec<Box<dyn PageAcquirer>>,
        store: Arc<MemoryStore>,
    ) -> TrendingService {
        TrendingService::new(
            AcquisitionService::new(acquirers),
            Box::new(TextPatternExtractor),
            RenderService::new(),
            store,
        )
    }

    #[tokio::test]
    async fn scraped_page_ends_up_in_both_artifacts() {
        let store = Arc::new(MemoryStore::default());
        let service = service_with(vec![Box::new(StaticAcquirer(PAGE))], store.clone());

        service.run().await.unwrap();

        let html = store.report.lock().unwrap().clone().unwrap();
        let json = store.snapshot.lock().unwrap().clone().unwrap();

        assert!(html.contains("示例标题一"));
        assert!(html.contains("热搜话题甲"));
        assert!(!html.contains("暂无数据"));
        assert!(json.contains("\"示例标题二\""));
        assert!(!json.contains("\"error\""));
    }

    #[tokio::test]
    async fn failed_acquisition_still_writes_degraded_artifacts() {
        let store = Arc::new(MemoryStore::default());
        let service = service_with(
            vec![
                Box::new(FailingAcquirer("launch failed")),
                Box::new(FailingAcquirer("connection refused")),
            ],
            store.clone(),
        );

        service.run().await.unwrap();

        let html = store.report.lock().unwrap().clone().unwrap();
        let json = store.snapshot.lock().unwrap().clone().unwrap();

        assert_eq!(html.matches("暂无数据").count(), 2);
        assert!(json.contains("\"error\""));
        assert!(json.contains("connection refused"));
        assert!(json.contains("\"zhihu\": []"));
        assert!(json.contains("\"weibo\": []"));
    }
}
