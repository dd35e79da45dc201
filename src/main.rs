use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{
    BrowserAcquirer, FileSystemStore, HttpAcquirer, PageAcquirer, TextPatternExtractor,
};
use crate::services::{AcquisitionService, RenderService, TrendingService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    let filter =
        EnvFilter::try_new(&config.args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut acquirers: Vec<Box<dyn PageAcquirer>> = Vec::new();
    if !config.args.skip_browser {
        acquirers.push(Box::new(BrowserAcquirer::new(
            config::TOPHUB_URL,
            config::USER_AGENT,
            config::ACQUIRE_TIMEOUT,
        )));
    }
    acquirers.push(Box::new(HttpAcquirer::new(
        config.http_client.clone(),
        config::TOPHUB_URL,
        config::ACQUIRE_TIMEOUT,
    )));

    let store = Arc::new(FileSystemStore::new(config.output_dir()));
    let service = TrendingService::new(
        AcquisitionService::new(acquirers),
        Box::new(TextPatternExtractor),
        RenderService::new(),
        store,
    );

    service.run().await?;

    info!("Trending report generated successfully!");
    Ok(())
}
