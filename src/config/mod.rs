use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub(crate) mod cli;

/// Aggregator page both trending boards are scraped from.
pub const TOPHUB_URL: &str = "https://tophub.today/c/news";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Bound on the browser readiness wait and on the fallback request.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { args, http_client })
    }

    /// Where the two artifacts land. Without `--output-dir` this is the
    /// executable's own directory, falling back to the working directory
    /// when that cannot be resolved.
    pub fn output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.args.output_dir {
            return dir.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
