use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Directory to write index.html and data.json into
    /// (defaults to the directory the executable lives in)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Skip the headless-browser path and fetch over plain HTTP only
    #[arg(long)]
    pub skip_browser: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "HOTBOARD_LOG")]
    pub log_level: String,
}
