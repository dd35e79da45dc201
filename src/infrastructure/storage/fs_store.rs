use crate::domain::storage::{Storage, StorageKeys};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Writes the rendered artifacts into the output directory, replacing
/// whatever a previous run left there.
#[derive(Clone)]
pub struct FileSystemStore {
    output_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)?;
        }
        fs::write(self.output_dir.join(name), contents)?;
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn save_report(&self, html: &str) -> Result<()> {
        self.write_file(StorageKeys::REPORT, html)
    }

    fn save_snapshot(&self, json: &str) -> Result<()> {
        self.write_file(StorageKeys::SNAPSHOT, json)
    }
}
