//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader; decoding is left to the analyzer
pub struct FileReader;

impl FileReader {
    /// Read a file's raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
