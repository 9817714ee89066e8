//! File opening utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Opens input files for a tokenization pass
pub struct FileReader;

impl FileReader {
    /// Open a file for buffered reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
