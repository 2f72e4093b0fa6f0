//! `BatchSink` that writes one workbook per batch.

use std::path::{Path, PathBuf};

use phonegen_core::{Batch, BatchSink, SinkError};
use tracing::debug;

use crate::layout::{batch_file_name, COLUMN_HEADER};
use crate::workbook::write_single_column;

/// Writes each batch to `<dir>/lista_<NNN>.xlsx`.
#[derive(Debug)]
pub struct XlsxBatchSink {
    dir: PathBuf,
    header: String,
    files: Vec<PathBuf>,
}

impl XlsxBatchSink {
    /// Sink writing into an existing directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            header: COLUMN_HEADER.to_string(),
            files: Vec::new(),
        }
    }

    /// Override the column header.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in batch order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Path the batch with `index` is written to.
    #[must_use]
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(batch_file_name(index))
    }
}

impl BatchSink for XlsxBatchSink {
    fn write_batch(&mut self, batch: &Batch<'_>) -> Result<(), SinkError> {
        let path = self.path_for(batch.index);
        write_single_column(&path, &self.header, batch.numbers)?;
        debug!(path = %path.display(), rows = batch.len(), "Workbook written");
        self.files.push(path);
        Ok(())
    }
}
