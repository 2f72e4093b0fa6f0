//! Output directory and file naming.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Prefix of the per-run output directory.
pub const OUTPUT_DIR_PREFIX: &str = "numeros_";

/// Prefix of each batch workbook.
pub const FILE_PREFIX: &str = "lista_";

/// Extension of each batch workbook.
pub const FILE_EXTENSION: &str = "xlsx";

/// Header cell of the number column.
pub const COLUMN_HEADER: &str = "numero";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory name for a run started at `at`, e.g. `numeros_20240131_154502`.
#[must_use]
pub fn output_dir_name(at: NaiveDateTime) -> String {
    format!("{OUTPUT_DIR_PREFIX}{}", at.format(TIMESTAMP_FORMAT))
}

/// Workbook name for a 1-based batch index, e.g. `lista_007.xlsx`.
#[must_use]
pub fn batch_file_name(index: usize) -> String {
    format!("{FILE_PREFIX}{index:03}.{FILE_EXTENSION}")
}

/// Create (or reuse) the run directory under `parent` and return its path.
pub fn create_output_dir(parent: &Path, at: NaiveDateTime) -> io::Result<PathBuf> {
    let dir = parent.join(output_dir_name(at));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Run directory for the current local time.
pub fn create_output_dir_now(parent: &Path) -> io::Result<PathBuf> {
    create_output_dir(parent, chrono::Local::now().naive_local())
}
