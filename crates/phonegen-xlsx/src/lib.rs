//! # phonegen-xlsx
//!
//! Persists generated batches as single-column XLSX workbooks inside a
//! timestamped run directory, and reads such workbooks back.

pub mod error;
pub mod layout;
pub mod reader;
pub mod sink;
pub mod workbook;

pub use error::XlsxError;
pub use layout::{batch_file_name, create_output_dir, create_output_dir_now, output_dir_name};
pub use reader::read_column;
pub use sink::XlsxBatchSink;
pub use workbook::write_single_column;
