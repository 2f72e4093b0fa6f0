//! Single-column workbook writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::XlsxError;

/// Name of the only worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Rows a worksheet can hold, header included.
pub const MAX_ROWS: usize = 1_048_576;

const COLUMN_WIDTH: f64 = 16.0;

/// Write a workbook whose first column holds `header` followed by `values`, one per row.
///
/// Values are stored as text so long digit sequences keep every digit.
pub fn write_single_column<P, S>(path: P, header: &str, values: &[S]) -> Result<(), XlsxError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    if values.len() >= MAX_ROWS {
        return Err(XlsxError::TooManyRows {
            rows: values.len() + 1,
            max: MAX_ROWS,
        });
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.set_column_width(0, COLUMN_WIDTH)?;
    sheet.write_string(0, 0, header)?;
    for (row, value) in (1u32..).zip(values) {
        sheet.write_string(row, 0, value.as_ref())?;
    }

    let mut out = BufWriter::new(File::create(path.as_ref())?);
    workbook.save_to_writer(&mut out)?;
    out.flush()?;
    Ok(())
}
