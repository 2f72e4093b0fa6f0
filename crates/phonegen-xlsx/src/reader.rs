//! Reading the first column back out of a workbook.
//!
//! Reads column A of the first worksheet, whatever its name, below the
//! header row. Text, integer and float cells are returned as text; other
//! columns are ignored.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Reader, Xlsx};

use crate::error::XlsxError;

/// Values of column A below the header row, in row order. Empty cells are skipped.
pub fn read_column<P: AsRef<Path>>(path: P) -> Result<Vec<String>, XlsxError> {
    let file = File::open(path.as_ref())?;
    let mut workbook: Xlsx<_> = Xlsx::new(BufReader::new(file))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| XlsxError::Malformed("workbook has no worksheets".to_string()))??;

    let (Some((first_row, _)), Some((last_row, _))) = (range.start(), range.end()) else {
        return Ok(Vec::new());
    };
    let values = (first_row.max(1)..=last_row)
        .filter_map(|row| range.get_value((row, 0)))
        .filter_map(cell_text)
        .collect();
    Ok(values)
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}
