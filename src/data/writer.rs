use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use super::model::CellValue;
use crate::error::{Result, ScatterError};

// ---------------------------------------------------------------------------
// Sheet layout
// ---------------------------------------------------------------------------

/// A worksheet in the layout the extractor expects:
///
/// ```text
///   A1: title
///   row 2: column labels (T1, T2, T3, ...)
///   row 3..: values, one column per label
/// ```
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub name: String,
    pub title: String,
    pub columns: Vec<(String, Vec<CellValue>)>,
}

impl SheetLayout {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Append a labelled column.
    pub fn column(
        mut self,
        label: impl Into<String>,
        cells: impl IntoIterator<Item = CellValue>,
    ) -> Self {
        self.columns
            .push((label.into(), cells.into_iter().collect()));
        self
    }
}

// ---------------------------------------------------------------------------
// Workbook writer
// ---------------------------------------------------------------------------

/// Write `sheets` to a new `.xlsx` file at `path`, replacing any existing file.
pub fn write_workbook(path: &Path, sheets: &[SheetLayout]) -> Result<()> {
    build_workbook(path, sheets).map_err(|source| ScatterError::WorkbookWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn build_workbook(path: &Path, sheets: &[SheetLayout]) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    for layout in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(layout.name.as_str())?;
        if !layout.title.is_empty() {
            worksheet.write_string(0, 0, layout.title.as_str())?;
        }

        for (col, (label, cells)) in layout.columns.iter().enumerate() {
            let col = col as u16;
            worksheet.write_string(1, col, label.as_str())?;
            for (row, cell) in cells.iter().enumerate() {
                write_cell(worksheet, row as u32 + 2, col, cell)?;
            }
        }
    }

    workbook.save(path)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> std::result::Result<(), XlsxError> {
    match cell {
        CellValue::Null => return Ok(()),
        CellValue::Float(v) => worksheet.write_number(row, col, *v)?,
        CellValue::Integer(i) => worksheet.write_number(row, col, *i as f64)?,
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b)?,
        CellValue::String(s) | CellValue::Date(s) | CellValue::Error(s) => {
            worksheet.write_string(row, col, s.as_str())?
        }
    };
    Ok(())
}
