use log::debug;

use super::model::{CellValue, RawSheet, Series, SeriesSet};
use crate::color::SERIES_STYLES;
use crate::error::{Result, ScatterError};

/// Pull the title and the T1/T2/T3 series out of a raw sheet.
///
/// The first cell is the title, the second row names the columns, and every
/// row after that holds measurements. Missing cells are dropped; anything
/// else that does not coerce to a number fails the whole sheet.
pub fn extract_series(sheet: &RawSheet) -> Result<SeriesSet> {
    let title = sheet
        .rows
        .first()
        .and_then(|row| row.first())
        .map(CellValue::to_string)
        .unwrap_or_default();

    let header = sheet
        .rows
        .get(1)
        .ok_or_else(|| ScatterError::MissingHeaderRow {
            sheet: sheet.name.clone(),
        })?;
    let data_rows = &sheet.rows[2..];

    let series = SERIES_STYLES
        .iter()
        .map(|style| -> Result<Series> {
            let col = column_index(header, style.name).ok_or_else(|| {
                ScatterError::MissingColumn {
                    sheet: sheet.name.clone(),
                    column: style.name.to_string(),
                }
            })?;
            let values = column_values(sheet, data_rows, col, style.name)?;
            Ok(Series {
                name: style.name.to_string(),
                values,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    for s in &series {
        debug!(
            "Sheet '{}' series {}: {} values, mean {:?}",
            sheet.name,
            s.name,
            s.len(),
            s.mean()
        );
    }

    Ok(SeriesSet { title, series })
}

/// First header cell whose text equals `name`.
fn column_index(header: &[CellValue], name: &str) -> Option<usize> {
    header.iter().position(|cell| cell.to_string() == name)
}

fn column_values(
    sheet: &RawSheet,
    data_rows: &[Vec<CellValue>],
    col: usize,
    column: &str,
) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(data_rows.len());
    for (i, row) in data_rows.iter().enumerate() {
        let Some(cell) = row.get(col) else {
            continue;
        };
        if cell.is_missing() {
            continue;
        }
        match cell.as_f64() {
            Some(v) => values.push(v),
            None => {
                return Err(ScatterError::NonNumeric {
                    sheet: sheet.name.clone(),
                    column: column.to_string(),
                    // 1-based, counting the title and header rows
                    row: i + 3,
                    value: cell.to_string(),
                })
            }
        }
    }
    Ok(values)
}
