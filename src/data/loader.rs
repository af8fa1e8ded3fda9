use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use log::debug;

use super::model::{CellValue, RawSheet};
use crate::config::WORKBOOK_EXTENSION;
use crate::error::{Result, ScatterError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the named sheets of an `.xlsx` workbook, in the order requested.
///
/// The extension is checked before the file is touched; anything other than
/// `.xlsx` is rejected as [`ScatterError::UnsupportedFormat`].
pub fn load_sheets(path: &Path, sheet_names: &[String]) -> Result<Vec<RawSheet>> {
    ensure_workbook_extension(path)?;

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| ScatterError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let available = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        if !available.iter().any(|s| s == name) {
            return Err(ScatterError::MissingSheet {
                path: path.to_path_buf(),
                sheet: name.clone(),
            });
        }

        let range = workbook
            .worksheet_range(name)
            .map_err(|source| ScatterError::Workbook {
                path: path.to_path_buf(),
                source,
            })?;

        let rows = anchor_at_a1(&range);

        debug!(
            "Loaded sheet '{name}' from {} ({} rows)",
            path.display(),
            rows.len()
        );
        sheets.push(RawSheet::new(name.clone(), rows));
    }

    Ok(sheets)
}

/// Grid of cells starting at A1.
///
/// The reader reports only the used range; leading empty rows and columns
/// are padded back so the title is always A1 and the header always row 2.
fn anchor_at_a1(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let width = start_col as usize + range.width();
    let mut rows: Vec<Vec<CellValue>> = vec![vec![CellValue::Null; width]; start_row as usize];
    rows.extend(range.rows().map(|row| {
        std::iter::repeat(CellValue::Null)
            .take(start_col as usize)
            .chain(row.iter().map(CellValue::from))
            .collect()
    }));
    rows
}

fn ensure_workbook_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext == WORKBOOK_EXTENSION {
        Ok(())
    } else {
        Err(ScatterError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::writer::{write_workbook, SheetLayout};
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn sheet_names() -> Vec<String> {
        vec!["Day 14".to_string(), "Day 28".to_string()]
    }

    fn layout(name: &str, title: &str) -> SheetLayout {
        SheetLayout::new(name, title)
            .column("T1", [1.0, 2.0].map(CellValue::Float))
            .column("T2", [3.0].map(CellValue::Float))
            .column("T3", [4.0, 5.0, 6.0].map(CellValue::Float))
    }

    #[test]
    fn rejects_non_xlsx_before_opening() {
        // The file does not exist: the extension check must fire first.
        let err = load_sheets(Path::new("scatterA.csv"), &sheet_names()).unwrap_err();
        assert!(matches!(err, ScatterError::UnsupportedFormat { .. }));
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

        let err = load_sheets(Path::new("scatterA"), &sheet_names()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(ensure_workbook_extension(Path::new("scatterA.XLSX")).is_ok());
        assert!(ensure_workbook_extension(Path::new("scatterA.xls")).is_err());
    }

    #[test]
    fn loads_requested_sheets_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scatterA.xlsx");
        write_workbook(
            &path,
            &[layout("Day 28", "Late"), layout("Extra", "x"), layout("Day 14", "Early")],
        )
        .unwrap();

        let sheets = load_sheets(&path, &sheet_names()).unwrap();
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].name, "Day 14");
        assert_eq!(sheets[1].name, "Day 28");
        assert_eq!(sheets[0].rows[0][0], CellValue::String("Early".into()));
        assert_eq!(sheets[0].rows[1][1], CellValue::String("T2".into()));
        // title row + header row + three value rows
        assert_eq!(sheets[0].rows.len(), 5);
    }

    #[test]
    fn blank_title_cell_keeps_header_on_row_two() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scatterA.xlsx");
        write_workbook(&path, &[layout("Day 14", ""), layout("Day 28", "")]).unwrap();

        let sheets = load_sheets(&path, &sheet_names()).unwrap();
        assert_eq!(sheets[0].rows[0], vec![CellValue::Null; 3]);
        assert_eq!(
            sheets[0].rows[1],
            vec![
                CellValue::String("T1".into()),
                CellValue::String("T2".into()),
                CellValue::String("T3".into()),
            ]
        );
    }

    #[test]
    fn used_range_away_from_a1_is_padded() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("T1".into()));
        range.set_value((3, 2), Data::Float(1.5));

        let rows = anchor_at_a1(&range);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec![CellValue::Null; 3]);
        assert_eq!(rows[1], vec![CellValue::Null; 3]);
        assert_eq!(
            rows[2],
            vec![CellValue::Null, CellValue::String("T1".into()), CellValue::Null]
        );
        assert_eq!(rows[3][2], CellValue::Float(1.5));
    }

    #[test]
    fn missing_sheet_is_a_structure_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scatterA.xlsx");
        write_workbook(&path, &[layout("Day 14", "Early")]).unwrap();

        let err = load_sheets(&path, &sheet_names()).unwrap_err();
        match &err {
            ScatterError::MissingSheet { sheet, .. } => assert_eq!(sheet, "Day 28"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.kind(), ErrorKind::Structure);
    }

    #[test]
    fn garbage_content_propagates_reader_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scatterA.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = load_sheets(&path, &sheet_names()).unwrap_err();
        assert!(matches!(err, ScatterError::Workbook { .. }));
    }
}
