//! Excelブック読み込み（calamine）
//!
//! シートを絶対位置のまま `RawGrid` に変換する。使用範囲がB3から始まる
//! シートでも、F列は常に列番号5になる。

use crate::error::{FaltantesError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use faltantes_common::{CellValue, RawGrid};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open(path: &Path) -> Result<Sheets<BufReader<File>>> {
    if !path.exists() {
        return Err(FaltantesError::FileNotFound(path.display().to_string()));
    }

    open_workbook_auto(path).map_err(|e| FaltantesError::WorkbookRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// 先頭シートを読む
pub fn load_first_sheet(path: &Path) -> Result<RawGrid> {
    let mut workbook = open(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| FaltantesError::EmptyWorkbook(path.display().to_string()))?;

    read_range(&mut workbook, path, &sheet)
}

/// 名前を指定してシートを読む
pub fn load_sheet(path: &Path, sheet: &str) -> Result<RawGrid> {
    let mut workbook = open(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(FaltantesError::SheetNotFound {
            path: path.display().to_string(),
            sheet: sheet.to_string(),
        });
    }

    read_range(&mut workbook, path, sheet)
}

fn read_range(workbook: &mut Sheets<BufReader<File>>, path: &Path, sheet: &str) -> Result<RawGrid> {
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| FaltantesError::WorkbookRead {
            path: path.display().to_string(),
            message: format!("hoja {}: {}", sheet, e),
        })?;

    let grid = range_to_grid(&range);
    log::debug!(
        "{} [{}]: {} filas x {} columnas",
        path.display(),
        sheet,
        grid.height(),
        grid.width()
    );
    Ok(grid)
}

/// calamine の範囲を A1 起点のグリッドにする
pub fn range_to_grid(range: &Range<Data>) -> RawGrid {
    let Some((end_row, end_col)) = range.end() else {
        return RawGrid::default();
    };

    let rows = (0..=end_row)
        .map(|r| {
            (0..=end_col)
                .map(|c| range.get_value((r, c)).map(data_to_cell).unwrap_or_default())
                .collect()
        })
        .collect();

    RawGrid::new(rows)
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_keeps_absolute_positions() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 5));
        range.set_value((2, 5), Data::String("Cecos".to_string()));
        range.set_value((3, 5), Data::Float(101.0));

        let grid = range_to_grid(&range);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.cell(2, 5), Some(&CellValue::from("Cecos")));
        assert_eq!(grid.cell(3, 5), Some(&CellValue::Float(101.0)));
        assert_eq!(grid.cell(0, 0), Some(&CellValue::Empty));
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert_eq!(range_to_grid(&range).height(), 0);
    }

    #[test]
    fn test_missing_file() {
        let err = load_first_sheet(Path::new("/nonexistent/libro.xlsx")).unwrap_err();
        assert!(matches!(err, FaltantesError::FileNotFound(_)));
    }
}
