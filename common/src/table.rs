//! ラベル付きテーブルの切り出し

use crate::error::{Error, Result};
use crate::grid::{column_letter, last_non_empty_row, CellValue, RawGrid};
use crate::normalizer::normalize_text;

/// ヘッダー行と列範囲を固定して切り出したテーブル
///
/// 列数は常にヘッダー数と一致する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl ExtractedTable {
    /// 先頭行をヘッダーとし、残り全行をデータとする（列は全幅）
    pub fn from_header_row(grid: &RawGrid) -> Self {
        let Some(header) = grid.row(0) else {
            return Self::default();
        };

        let headers = label_headers(header);
        let rows = grid.rows().skip(1).map(|r| r.to_vec()).collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 指定列のセルを上から順に返す
    pub fn column(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}

/// 空ヘッダーを `COL_<1始まりの位置>` で埋める
fn label_headers(cells: &[CellValue]) -> Vec<String> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let label = normalize_text(cell);
            if label.is_empty() {
                format!("COL_{}", i + 1)
            } else {
                label
            }
        })
        .collect()
}

/// アンカー行をヘッダーとしてテーブルを切り出す
///
/// データ行は `header_row` の次の行から、`sentinel_col` が空でない最後の行まで。
pub fn extract_table(
    grid: &RawGrid,
    header_row: usize,
    col_start: usize,
    col_end: usize,
    sentinel_col: usize,
) -> Result<ExtractedTable> {
    if grid.width() < col_end + 1 {
        return Err(Error::StructuralMismatch(format!(
            "la hoja no llega hasta la columna {} (tiene {} columnas)",
            column_letter(col_end),
            grid.width()
        )));
    }

    let last_row = match last_non_empty_row(grid, sentinel_col, header_row) {
        Some(r) if r > header_row => r,
        _ => {
            return Err(Error::StructuralMismatch(format!(
                "no se pudo determinar el final de la tabla usando la columna {}",
                column_letter(sentinel_col)
            )));
        }
    };

    let header = grid.row(header_row).ok_or_else(|| {
        Error::StructuralMismatch(format!("la fila de encabezados {} no existe", header_row + 1))
    })?;
    let headers = label_headers(&header[col_start..=col_end]);

    let rows = ((header_row + 1)..=last_row)
        .filter_map(|r| grid.row(r))
        .map(|row| row[col_start..=col_end].to_vec())
        .collect();

    log::debug!(
        "テーブル切り出し: ヘッダー行 {}, 列 {}..{}, データ {} 行",
        header_row,
        column_letter(col_start),
        column_letter(col_end),
        last_row - header_row
    );

    Ok(ExtractedTable { headers, rows })
}
