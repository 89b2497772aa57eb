//! 生グリッドとアンカー探索
//!
//! ヘッダー位置を仮定しない2次元セル配列（RawGrid）と、その上での
//! ラベル探索・最終行探索を提供する。

use crate::normalizer::normalize_text;
use serde::{Deserialize, Serialize};

/// セル値（テキスト・数値・空）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// 文字列化（トリムなし）
    ///
    /// 整数値を保持する浮動小数は小数部なしで表す（`1020.0` → `"1020"`）。
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

/// ヘッダーなしの矩形グリッド（0始まり）
///
/// 行の長さは最長行に合わせて `CellValue::Empty` で揃える。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl RawGrid {
    pub fn new(mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        Self { rows, width }
    }

    /// 文字列の2次元配列から生成（空文字列は空セル）
    pub fn from_text_rows(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|s| {
                            if s.is_empty() {
                                CellValue::Empty
                            } else {
                                CellValue::from(*s)
                            }
                        })
                        .collect()
                })
                .collect(),
        )
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// ラベルの位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

/// ラベルを行優先で探索し、最初の一致位置を返す
///
/// トリム・大小文字無視の完全一致のみ（部分一致はしない）。
pub fn find_cell(grid: &RawGrid, target: &str) -> Option<Anchor> {
    let target = target.trim().to_lowercase();

    for (r, row) in grid.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if normalize_text(cell).to_lowercase() == target {
                return Some(Anchor { row: r, col: c });
            }
        }
    }

    None
}

/// `start_row` 以降で `col` 列が空でない最後の行
pub fn last_non_empty_row(grid: &RawGrid, col: usize, start_row: usize) -> Option<usize> {
    if col >= grid.width() {
        return None;
    }

    (start_row..grid.height())
        .rev()
        .find(|&r| grid.cell(r, col).is_some_and(|cell| !normalize_text(cell).is_empty()))
}

/// 0始まりの列番号をExcelの列記号に変換（0 → A, 38 → AM）
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}
