//! セル値の正規化
//!
//! テキストとして保存された数値（`"0012"`, `"12.0"`, `"12 "`）を
//! 識別子の正規形（非負整数）に揃える。

use crate::grid::CellValue;
use std::collections::BTreeSet;

/// 識別子（店舗・CEDIS・コストセンター番号）
pub type Identifier = u64;

/// ソース毎の識別子集合（重複なし・昇順）
pub type IdentifierSet = BTreeSet<Identifier>;

/// セル値をトリム済み文字列にする（空セルは空文字列）
pub fn normalize_text(cell: &CellValue) -> String {
    cell.to_text().trim().to_string()
}

/// セル値を識別子の正規形に変換する
///
/// 数字が一つも残らないセルは `None`（エラーにはしない）。
pub fn to_canonical_integer(cell: &CellValue) -> Option<Identifier> {
    canonical_from_str(&cell.to_text())
}

/// 文字列版: 末尾の `.0` を一つ外し、数字以外を除去して整数化
pub fn canonical_from_str(text: &str) -> Option<Identifier> {
    let text = text.strip_suffix(".0").unwrap_or(text);
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return None;
    }

    // 桁あふれも変換不能として扱う
    digits.parse::<Identifier>().ok()
}

/// セル列を識別子集合に変換（変換不能セルは捨てる）
pub fn to_identifier_set<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> IdentifierSet {
    cells.into_iter().filter_map(to_canonical_integer).collect()
}
