//! MD（前月マスタデータ）: CEDIS番号の抽出

use crate::columns::require_width;
use crate::error::Result;
use crate::grid::RawGrid;
use crate::normalizer::{normalize_text, Identifier, IdentifierSet};
use crate::table::ExtractedTable;

/// K列: Ce.coste
const CODE_COLUMN: usize = 10;
/// L列: Centro de coste
const NAME_COLUMN: usize = 11;

const CEDIS_PREFIX: &str = "102";
const CEDIS_DIGITS: usize = 4;

/// Ce.coste が "102" で始まる行の Centro de coste 先頭4桁を集める
pub fn extract_md(grid: &RawGrid) -> Result<IdentifierSet> {
    let table = ExtractedTable::from_header_row(grid);
    require_width(&table, NAME_COLUMN + 1, "usar las columnas K y L")?;

    let cedis = table
        .rows()
        .iter()
        .filter(|row| normalize_text(&row[CODE_COLUMN]).starts_with(CEDIS_PREFIX))
        .filter_map(|row| leading_code(&normalize_text(&row[NAME_COLUMN])))
        .collect();

    Ok(cedis)
}

/// 先頭4文字が全て数字ならその値
fn leading_code(name: &str) -> Option<Identifier> {
    let prefix: String = name.chars().take(CEDIS_DIGITS).collect();
    if prefix.len() == CEDIS_DIGITS && prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}
