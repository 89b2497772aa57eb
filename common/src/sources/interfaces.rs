//! Interfaces（登録済みCecos一覧）

use crate::columns::{resolve_column, ColumnSpec, NameRule};
use crate::error::Result;
use crate::grid::RawGrid;
use crate::normalizer::{to_identifier_set, IdentifierSet};
use crate::table::ExtractedTable;

/// "Cecos" 列、なければF列
const CECOS_COLUMN: ColumnSpec = ColumnSpec::named("Cecos", NameRule::Exact("cecos")).or_position(5);

/// 先頭シート（ヘッダー行0）から登録済み識別子を取り出す
pub fn extract_interfaces(grid: &RawGrid) -> Result<IdentifierSet> {
    let table = ExtractedTable::from_header_row(grid);
    let column = resolve_column(&table, &CECOS_COLUMN)?;
    Ok(to_identifier_set(table.column(column.index)))
}
