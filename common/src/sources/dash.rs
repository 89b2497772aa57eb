//! Dash（店舗ダッシュボード）: 補足情報の参照表

use crate::columns::require_width;
use crate::error::Result;
use crate::grid::{CellValue, RawGrid};
use crate::normalizer::{to_canonical_integer, Identifier};
use crate::table::ExtractedTable;
use std::collections::HashMap;

// B, C, E, G, R, S
const CE_COSTE_COLUMN: usize = 1;
const TIENDA_COLUMN: usize = 2;
const REGION_COLUMN: usize = 4;
const CENTRO_COLUMN: usize = 6;
const DM_COLUMN: usize = 17;
const AM_COLUMN: usize = 18;

/// 店舗の補足情報
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupRecord {
    pub tienda: Identifier,
    pub ce_coste: CellValue,
    pub centro_de_coste: CellValue,
    pub am: CellValue,
    pub dm: CellValue,
    pub region: CellValue,
}

/// TIENDA番号 → 補足情報（重複時は先勝ち、行順を保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashLookup {
    records: Vec<LookupRecord>,
    index: HashMap<Identifier, usize>,
}

impl DashLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加。既に同じTIENDAがあれば何もせず `false`
    pub fn insert(&mut self, record: LookupRecord) -> bool {
        if self.index.contains_key(&record.tienda) {
            return false;
        }
        self.index.insert(record.tienda, self.records.len());
        self.records.push(record);
        true
    }

    pub fn get(&self, tienda: Identifier) -> Option<&LookupRecord> {
        self.index.get(&tienda).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[LookupRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 先頭シート（ヘッダー行0）から参照表を作る
pub fn extract_dash(grid: &RawGrid) -> Result<DashLookup> {
    let table = ExtractedTable::from_header_row(grid);
    require_width(&table, AM_COLUMN + 1, "usar hasta la columna S")?;

    let mut lookup = DashLookup::new();
    let mut duplicates = 0usize;

    for row in table.rows() {
        let Some(tienda) = to_canonical_integer(&row[TIENDA_COLUMN]) else {
            continue;
        };

        let inserted = lookup.insert(LookupRecord {
            tienda,
            ce_coste: row[CE_COSTE_COLUMN].clone(),
            centro_de_coste: row[CENTRO_COLUMN].clone(),
            am: row[AM_COLUMN].clone(),
            dm: row[DM_COLUMN].clone(),
            region: row[REGION_COLUMN].clone(),
        });
        if !inserted {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        log::debug!("Dash: {} filas con TIENDA duplicada descartadas", duplicates);
    }
    Ok(lookup)
}
