//! 照合: (Cecos ∪ MD) − Interfaces

use crate::grid::CellValue;
use crate::normalizer::{Identifier, IdentifierSet};
use crate::sources::{DashLookup, LookupRecord};

/// Faltantes_Total の列順（下流の手作業で使うため固定）
pub const FALTANTES_COLUMNS: [&str; 6] = ["Ce.coste", "Centro de coste", "TIENDA", "AM", "DM", "Región"];

/// `source` にあって `interfaces` にない識別子（昇順）
pub fn difference(source: &IdentifierSet, interfaces: &IdentifierSet) -> Vec<Identifier> {
    source.difference(interfaces).copied().collect()
}

/// 識別子を出力用セルにする
pub fn identifier_cell(id: Identifier) -> CellValue {
    match i64::try_from(id) {
        Ok(i) => CellValue::Int(i),
        Err(_) => CellValue::Text(id.to_string()),
    }
}

/// 不足している1件（補足情報は左結合）
#[derive(Debug, Clone, PartialEq)]
pub struct MissingRow {
    pub tienda: Identifier,
    pub record: Option<LookupRecord>,
}

impl MissingRow {
    /// `FALTANTES_COLUMNS` の順に並べたセル
    pub fn cells(&self) -> [CellValue; 6] {
        let tienda = identifier_cell(self.tienda);
        match &self.record {
            Some(r) => [
                r.ce_coste.clone(),
                r.centro_de_coste.clone(),
                tienda,
                r.am.clone(),
                r.dm.clone(),
                r.region.clone(),
            ],
            None => [
                CellValue::Empty,
                CellValue::Empty,
                tienda,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
            ],
        }
    }
}

/// 照合結果（TIENDA昇順・重複なし）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconciliationResult {
    pub rows: Vec<MissingRow>,
}

impl ReconciliationResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn identifiers(&self) -> Vec<Identifier> {
        self.rows.iter().map(|r| r.tienda).collect()
    }

    /// Dashで補足できた件数
    pub fn enriched_count(&self) -> usize {
        self.rows.iter().filter(|r| r.record.is_some()).count()
    }
}

/// 照合を実行する
///
/// Cecos と MD の両方がない場合は計算しない（`None`）。
pub fn reconcile(
    interfaces: &IdentifierSet,
    cecos: Option<&IdentifierSet>,
    md: Option<&IdentifierSet>,
    dash: Option<&DashLookup>,
) -> Option<ReconciliationResult> {
    if cecos.is_none() && md.is_none() {
        return None;
    }

    let union: IdentifierSet = cecos
        .into_iter()
        .chain(md)
        .flat_map(|set| set.iter().copied())
        .collect();

    let rows = difference(&union, interfaces)
        .into_iter()
        .map(|tienda| MissingRow {
            tienda,
            record: dash.and_then(|lookup| lookup.get(tienda)).cloned(),
        })
        .collect();

    Some(ReconciliationResult { rows })
}
