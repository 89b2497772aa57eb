//! Cecos（"JMC Cost Center Strucutre" シート）
//!
//! ヘッダー位置が固定されていないため、"Status" ラベルを探してヘッダー行とし、
//! A..AM 列をAM列の最終行まで切り出す。

use crate::columns::{resolve_column, ColumnSpec, NameRule};
use crate::error::{Error, Result};
use crate::grid::{find_cell, RawGrid};
use crate::normalizer::{normalize_text, to_canonical_integer, IdentifierSet};
use crate::table::extract_table;
use serde::{Deserialize, Serialize};

/// 既定のシート名（綴りは元ファイルのまま）
pub const CECOS_SHEET_NAME: &str = "JMC Cost Center Strucutre";

const STATUS_LABEL: &str = "Status";
const OPEN_STATUS: &str = "ABIERTA";
const FRANCHISE_CONCEPT: &str = "FRANQUICIA";

/// AM列
const LAST_COLUMN: usize = 38;
/// C列
const TIENDA_POSITION: usize = 2;

/// Status/Concepto列の解決方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CecosLayout {
    /// ヘッダー名で解決
    #[default]
    ByName,
    /// 固定位置（Status=K, Concepto=AD, Tienda=C）
    Positional,
}

impl std::str::FromStr for CecosLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "by_name" | "name" | "nombre" => Ok(CecosLayout::ByName),
            "positional" | "position" | "posicion" => Ok(CecosLayout::Positional),
            _ => Err(format!("Layout desconocido: {}. Usa by_name o positional", s)),
        }
    }
}

impl std::fmt::Display for CecosLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CecosLayout::ByName => write!(f, "by_name"),
            CecosLayout::Positional => write!(f, "positional"),
        }
    }
}

impl CecosLayout {
    fn column_specs(&self) -> [ColumnSpec; 3] {
        let tienda = ColumnSpec::positional("Tienda", TIENDA_POSITION);
        match self {
            CecosLayout::ByName => [
                ColumnSpec::named("Status", NameRule::Exact("status")),
                ColumnSpec::named("Concepto tienda", NameRule::ContainsAll(&["concepto", "tienda"])),
                tienda,
            ],
            CecosLayout::Positional => [
                ColumnSpec::positional("Status", 10),
                ColumnSpec::positional("Concepto tienda", 29),
                tienda,
            ],
        }
    }
}

/// 営業中（ABIERTA）かつフランチャイズ以外の店舗番号を取り出す
pub fn extract_cecos(grid: &RawGrid, layout: CecosLayout) -> Result<IdentifierSet> {
    let anchor = find_cell(grid, STATUS_LABEL).ok_or_else(|| {
        Error::StructuralMismatch(format!(
            "no se encontró la palabra exacta \"{}\" en la hoja",
            STATUS_LABEL
        ))
    })?;
    log::debug!("Cecos: \"{}\" en fila {}, columna {}", STATUS_LABEL, anchor.row, anchor.col);

    let table = extract_table(grid, anchor.row, 0, LAST_COLUMN, LAST_COLUMN)?;

    let [status_spec, concept_spec, tienda_spec] = layout.column_specs();
    let status = resolve_column(&table, &status_spec)?;
    let concept = resolve_column(&table, &concept_spec)?;
    let tienda = resolve_column(&table, &tienda_spec)?;

    let tiendas: IdentifierSet = table
        .rows()
        .iter()
        .filter(|row| normalize_text(&row[status.index]).to_uppercase() == OPEN_STATUS)
        .filter(|row| normalize_text(&row[concept.index]).to_uppercase() != FRANCHISE_CONCEPT)
        .filter_map(|row| to_canonical_integer(&row[tienda.index]))
        .collect();

    log::debug!("Cecos: {} filas, {} tiendas activas", table.len(), tiendas.len());
    Ok(tiendas)
}
