//! 出力ブックのシート構成

use crate::grid::CellValue;
use crate::normalizer::Identifier;
use crate::recon::{identifier_cell, ReconciliationResult, FALTANTES_COLUMNS};
use crate::session::ReconSession;

pub const SHEET_INTERFACES: &str = "Interfaces_Cecos";
pub const SHEET_TIENDAS: &str = "Tiendas_Cecos";
pub const SHEET_FALTANTES_TIENDAS: &str = "Faltantes_Tiendas";
pub const SHEET_CEDIS: &str = "CEDIS_MD";
pub const SHEET_FALTANTES_CEDIS: &str = "Faltantes_CEDIS";
pub const SHEET_FALTANTES_TOTAL: &str = "Faltantes_Total";
pub const SHEET_FALTANTES_UNION: &str = "Faltantes_Union";

/// 1シート分（先頭行がヘッダー）
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ReportSheet {
    fn identifiers(name: &str, column: &str, ids: impl IntoIterator<Item = Identifier>) -> Self {
        Self {
            name: name.to_string(),
            columns: vec![column.to_string()],
            rows: ids.into_iter().map(|id| vec![identifier_cell(id)]).collect(),
        }
    }
}

/// セッションと照合結果から出力シートを組み立てる
pub fn build_report(session: &ReconSession, result: &ReconciliationResult) -> Vec<ReportSheet> {
    let diffs = session.partial_differences();
    let mut sheets = Vec::new();

    sheets.push(ReportSheet::identifiers(
        SHEET_INTERFACES,
        "Cecos_interfaces",
        session.interfaces().into_iter().flatten().copied(),
    ));

    if let Some(cecos) = session.cecos() {
        sheets.push(ReportSheet::identifiers(
            SHEET_TIENDAS,
            "Tiendas_Cecos_filtrado",
            cecos.iter().copied(),
        ));
        sheets.push(ReportSheet::identifiers(
            SHEET_FALTANTES_TIENDAS,
            "Tiendas_faltantes",
            diffs.tiendas.unwrap_or_default(),
        ));
    }

    if let Some(md) = session.md() {
        sheets.push(ReportSheet::identifiers(SHEET_CEDIS, "CEDIS_MD", md.iter().copied()));
        sheets.push(ReportSheet::identifiers(
            SHEET_FALTANTES_CEDIS,
            "CEDIS_faltantes",
            diffs.cedis.unwrap_or_default(),
        ));
    }

    sheets.push(ReportSheet {
        name: SHEET_FALTANTES_TOTAL.to_string(),
        columns: FALTANTES_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: result.rows.iter().map(|r| r.cells().to_vec()).collect(),
    });

    sheets.push(ReportSheet::identifiers(
        SHEET_FALTANTES_UNION,
        "faltante_union",
        result.identifiers(),
    ));

    sheets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ReconStatus;
    use crate::sources::SourceData;

    fn names(sheets: &[ReportSheet]) -> Vec<&str> {
        sheets.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_sheets_without_md() {
        let mut session = ReconSession::new();
        session.accept(SourceData::Interfaces([1, 2].into()));
        session.accept(SourceData::Cecos([2, 3].into()));

        let ReconStatus::Ready(result) = session.status() else {
            panic!("照合できるはず");
        };
        let sheets = build_report(&session, &result);

        assert_eq!(
            names(&sheets),
            vec![
                SHEET_INTERFACES,
                SHEET_TIENDAS,
                SHEET_FALTANTES_TIENDAS,
                SHEET_FALTANTES_TOTAL,
                SHEET_FALTANTES_UNION
            ]
        );

        let total = sheets.iter().find(|s| s.name == SHEET_FALTANTES_TOTAL).unwrap();
        assert_eq!(total.columns, FALTANTES_COLUMNS.to_vec());
        assert_eq!(total.rows.len(), 1);
        assert_eq!(total.rows[0][2], CellValue::Int(3));
    }

    #[test]
    fn test_sheets_with_all_sources() {
        let mut session = ReconSession::new();
        session.accept(SourceData::Interfaces([1].into()));
        session.accept(SourceData::Cecos([1].into()));
        session.accept(SourceData::Md([45].into()));

        let ReconStatus::Ready(result) = session.status() else {
            panic!("照合できるはず");
        };
        let sheets = build_report(&session, &result);
        assert_eq!(sheets.len(), 7);

        let cedis = sheets.iter().find(|s| s.name == SHEET_FALTANTES_CEDIS).unwrap();
        assert_eq!(cedis.rows, vec![vec![CellValue::Int(45)]]);
        let tiendas = sheets.iter().find(|s| s.name == SHEET_FALTANTES_TIENDAS).unwrap();
        assert!(tiendas.rows.is_empty());
    }
}
