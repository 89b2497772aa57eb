//! 入力ブックからの一括処理テスト
//!
//! rust_xlsxwriter で入力ブックを作り、calamine 経由で読み込ませる。

use faltantes_common::sources::cecos::CECOS_SHEET_NAME;
use faltantes_common::{CellValue, ReconStatus, SourceKind};
use faltantes_interfaces::config::Config;
use faltantes_interfaces::error::FaltantesError;
use faltantes_interfaces::pipeline::{load_source, process_sources, SourcePaths};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<CellValue>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("シート名設定失敗");
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    CellValue::Text(s) => {
                        worksheet.write_string(r, c, s).expect("書き込み失敗");
                    }
                    CellValue::Int(i) => {
                        worksheet.write_number(r, c, *i as f64).expect("書き込み失敗");
                    }
                    CellValue::Float(f) => {
                        worksheet.write_number(r, c, *f).expect("書き込み失敗");
                    }
                    _ => {}
                }
            }
        }
    }
    workbook.save(path).expect("ブック保存失敗");
}

fn sparse_row(width: usize, cells: &[(usize, CellValue)]) -> Vec<CellValue> {
    let mut row = vec![CellValue::Empty; width];
    for (col, value) in cells {
        row[*col] = value.clone();
    }
    row
}

fn text(s: &str) -> CellValue {
    CellValue::from(s)
}

fn interfaces_book(dir: &Path) -> PathBuf {
    let path = dir.join("interfaces.xlsx");
    write_workbook(
        &path,
        &[(
            "Hoja1",
            vec![
                vec![text("Nombre"), text("Cecos")],
                vec![text("a"), CellValue::Int(100)],
                vec![text("b"), text("0101")],
                vec![text("c"), CellValue::Float(102.0)],
                vec![text("d"), text("102")],
            ],
        )],
    );
    path
}

fn cecos_row(tienda: CellValue, status: &str, concept: &str) -> Vec<CellValue> {
    sparse_row(
        39,
        &[(2, tienda), (10, text(status)), (29, text(concept)), (38, text("x"))],
    )
}

fn cecos_book(dir: &Path, sheet_name: &str, width: usize) -> PathBuf {
    let path = dir.join(format!("cecos_{}.xlsx", width));
    let mut rows = vec![
        vec![text("JMC Cost Center Structure")],
        vec![],
        sparse_row(
            39,
            &[(0, text("Ce.coste")), (2, text("Tienda")), (10, text("Status")), (29, text("Concepto Tienda")), (38, text("Fin"))],
        ),
        cecos_row(CellValue::Int(101), "ABIERTA", "Propia"),
        cecos_row(text("0102"), "Abierta", "Propia"),
        cecos_row(CellValue::Int(103), "ABIERTA", "Corporativa"),
        cecos_row(CellValue::Int(150), "CERRADA", "Propia"),
        cecos_row(CellValue::Int(151), "ABIERTA", "FRANQUICIA"),
    ];
    for row in &mut rows {
        row.truncate(width);
    }

    write_workbook(
        &path,
        &[("Resumen", vec![vec![text("portada")]]), (sheet_name, rows)],
    );
    path
}

fn md_book(dir: &Path) -> PathBuf {
    let path = dir.join("md.xlsx");
    write_workbook(
        &path,
        &[(
            "MD",
            vec![
                sparse_row(12, &[(10, text("Ce. Coste")), (11, text("Centro de Coste"))]),
                sparse_row(12, &[(10, CellValue::Int(1020104)), (11, text("0104 CEDIS Bajío"))]),
                sparse_row(12, &[(10, text("2000001")), (11, text("0999 Oficina"))]),
            ],
        )],
    );
    path
}

fn dash_row(tienda: CellValue, ce_coste: &str, region: &str, am: &str) -> Vec<CellValue> {
    sparse_row(
        19,
        &[
            (1, text(ce_coste)),
            (2, tienda),
            (4, text(region)),
            (6, text("Tienda Centro")),
            (17, text("Luis")),
            (18, text(am)),
        ],
    )
}

fn dash_book(dir: &Path) -> PathBuf {
    let path = dir.join("dash.xlsx");
    let header: Vec<CellValue> = (0..19).map(|i| text(&format!("h{}", i))).collect();
    write_workbook(
        &path,
        &[(
            "Dash",
            vec![
                header,
                dash_row(CellValue::Int(103), "CC103", "Norte", "Ana"),
                dash_row(text("0103"), "CC999", "Sur", "Otro"),
                dash_row(CellValue::Int(500), "CC500", "Sur", "Eva"),
            ],
        )],
    );
    path
}

fn all_paths(dir: &TempDir) -> SourcePaths {
    SourcePaths {
        interfaces: Some(interfaces_book(dir.path())),
        cecos: Some(cecos_book(dir.path(), CECOS_SHEET_NAME, 39)),
        md: Some(md_book(dir.path())),
        dash: Some(dash_book(dir.path())),
    }
}

fn positional_config() -> Config {
    Config {
        cecos_layout: faltantes_common::CecosLayout::Positional,
        ..Config::default()
    }
}

#[test]
fn test_end_to_end_reconciliation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let session = process_sources(&all_paths(&dir), &Config::default());

    assert!(session.failures().is_empty(), "失敗: {:?}", session.failures());
    assert_eq!(session.interfaces().unwrap().len(), 3);
    assert_eq!(
        session.cecos().unwrap().iter().copied().collect::<Vec<_>>(),
        vec![101, 102, 103]
    );
    assert_eq!(session.md().unwrap().iter().copied().collect::<Vec<_>>(), vec![104]);
    assert_eq!(session.dash().unwrap().len(), 2);

    let ReconStatus::Ready(result) = session.status() else {
        panic!("照合できるはず");
    };
    assert_eq!(result.identifiers(), vec![103, 104]);

    let enriched = result.rows[0].cells();
    assert_eq!(enriched[0], text("CC103"));
    assert_eq!(enriched[1], text("Tienda Centro"));
    assert_eq!(enriched[3], text("Ana"));
    assert_eq!(enriched[4], text("Luis"));
    assert_eq!(enriched[5], text("Norte"));

    let bare = result.rows[1].cells();
    assert_eq!(bare[2], CellValue::Int(104));
    assert!(bare[0].is_empty() && bare[5].is_empty());
}

#[test]
fn test_positional_layout_gives_same_tiendas() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = cecos_book(dir.path(), CECOS_SHEET_NAME, 39);

    let by_name = load_source(SourceKind::Cecos, &path, &Config::default()).unwrap();
    let positional = load_source(SourceKind::Cecos, &path, &positional_config()).unwrap();
    assert_eq!(by_name, positional);
}

#[test]
fn test_failure_is_isolated() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut paths = all_paths(&dir);
    paths.cecos = Some(cecos_book(dir.path(), "Otra hoja", 39));
    paths.dash = Some(dir.path().join("no_existe.xlsx"));

    let session = process_sources(&paths, &Config::default());

    let failed: Vec<SourceKind> = session.failures().iter().map(|f| f.kind).collect();
    assert_eq!(failed, vec![SourceKind::Cecos, SourceKind::Dash]);
    assert!(session.failures()[0].message.contains(CECOS_SHEET_NAME));

    let ReconStatus::Ready(result) = session.status() else {
        panic!("MDだけで照合できるはず");
    };
    assert_eq!(result.identifiers(), vec![104]);
    assert_eq!(result.enriched_count(), 0);
}

#[test]
fn test_cecos_sheet_too_narrow() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = cecos_book(dir.path(), CECOS_SHEET_NAME, 30);

    let err = load_source(SourceKind::Cecos, &path, &Config::default()).unwrap_err();
    match err {
        FaltantesError::Common(faltantes_common::Error::StructuralMismatch(msg)) => {
            assert!(msg.contains("AM"))
        }
        other => panic!("想定外のエラー: {:?}", other),
    }
}

#[test]
fn test_prompts_when_sources_missing() {
    let dir = tempdir().expect("Failed to create temp dir");

    let only_cecos = SourcePaths {
        cecos: Some(cecos_book(dir.path(), CECOS_SHEET_NAME, 39)),
        ..SourcePaths::default()
    };
    let session = process_sources(&only_cecos, &Config::default());
    assert_eq!(session.status(), ReconStatus::NeedsInterfaces);

    let only_interfaces = SourcePaths {
        interfaces: Some(interfaces_book(dir.path())),
        dash: Some(dash_book(dir.path())),
        ..SourcePaths::default()
    };
    let session = process_sources(&only_interfaces, &Config::default());
    assert_eq!(session.status(), ReconStatus::NeedsSourceOfTruth);
}
