//! エラーケーステスト

use faltantes_interfaces::error::FaltantesError;
use faltantes_interfaces::workbook;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイル
#[test]
fn test_load_nonexistent_file() {
    let result = workbook::load_first_sheet(Path::new("/nonexistent/path/12345.xlsx"));
    assert!(matches!(result, Err(FaltantesError::FileNotFound(_))));
}

/// Excelでないファイル
#[test]
fn test_load_invalid_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_es_excel.xlsx");
    std::fs::write(&path, "hola").unwrap();

    let result = workbook::load_first_sheet(&path);
    assert!(matches!(result, Err(FaltantesError::WorkbookRead { .. })));
}

/// FaltantesErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FaltantesError::Config("prueba".to_string()),
        FaltantesError::FileNotFound("cecos.xlsx".to_string()),
        FaltantesError::SheetNotFound {
            path: "cecos.xlsx".to_string(),
            sheet: "JMC Cost Center Strucutre".to_string(),
        },
        FaltantesError::EmptyWorkbook("vacio.xlsx".to_string()),
        FaltantesError::ExcelGeneration("fallo".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FaltantesError = io_err.into();
    assert!(matches!(err, FaltantesError::Io(_)));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: FaltantesError = json_err.into();
    assert!(matches!(err, FaltantesError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = faltantes_common::Error::MissingColumn("Status".to_string());
    let err: FaltantesError = common_err.into();

    assert!(matches!(err, FaltantesError::Common(_)));
    assert_eq!(err.to_string(), "Columna no encontrada: Status");
}
