//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 変換できないセル（ConversionFailure）はエラーにせず、その場で捨てる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// シート構造が要件を満たさない（列数・行数不足、アンカー未検出）
    #[error("Estructura inválida: {0}")]
    StructuralMismatch(String),

    /// 名前で列を解決できない
    #[error("Columna no encontrada: {0}")]
    MissingColumn(String),

    /// Excel出力エラー
    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
