//! Faltantes en Interfaces: 共通ライブラリ
//!
//! 4種類のExcel出力（Interfaces, Cecos, MD, Dash）から店舗・CEDIS番号を抽出し、
//! Interfaces に登録されていないものを求める。ファイル入出力は含まない。

pub mod columns;
pub mod error;
pub mod export;
pub mod grid;
pub mod normalizer;
pub mod recon;
pub mod report;
pub mod session;
pub mod sources;
pub mod table;

pub use error::{Error, Result};
pub use grid::{find_cell, last_non_empty_row, Anchor, CellValue, RawGrid};
pub use normalizer::{normalize_text, to_canonical_integer, Identifier, IdentifierSet};
pub use recon::{reconcile, MissingRow, ReconciliationResult, FALTANTES_COLUMNS};
pub use report::{build_report, ReportSheet};
pub use session::{ReconSession, ReconStatus, SourceFailure};
pub use sources::{CecosLayout, DashLookup, ExtractOptions, LookupRecord, SourceData, SourceKind};
pub use table::{extract_table, ExtractedTable};
