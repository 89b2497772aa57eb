//! 入力ソース別の抽出処理
//!
//! 4つの入力（Interfaces, Cecos, MD, Dash）はいずれも
//! 「抽出・列選択 → フィルタ → 識別子化」の流れで処理する。
//! 各ソースは独立しており、失敗は当該ソースだけに留まる。

pub mod cecos;
pub mod dash;
pub mod interfaces;
pub mod md;

pub use cecos::{extract_cecos, CecosLayout};
pub use dash::{extract_dash, DashLookup, LookupRecord};
pub use interfaces::extract_interfaces;
pub use md::extract_md;

use crate::error::Result;
use crate::grid::RawGrid;
use crate::normalizer::IdentifierSet;
use serde::{Deserialize, Serialize};

/// 入力ソースの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Interfaces,
    Cecos,
    Md,
    Dash,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Interfaces,
        SourceKind::Cecos,
        SourceKind::Md,
        SourceKind::Dash,
    ];
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Interfaces => write!(f, "Interfaces"),
            SourceKind::Cecos => write!(f, "Cecos"),
            SourceKind::Md => write!(f, "MD"),
            SourceKind::Dash => write!(f, "Dash"),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interfaces" | "interfaz" => Ok(SourceKind::Interfaces),
            "cecos" => Ok(SourceKind::Cecos),
            "md" => Ok(SourceKind::Md),
            "dash" => Ok(SourceKind::Dash),
            _ => Err(format!(
                "Fuente desconocida: {}. Usa interfaces, cecos, md o dash",
                s
            )),
        }
    }
}

/// ソース毎の抽出結果
#[derive(Debug, Clone, PartialEq)]
pub enum SourceData {
    Interfaces(IdentifierSet),
    Cecos(IdentifierSet),
    Md(IdentifierSet),
    Dash(DashLookup),
}

impl SourceData {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceData::Interfaces(_) => SourceKind::Interfaces,
            SourceData::Cecos(_) => SourceKind::Cecos,
            SourceData::Md(_) => SourceKind::Md,
            SourceData::Dash(_) => SourceKind::Dash,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SourceData::Interfaces(s) | SourceData::Cecos(s) | SourceData::Md(s) => s.len(),
            SourceData::Dash(lookup) => lookup.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 読み込み確認メッセージ
    pub fn summary(&self) -> String {
        match self {
            SourceData::Interfaces(s) => format!("Interfaces cargadas: {} Cecos únicos.", s.len()),
            SourceData::Cecos(s) => format!("Cecos procesado: {} tiendas activas (filtradas).", s.len()),
            SourceData::Md(s) => format!("MD procesado: {} CEDIS únicos.", s.len()),
            SourceData::Dash(lookup) => format!(
                "Dash procesado: {} tiendas disponibles para enriquecer el reporte.",
                lookup.len()
            ),
        }
    }
}

/// 抽出オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub cecos_layout: CecosLayout,
}

/// ソース種類に応じた抽出を実行する
pub fn extract(kind: SourceKind, grid: &RawGrid, options: &ExtractOptions) -> Result<SourceData> {
    let data = match kind {
        SourceKind::Interfaces => SourceData::Interfaces(extract_interfaces(grid)?),
        SourceKind::Cecos => SourceData::Cecos(extract_cecos(grid, options.cecos_layout)?),
        SourceKind::Md => SourceData::Md(extract_md(grid)?),
        SourceKind::Dash => SourceData::Dash(extract_dash(grid)?),
    };
    log::debug!("{}: {} 件抽出", kind, data.len());
    Ok(data)
}
