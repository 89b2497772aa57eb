//! ソース毎の読み込み → 抽出 → セッション投入

use crate::config::Config;
use crate::error::Result;
use crate::workbook;
use faltantes_common::sources::{self, ExtractOptions};
use faltantes_common::{ReconSession, SourceData, SourceKind};
use std::path::{Path, PathBuf};

/// 実行時に渡された入力ファイル
#[derive(Debug, Clone, Default)]
pub struct SourcePaths {
    pub interfaces: Option<PathBuf>,
    pub cecos: Option<PathBuf>,
    pub md: Option<PathBuf>,
    pub dash: Option<PathBuf>,
}

impl SourcePaths {
    pub fn get(&self, kind: SourceKind) -> Option<&Path> {
        match kind {
            SourceKind::Interfaces => self.interfaces.as_deref(),
            SourceKind::Cecos => self.cecos.as_deref(),
            SourceKind::Md => self.md.as_deref(),
            SourceKind::Dash => self.dash.as_deref(),
        }
    }
}

/// 1ソースを読み込んで抽出する
///
/// Cecos は設定のシート名、それ以外は先頭シートを読む。
pub fn load_source(kind: SourceKind, path: &Path, config: &Config) -> Result<SourceData> {
    let grid = match kind {
        SourceKind::Cecos => workbook::load_sheet(path, &config.cecos_sheet_name)?,
        _ => workbook::load_first_sheet(path)?,
    };

    let options = ExtractOptions {
        cecos_layout: config.cecos_layout,
    };
    Ok(sources::extract(kind, &grid, &options)?)
}

/// 渡された全ソースを処理する（1ソースの失敗は他に影響しない）
pub fn process_sources(paths: &SourcePaths, config: &Config) -> ReconSession {
    let mut session = ReconSession::new();

    for kind in SourceKind::ALL {
        let Some(path) = paths.get(kind) else {
            continue;
        };

        log::info!("{}: {}", kind, path.display());
        let outcome = load_source(kind, path, config);
        if let Ok(data) = &outcome {
            println!("✔ {}", data.summary());
        }
        session.ingest(kind, outcome);
    }

    session
}
