//! 照合セッション
//!
//! 1回の実行（アップロード一式）に属するソース毎の結果を保持する。
//! 同じソースを再投入すると前回の結果（成功・失敗とも）を置き換える。

use crate::normalizer::{Identifier, IdentifierSet};
use crate::recon::{difference, reconcile, ReconciliationResult};
use crate::sources::{DashLookup, SourceData, SourceKind};

/// ソース単位の失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub kind: SourceKind,
    pub message: String,
}

impl std::fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// 照合の状態
#[derive(Debug, Clone, PartialEq)]
pub enum ReconStatus {
    /// Interfaces が未投入
    NeedsInterfaces,
    /// Cecos・MD がどちらも未投入
    NeedsSourceOfTruth,
    Ready(ReconciliationResult),
}

impl ReconStatus {
    /// 入力待ちの場合の案内文
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            ReconStatus::NeedsInterfaces => Some("Primero carga el consolidado de Interfaces."),
            ReconStatus::NeedsSourceOfTruth => Some("Carga Cecos y/o MD para calcular faltantes."),
            ReconStatus::Ready(_) => None,
        }
    }
}

/// 診断用の個別差分
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialDifferences {
    /// Cecos − Interfaces
    pub tiendas: Option<Vec<Identifier>>,
    /// MD − Interfaces
    pub cedis: Option<Vec<Identifier>>,
}

#[derive(Debug, Clone, Default)]
pub struct ReconSession {
    interfaces: Option<IdentifierSet>,
    cecos: Option<IdentifierSet>,
    md: Option<IdentifierSet>,
    dash: Option<DashLookup>,
    failures: Vec<SourceFailure>,
}

impl ReconSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// ソースの抽出結果を取り込む（読み込み失敗も含めて受け取る）
    pub fn ingest<E: std::fmt::Display>(
        &mut self,
        kind: SourceKind,
        outcome: std::result::Result<SourceData, E>,
    ) {
        self.clear(kind);

        match outcome {
            Ok(data) if data.kind() == kind => self.store(data),
            Ok(data) => self.failures.push(SourceFailure {
                kind,
                message: format!("se recibieron datos de {} en lugar de {}", data.kind(), kind),
            }),
            Err(e) => {
                log::warn!("{}: {}", kind, e);
                self.failures.push(SourceFailure { kind, message: e.to_string() });
            }
        }
    }

    /// 成功した抽出結果を取り込む
    pub fn accept(&mut self, data: SourceData) {
        self.ingest(data.kind(), Ok::<_, std::convert::Infallible>(data));
    }

    fn clear(&mut self, kind: SourceKind) {
        self.failures.retain(|f| f.kind != kind);
        match kind {
            SourceKind::Interfaces => self.interfaces = None,
            SourceKind::Cecos => self.cecos = None,
            SourceKind::Md => self.md = None,
            SourceKind::Dash => self.dash = None,
        }
    }

    fn store(&mut self, data: SourceData) {
        match data {
            SourceData::Interfaces(s) => self.interfaces = Some(s),
            SourceData::Cecos(s) => self.cecos = Some(s),
            SourceData::Md(s) => self.md = Some(s),
            SourceData::Dash(lookup) => self.dash = Some(lookup),
        }
    }

    pub fn interfaces(&self) -> Option<&IdentifierSet> {
        self.interfaces.as_ref()
    }

    pub fn cecos(&self) -> Option<&IdentifierSet> {
        self.cecos.as_ref()
    }

    pub fn md(&self) -> Option<&IdentifierSet> {
        self.md.as_ref()
    }

    pub fn dash(&self) -> Option<&DashLookup> {
        self.dash.as_ref()
    }

    pub fn failures(&self) -> &[SourceFailure] {
        &self.failures
    }

    pub fn is_loaded(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Interfaces => self.interfaces.is_some(),
            SourceKind::Cecos => self.cecos.is_some(),
            SourceKind::Md => self.md.is_some(),
            SourceKind::Dash => self.dash.is_some(),
        }
    }

    /// 現在の投入状況で照合する
    pub fn status(&self) -> ReconStatus {
        let Some(interfaces) = &self.interfaces else {
            return ReconStatus::NeedsInterfaces;
        };

        match reconcile(interfaces, self.cecos.as_ref(), self.md.as_ref(), self.dash.as_ref()) {
            Some(result) => ReconStatus::Ready(result),
            None => ReconStatus::NeedsSourceOfTruth,
        }
    }

    pub fn partial_differences(&self) -> PartialDifferences {
        let Some(interfaces) = &self.interfaces else {
            return PartialDifferences::default();
        };

        PartialDifferences {
            tiendas: self.cecos.as_ref().map(|c| difference(c, interfaces)),
            cedis: self.md.as_ref().map(|m| difference(m, interfaces)),
        }
    }
}
