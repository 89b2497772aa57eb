//! 列の解決（名前優先、固定位置へフォールバック）

use crate::error::{Error, Result};
use crate::grid::column_letter;
use crate::table::ExtractedTable;

/// ヘッダー名の一致規則（トリム・小文字化して比較）
#[derive(Debug, Clone, Copy)]
pub enum NameRule {
    /// 完全一致
    Exact(&'static str),
    /// 全ての語を含む
    ContainsAll(&'static [&'static str]),
}

impl NameRule {
    fn matches(&self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        match self {
            NameRule::Exact(name) => header == name.to_lowercase(),
            NameRule::ContainsAll(words) => words.iter().all(|w| header.contains(&w.to_lowercase())),
        }
    }
}

/// 列の指定
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// エラーメッセージ用の呼び名
    pub label: &'static str,
    pub name: Option<NameRule>,
    pub position: Option<usize>,
}

impl ColumnSpec {
    pub const fn named(label: &'static str, rule: NameRule) -> Self {
        Self { label, name: Some(rule), position: None }
    }

    pub const fn positional(label: &'static str, index: usize) -> Self {
        Self { label, name: None, position: Some(index) }
    }

    /// 名前で見つからない場合の固定位置
    pub const fn or_position(self, index: usize) -> Self {
        Self { position: Some(index), ..self }
    }
}

/// 解決方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    Name,
    Position,
}

/// 解決済みの列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub index: usize,
    pub header: String,
    pub resolved_by: ResolvedBy,
}

/// 列を解決する。名前で一致した最初（左端）の列を優先する。
pub fn resolve_column(table: &ExtractedTable, spec: &ColumnSpec) -> Result<ResolvedColumn> {
    if let Some(rule) = spec.name {
        if let Some((index, header)) = table
            .headers()
            .iter()
            .enumerate()
            .find(|(_, h)| rule.matches(h))
        {
            log::debug!("列 '{}' を名前で解決: {} ({})", spec.label, header, column_letter(index));
            return Ok(ResolvedColumn {
                index,
                header: header.clone(),
                resolved_by: ResolvedBy::Name,
            });
        }
    }

    match spec.position {
        Some(index) => {
            require_width(table, index + 1, &format!("usar la columna {} ({})", column_letter(index), spec.label))?;
            log::debug!("列 '{}' を位置で解決: {}", spec.label, column_letter(index));
            Ok(ResolvedColumn {
                index,
                header: table.headers()[index].clone(),
                resolved_by: ResolvedBy::Position,
            })
        }
        None => Err(Error::MissingColumn(format!(
            "no existe una columna '{}' en los encabezados",
            spec.label
        ))),
    }
}

/// 列数の下限チェック
pub fn require_width(table: &ExtractedTable, min_columns: usize, purpose: &str) -> Result<()> {
    if table.width() < min_columns {
        return Err(Error::StructuralMismatch(format!(
            "se necesitan al menos {} columnas para {} (hay {})",
            min_columns,
            purpose,
            table.width()
        )));
    }
    Ok(())
}
