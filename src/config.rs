use crate::error::{FaltantesError, Result};
use faltantes_common::sources::cecos::CECOS_SHEET_NAME;
use faltantes_common::CecosLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cecos ブックで読むシート名
    pub cecos_sheet_name: String,
    pub cecos_layout: CecosLayout,
    /// 出力ファイル名（拡張子なし）
    pub output_title: String,
    /// 出力ファイル名に `_YYYYMMDD` を付ける
    pub date_suffix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cecos_sheet_name: CECOS_SHEET_NAME.into(),
            cecos_layout: CecosLayout::ByName,
            output_title: "Faltantes_Interfaces".into(),
            date_suffix: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FaltantesError::Config("no se encontró el directorio personal".into()))?;
        Ok(home.join(".config").join("faltantes-interfaces").join("config.json"))
    }

    pub fn set_cecos_sheet_name(&mut self, name: String) -> Result<()> {
        if name.trim().is_empty() {
            return Err(FaltantesError::Config("el nombre de hoja está vacío".into()));
        }
        self.cecos_sheet_name = name;
        self.save()
    }

    pub fn set_cecos_layout(&mut self, layout: CecosLayout) -> Result<()> {
        self.cecos_layout = layout;
        self.save()
    }

    /// 出力ファイル名（拡張子つき）
    pub fn output_file_name(&self) -> String {
        if self.date_suffix {
            format!("{}_{}.xlsx", self.output_title, chrono::Local::now().format("%Y%m%d"))
        } else {
            format!("{}.xlsx", self.output_title)
        }
    }
}
