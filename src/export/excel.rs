//! Excel生成（CLI版）

use crate::error::{FaltantesError, Result};
use faltantes_common::export::excel_core::generate_report_buffer;
use faltantes_common::ReportSheet;
use std::path::Path;

pub fn generate_excel(sheets: &[ReportSheet], output_path: &Path) -> Result<()> {
    let buffer = generate_report_buffer(sheets)
        .map_err(|e| FaltantesError::ExcelGeneration(e.to_string()))?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)?;
    log::debug!("{} hojas escritas en {}", sheets.len(), output_path.display());
    Ok(())
}
