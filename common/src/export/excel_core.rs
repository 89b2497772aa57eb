//! Excel生成（共通ライブラリ）
//!
//! `ReportSheet` の並びをそのままシートとして書き出す。

use crate::error::{Error, Result};
use crate::grid::CellValue;
use crate::report::ReportSheet;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};

/// 列幅の上限（文字数）
const MAX_COLUMN_WIDTH: usize = 40;

/// 複数シートのExcelをバッファに生成
pub fn generate_report_buffer(sheets: &[ReportSheet]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet.name)
            .map_err(|e| Error::Excel(format!("nombre de hoja {}: {}", sheet.name, e)))?;

        for (col, label) in sheet.columns.iter().enumerate() {
            let col = col as u16;
            worksheet
                .write_string_with_format(0, col, label, &header_format)
                .map_err(|e| Error::Excel(format!("encabezado: {}", e)))?;

            let width = sheet
                .rows
                .iter()
                .filter_map(|row| row.get(col as usize))
                .map(|cell| cell.to_text().chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
                .clamp(8, MAX_COLUMN_WIDTH);
            worksheet
                .set_column_width(col, width as f64 + 2.0)
                .map_err(|e| Error::Excel(format!("ancho de columna: {}", e)))?;
        }

        for (r, row) in sheet.rows.iter().enumerate() {
            let r = (r + 1) as u32;
            for (c, cell) in row.iter().enumerate() {
                write_cell(worksheet, r, c as u16, cell)
                    .map_err(|e| Error::Excel(format!("celda ({}, {}): {}", r, c, e)))?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(format!("guardar: {}", e)))
}

/// セル型を保ったまま書き込む（空セルは書かない）
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> std::result::Result<(), XlsxError> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Int(i) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        CellValue::Float(f) => {
            worksheet.write_number(row, col, *f)?;
        }
        CellValue::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}
