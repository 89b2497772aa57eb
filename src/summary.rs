//! 端末表示用の整形

use faltantes_common::{normalize_text, ReconciliationResult, FALTANTES_COLUMNS};

/// Faltantes_Total をテキスト表にする
pub fn format_faltantes_table(result: &ReconciliationResult) -> String {
    let rows: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|r| r.cells().iter().map(normalize_text).collect())
        .collect();

    let widths: Vec<usize> = FALTANTES_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(FALTANTES_COLUMNS.iter().map(|h| h.to_string()), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(format_line(row.into_iter(), &widths));
    }

    lines.join("\n")
}

fn format_line(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
