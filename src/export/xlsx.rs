// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{TimesheetRow, get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, DocProperties, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Timeclock";

/// Export XLSX con styling e auto-larghezza colonne.
///
/// `author` ends up in the workbook properties (creator / last modified by).
pub(crate) fn export_xlsx(rows: &[TimesheetRow], path: &Path, title: &str, author: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let properties = DocProperties::new().set_title(title).set_author(author);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    let last = rows.len().saturating_sub(1);
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };
        // the trailing totals row is bold
        let bold = row_index == last && !r.total_hours.is_empty();

        for (col, value) in row_to_cells(r).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, band_color, bold)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Scrive una singola cella: date e orari come valori Excel, il resto come testo.
fn write_xlsx_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color, bold: bool) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if bold {
        fmt = fmt.set_bold();
    }

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = fmt.set_num_format(num_format).set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
