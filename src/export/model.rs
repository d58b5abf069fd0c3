// src/export/model.rs

use crate::core::summary::Timesheet;
use crate::utils::date::format_date;
use serde::Serialize;

/// Struttura “piatta” per l'export del timesheet.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimesheetRow {
    #[serde(rename = "In Date")]
    pub in_date: String,
    #[serde(rename = "Out Date")]
    pub out_date: String,
    #[serde(rename = "Clock In")]
    pub clock_in: String,
    #[serde(rename = "Clock Out")]
    pub clock_out: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Total Hours")]
    pub total_hours: String,
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "In Date",
        "Out Date",
        "Clock In",
        "Clock Out",
        "Hours",
        "Notes",
        "Total Hours",
    ]
}

pub(crate) fn row_to_cells(r: &TimesheetRow) -> Vec<String> {
    vec![
        r.in_date.clone(),
        r.out_date.clone(),
        r.clock_in.clone(),
        r.clock_out.clone(),
        r.hours.clone(),
        r.notes.clone(),
        r.total_hours.clone(),
    ]
}

/// One row per closed session, then a totals row carrying only Total Hours.
pub fn timesheet_rows(sheet: &Timesheet<'_>) -> Vec<TimesheetRow> {
    let mut rows: Vec<TimesheetRow> = sheet
        .closed_rows()
        .map(|r| {
            let s = r.session;
            TimesheetRow {
                in_date: format_date(s.in_date),
                out_date: s.out_date.map(format_date).unwrap_or_default(),
                clock_in: s.clock_in_label(),
                clock_out: s.clock_out_label(),
                hours: r.hours_label(),
                notes: s.notes_joined(),
                total_hours: String::new(),
            }
        })
        .collect();

    if !rows.is_empty() {
        rows.push(TimesheetRow {
            total_hours: sheet.total_label(),
            ..TimesheetRow::default()
        });
    }

    rows
}
