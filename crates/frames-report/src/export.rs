//! Format dispatch producing a named, typed byte payload.

use crate::csv::render_csv;
use crate::error::ReportResult;
use crate::info::{ReportFormat, ReportInfo, file_name};
use crate::pdf::render_pdf;
use crate::table::ReportRow;

/// Rendered report ready to be saved or offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type for the payload.
    pub mime_type: &'static str,
    /// Document bytes.
    pub bytes: Vec<u8>,
}

/// Render `rows` in `format`, naming the file after `info.title` and `timestamp_ms`.
///
/// # Errors
///
/// Returns [`crate::ReportError::Empty`] when a CSV export has no rows. PDF
/// exports of empty datasets succeed and carry a notice instead of a table.
pub fn export(
    info: &ReportInfo,
    rows: &[ReportRow],
    format: ReportFormat,
    timestamp_ms: i64,
) -> ReportResult<ExportedReport> {
    let bytes = match format {
        ReportFormat::Pdf => render_pdf(info, rows),
        ReportFormat::Csv => render_csv(rows)?.into_bytes(),
    };
    Ok(ExportedReport {
        file_name: file_name(&info.title, format, timestamp_ms),
        mime_type: format.mime_type(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::info::ReportCategory;

    fn info() -> ReportInfo {
        ReportInfo {
            title: "Room Utilization".into(),
            kind: None,
            category: ReportCategory::System { scope: None },
            date_range: "March 2026".into(),
            generated_at: "now".into(),
        }
    }

    #[test]
    fn csv_export_names_file_and_sets_mime() {
        let rows = vec![ReportRow::new().with("Room", "CL-1")];
        let report = export(&info(), &rows, ReportFormat::Csv, 42).expect("export");
        assert_eq!(report.file_name, "Room_Utilization_42.csv");
        assert_eq!(report.mime_type, "text/csv;charset=utf-8");
        assert_eq!(report.bytes, b"Room\n\"CL-1\"".to_vec());
    }

    #[test]
    fn empty_csv_fails_but_empty_pdf_renders() {
        assert_eq!(
            export(&info(), &[], ReportFormat::Csv, 1),
            Err(ReportError::Empty)
        );
        let pdf = export(&info(), &[], ReportFormat::Pdf, 1).expect("pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));
    }
}
