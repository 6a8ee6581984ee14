//! CSV rendering.
//!
//! The header row carries the raw column keys. Every data cell is quoted with
//! embedded quotes doubled, and lines are joined with `\n`.

use crate::error::{ReportError, ReportResult};
use crate::table::{ReportRow, ReportTable};

/// Render rows as CSV text.
///
/// # Errors
///
/// Returns [`ReportError::Empty`] when `rows` is empty.
pub fn render_csv(rows: &[ReportRow]) -> ReportResult<String> {
    let table = ReportTable::from_rows(rows);
    if table.is_empty() {
        return Err(ReportError::Empty);
    }

    let mut lines = Vec::with_capacity(table.rows().len() + 1);
    lines.push(table.columns().join(","));
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|value| quote(value)).collect();
        lines.push(cells.join(","));
    }
    tracing::debug!(rows = table.rows().len(), "rendered csv report");
    Ok(lines.join("\n"))
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, status: &str) -> ReportRow {
        ReportRow::new()
            .with("Faculty", name)
            .with("Subject_Load", "18 Units")
            .with("Status", status)
    }

    #[test]
    fn produces_header_plus_one_line_per_row() {
        let rows = vec![row("Ana", "Good"), row("Ben", "At Risk"), row("Cy", "Good")];
        let csv = render_csv(&rows).expect("non-empty");
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Faculty,Subject_Load,Status");
        assert_eq!(lines[2], r#""Ben","18 Units","At Risk""#);
    }

    #[test]
    fn doubles_embedded_quotes() {
        let rows = vec![row(r#"Dr. "Doc" Reyes"#, "Good")];
        let csv = render_csv(&rows).expect("non-empty");
        assert!(csv.ends_with(r#""Dr. ""Doc"" Reyes","18 Units","Good""#));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert_eq!(render_csv(&[]), Err(ReportError::Empty));
    }
}
