//! Report header descriptor, category context, output formats and file naming.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::ReportError;

/// Fallback kind line printed under the title.
pub const DEFAULT_KIND: &str = "System Generated Report";
const MISSING: &str = "N/A";

/// Context block variant printed in the report header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCategory {
    /// A single class section.
    Class {
        /// Subject code.
        class_code: Option<String>,
        /// Section label; printed as "All" when absent.
        section: Option<String>,
    },
    /// One person's records.
    Personal {
        /// Display name.
        name: Option<String>,
        /// TUPM ID.
        id: Option<String>,
    },
    /// Department or system scope.
    System {
        /// Scope label; printed as "System-wide" when absent.
        scope: Option<String>,
    },
}

impl ReportCategory {
    /// Label/value pairs for the left column of the context box.
    #[must_use]
    pub fn context_lines(&self) -> Vec<(&'static str, String)> {
        let or_missing = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .unwrap_or(MISSING)
                .to_string()
        };
        match self {
            Self::Personal { name, id } => {
                vec![("Name: ", or_missing(name)), ("ID: ", or_missing(id))]
            }
            Self::Class {
                class_code,
                section,
            } => vec![
                ("Class Code: ", or_missing(class_code)),
                (
                    "Section: ",
                    section.clone().unwrap_or_else(|| "All".to_string()),
                ),
            ],
            Self::System { scope } => vec![(
                "Scope: ",
                scope.clone().unwrap_or_else(|| "System-wide".to_string()),
            )],
        }
    }
}

/// Everything printed above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInfo {
    /// Report title; upper-cased in the PDF and used for the file name.
    pub title: String,
    /// Kind line under the title; [`DEFAULT_KIND`] when absent.
    pub kind: Option<String>,
    /// Context block.
    pub category: ReportCategory,
    /// Human-readable covered period.
    pub date_range: String,
    /// Human-readable generation time.
    pub generated_at: String,
}

impl ReportInfo {
    /// Kind line with the fallback applied.
    #[must_use]
    pub fn kind_label(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_KIND)
    }
}

/// Export target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Branded PDF document.
    Pdf,
    /// Comma-separated values.
    Csv,
}

impl ReportFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }

    /// MIME type for downloads.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv;charset=utf-8",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            _ => Err(ReportError::UnknownFormat(value.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
        })
    }
}

/// `<title with whitespace runs as _>_<unix millis>.<ext>`.
#[must_use]
pub fn file_name(title: &str, format: ReportFormat, timestamp_ms: i64) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(ch);
            in_space = false;
        }
    }
    format!("{stem}_{timestamp_ms}.{}", format.extension())
}

/// Generation stamp such as `March 4, 2026 8:05 AM`.
#[must_use]
pub fn generated_label(at: NaiveDateTime) -> String {
    at.format("%B %-d, %Y %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn file_name_collapses_whitespace() {
        assert_eq!(
            file_name("Faculty  Attendance Summary", ReportFormat::Pdf, 1_700_000_000_000),
            "Faculty_Attendance_Summary_1700000000000.pdf"
        );
        assert_eq!(file_name("Log", ReportFormat::Csv, 5), "Log_5.csv");
    }

    #[test]
    fn context_lines_follow_category() {
        let personal = ReportCategory::Personal {
            name: Some("Ana Cruz".into()),
            id: None,
        };
        assert_eq!(
            personal.context_lines(),
            vec![("Name: ", "Ana Cruz".to_string()), ("ID: ", "N/A".to_string())]
        );

        let class = ReportCategory::Class {
            class_code: Some("CS101".into()),
            section: None,
        };
        assert_eq!(class.context_lines()[1], ("Section: ", "All".to_string()));

        let system = ReportCategory::System { scope: None };
        assert_eq!(
            system.context_lines(),
            vec![("Scope: ", "System-wide".to_string())]
        );
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("PDF".parse::<ReportFormat>(), Ok(ReportFormat::Pdf));
        assert_eq!(
            "xlsx".parse::<ReportFormat>(),
            Err(ReportError::UnknownFormat("xlsx".into()))
        );
    }

    #[test]
    fn generated_label_uses_long_month() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 4)
            .and_then(|date| date.and_hms_opt(20, 5, 0))
            .expect("valid");
        assert_eq!(generated_label(at), "March 4, 2026 8:05 PM");
    }
}
