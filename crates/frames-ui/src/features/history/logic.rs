//! Report form state for the attendance history page.

use chrono::{Datelike, NaiveDate};
use frames_report::history::DateInput;
use frames_report::{HistoryQuery, HistoryReportKind, Semester};

/// Subject selector value meaning "no restriction".
pub const ALL_SUBJECTS: &str = "All Subjects";
const ACADEMIC_YEAR_CHOICES: i32 = 4;

/// Raw report form values as the inputs hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryForm {
    /// Selected report kind.
    pub kind: HistoryReportKind,
    /// `YYYY-MM-DD` from the date input.
    pub date: String,
    /// `YYYY-MM` from the month input.
    pub month: String,
    /// Academic start year.
    pub academic_year: i32,
    /// Selected term.
    pub semester: Semester,
    /// Subject title or [`ALL_SUBJECTS`].
    pub subject: String,
}

impl HistoryForm {
    /// Daily report for `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let defaults = HistoryQuery::new(HistoryReportKind::Daily, today);
        Self {
            kind: HistoryReportKind::Daily,
            date: today.format("%Y-%m-%d").to_string(),
            month: today.format("%Y-%m").to_string(),
            academic_year: defaults.academic_year,
            semester: Semester::default(),
            subject: ALL_SUBJECTS.to_string(),
        }
    }

    fn anchor(&self, today: NaiveDate) -> NaiveDate {
        match self.kind.input() {
            DateInput::Day | DateInput::WeekStart | DateInput::RangeEnd => {
                NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").unwrap_or(today)
            }
            DateInput::Month => {
                NaiveDate::parse_from_str(&format!("{}-01", self.month.trim()), "%Y-%m-%d")
                    .unwrap_or(today)
            }
            DateInput::AcademicYear | DateInput::Semester | DateInput::None => today,
        }
    }

    /// Query described by the form; unparseable dates fall back to `today`.
    #[must_use]
    pub fn query(&self, today: NaiveDate) -> HistoryQuery {
        let mut query = HistoryQuery::new(self.kind, self.anchor(today));
        query.academic_year = self.academic_year;
        query.semester = self.semester;
        let subject = self.subject.trim();
        query.subject =
            (!subject.is_empty() && subject != ALL_SUBJECTS).then(|| subject.to_string());
        query
    }
}

/// Academic years offered in the selector, newest first.
#[must_use]
pub fn academic_year_options(today: NaiveDate) -> Vec<i32> {
    let current = if today.month() >= 8 {
        today.year()
    } else {
        today.year() - 1
    };
    (0..ACADEMIC_YEAR_CHOICES).map(|offset| current - offset).collect()
}

/// Label for an academic year option.
#[must_use]
pub fn academic_year_label(year: i32) -> String {
    format!("{year}-{}", year + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn monthly_kind_anchors_on_month_input() {
        let today = day(2026, 3, 4);
        let mut form = HistoryForm::new(today);
        form.kind = HistoryReportKind::Monthly;
        form.month = "2026-01".into();
        let query = form.query(today);
        assert_eq!(query.anchor, day(2026, 1, 1));
        assert_eq!(query.date_range_label(), "January 2026");
    }

    #[test]
    fn bad_date_falls_back_to_today() {
        let today = day(2026, 3, 4);
        let mut form = HistoryForm::new(today);
        form.date = "not-a-date".into();
        assert_eq!(form.query(today).anchor, today);
    }

    #[test]
    fn all_subjects_means_no_restriction() {
        let today = day(2026, 3, 4);
        let mut form = HistoryForm::new(today);
        assert_eq!(form.query(today).subject, None);
        form.subject = "Data Structures".into();
        assert_eq!(form.query(today).subject.as_deref(), Some("Data Structures"));
    }

    #[test]
    fn semester_form_carries_year_and_term() {
        let today = day(2026, 3, 4);
        let mut form = HistoryForm::new(today);
        form.kind = HistoryReportKind::Semester;
        form.semester = Semester::Second;
        assert_eq!(form.academic_year, 2025);
        assert_eq!(form.query(today).date_range_label(), "2nd Semester 2025-2026");
    }

    #[test]
    fn academic_years_start_in_august() {
        assert_eq!(academic_year_options(day(2026, 8, 1))[0], 2026);
        assert_eq!(academic_year_options(day(2026, 7, 31)), vec![2025, 2024, 2023, 2022]);
        assert_eq!(academic_year_label(2025), "2025-2026");
    }
}
