//! Attendance history: subject mapping, report windows, and row building.
//!
//! # Design
//! - Raw logs are matched to the weekly schedule by weekday, room (only when
//!   both sides know it) and a window of one hour either side of the class.
//! - Each report kind selects a calendar window anchored on a date or an
//!   academic year. Windows are inclusive of their final day.
//! - Results are sorted newest first.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use frames_api_models::{AttendanceAction, AttendanceRecord, ScheduleItem};

use crate::error::ReportError;
use crate::info::{ReportCategory, ReportInfo};
use crate::table::ReportRow;

const SCHEDULE_SLACK_MINUTES: i64 = 60;
const HISTORY_DAYS: i64 = 30;
const UNSCHEDULED: &str = "Unscheduled";
const UNAUTHORIZED: &str = "Unauthorized Entry";

/// Kind line printed on personal attendance reports.
pub const PERSONAL_KIND: &str = "PERSONAL ATTENDANCE RECORD";

/// Personal attendance report catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryReportKind {
    /// One calendar day.
    Daily,
    /// Seven days from the anchor.
    Weekly,
    /// The anchor's month.
    Monthly,
    /// One semester of an academic year.
    Semester,
    /// A whole academic year.
    AcademicYear,
    /// Thirty days ending on the anchor.
    History30Days,
    /// Late arrivals on one day.
    Late,
    /// Break movements on one day.
    BreakLog,
    /// Every log.
    Consistency,
}

/// Which date control a report kind needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// A single day.
    Day,
    /// First day of the week.
    WeekStart,
    /// Last day of the range.
    RangeEnd,
    /// Any day inside the month.
    Month,
    /// Academic start year.
    AcademicYear,
    /// Academic start year plus semester.
    Semester,
    /// No date control.
    None,
}

impl HistoryReportKind {
    /// Catalogue order.
    pub const ALL: [Self; 9] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Semester,
        Self::AcademicYear,
        Self::History30Days,
        Self::Late,
        Self::BreakLog,
        Self::Consistency,
    ];

    /// Stable identifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Daily => "DAILY_REPORT",
            Self::Weekly => "WEEKLY_SUMMARY",
            Self::Monthly => "MONTHLY_TRENDS",
            Self::Semester => "SEM_REPORT",
            Self::AcademicYear => "OVERALL_SEM",
            Self::History30Days => "HISTORY_30D",
            Self::Late => "LATE_REPORT",
            Self::BreakLog => "BREAK_LOG",
            Self::Consistency => "CONSISTENCY",
        }
    }

    /// Menu label with its catalogue letter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "a. Daily Attendance per Subject",
            Self::Weekly => "b. Weekly Attendance Summary",
            Self::Monthly => "c. Monthly Attendance Trends",
            Self::Semester => "d. Semestral Report (Per Subject)",
            Self::AcademicYear => "e. Overall Semestral Summary",
            Self::History30Days => "f. Attendance History Log (30 Days)",
            Self::Late => "g. Personal Late Arrival Report",
            Self::BreakLog => "h. Break Duration Log",
            Self::Consistency => "i. Personal Consistency Index",
        }
    }

    /// One-line description shown under the selector.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Daily => "Tracks presence, lateness, and breaks for each class session.",
            Self::Weekly => "Summarizes present/absent/late counts for the week.",
            Self::Monthly => "Shows the month's attendance for spotting trends.",
            Self::Semester => "Cumulative data per subject for one semester.",
            Self::AcademicYear => "Consolidates all subjects across the academic year.",
            Self::History30Days => "Recent timestamps over the last thirty days.",
            Self::Late => "Arrivals on a given day for punctuality review.",
            Self::BreakLog => "Break movements on a given day.",
            Self::Consistency => "Every recorded log.",
        }
    }

    /// Report title: the label without its letter prefix.
    #[must_use]
    pub fn title(self) -> &'static str {
        let label = self.label();
        label.split_once(". ").map_or(label, |(_, rest)| rest)
    }

    /// Date control required by this kind.
    #[must_use]
    pub const fn input(self) -> DateInput {
        match self {
            Self::Daily | Self::Late | Self::BreakLog => DateInput::Day,
            Self::Weekly => DateInput::WeekStart,
            Self::History30Days => DateInput::RangeEnd,
            Self::Monthly => DateInput::Month,
            Self::Semester => DateInput::Semester,
            Self::AcademicYear => DateInput::AcademicYear,
            Self::Consistency => DateInput::None,
        }
    }
}

impl FromStr for HistoryReportKind {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == normalized)
            .or(match normalized.as_str() {
                "DAILY" => Some(Self::Daily),
                "WEEKLY" => Some(Self::Weekly),
                "MONTHLY" => Some(Self::Monthly),
                "SEMESTER" => Some(Self::Semester),
                "ACADEMIC_YEAR" | "YEAR" => Some(Self::AcademicYear),
                "HISTORY" | "30D" => Some(Self::History30Days),
                "LATE" => Some(Self::Late),
                "BREAK" | "BREAKS" => Some(Self::BreakLog),
                "ALL" => Some(Self::Consistency),
                _ => None,
            })
            .ok_or_else(|| ReportError::UnknownKind(value.to_string()))
    }
}

impl fmt::Display for HistoryReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Academic term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Semester {
    /// August to December.
    #[default]
    First,
    /// January to May of the following year.
    Second,
    /// June to July of the following year.
    Summer,
}

impl Semester {
    /// Every term in calendar order.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Summer];

    /// Stable identifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::First => "1ST",
            Self::Second => "2ND",
            Self::Summer => "SUMMER",
        }
    }

    /// Short ordinal used in range labels.
    #[must_use]
    pub const fn ordinal(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Summer => "Summer",
        }
    }

    /// First and last day for the academic year starting in `year`.
    fn days(self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let (start, end) = match self {
            Self::First => ((year, 8, 1), (year, 12, 31)),
            Self::Second => ((year + 1, 1, 1), (year + 1, 5, 31)),
            Self::Summer => ((year + 1, 6, 1), (year + 1, 7, 31)),
        };
        Some((
            NaiveDate::from_ymd_opt(start.0, start.1, start.2)?,
            NaiveDate::from_ymd_opt(end.0, end.1, end.2)?,
        ))
    }
}

impl FromStr for Semester {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1ST" | "1" | "FIRST" => Ok(Self::First),
            "2ND" | "2" | "SECOND" => Ok(Self::Second),
            "SUMMER" | "3" => Ok(Self::Summer),
            _ => Err(ReportError::UnknownSemester(value.to_string())),
        }
    }
}

/// A log with its resolved subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedLog {
    /// Original record.
    pub record: AttendanceRecord,
    /// Parsed event time.
    pub at: NaiveDateTime,
    /// Subject title, or a placeholder when no class matched.
    pub subject: String,
}

/// Parse a schedule clock value (`08:00`, `08:00:00`, `8:00 AM`).
#[must_use]
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    const FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M:%S %p"];
    let trimmed = raw.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

fn minutes(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

fn schedule_matches(item: &ScheduleItem, record: &AttendanceRecord, at: NaiveDateTime) -> bool {
    let weekday = at.format("%A").to_string();
    let same_day = item
        .day_of_week
        .as_deref()
        .is_some_and(|day| day.trim().eq_ignore_ascii_case(&weekday));
    if !same_day {
        return false;
    }
    if let (Some(log_room), Some(class_room)) = (record.room.as_deref(), item.room.as_deref())
        && log_room.trim() != class_room.trim()
    {
        return false;
    }
    let (Some(start), Some(end)) = (
        item.start_time.as_deref().and_then(parse_clock),
        item.end_time.as_deref().and_then(parse_clock),
    ) else {
        return false;
    };
    let at_minutes = minutes(at.time());
    at_minutes >= minutes(start) - SCHEDULE_SLACK_MINUTES
        && at_minutes <= minutes(end) + SCHEDULE_SLACK_MINUTES
}

/// Resolve each record's subject against the weekly schedule.
///
/// Records whose timestamp cannot be parsed are dropped.
#[must_use]
pub fn map_logs(records: &[AttendanceRecord], schedule: &[ScheduleItem]) -> Vec<MappedLog> {
    records
        .iter()
        .filter_map(|record| {
            let Some(at) = record.occurred_at() else {
                tracing::warn!(
                    id = record.id,
                    timestamp = %record.timestamp,
                    "skipping log with unparseable timestamp"
                );
                return None;
            };
            let subject = schedule
                .iter()
                .find(|item| schedule_matches(item, record, at))
                .and_then(|item| item.subject_title.clone().or_else(|| item.subject_code.clone()))
                .unwrap_or_else(|| {
                    if record.action == AttendanceAction::SystemAlert {
                        UNAUTHORIZED.to_string()
                    } else {
                        UNSCHEDULED.to_string()
                    }
                });
            Some(MappedLog {
                record: record.clone(),
                at,
                subject,
            })
        })
        .collect()
}

/// Distinct subject titles in schedule order, for the subject selector.
#[must_use]
pub fn schedule_subjects(schedule: &[ScheduleItem]) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for title in schedule.iter().filter_map(|item| item.subject_title.as_ref()) {
        if !subjects.contains(title) {
            subjects.push(title.clone());
        }
    }
    subjects
}

/// Parameters of a personal attendance report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Report kind.
    pub kind: HistoryReportKind,
    /// Day, week start, range end, or any day of the month.
    pub anchor: NaiveDate,
    /// Academic start year for semester and year reports.
    pub academic_year: i32,
    /// Term for semester reports.
    pub semester: Semester,
    /// Exact subject restriction.
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounds {
    All,
    Between(NaiveDateTime, NaiveDateTime),
    Nothing,
}

fn start_of(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn end_of(day: NaiveDate) -> Option<NaiveDateTime> {
    day.and_hms_milli_opt(23, 59, 59, 999)
}

fn day_span(first: NaiveDate, last: NaiveDate) -> Bounds {
    end_of(last).map_or(Bounds::Nothing, |end| Bounds::Between(start_of(first), end))
}

fn long_date(day: NaiveDate) -> String {
    day.format("%B %-d, %Y").to_string()
}

impl HistoryQuery {
    /// Query for `kind` anchored on `anchor` with no subject restriction.
    #[must_use]
    pub fn new(kind: HistoryReportKind, anchor: NaiveDate) -> Self {
        let academic_year = if anchor.month() >= 8 {
            anchor.year()
        } else {
            anchor.year() - 1
        };
        Self {
            kind,
            anchor,
            academic_year,
            semester: Semester::default(),
            subject: None,
        }
    }

    fn bounds(&self) -> Bounds {
        let anchor = self.anchor;
        match self.kind {
            HistoryReportKind::Daily | HistoryReportKind::Late | HistoryReportKind::BreakLog => {
                day_span(anchor, anchor)
            }
            HistoryReportKind::Weekly => anchor
                .checked_add_signed(Duration::days(6))
                .map_or(Bounds::Nothing, |last| day_span(anchor, last)),
            HistoryReportKind::History30Days => anchor
                .checked_sub_signed(Duration::days(HISTORY_DAYS))
                .map_or(Bounds::Nothing, |first| day_span(first, anchor)),
            HistoryReportKind::Monthly => {
                let first = anchor.with_day(1);
                let last = first
                    .and_then(|first| first.checked_add_months(chrono::Months::new(1)))
                    .and_then(|next| next.pred_opt());
                match (first, last) {
                    (Some(first), Some(last)) => day_span(first, last),
                    _ => Bounds::Nothing,
                }
            }
            HistoryReportKind::Semester => self
                .semester
                .days(self.academic_year)
                .map_or(Bounds::Nothing, |(first, last)| day_span(first, last)),
            HistoryReportKind::AcademicYear => {
                let first = NaiveDate::from_ymd_opt(self.academic_year, 8, 1);
                let last = NaiveDate::from_ymd_opt(self.academic_year + 1, 7, 31);
                match (first, last) {
                    (Some(first), Some(last)) => day_span(first, last),
                    _ => Bounds::Nothing,
                }
            }
            HistoryReportKind::Consistency => Bounds::All,
        }
    }

    /// Whether a log falls inside this query.
    #[must_use]
    pub fn includes(&self, log: &MappedLog) -> bool {
        if let Some(subject) = &self.subject
            && &log.subject != subject
        {
            return false;
        }
        match self.bounds() {
            Bounds::All => true,
            Bounds::Between(start, end) => log.at >= start && log.at <= end,
            Bounds::Nothing => false,
        }
    }

    /// Matching logs, newest first.
    #[must_use]
    pub fn apply(&self, logs: &[MappedLog]) -> Vec<MappedLog> {
        let mut selected: Vec<MappedLog> = logs
            .iter()
            .filter(|log| self.includes(log))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.at.cmp(&a.at));
        selected
    }

    /// Human-readable covered period.
    #[must_use]
    pub fn date_range_label(&self) -> String {
        let anchor = self.anchor;
        match self.kind {
            HistoryReportKind::Weekly => {
                let last = anchor
                    .checked_add_signed(Duration::days(6))
                    .unwrap_or(anchor);
                format!("{} - {}", long_date(anchor), long_date(last))
            }
            HistoryReportKind::History30Days => {
                let first = anchor
                    .checked_sub_signed(Duration::days(HISTORY_DAYS))
                    .unwrap_or(anchor);
                format!("{} - {}", long_date(first), long_date(anchor))
            }
            HistoryReportKind::Monthly => anchor.format("%B %Y").to_string(),
            HistoryReportKind::Semester => format!(
                "{} Semester {}-{}",
                self.semester.ordinal(),
                self.academic_year,
                self.academic_year + 1
            ),
            HistoryReportKind::AcademicYear => format!(
                "Academic Year {}-{}",
                self.academic_year,
                self.academic_year + 1
            ),
            HistoryReportKind::Daily
            | HistoryReportKind::Late
            | HistoryReportKind::BreakLog
            | HistoryReportKind::Consistency => long_date(anchor),
        }
    }

    /// Header descriptor for a personal report on `name` / `tupm_id`.
    #[must_use]
    pub fn report_info(
        &self,
        name: Option<String>,
        tupm_id: Option<String>,
        generated_at: String,
    ) -> ReportInfo {
        ReportInfo {
            title: self.kind.title().to_string(),
            kind: Some(PERSONAL_KIND.to_string()),
            category: ReportCategory::Personal { name, id: tupm_id },
            date_range: self.date_range_label(),
            generated_at,
        }
    }
}

/// Status column value for an attendance event.
#[must_use]
pub const fn status_label(action: &AttendanceAction) -> &'static str {
    match action {
        AttendanceAction::Entry | AttendanceAction::BreakIn => "PRESENT",
        AttendanceAction::Late => "LATE",
        AttendanceAction::Absent => "ABSENT",
        AttendanceAction::SystemAlert => "ALERT",
        AttendanceAction::BreakOut | AttendanceAction::Exit | AttendanceAction::Other(_) => "OUT",
    }
}

/// Report rows: Date, Time, Subject, Room, Status, Remarks.
#[must_use]
pub fn history_rows(logs: &[MappedLog]) -> Vec<ReportRow> {
    logs.iter()
        .map(|log| {
            ReportRow::new()
                .with("Date", log.at.format("%-m/%-d/%Y").to_string())
                .with("Time", log.at.format("%I:%M %p").to_string())
                .with("Subject", log.subject.clone())
                .with("Room", log.record.room.clone().unwrap_or_else(|| "N/A".to_string()))
                .with("Status", status_label(&log.record.action))
                .with("Remarks", "-")
        })
        .collect()
}

/// Event counts for summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTally {
    /// Entries and returns from break.
    pub present: usize,
    /// Late arrivals.
    pub late: usize,
    /// Absences.
    pub absent: usize,
    /// Break departures.
    pub breaks: usize,
    /// System alerts.
    pub alerts: usize,
}

impl AttendanceTally {
    /// Count events by kind.
    #[must_use]
    pub fn from_logs(logs: &[MappedLog]) -> Self {
        logs.iter().fold(Self::default(), |mut tally, log| {
            match log.record.action {
                AttendanceAction::Entry | AttendanceAction::BreakIn => tally.present += 1,
                AttendanceAction::Late => tally.late += 1,
                AttendanceAction::Absent => tally.absent += 1,
                AttendanceAction::BreakOut => tally.breaks += 1,
                AttendanceAction::SystemAlert => tally.alerts += 1,
                AttendanceAction::Exit | AttendanceAction::Other(_) => {}
            }
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, timestamp: &str, action: &str, room: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id,
            timestamp: timestamp.to_string(),
            action: AttendanceAction::from(action.to_string()),
            class_name: None,
            room: room.map(str::to_string),
            verified_by: None,
        }
    }

    fn slot(title: &str, day: &str, start: &str, end: &str, room: &str) -> ScheduleItem {
        ScheduleItem {
            class_id: 1,
            subject_code: Some("CS101".into()),
            subject_title: Some(title.into()),
            day_of_week: Some(day.into()),
            start_time: Some(start.into()),
            end_time: Some(end.into()),
            room: Some(room.into()),
            faculty_name: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn logs_map_to_subjects_within_the_slack_window() {
        // 2026-03-02 is a Monday.
        let schedule = vec![slot("Programming 1", "Monday", "09:00:00", "10:30:00", "CL-1")];
        let records = vec![
            record(1, "2026-03-02T08:05:00", "ENTRY", Some("CL-1")),
            record(2, "2026-03-02T07:55:00", "ENTRY", Some("CL-1")),
            record(3, "2026-03-02T09:30:00", "ENTRY", Some("CL-2")),
            record(4, "2026-03-02T09:30:00", "system_alert", None),
            record(5, "garbage", "ENTRY", None),
        ];
        let mapped = map_logs(&records, &schedule);
        let subjects: Vec<&str> = mapped.iter().map(|log| log.subject.as_str()).collect();
        assert_eq!(
            subjects,
            vec!["Programming 1", "Unscheduled", "Unscheduled", "Programming 1"]
        );

        let alert_only = map_logs(&records[3..4], &[]);
        assert_eq!(alert_only[0].subject, "Unauthorized Entry");
    }

    #[test]
    fn unmatched_logs_ignore_the_record_class_name() {
        let mut alert = record(1, "2026-03-02T09:30:00", "system_alert", None);
        alert.class_name = Some("Programming 1".into());
        let mut entry = record(2, "2026-03-02T09:30:00", "ENTRY", None);
        entry.class_name = Some("Programming 1".into());

        let mapped = map_logs(&[alert, entry], &[]);
        let subjects: Vec<&str> = mapped.iter().map(|log| log.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Unauthorized Entry", "Unscheduled"]);
    }

    #[test]
    fn semester_and_year_windows() {
        let logs = map_logs(
            &[
                record(1, "2025-12-31T15:00:00", "ENTRY", None),
                record(2, "2026-01-05T08:00:00", "ENTRY", None),
                record(3, "2026-07-31T08:00:00", "ENTRY", None),
                record(4, "2026-08-01T08:00:00", "ENTRY", None),
            ],
            &[],
        );
        let mut query = HistoryQuery::new(HistoryReportKind::Semester, day(2026, 1, 10));
        assert_eq!(query.academic_year, 2025);
        let first: Vec<i64> = query.apply(&logs).iter().map(|log| log.record.id).collect();
        assert_eq!(first, vec![1]);

        query.semester = Semester::Second;
        assert_eq!(query.apply(&logs)[0].record.id, 2);
        assert_eq!(query.date_range_label(), "2nd Semester 2025-2026");

        query.kind = HistoryReportKind::AcademicYear;
        let year: Vec<i64> = query.apply(&logs).iter().map(|log| log.record.id).collect();
        assert_eq!(year, vec![3, 2, 1]);
        assert_eq!(query.date_range_label(), "Academic Year 2025-2026");
    }

    #[test]
    fn day_week_month_and_history_windows() {
        let logs = map_logs(
            &[
                record(1, "2026-03-04T08:00:00", "ENTRY", None),
                record(2, "2026-03-10T23:30:00", "EXIT", None),
                record(3, "2026-03-11T00:10:00", "ENTRY", None),
                record(4, "2026-02-03T08:00:00", "ENTRY", None),
            ],
            &[],
        );
        let daily = HistoryQuery::new(HistoryReportKind::Daily, day(2026, 3, 4));
        assert_eq!(daily.apply(&logs).len(), 1);
        assert_eq!(daily.date_range_label(), "March 4, 2026");

        let weekly = HistoryQuery::new(HistoryReportKind::Weekly, day(2026, 3, 4));
        let ids: Vec<i64> = weekly.apply(&logs).iter().map(|log| log.record.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(weekly.date_range_label(), "March 4, 2026 - March 10, 2026");

        let monthly = HistoryQuery::new(HistoryReportKind::Monthly, day(2026, 3, 20));
        assert_eq!(monthly.apply(&logs).len(), 3);
        assert_eq!(monthly.date_range_label(), "March 2026");

        let history = HistoryQuery::new(HistoryReportKind::History30Days, day(2026, 3, 5));
        let ids: Vec<i64> = history.apply(&logs).iter().map(|log| log.record.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(history.date_range_label(), "February 3, 2026 - March 5, 2026");

        let everything = HistoryQuery::new(HistoryReportKind::Consistency, day(2026, 3, 5));
        assert_eq!(everything.apply(&logs)[0].record.id, 3);
    }

    #[test]
    fn subject_filter_is_exact() {
        let schedule = vec![slot("Programming 1", "Wednesday", "08:00", "09:00", "CL-1")];
        let logs = map_logs(&[record(1, "2026-03-04T08:00:00", "ENTRY", None)], &schedule);
        let mut query = HistoryQuery::new(HistoryReportKind::Consistency, day(2026, 3, 4));
        query.subject = Some("programming 1".into());
        assert!(query.apply(&logs).is_empty());
        query.subject = Some("Programming 1".into());
        assert_eq!(query.apply(&logs).len(), 1);
    }

    #[test]
    fn rows_and_titles() {
        let logs = map_logs(
            &[record(1, "2026-03-04T13:05:00", "break_in", Some("CL-1"))],
            &[],
        );
        let rows = history_rows(&logs);
        assert_eq!(rows[0].get("Date"), Some("3/4/2026"));
        assert_eq!(rows[0].get("Time"), Some("01:05 PM"));
        assert_eq!(rows[0].get("Status"), Some("PRESENT"));
        assert_eq!(rows[0].get("Room"), Some("CL-1"));
        assert_eq!(HistoryReportKind::Daily.title(), "Daily Attendance per Subject");
        assert_eq!("weekly".parse::<HistoryReportKind>(), Ok(HistoryReportKind::Weekly));
        assert_eq!(
            "HISTORY_30D".parse::<HistoryReportKind>(),
            Ok(HistoryReportKind::History30Days)
        );
    }

    #[test]
    fn clock_formats() {
        assert_eq!(parse_clock("09:00 AM"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_clock("13:30"), NaiveTime::from_hms_opt(13, 30, 0));
        assert_eq!(parse_clock("noon"), None);
    }

    #[test]
    fn tally_counts_by_kind() {
        let logs = map_logs(
            &[
                record(1, "2026-03-04T08:00:00", "ENTRY", None),
                record(2, "2026-03-04T10:00:00", "BREAK_OUT", None),
                record(3, "2026-03-04T10:15:00", "BREAK_IN", None),
                record(4, "2026-03-05T08:20:00", "late", None),
            ],
            &[],
        );
        let tally = AttendanceTally::from_logs(&logs);
        assert_eq!(tally.present, 2);
        assert_eq!(tally.breaks, 1);
        assert_eq!(tally.late, 1);
    }
}
