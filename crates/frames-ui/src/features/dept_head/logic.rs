//! User management tabs and department report catalogue.

use chrono::NaiveDateTime;
use frames_api_models::{FacultySummaryEntry, RoomOccupancyEntry};
use frames_report::ReportInfo;
use frames_report::rows::{faculty_summary_info, room_occupancy_info};

/// Role dropdown values for the directory tab (exact role strings).
pub const ROLE_OPTIONS: [&str; 5] = ["All", "STUDENT", "FACULTY", "HEAD", "ADMIN"];
/// Status dropdown values for the verification tab.
pub const STATUS_OPTIONS: [&str; 5] = ["Outstanding", "Pending", "Rejected", "Verified", "All"];

/// User management tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTab {
    /// Everyone, filtered by search and role.
    Directory,
    /// Registrations awaiting a decision.
    Verification,
}

impl UserTab {
    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Directory => "User Directory",
            Self::Verification => "Verification Queue",
        }
    }
}

/// Department-level report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeptReport {
    /// Per-faculty load and attendance.
    FacultySummary,
    /// Faculty ranked by average lates.
    FacultyLate,
    /// Room capacity and utilisation.
    RoomOccupancy,
    /// Rooms ranked by utilisation.
    Overcrowding,
}

/// Endpoint a department report draws its rows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    /// `/reports/faculty-summary`.
    Faculty,
    /// `/reports/room-occupancy`.
    Rooms,
}

impl DeptReport {
    /// Every report in selector order.
    pub const ALL: [Self; 4] = [
        Self::FacultySummary,
        Self::FacultyLate,
        Self::RoomOccupancy,
        Self::Overcrowding,
    ];

    /// Selector caption and printed title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FacultySummary => "Faculty Attendance Summary",
            Self::FacultyLate => "Faculty Late Arrival Report",
            Self::RoomOccupancy => "Room Utilization Report",
            Self::Overcrowding => "Overcrowding Alerts",
        }
    }

    /// Selector description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FacultySummary => "Subject load, attendance rate and lates per faculty member.",
            Self::FacultyLate => "Identifies recurring delays by faculty.",
            Self::RoomOccupancy => "Capacity, peak occupancy and utilization per room.",
            Self::Overcrowding => "Detects rooms exceeding safety capacity.",
        }
    }

    /// Endpoint feeding the report.
    #[must_use]
    pub const fn source(self) -> ReportSource {
        match self {
            Self::FacultySummary | Self::FacultyLate => ReportSource::Faculty,
            Self::RoomOccupancy | Self::Overcrowding => ReportSource::Rooms,
        }
    }

    /// Header block for the export, titled after the report.
    #[must_use]
    pub fn info(self, period: String, generated: String) -> ReportInfo {
        let mut info = match self.source() {
            ReportSource::Faculty => faculty_summary_info(period, generated),
            ReportSource::Rooms => room_occupancy_info(period, generated),
        };
        info.title = self.label().to_string();
        info
    }

    /// Faculty rows in display order; the late report puts the most lates first.
    #[must_use]
    pub fn order_faculty(self, entries: &[FacultySummaryEntry]) -> Vec<FacultySummaryEntry> {
        let mut ordered = entries.to_vec();
        if self == Self::FacultyLate {
            ordered.sort_by(|a, b| b.lates.total_cmp(&a.lates));
        }
        ordered
    }

    /// Room rows in display order; the overcrowding report puts the fullest first.
    #[must_use]
    pub fn order_rooms(self, entries: &[RoomOccupancyEntry]) -> Vec<RoomOccupancyEntry> {
        let mut ordered = entries.to_vec();
        if self == Self::Overcrowding {
            ordered.sort_by(|a, b| b.utilization.total_cmp(&a.utilization));
        }
        ordered
    }
}

/// Period printed on department reports: the current month and year.
#[must_use]
pub fn period_label(now: NaiveDateTime) -> String {
    now.format("%B %Y").to_string()
}

/// Account action offered in the user tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Verify a pending registration.
    Approve,
    /// Turn a registration down.
    Reject,
    /// Remove the account.
    Delete,
}

impl UserAction {
    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
            Self::Delete => "Delete",
        }
    }

    /// Confirmation question shown before the request is sent.
    #[must_use]
    pub fn prompt(self, name: &str) -> String {
        match self {
            Self::Approve => format!("Approve {name}'s registration?"),
            Self::Reject => format!("Reject {name}'s registration?"),
            Self::Delete => format!(
                "Delete {name}? This permanently removes the account and its attendance records."
            ),
        }
    }

    /// Fallback when the backend does not explain a failure.
    #[must_use]
    pub const fn failure(self) -> &'static str {
        match self {
            Self::Approve => "Failed to approve user.",
            Self::Reject => "Failed to reject user.",
            Self::Delete => "Failed to delete user.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use frames_api_models::VerificationStatus;
    use frames_report::{RoleFilter, StatusFilter};

    #[test]
    fn period_is_month_and_year() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 4)
            .and_then(|day| day.and_hms_opt(9, 0, 0))
            .expect("valid time");
        assert_eq!(period_label(now), "March 2026");
    }

    #[test]
    fn dropdown_values_parse_into_filters() {
        assert_eq!(RoleFilter::parse(ROLE_OPTIONS[0]), RoleFilter::All);
        assert_eq!(
            RoleFilter::parse(ROLE_OPTIONS[2]),
            RoleFilter::Exact("FACULTY".into())
        );
        assert_eq!(StatusFilter::parse(STATUS_OPTIONS[0]), StatusFilter::Outstanding);
        assert_eq!(StatusFilter::parse(STATUS_OPTIONS[4]), StatusFilter::Any);
        assert_eq!(
            StatusFilter::parse(STATUS_OPTIONS[2]),
            StatusFilter::Only(VerificationStatus::Rejected)
        );
    }

    #[test]
    fn delete_prompt_names_the_account() {
        let prompt = UserAction::Delete.prompt("Ana Cruz");
        assert!(prompt.starts_with("Delete Ana Cruz?"));
        assert_eq!(UserAction::Reject.failure(), "Failed to reject user.");
    }

    fn faculty(name: &str, lates: f64) -> FacultySummaryEntry {
        FacultySummaryEntry {
            name: name.to_string(),
            subject_load: 18,
            attendance_rate: 90.0,
            lates,
            remarks: "Good".to_string(),
        }
    }

    #[test]
    fn four_reports_share_two_sources() {
        assert_eq!(DeptReport::ALL.len(), 4);
        let faculty: Vec<_> = DeptReport::ALL
            .into_iter()
            .filter(|report| report.source() == ReportSource::Faculty)
            .collect();
        assert_eq!(faculty, [DeptReport::FacultySummary, DeptReport::FacultyLate]);
        assert_eq!(DeptReport::Overcrowding.source(), ReportSource::Rooms);
    }

    #[test]
    fn export_is_titled_after_the_chosen_report() {
        let info = DeptReport::Overcrowding.info("March 2026".into(), "now".into());
        assert_eq!(info.title, "Overcrowding Alerts");
        assert_eq!(info.kind.as_deref(), Some("FACILITY REPORT"));
        let info = DeptReport::FacultyLate.info("March 2026".into(), "now".into());
        assert_eq!(info.title, "Faculty Late Arrival Report");
        assert_eq!(info.kind.as_deref(), Some("DEPARTMENT REPORT"));
    }

    #[test]
    fn late_report_ranks_by_lates() {
        let entries = [faculty("Reyes", 0.5), faculty("Cruz", 3.0), faculty("Lim", 1.2)];
        let names = |rows: Vec<FacultySummaryEntry>| -> Vec<String> {
            rows.into_iter().map(|row| row.name).collect()
        };
        assert_eq!(
            names(DeptReport::FacultyLate.order_faculty(&entries)),
            ["Cruz", "Lim", "Reyes"]
        );
        assert_eq!(
            names(DeptReport::FacultySummary.order_faculty(&entries)),
            ["Reyes", "Cruz", "Lim"]
        );
    }
}
