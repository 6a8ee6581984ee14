//! Row builders turning API payloads into report rows.

use frames_api_models::{ClassAttendanceEntry, FacultySummaryEntry, RoomOccupancyEntry};

use crate::directory::UserListing;
use crate::info::{ReportCategory, ReportInfo};
use crate::table::ReportRow;

/// Scope printed on department reports.
pub const DEPARTMENT_SCOPE: &str = "Computer Studies Department";

fn percent(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

fn decimal(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Student, TUPM_ID, Time_In, Status, Remarks.
#[must_use]
pub fn class_attendance_rows(entries: &[ClassAttendanceEntry]) -> Vec<ReportRow> {
    entries
        .iter()
        .map(|entry| {
            ReportRow::new()
                .with(
                    "Student",
                    format!("{} {}", entry.first_name, entry.last_name).trim().to_string(),
                )
                .with("TUPM_ID", entry.tupm_id.clone())
                .with(
                    "Time_In",
                    entry
                        .time_in
                        .clone()
                        .filter(|value| !value.is_empty())
                        .unwrap_or_else(|| "-".to_string()),
                )
                .with("Status", entry.status.clone())
                .with(
                    "Remarks",
                    entry
                        .remarks
                        .clone()
                        .filter(|value| !value.is_empty())
                        .unwrap_or_else(|| "-".to_string()),
                )
        })
        .collect()
}

/// Faculty, Subject_Load, Attendance, Average_Lates, Status.
#[must_use]
pub fn faculty_summary_rows(entries: &[FacultySummaryEntry]) -> Vec<ReportRow> {
    entries
        .iter()
        .map(|entry| {
            ReportRow::new()
                .with("Faculty", entry.name.clone())
                .with("Subject_Load", format!("{} Units", entry.subject_load))
                .with("Attendance", percent(entry.attendance_rate))
                .with("Average_Lates", decimal(entry.lates))
                .with("Status", entry.remarks.clone())
        })
        .collect()
}

/// Room, Capacity, Current, Utilization, Status.
#[must_use]
pub fn room_occupancy_rows(entries: &[RoomOccupancyEntry]) -> Vec<ReportRow> {
    entries
        .iter()
        .map(|entry| {
            ReportRow::new()
                .with("Room", entry.room_name.clone())
                .with("Capacity", entry.capacity.to_string())
                .with("Current", entry.peak_hour.to_string())
                .with("Utilization", percent(entry.utilization))
                .with("Status", entry.status.clone())
        })
        .collect()
}

/// Name, TUPM_ID, Email, Role, Department, Verification, Face_Status.
#[must_use]
pub fn user_directory_rows(users: &[&UserListing]) -> Vec<ReportRow> {
    users
        .iter()
        .map(|user| {
            ReportRow::new()
                .with("Name", user.name.clone())
                .with("TUPM_ID", user.tupm_id.clone())
                .with("Email", user.email.clone())
                .with("Role", user.role.clone())
                .with("Department", user.department.clone())
                .with("Verification", user.verification.as_str())
                .with("Face_Status", user.face.label())
        })
        .collect()
}

/// Header for the department faculty summary.
#[must_use]
pub fn faculty_summary_info(date_range: String, generated_at: String) -> ReportInfo {
    ReportInfo {
        title: "Faculty Attendance Summary".to_string(),
        kind: Some("DEPARTMENT REPORT".to_string()),
        category: ReportCategory::System {
            scope: Some(DEPARTMENT_SCOPE.to_string()),
        },
        date_range,
        generated_at,
    }
}

/// Header for the room occupancy report.
#[must_use]
pub fn room_occupancy_info(date_range: String, generated_at: String) -> ReportInfo {
    ReportInfo {
        title: "Room Utilization Report".to_string(),
        kind: Some("FACILITY REPORT".to_string()),
        category: ReportCategory::System {
            scope: Some(DEPARTMENT_SCOPE.to_string()),
        },
        date_range,
        generated_at,
    }
}

/// Header for a class attendance sheet.
#[must_use]
pub fn class_attendance_info(
    class_code: Option<String>,
    section: Option<String>,
    date_range: String,
    generated_at: String,
) -> ReportInfo {
    ReportInfo {
        title: "Class Attendance Report".to_string(),
        kind: Some("CLASS REPORT".to_string()),
        category: ReportCategory::Class {
            class_code,
            section,
        },
        date_range,
        generated_at,
    }
}

/// Header for a user directory export.
#[must_use]
pub fn user_directory_info(date_range: String, generated_at: String) -> ReportInfo {
    ReportInfo {
        title: "User Directory".to_string(),
        kind: Some("SYSTEM REPORT".to_string()),
        category: ReportCategory::System { scope: None },
        date_range,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faculty_summary_formats_units_and_rates() {
        let rows = faculty_summary_rows(&[FacultySummaryEntry {
            name: "Prof. Reyes".into(),
            subject_load: 18,
            attendance_rate: 92.0,
            lates: 1.5,
            remarks: "Good".into(),
        }]);
        assert_eq!(rows[0].get("Subject_Load"), Some("18 Units"));
        assert_eq!(rows[0].get("Attendance"), Some("92%"));
        assert_eq!(rows[0].get("Average_Lates"), Some("1.5"));
        assert_eq!(
            rows[0].keys().collect::<Vec<_>>(),
            vec!["Faculty", "Subject_Load", "Attendance", "Average_Lates", "Status"]
        );
    }

    #[test]
    fn room_rows_use_peak_as_current() {
        let rows = room_occupancy_rows(&[RoomOccupancyEntry {
            room_name: "CL-1".into(),
            capacity: 40,
            peak_hour: 35,
            utilization: 87.5,
            status: "High".into(),
        }]);
        assert_eq!(rows[0].get("Current"), Some("35"));
        assert_eq!(rows[0].get("Utilization"), Some("87.5%"));
    }

    #[test]
    fn class_rows_fill_placeholders() {
        let rows = class_attendance_rows(&[ClassAttendanceEntry {
            user_id: 1,
            first_name: "Ana".into(),
            last_name: "Cruz".into(),
            tupm_id: "TUPM-22-0001".into(),
            time_in: None,
            status: "Absent".into(),
            remarks: Some(String::new()),
        }]);
        assert_eq!(rows[0].get("Student"), Some("Ana Cruz"));
        assert_eq!(rows[0].get("Time_In"), Some("-"));
        assert_eq!(rows[0].get("Remarks"), Some("-"));
    }
}
