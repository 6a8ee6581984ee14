use chrono::{Local, NaiveDate, NaiveDateTime};
use frames_api_models::{
    AttendanceRecord, ClassAttendanceEntry, FacultySummaryEntry, RoomOccupancyEntry, ScheduleItem,
    UserResponse,
};
use frames_report::history::{history_rows, map_logs};
use frames_report::rows::{
    class_attendance_info, class_attendance_rows, faculty_summary_info, faculty_summary_rows,
    room_occupancy_info, room_occupancy_rows, user_directory_info, user_directory_rows,
};
use frames_report::{
    HistoryQuery, ReportError, ReportInfo, ReportRow, UserListing, export, generated_label,
};

use crate::cli::{ClassReportArgs, DirectoryReportArgs, ExportArgs, HistoryReportArgs};
use crate::client::{AppContext, CliError, CliResult, timestamp_now_ms};
use crate::commands::users::{directory_filter, fetch_users};
use crate::output::write_report;

fn month_label(now: NaiveDateTime) -> String {
    now.format("%B %Y").to_string()
}

fn day_label(now: NaiveDateTime) -> String {
    now.format("%B %-d, %Y").to_string()
}

/// Render and save one report, printing the written path.
fn save(info: &ReportInfo, rows: &[ReportRow], args: &ExportArgs) -> CliResult<()> {
    let report = export(info, rows, args.format, timestamp_now_ms()).map_err(|err| match err {
        ReportError::Empty => CliError::validation(ReportError::Empty.to_string()),
        other => CliError::failure(other),
    })?;
    let path = write_report(&args.out, &report)?;
    println!("{}", path.display());
    Ok(())
}

pub(crate) async fn handle_report_history(
    ctx: &AppContext,
    args: HistoryReportArgs,
) -> CliResult<()> {
    let now = Local::now().naive_local();
    let anchor: NaiveDate = args.date.unwrap_or_else(|| now.date());

    let user: UserResponse = ctx.get_json(&format!("/api/users/{}", args.user_id)).await?;
    let schedule: Vec<ScheduleItem> = match ctx
        .get_json(&format!("/api/student/schedule/{}", args.user_id))
        .await
    {
        Ok(schedule) => schedule,
        Err(err) => {
            tracing::warn!(
                user_id = args.user_id,
                error = %err.display_message(),
                "schedule unavailable; subjects will not be resolved"
            );
            Vec::new()
        }
    };
    let records: Vec<AttendanceRecord> = ctx
        .get_json(&format!("/api/student/history/{}", args.user_id))
        .await?;

    let mut query = HistoryQuery::new(args.kind, anchor);
    if let Some(year) = args.academic_year {
        query.academic_year = year;
    }
    if let Some(semester) = args.semester {
        query.semester = semester;
    }
    query.subject = args.subject;

    let selected = query.apply(&map_logs(&records, &schedule));
    tracing::debug!(total = records.len(), selected = selected.len(), kind = %args.kind, "history filtered");

    let mut info = query.report_info(
        Some(user.full_name()).filter(|name| !name.is_empty()),
        Some(user.tupm_id.clone()).filter(|id| !id.is_empty()),
        generated_label(now),
    );
    if let Some(range) = args.export.date_range.clone() {
        info.date_range = range;
    }
    save(&info, &history_rows(&selected), &args.export)
}

pub(crate) async fn handle_report_class(ctx: &AppContext, args: ClassReportArgs) -> CliResult<()> {
    let now = Local::now().naive_local();
    let entries: Vec<ClassAttendanceEntry> = ctx
        .get_json(&format!("/api/faculty/class-details/{}", args.class_id))
        .await?;
    let info = class_attendance_info(
        args.class_code,
        args.section,
        args.export
            .date_range
            .clone()
            .unwrap_or_else(|| day_label(now)),
        generated_label(now),
    );
    save(&info, &class_attendance_rows(&entries), &args.export)
}

pub(crate) async fn handle_report_faculty_summary(
    ctx: &AppContext,
    args: ExportArgs,
) -> CliResult<()> {
    let now = Local::now().naive_local();
    let entries: Vec<FacultySummaryEntry> = ctx.get_json("/reports/faculty-summary").await?;
    let info = faculty_summary_info(
        args.date_range.clone().unwrap_or_else(|| month_label(now)),
        generated_label(now),
    );
    save(&info, &faculty_summary_rows(&entries), &args)
}

pub(crate) async fn handle_report_room_occupancy(
    ctx: &AppContext,
    args: ExportArgs,
) -> CliResult<()> {
    let now = Local::now().naive_local();
    let entries: Vec<RoomOccupancyEntry> = ctx.get_json("/reports/room-occupancy").await?;
    let info = room_occupancy_info(
        args.date_range.clone().unwrap_or_else(|| month_label(now)),
        generated_label(now),
    );
    save(&info, &room_occupancy_rows(&entries), &args)
}

pub(crate) async fn handle_report_directory(
    ctx: &AppContext,
    args: DirectoryReportArgs,
) -> CliResult<()> {
    let now = Local::now().naive_local();
    let users = fetch_users(ctx).await?;
    let listings: Vec<UserListing> = users.iter().map(UserListing::from).collect();
    let shown = directory_filter(&args.filter).apply(&listings);
    let info = user_directory_info(
        args.export
            .date_range
            .clone()
            .unwrap_or_else(|| day_label(now)),
        generated_label(now),
    );
    save(&info, &user_directory_rows(&shown), &args.export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::UserListArgs;
    use crate::commands::test_support::context_with;
    use frames_report::ReportFormat;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    fn export_args(dir: &Path, format: ReportFormat) -> ExportArgs {
        ExportArgs {
            format,
            out: dir.to_path_buf(),
            date_range: Some("March 2026".into()),
        }
    }

    fn only_file(dir: &Path) -> (String, Vec<u8>) {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .expect("read dir")
            .map(|entry| entry.expect("entry").path())
            .collect();
        assert_eq!(entries.len(), 1, "expected exactly one report file");
        let path = entries.remove(0);
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("utf-8 name")
            .to_string();
        (name, fs::read(&path).expect("read report"))
    }

    #[tokio::test]
    async fn faculty_summary_writes_csv() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/reports/faculty-summary");
            then.status(200).json_body(json!([
                {"name": "Prof. Reyes", "subject_load": 18, "attendance_rate": 92.0, "lates": 1.5, "remarks": "Good"},
                {"name": "Prof. Santos", "subject_load": 12, "attendance_rate": 71.5, "lates": 4.0, "remarks": "At Risk"}
            ]));
        });
        let temp = tempfile::tempdir().expect("tempdir");

        let ctx = context_with(&server);
        handle_report_faculty_summary(&ctx, export_args(temp.path(), ReportFormat::Csv))
            .await
            .expect("report should export");
        mock.assert();

        let (name, bytes) = only_file(temp.path());
        assert!(name.starts_with("Faculty_Attendance_Summary_"));
        assert!(name.ends_with(".csv"));
        let text = String::from_utf8(bytes).expect("utf-8 csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Faculty,Subject_Load,Attendance,Average_Lates,Status");
    }

    #[tokio::test]
    async fn empty_csv_export_is_rejected_without_writing() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/reports/room-occupancy");
            then.status(200).json_body(json!([]));
        });
        let temp = tempfile::tempdir().expect("tempdir");

        let ctx = context_with(&server);
        let err = handle_report_room_occupancy(&ctx, export_args(temp.path(), ReportFormat::Csv))
            .await
            .expect_err("empty export should fail");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(fs::read_dir(temp.path()).expect("read dir").count(), 0);
    }

    #[tokio::test]
    async fn empty_pdf_export_still_renders() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/reports/room-occupancy");
            then.status(200).json_body(json!([]));
        });
        let temp = tempfile::tempdir().expect("tempdir");

        let ctx = context_with(&server);
        handle_report_room_occupancy(&ctx, export_args(temp.path(), ReportFormat::Pdf))
            .await
            .expect("pdf export should succeed");
        let (name, bytes) = only_file(temp.path());
        assert!(name.starts_with("Room_Utilization_Report_"));
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[tokio::test]
    async fn history_maps_subjects_and_filters_by_day() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/users/7");
            then.status(200).json_body(json!({
                "id": 7,
                "email": "ana@tup.edu.ph",
                "first_name": "Ana",
                "last_name": "Cruz",
                "role": "STUDENT",
                "tupm_id": "TUPM-22-0007",
                "face_registered": true,
                "verification_status": "Verified"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/student/schedule/7");
            then.status(200).json_body(json!([{
                "class_id": 3,
                "subject_code": "CS101",
                "subject_title": "Programming 1",
                "day_of_week": "Wednesday",
                "start_time": "08:00",
                "end_time": "10:00",
                "room": "CL-1"
            }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/student/history/7");
            then.status(200).json_body(json!([
                {"id": 1, "timestamp": "2026-03-04T08:05:00", "action": "ENTRY", "room": "CL-1"},
                {"id": 2, "timestamp": "2026-03-04T13:00:00", "action": "ENTRY", "room": "CL-2"},
                {"id": 3, "timestamp": "2026-03-05T08:05:00", "action": "ENTRY", "room": "CL-1"}
            ]));
        });
        let temp = tempfile::tempdir().expect("tempdir");

        let ctx = context_with(&server);
        let args = HistoryReportArgs {
            user_id: 7,
            kind: frames_report::HistoryReportKind::Daily,
            date: NaiveDate::from_ymd_opt(2026, 3, 4),
            academic_year: None,
            semester: None,
            subject: None,
            export: ExportArgs {
                format: ReportFormat::Csv,
                out: temp.path().to_path_buf(),
                date_range: None,
            },
        };
        handle_report_history(&ctx, args)
            .await
            .expect("history export should succeed");

        let (_, bytes) = only_file(temp.path());
        let text = String::from_utf8(bytes).expect("utf-8 csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            r#""3/4/2026","01:00 PM","Unscheduled","CL-2","PRESENT","-""#
        );
        assert_eq!(
            lines[2],
            r#""3/4/2026","08:05 AM","Programming 1","CL-1","PRESENT","-""#
        );
    }

    #[tokio::test]
    async fn history_survives_missing_schedule() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/users/8");
            then.status(200).json_body(json!({
                "id": 8, "email": "ben@tup.edu.ph", "role": "STUDENT"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/student/schedule/8");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/student/history/8");
            then.status(200).json_body(json!([
                {"id": 1, "timestamp": "2026-03-04T08:05:00", "action": "ENTRY"}
            ]));
        });
        let temp = tempfile::tempdir().expect("tempdir");

        let ctx = context_with(&server);
        let args = HistoryReportArgs {
            user_id: 8,
            kind: frames_report::HistoryReportKind::Consistency,
            date: NaiveDate::from_ymd_opt(2026, 3, 4),
            academic_year: None,
            semester: None,
            subject: None,
            export: ExportArgs {
                format: ReportFormat::Csv,
                out: temp.path().to_path_buf(),
                date_range: None,
            },
        };
        handle_report_history(&ctx, args)
            .await
            .expect("history export should succeed");
        let (_, bytes) = only_file(temp.path());
        assert!(String::from_utf8(bytes).expect("csv").contains(r#""Unscheduled","N/A""#));
    }

    #[tokio::test]
    async fn directory_export_honours_role_filter() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/verification/list");
            then.status(200).json_body(json!([
                {"id": 1, "email": "a@tup.edu.ph", "first_name": "Ana", "last_name": "Cruz", "role": "STUDENT", "verification_status": "Verified"},
                {"id": 2, "email": "b@tup.edu.ph", "first_name": "Ben", "last_name": "Reyes", "role": "FACULTY", "verification_status": "Verified"}
            ]));
        });
        let temp = tempfile::tempdir().expect("tempdir");

        let ctx = context_with(&server);
        let args = DirectoryReportArgs {
            filter: UserListArgs {
                search: String::new(),
                role: "FACULTY".into(),
            },
            export: export_args(temp.path(), ReportFormat::Csv),
        };
        handle_report_directory(&ctx, args)
            .await
            .expect("directory export should succeed");
        let (_, bytes) = only_file(temp.path());
        let text = String::from_utf8(bytes).expect("csv");
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Ben Reyes"));
    }
}
