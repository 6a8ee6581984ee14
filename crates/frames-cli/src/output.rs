//! Output renderers and report file helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use frames_api_models::{
    EnrollmentResponse, FaceStatusResponse, LoginResponse, NotificationItem, UserResponse,
    UserScheduleEntry,
};
use frames_report::{ExportedReport, RoleCounts, UserListing};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

pub(crate) fn render_user_list(
    users: &[&UserListing],
    counts: &RoleCounts,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(users)?,
        OutputFormat::Table => {
            println!(
                "{:>6} {:<14} {:<8} {:<9} {:<10} {:<28} NAME",
                "ID", "TUPM ID", "ROLE", "STATUS", "FACE", "EMAIL"
            );
            for user in users {
                println!(
                    "{:>6} {:<14} {:<8} {:<9} {:<10} {:<28} {}",
                    user.id,
                    user.tupm_id,
                    user.role,
                    user.verification.as_str(),
                    user.face.label(),
                    user.email,
                    user.name
                );
            }
            println!(
                "{} shown; {} total ({} students, {} faculty, {} admins)",
                users.len(),
                counts.total(),
                counts.students,
                counts.faculty,
                counts.admins
            );
        }
    }
    Ok(())
}

pub(crate) fn render_user(user: &UserResponse, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(user)?,
        OutputFormat::Table => {
            println!("id: {}", user.id);
            println!("name: {}", user.full_name());
            if let Some(middle) = &user.middle_name {
                println!("middle name: {middle}");
            }
            println!("email: {}", user.email);
            println!("tupm id: {}", user.tupm_id);
            println!("role: {}", user.role.label());
            println!("verification: {}", user.verification_status.as_str());
            println!("face registered: {}", user.face_registered);
            if let Some(department) = &user.department_name {
                println!("department: {department}");
            }
            if let Some(program) = &user.program_name {
                println!("program: {program}");
            }
            if let (Some(year), Some(section)) = (&user.year_level, &user.section) {
                println!("year/section: {year}-{section}");
            }
            if let Some(last_active) = &user.last_active {
                println!("last active: {last_active}");
            }
        }
    }
    Ok(())
}

pub(crate) fn render_login(response: &LoginResponse, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(response)?,
        OutputFormat::Table => {
            println!("{}", response.message);
            render_user(&response.user, format)?;
        }
    }
    Ok(())
}

pub(crate) fn render_notifications(
    items: &[NotificationItem],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(items)?,
        OutputFormat::Table => {
            if items.is_empty() {
                println!("no notifications");
                return Ok(());
            }
            println!("{:<10} {:<4} {:<16} TEXT", "ID", "READ", "WHEN");
            for item in items {
                println!(
                    "{:<10} {:<4} {:<16} {}",
                    item.id,
                    if item.read { "yes" } else { "no" },
                    item.time.as_deref().unwrap_or("-"),
                    item.text
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_user_schedule(
    entries: &[UserScheduleEntry],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(entries)?,
        OutputFormat::Table => {
            if entries.is_empty() {
                println!("No schedule data available.");
                return Ok(());
            }
            println!("{:<12} {:<10} {:<10} {:<20} ROOM", "SUBJECT", "SECTION", "DAY", "TIME");
            let cell = |value: Option<&str>| value.unwrap_or("-").to_string();
            for entry in entries {
                println!(
                    "{:<12} {:<10} {:<10} {:<20} {}",
                    cell(entry.subject_code.as_deref()),
                    cell(entry.section.as_deref()),
                    cell(entry.day.as_deref()),
                    cell(entry.time.as_deref()),
                    cell(entry.room.as_deref())
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_face_status(status: &FaceStatusResponse, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(status)?,
        OutputFormat::Table => {
            println!("user: {}", status.user_id);
            println!("registered: {}", status.face_registered);
            if status.face_registered {
                println!("samples: {}", status.num_samples);
                println!("quality: {:.2}", status.quality_score);
                if !status.model_version.is_empty() {
                    println!("model: {}", status.model_version);
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn render_enrollment(
    response: &EnrollmentResponse,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(response)?,
        OutputFormat::Table => {
            println!("{}", response.message);
            println!(
                "samples: {} quality: {:.2}",
                response.num_samples, response.quality_score
            );
        }
    }
    Ok(())
}

/// Write an exported report into `dir`, creating it when missing.
pub(crate) fn write_report(dir: &Path, report: &ExportedReport) -> CliResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|err| {
        CliError::failure(anyhow!("failed to create {}: {err}", dir.display()))
    })?;
    let path = dir.join(&report.file_name);
    fs::write(&path, &report.bytes)
        .map_err(|err| CliError::failure(anyhow!("failed to write {}: {err}", path.display())))?;
    tracing::info!(path = %path.display(), bytes = report.bytes.len(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_report_creates_missing_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("exports");
        let report = ExportedReport {
            file_name: "Room_Utilization_1.csv".into(),
            mime_type: "text/csv;charset=utf-8",
            bytes: b"Room\nCL-1".to_vec(),
        };

        let path = write_report(&dir, &report).expect("write");

        assert_eq!(path, dir.join("Room_Utilization_1.csv"));
        assert_eq!(fs::read(&path).expect("read"), b"Room\nCL-1");
    }
}
