//! Argument parsing and command dispatch.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use frames_report::{HistoryReportKind, ReportFormat, Semester};
use frames_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use reqwest::Url;
use uuid::Uuid;

use crate::client::{AppContext, CliResult, parse_url};
use crate::commands::auth::handle_login;
use crate::commands::face::{handle_face_enroll, handle_face_status};
use crate::commands::reports::{
    handle_report_class, handle_report_directory, handle_report_faculty_summary,
    handle_report_history, handle_report_room_occupancy,
};
use crate::commands::users::{
    handle_notifications, handle_user_delete, handle_user_list, handle_user_schedule,
    handle_user_show, handle_verify_decision, handle_verify_list,
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    let trace_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("frames_cli", trace_id = %trace_id);
    let _guard = span.enter();

    let ctx = match AppContext::new(cli.api_url.clone(), cli.timeout, &trace_id) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };

    match dispatch(&ctx, cli.command, cli.output).await {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(exit_code = err.exit_code(), "command failed");
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(ctx: &AppContext, command: Command, output: OutputFormat) -> CliResult<()> {
    match command {
        Command::Login(args) => handle_login(ctx, args, output).await,
        Command::Users(users) => match users {
            UsersCommand::List(args) => handle_user_list(ctx, args, output).await,
            UsersCommand::Show(args) => handle_user_show(ctx, args, output).await,
            UsersCommand::Delete(args) => handle_user_delete(ctx, args).await,
            UsersCommand::Schedule(args) => handle_user_schedule(ctx, args, output).await,
        },
        Command::Verify(verify) => match verify {
            VerifyCommand::List(args) => handle_verify_list(ctx, args, output).await,
            VerifyCommand::Approve(args) => handle_verify_decision(ctx, args, true).await,
            VerifyCommand::Reject(args) => handle_verify_decision(ctx, args, false).await,
        },
        Command::Notifications(args) => handle_notifications(ctx, args, output).await,
        Command::Report(report) => match report {
            ReportCommand::History(args) => handle_report_history(ctx, args).await,
            ReportCommand::Class(args) => handle_report_class(ctx, args).await,
            ReportCommand::FacultySummary(args) => handle_report_faculty_summary(ctx, args).await,
            ReportCommand::RoomOccupancy(args) => handle_report_room_occupancy(ctx, args).await,
            ReportCommand::Directory(args) => handle_report_directory(ctx, args).await,
        },
        Command::Face(face) => match face {
            FaceCommand::Enroll(args) => handle_face_enroll(ctx, args, output).await,
            FaceCommand::Status(args) => handle_face_status(ctx, args, output).await,
        },
    }
}

#[derive(Parser)]
#[command(name = "frames", about = "Administrative CLI for the FRAMES attendance platform")]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "FRAMES_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    api_url: Url,
    #[arg(
        long,
        global = true,
        env = "FRAMES_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout: u64,
    #[arg(
        long = "output",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[arg(long, global = true, env = "FRAMES_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[arg(long, global = true, env = "FRAMES_LOG_FORMAT", value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check credentials and show the account they belong to.
    Login(LoginArgs),
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Verify(VerifyCommand),
    /// Show a user's notifications.
    Notifications(UserIdArgs),
    #[command(subcommand)]
    Report(ReportCommand),
    #[command(subcommand)]
    Face(FaceCommand),
}

/// Account directory.
#[derive(Subcommand)]
enum UsersCommand {
    List(UserListArgs),
    Show(UserIdArgs),
    Delete(UserIdArgs),
    /// Class timetable of an account.
    Schedule(UserIdArgs),
}

/// Registration verification queue.
#[derive(Subcommand)]
enum VerifyCommand {
    List(VerifyListArgs),
    Approve(UserIdArgs),
    Reject(UserIdArgs),
}

/// Export reports as PDF or CSV.
#[derive(Subcommand)]
enum ReportCommand {
    History(HistoryReportArgs),
    Class(ClassReportArgs),
    FacultySummary(ExportArgs),
    RoomOccupancy(ExportArgs),
    Directory(DirectoryReportArgs),
}

/// Face template enrollment.
#[derive(Subcommand)]
enum FaceCommand {
    Enroll(FaceEnrollArgs),
    Status(UserIdArgs),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct LoginArgs {
    /// E-mail address or TUPM ID.
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long, env = "FRAMES_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct UserIdArgs {
    pub(crate) id: i64,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct UserListArgs {
    /// Case-insensitive match on name, e-mail, or department.
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Exact role (`STUDENT`, `FACULTY`, `HEAD`, `ADMIN`) or `All`.
    #[arg(long, default_value = "All")]
    pub(crate) role: String,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct VerifyListArgs {
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    #[arg(long, default_value = "All")]
    pub(crate) role: String,
    /// `Pending`, `Verified`, `Rejected`, `All`; default hides verified accounts.
    #[arg(long, default_value = "")]
    pub(crate) status: String,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ExportArgs {
    #[arg(long, value_parser = parse_report_format, default_value = "pdf")]
    pub(crate) format: ReportFormat,
    /// Directory the report file is written to.
    #[arg(long, default_value = ".")]
    pub(crate) out: PathBuf,
    /// Period printed in the report header.
    #[arg(long)]
    pub(crate) date_range: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct HistoryReportArgs {
    /// Student whose logs are exported.
    pub(crate) user_id: i64,
    /// Report kind (`DAILY`, `WEEKLY`, `MONTHLY`, `SEMESTER`, `ACADEMIC_YEAR`, ...).
    #[arg(long, value_parser = parse_history_kind, default_value = "DAILY")]
    pub(crate) kind: HistoryReportKind,
    /// Anchor day (`YYYY-MM-DD`); defaults to today.
    #[arg(long)]
    pub(crate) date: Option<NaiveDate>,
    /// Academic start year for semester and year reports.
    #[arg(long)]
    pub(crate) academic_year: Option<i32>,
    #[arg(long, value_parser = parse_semester)]
    pub(crate) semester: Option<Semester>,
    /// Exact subject title.
    #[arg(long)]
    pub(crate) subject: Option<String>,
    #[command(flatten)]
    pub(crate) export: ExportArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ClassReportArgs {
    /// Schedule entry of the class.
    pub(crate) class_id: i64,
    #[arg(long)]
    pub(crate) class_code: Option<String>,
    #[arg(long)]
    pub(crate) section: Option<String>,
    #[command(flatten)]
    pub(crate) export: ExportArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct DirectoryReportArgs {
    #[command(flatten)]
    pub(crate) filter: UserListArgs,
    #[command(flatten)]
    pub(crate) export: ExportArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct FaceEnrollArgs {
    /// Account being enrolled.
    #[arg(long)]
    pub(crate) user_id: i64,
    /// JPEG or PNG captures of the face.
    #[arg(required = true)]
    pub(crate) images: Vec<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

fn parse_report_format(value: &str) -> Result<ReportFormat, String> {
    value.parse().map_err(|err: frames_report::ReportError| err.to_string())
}

fn parse_history_kind(value: &str) -> Result<HistoryReportKind, String> {
    value.parse().map_err(|err: frames_report::ReportError| err.to_string())
}

fn parse_semester(value: &str) -> Result<Semester, String> {
    value.parse().map_err(|err: frames_report::ReportError| err.to_string())
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse().map_err(|err: anyhow::Error| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let cli = Cli::try_parse_from(["frames", "users", "list"]).expect("parse");
        assert_eq!(cli.api_url.as_str(), "http://localhost:5000/");
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cli.output, OutputFormat::Table);
    }

    #[test]
    fn report_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "frames",
            "report",
            "history",
            "7",
            "--kind",
            "semester",
            "--semester",
            "2nd",
            "--format",
            "csv",
            "--date",
            "2026-03-04",
        ])
        .expect("parse");
        let Command::Report(ReportCommand::History(args)) = cli.command else {
            panic!("expected history report");
        };
        assert_eq!(args.user_id, 7);
        assert_eq!(args.kind, HistoryReportKind::Semester);
        assert_eq!(args.semester, Some(Semester::Second));
        assert_eq!(args.export.format, ReportFormat::Csv);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 3, 4));
    }

    #[test]
    fn unknown_report_format_is_rejected() {
        assert!(
            Cli::try_parse_from(["frames", "report", "faculty-summary", "--format", "xlsx"])
                .is_err()
        );
    }

    #[test]
    fn face_enroll_requires_images() {
        assert!(Cli::try_parse_from(["frames", "face", "enroll", "--user-id", "3"]).is_err());
    }
}
