#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the FRAMES attendance API.
//!
//! The browser dashboard and the administrative CLI both encode requests and
//! decode responses through these types so the wire contract lives in one
//! place. The backend is lenient about casing and legacy spellings, so the
//! enums here parse permissively and always serialise to the canonical form.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Raised when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Account role recorded on every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Enrolled student.
    Student,
    /// Teaching staff.
    Faculty,
    /// Department head; also has access to the faculty area.
    Head,
    /// System administrator.
    Admin,
}

impl Role {
    /// Every role in display order.
    pub const ALL: [Self; 4] = [Self::Student, Self::Faculty, Self::Head, Self::Admin];

    /// Canonical upper-case wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Faculty => "FACULTY",
            Self::Head => "HEAD",
            Self::Admin => "ADMIN",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
            Self::Head => "Department Head",
            Self::Admin => "Admin",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Ok(Self::Student),
            "FACULTY" => Ok(Self::Faculty),
            "HEAD" | "DEPT_HEAD" | "DEPARTMENT_HEAD" => Ok(Self::Head),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(UnknownVariant::new("role", value)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account verification workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VerificationStatus {
    /// Awaiting a decision from an administrator or department head.
    #[default]
    Pending,
    /// Approved; the account may sign in.
    Verified,
    /// Denied.
    Rejected,
}

impl VerificationStatus {
    /// Canonical wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }
}

impl FromStr for VerificationStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "verified" | "approved" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownVariant::new("verification status", value)),
        }
    }
}

impl TryFrom<String> for VerificationStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VerificationStatus> for String {
    fn from(status: VerificationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the timestamp shapes the backend emits.
///
/// Accepts RFC 3339 (offset discarded, wall-clock kept), ISO-8601 without an
/// offset, the space-separated form produced by `str(datetime)`, and bare dates.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_local());
    }
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Error payload returned by the backend on non-2xx responses.
///
/// FastAPI emits `detail` as a string, a list of validation items, or an
/// object; some handlers use `error` or `message` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Primary diagnostic in one of several shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ErrorDetail>,
    /// Alternative error field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Alternative message field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Shapes accepted for [`ApiErrorBody::detail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Plain message.
    Text(String),
    /// Validation items carrying `msg` or `message`.
    Items(Vec<Value>),
    /// Structured object carrying `msg` or `message`.
    Object(Value),
}

impl ApiErrorBody {
    /// Parse a raw response body; returns `None` when it is not an error document.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice(bytes).ok()
    }

    /// Flatten the payload into a single display string.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(ErrorDetail::message)
            .or_else(|| self.error.clone())
            .or_else(|| self.message.clone())
            .filter(|text| !text.trim().is_empty())
    }
}

impl ErrorDetail {
    fn message(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Items(items) => {
                let parts: Vec<String> = items.iter().filter_map(value_message).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            Self::Object(value) => value_message(value).or_else(|| Some(value.to_string())),
        }
    }
}

fn value_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => ["msg", "message", "detail"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// User account as returned by the auth, users and admin endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Database identifier.
    pub id: i64,
    /// Login e-mail.
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Optional middle name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Account role.
    pub role: Role,
    /// Institution identifier (`TUPM-YY-NNNN`).
    #[serde(default)]
    pub tupm_id: String,
    /// Department foreign key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    /// Program foreign key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<i64>,
    /// Resolved department name, when the endpoint joins it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    /// Resolved program name, when the endpoint joins it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    /// Whether a face template has been enrolled.
    #[serde(default)]
    pub face_registered: bool,
    /// Verification workflow state.
    #[serde(default)]
    pub verification_status: VerificationStatus,
    /// Student year level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_level: Option<String>,
    /// Student section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last activity timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
}

impl UserResponse {
    /// "First Last", trimmed; empty when both parts are missing.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Credentials posted to `/api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// E-mail address or TUPM ID.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Successful login body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Backend greeting.
    pub message: String,
    /// Authenticated account.
    pub user: UserResponse,
}

/// Registration payload posted to `/api/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Login e-mail.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Assembled institution identifier.
    pub tupm_id: String,
    /// Requested role.
    pub role: Role,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Optional middle name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Department foreign key, when known.
    pub department_id: Option<i64>,
    /// Program foreign key, when known.
    pub program_id: Option<i64>,
    /// Free-text department for faculty applicants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    /// Free-text program for student applicants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    /// Student year level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_level: Option<String>,
    /// Student section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Partial profile update sent with `PUT /api/users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Middle name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Year level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_level: Option<String>,
    /// Section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Body for `POST /api/users/verify-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordVerify {
    /// Account to check.
    pub user_id: i64,
    /// Candidate password.
    pub password: String,
}

/// Body for `PUT /api/users/change-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    /// Account to update.
    pub user_id: i64,
    /// Replacement password.
    pub new_password: String,
}

/// Entry returned by `/api/users/notifications/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    /// Identifier; numeric ids are normalised to strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Font Awesome icon class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Notification body.
    #[serde(default)]
    pub text: String,
    /// Relative time label ("2h ago").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Read flag.
    #[serde(default)]
    pub read: bool,
    /// Optional in-app link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Inline notice embedded in the student dashboard payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardNotice {
    /// Notice body.
    pub message: String,
    /// Icon class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Recent attendance line on the student dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAttendance {
    /// Log timestamp.
    pub timestamp: String,
    /// Subject title.
    pub course_name: String,
    /// Room name.
    pub room: String,
}

/// `GET /api/student/dashboard/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDashboard {
    /// Rate label such as `"90%"` or `"N/A"`.
    pub attendance_rate: String,
    /// Number of enrolled classes.
    pub enrolled_courses: u32,
    /// Inline notices.
    #[serde(default)]
    pub notifications: Vec<DashboardNotice>,
    /// Latest logs, newest first.
    #[serde(default)]
    pub recent_attendance: Vec<RecentAttendance>,
}

/// Weekly schedule slot for a student or staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Class identifier.
    pub class_id: i64,
    /// Subject code.
    #[serde(default)]
    pub subject_code: Option<String>,
    /// Subject title.
    #[serde(default)]
    pub subject_title: Option<String>,
    /// English weekday name.
    #[serde(default)]
    pub day_of_week: Option<String>,
    /// Start time (`HH:MM[:SS]` or `hh:MM AM`).
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Room name.
    #[serde(default)]
    pub room: Option<String>,
    /// Assigned instructor.
    #[serde(default)]
    pub faculty_name: Option<String>,
}

/// Kind of attendance event recorded by a camera node.
///
/// Both the backend (`ENTRY`, `BREAK_OUT`, ...) and legacy client spellings
/// (`attendance_in`, `system_alert`, ...) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceAction {
    /// Entered the room.
    Entry,
    /// Left for a break.
    BreakOut,
    /// Returned from a break.
    BreakIn,
    /// Left the room.
    Exit,
    /// Entered after the grace period.
    Late,
    /// Marked absent.
    Absent,
    /// Unrecognised face or other alert.
    SystemAlert,
    /// Any other label, kept verbatim.
    Other(String),
}

impl AttendanceAction {
    /// Canonical wire form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Entry => "ENTRY",
            Self::BreakOut => "BREAK_OUT",
            Self::BreakIn => "BREAK_IN",
            Self::Exit => "EXIT",
            Self::Late => "LATE",
            Self::Absent => "ABSENT",
            Self::SystemAlert => "SYSTEM_ALERT",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for AttendanceAction {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "entry" | "attendance_in" | "in" | "time_in" => Self::Entry,
            "break_out" => Self::BreakOut,
            "break_in" => Self::BreakIn,
            "exit" | "attendance_out" | "out" | "time_out" => Self::Exit,
            "late" => Self::Late,
            "absent" => Self::Absent,
            "system_alert" | "alert" => Self::SystemAlert,
            _ => Self::Other(value),
        }
    }
}

impl From<AttendanceAction> for String {
    fn from(action: AttendanceAction) -> Self {
        action.as_str().to_string()
    }
}

/// Attendance log entry from `/api/student/history/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Log identifier.
    pub id: i64,
    /// Event time as emitted by the backend.
    pub timestamp: String,
    /// Event kind.
    pub action: AttendanceAction,
    /// Subject title resolved by the backend, when linked to a class.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Room where the event was captured.
    #[serde(default)]
    pub room: Option<String>,
    /// Verification source (for example `"Face Recognition"`).
    #[serde(default)]
    pub verified_by: Option<String>,
}

impl AttendanceRecord {
    /// Parsed event time, if the timestamp is well formed.
    #[must_use]
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// Class taught by a faculty member, with attendance stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResponse {
    /// Class identifier.
    pub id: i64,
    /// Subject code.
    #[serde(default)]
    pub subject_code: Option<String>,
    /// Subject title.
    #[serde(default)]
    pub subject_title: Option<String>,
    /// Section label.
    #[serde(default)]
    pub section: Option<String>,
    /// Room name.
    #[serde(default)]
    pub room: Option<String>,
    /// Weekday name.
    #[serde(default)]
    pub day_of_week: Option<String>,
    /// Start time.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Enrolled students.
    #[serde(default)]
    pub total_students: u32,
    /// Students present today.
    #[serde(default)]
    pub present_count: u32,
    /// Attendance percentage.
    #[serde(default)]
    pub rate: u32,
    /// Session state (`upcoming`, `ongoing`, `completed`).
    #[serde(default = "default_class_status")]
    pub status: String,
}

fn default_class_status() -> String {
    "upcoming".to_string()
}

/// `GET /api/faculty/dashboard-stats/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyDashboardStats {
    /// Classes assigned.
    pub total_classes: u32,
    /// Students across all classes.
    pub total_students: u32,
    /// Classes meeting today.
    pub todays_classes: u32,
    /// Mean attendance percentage.
    pub average_attendance: f64,
}

/// Per-student row from `/api/faculty/class-details/{class_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAttendanceEntry {
    /// Student id.
    pub user_id: i64,
    /// Given name.
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    /// Institution identifier.
    #[serde(default)]
    pub tupm_id: String,
    /// First entry time today, if any.
    #[serde(rename = "timeIn", default)]
    pub time_in: Option<String>,
    /// `Present` or `Absent`.
    pub status: String,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Department faculty summary line from `/reports/faculty-summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultySummaryEntry {
    /// Faculty display name.
    pub name: String,
    /// Units taught.
    pub subject_load: u32,
    /// Attendance percentage across classes.
    pub attendance_rate: f64,
    /// Average late arrivals.
    pub lates: f64,
    /// Status remark (`Good`, `At Risk`, ...).
    pub remarks: String,
}

/// Room utilisation line from `/reports/room-occupancy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomOccupancyEntry {
    /// Room label.
    pub room_name: String,
    /// Seats.
    pub capacity: u32,
    /// Peak headcount.
    pub peak_hour: u32,
    /// Utilisation percentage.
    pub utilization: f64,
    /// Status remark.
    pub status: String,
}

/// One class on an account's timetable, from `/api/dept/user-schedule/{id}`.
///
/// Every field is optional; the backend omits what a class does not have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScheduleEntry {
    /// Subject code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
    /// Section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Weekday name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Preformatted time span ("09:00 - 10:30").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Room label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Body for the verification approve/reject endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationDecision {
    /// Account being decided.
    pub user_id: i64,
    /// Resulting status.
    pub verification_status: VerificationStatus,
}

/// Fewest frames the enrollment endpoint accepts.
pub const ENROLLMENT_MIN_FRAMES: usize = 5;
/// Most frames the enrollment endpoint accepts.
pub const ENROLLMENT_MAX_FRAMES: usize = 30;

/// Body for `POST /api/face/enroll`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    /// Account being enrolled.
    pub user_id: i64,
    /// JPEG data URLs.
    pub frames: Vec<String>,
}

/// Enrollment outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    /// Whether a template was stored.
    pub success: bool,
    /// Backend message.
    pub message: String,
    /// Frames that produced a usable embedding.
    #[serde(default)]
    pub num_samples: u32,
    /// Template quality in `0.0..=1.0`.
    #[serde(default)]
    pub quality_score: f64,
}

/// `GET /api/face/status/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceStatusResponse {
    /// Account id.
    pub user_id: i64,
    /// Whether a template exists.
    pub face_registered: bool,
    /// Samples stored.
    #[serde(default)]
    pub num_samples: u32,
    /// Template quality.
    #[serde(default)]
    pub quality_score: f64,
    /// Embedding model identifier.
    #[serde(default)]
    pub model_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use serde_json::json;

    #[test]
    fn role_parses_aliases_and_serialises_upper_case() {
        assert_eq!("dept_head".parse::<Role>(), Ok(Role::Head));
        assert_eq!("Faculty".parse::<Role>(), Ok(Role::Faculty));
        assert!("janitor".parse::<Role>().is_err());
        assert_eq!(
            serde_json::to_value(Role::Admin).expect("serialise"),
            json!("ADMIN")
        );
    }

    #[test]
    fn verification_status_accepts_approved() {
        let status: VerificationStatus =
            serde_json::from_value(json!("APPROVED")).expect("deserialise");
        assert_eq!(status, VerificationStatus::Verified);
        assert_eq!(String::from(status), "Verified");
    }

    #[test]
    fn user_response_fills_defaults() {
        let user: UserResponse = serde_json::from_value(json!({
            "id": 7,
            "email": "ana@tup.edu.ph",
            "first_name": "Ana",
            "last_name": "Cruz",
            "role": "STUDENT",
            "tupm_id": "TUPM-22-0001",
            "verification_status": "Verified"
        }))
        .expect("deserialise");
        assert!(!user.face_registered);
        assert_eq!(user.full_name(), "Ana Cruz");
        assert_eq!(user.verification_status, VerificationStatus::Verified);
    }

    #[test]
    fn error_body_flattens_each_detail_shape() {
        let text = ApiErrorBody::from_slice(br#"{"detail":"Invalid credentials"}"#)
            .and_then(|body| body.message());
        assert_eq!(text.as_deref(), Some("Invalid credentials"));

        let items = ApiErrorBody::from_slice(
            br#"{"detail":[{"msg":"field required"},{"message":"too short"}]}"#,
        )
        .and_then(|body| body.message());
        assert_eq!(items.as_deref(), Some("field required, too short"));

        let object = ApiErrorBody::from_slice(br#"{"detail":{"message":"No face found"}}"#)
            .and_then(|body| body.message());
        assert_eq!(object.as_deref(), Some("No face found"));

        let fallback = ApiErrorBody::from_slice(br#"{"error":"boom"}"#)
            .and_then(|body| body.message());
        assert_eq!(fallback.as_deref(), Some("boom"));

        assert_eq!(
            ApiErrorBody::from_slice(b"{}").and_then(|body| body.message()),
            None
        );
        assert!(ApiErrorBody::from_slice(b"<html>").is_none());
    }

    #[test]
    fn notification_id_accepts_numbers() {
        let items: Vec<NotificationItem> = serde_json::from_value(json!([
            {"id": "v-3", "icon": "fa-check", "text": "Verified", "read": false},
            {"id": 12, "text": "Late", "read": true, "link": "/student-attendance"}
        ]))
        .expect("deserialise");
        assert_eq!(items[0].id, "v-3");
        assert_eq!(items[1].id, "12");
        assert!(items[1].read);
    }

    #[test]
    fn attendance_action_normalises_spellings() {
        assert_eq!(
            AttendanceAction::from("attendance_in".to_string()),
            AttendanceAction::Entry
        );
        assert_eq!(
            AttendanceAction::from("BREAK_OUT".to_string()),
            AttendanceAction::BreakOut
        );
        assert_eq!(
            AttendanceAction::from("waved".to_string()),
            AttendanceAction::Other("waved".to_string())
        );
    }

    #[test]
    fn timestamps_parse_backend_shapes() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 4)
            .and_then(|date| date.and_hms_opt(8, 15, 0))
            .expect("valid");
        assert_eq!(parse_timestamp("2026-03-04T08:15:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2026-03-04 08:15:00.250000").map(|ts| ts.with_nanosecond(0)),
            Some(Some(expected))
        );
        assert_eq!(parse_timestamp("2026-03-04T08:15:00+08:00"), Some(expected));
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn class_attendance_entry_reads_camel_case() {
        let entry: ClassAttendanceEntry = serde_json::from_value(json!({
            "user_id": 4,
            "firstName": "Ben",
            "lastName": "Reyes",
            "tupm_id": "TUPM-21-0099",
            "timeIn": "08:02 AM",
            "status": "Present",
            "remarks": ""
        }))
        .expect("deserialise");
        assert_eq!(entry.first_name, "Ben");
        assert_eq!(entry.time_in.as_deref(), Some("08:02 AM"));
    }

    #[test]
    fn user_schedule_tolerates_missing_fields() {
        let entries: Vec<UserScheduleEntry> = serde_json::from_value(json!([
            {"subject_code": "CS101", "section": "BSCS-3A", "day": "Monday",
             "time": "09:00 - 10:30", "room": "CL-1"},
            {"subject_code": "CS102", "room": null}
        ]))
        .expect("deserialise");
        assert_eq!(entries[0].day.as_deref(), Some("Monday"));
        assert_eq!(entries[1].room, None);
        assert_eq!(entries[1].time, None);
    }
}
