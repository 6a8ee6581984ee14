//! HTTP client helpers (REST).
//!
//! # Design
//! - One client per app boot, carrying the resolved base address.
//! - Bodies are read once as bytes and decoded as the payload or an [`ApiError`].
//! - Polling callers pass an `AbortSignal` so teardown cancels in-flight requests.

use crate::core::errors::ApiError;
use frames_api_models::{
    AttendanceRecord, ClassAttendanceEntry, ClassResponse, EnrollmentRequest, EnrollmentResponse,
    FacultyDashboardStats, FacultySummaryEntry, LoginRequest, LoginResponse, MessageResponse,
    NotificationItem, PasswordChange, PasswordVerify, RegisterRequest, RoomOccupancyEntry,
    ScheduleItem, StudentDashboard, UserResponse, UserScheduleEntry, UserUpdate,
    VerificationDecision, VerificationStatus,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

fn transport_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
        gloo_net::Error::JsError(js) => ApiError::Network(js.message),
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        gloo_net::Error::GlooError(message) => ApiError::Network(message),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.binary().await.map_err(transport_error)?;
    if !ok {
        return Err(ApiError::from_response(status, &body));
    }
    serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .abort_signal(signal)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        request: Request,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = request
            .json(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    pub(crate) async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/auth/login")), body)
            .await
    }

    pub(crate) async fn register(&self, body: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/auth/register")), body)
            .await
    }

    pub(crate) async fn fetch_user(&self, id: i64) -> Result<UserResponse, ApiError> {
        self.get_json(&format!("/api/users/{id}"), None).await
    }

    pub(crate) async fn update_user(
        &self,
        id: i64,
        body: &UserUpdate,
    ) -> Result<UserResponse, ApiError> {
        self.send_json(Request::put(&self.url(&format!("/api/users/{id}"))), body)
            .await
    }

    pub(crate) async fn verify_password(
        &self,
        body: &PasswordVerify,
    ) -> Result<MessageResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/users/verify-password")), body)
            .await
    }

    pub(crate) async fn change_password(
        &self,
        body: &PasswordChange,
    ) -> Result<MessageResponse, ApiError> {
        self.send_json(Request::put(&self.url("/api/users/change-password")), body)
            .await
    }

    pub(crate) async fn fetch_notifications(
        &self,
        user_id: i64,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<NotificationItem>, ApiError> {
        self.get_json(&format!("/api/users/notifications/{user_id}"), signal)
            .await
    }

    pub(crate) async fn student_dashboard(&self, id: i64) -> Result<StudentDashboard, ApiError> {
        self.get_json(&format!("/api/student/dashboard/{id}"), None)
            .await
    }

    pub(crate) async fn student_schedule(&self, id: i64) -> Result<Vec<ScheduleItem>, ApiError> {
        self.get_json(&format!("/api/student/schedule/{id}"), None)
            .await
    }

    pub(crate) async fn student_history(
        &self,
        id: i64,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(&format!("/api/student/history/{id}"), signal)
            .await
    }

    pub(crate) async fn faculty_stats(&self, id: i64) -> Result<FacultyDashboardStats, ApiError> {
        self.get_json(&format!("/api/faculty/dashboard-stats/{id}"), None)
            .await
    }

    pub(crate) async fn faculty_schedule(&self, id: i64) -> Result<Vec<ClassResponse>, ApiError> {
        self.get_json(&format!("/api/faculty/schedule/{id}"), None)
            .await
    }

    pub(crate) async fn class_details(
        &self,
        class_id: i64,
    ) -> Result<Vec<ClassAttendanceEntry>, ApiError> {
        self.get_json(&format!("/api/faculty/class-details/{class_id}"), None)
            .await
    }

    pub(crate) async fn verification_list(&self) -> Result<Vec<UserResponse>, ApiError> {
        self.get_json("/api/admin/verification/list", None).await
    }

    /// Approve or reject a registration; the id travels as query and body.
    pub(crate) async fn decide_verification(
        &self,
        user_id: i64,
        approve: bool,
    ) -> Result<MessageResponse, ApiError> {
        let (path, status) = if approve {
            ("/api/admin/verification/approve", VerificationStatus::Verified)
        } else {
            ("/api/admin/verification/reject", VerificationStatus::Rejected)
        };
        let body = VerificationDecision {
            user_id,
            verification_status: status,
        };
        self.send_json(
            Request::post(&self.url(&format!("{path}?user_id={user_id}"))),
            &body,
        )
        .await
    }

    pub(crate) async fn delete_user(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let response = Request::delete(&self.url(&format!("/api/admin/user/{id}")))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    pub(crate) async fn user_schedule(
        &self,
        user_id: i64,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<UserScheduleEntry>, ApiError> {
        self.get_json(&format!("/api/dept/user-schedule/{user_id}"), signal)
            .await
    }

    pub(crate) async fn faculty_summary(&self) -> Result<Vec<FacultySummaryEntry>, ApiError> {
        self.get_json("/reports/faculty-summary", None).await
    }

    pub(crate) async fn room_occupancy(&self) -> Result<Vec<RoomOccupancyEntry>, ApiError> {
        self.get_json("/reports/room-occupancy", None).await
    }

    pub(crate) async fn enroll_face(
        &self,
        body: &EnrollmentRequest,
    ) -> Result<EnrollmentResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/face/enroll")), body)
            .await
    }
}
