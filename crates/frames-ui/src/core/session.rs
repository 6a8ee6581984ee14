//! Typed session, login routing and route gating.
//!
//! # Design
//! - The session is the `UserResponse` returned by login, stored whole.
//! - Gating is a pure function of the session and the requested area so it is testable natively.

use frames_api_models::{Role, UserResponse, VerificationStatus};

use crate::core::nav::paths;

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";
const AVATAR_BACKGROUND: &str = "A62525";

/// Role-scoped page group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    /// Student pages.
    Student,
    /// Faculty pages; department heads teach too.
    Faculty,
    /// Department head pages.
    DeptHead,
    /// Admin pages.
    Admin,
    /// Pages every signed-in role may open (profile, notifications).
    Account,
}

impl Area {
    /// Whether `role` may enter this area.
    #[must_use]
    pub const fn admits(self, role: Role) -> bool {
        match self {
            Self::Student => matches!(role, Role::Student),
            Self::Faculty => matches!(role, Role::Faculty | Role::Head),
            Self::DeptHead => matches!(role, Role::Head),
            Self::Admin => matches!(role, Role::Admin),
            Self::Account => true,
        }
    }

    /// Home area for a role.
    #[must_use]
    pub const fn home_for(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Faculty => Self::Faculty,
            Role::Head => Self::DeptHead,
            Role::Admin => Self::Admin,
        }
    }

    /// Landing path of the area.
    #[must_use]
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::Student => paths::STUDENT_DASHBOARD,
            Self::Faculty => paths::FACULTY_DASHBOARD,
            Self::DeptHead => paths::DEPT_HEAD_DASHBOARD,
            Self::Admin => paths::ADMIN_DASHBOARD,
            Self::Account => paths::PROFILE,
        }
    }
}

/// Registration review states that block sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    /// Waiting for a department head.
    Pending,
    /// Turned down.
    Rejected,
}

impl RegistrationState {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a path segment.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Status page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pending => "Verification Pending",
            Self::Rejected => "Access Denied",
        }
    }

    /// Status page body.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Pending => {
                "Thank you for registering! Your account is currently under review. You will be notified once verified."
            }
            Self::Rejected => {
                "Your registration was rejected. Please contact the administrator for details."
            }
        }
    }
}

/// Where the app sends a user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Landing page.
    Landing,
    /// An area's dashboard.
    Dashboard(Area),
    /// Registration review status page.
    RegistrationStatus(RegistrationState),
    /// Camera enrollment.
    FaceEnrollment,
}

impl Destination {
    /// Router path.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Landing => paths::LANDING.to_string(),
            Self::Dashboard(area) => area.dashboard_path().to_string(),
            Self::RegistrationStatus(state) => {
                format!("{}/{}", paths::REGISTRATION_STATUS, state.as_str())
            }
            Self::FaceEnrollment => paths::FACE_ENROLLMENT.to_string(),
        }
    }
}

/// Post-login routing: verified users go home, others to their review status.
#[must_use]
pub const fn login_destination(user: &UserResponse) -> Destination {
    match user.verification_status {
        VerificationStatus::Verified => Destination::Dashboard(Area::home_for(user.role)),
        VerificationStatus::Pending => Destination::RegistrationStatus(RegistrationState::Pending),
        VerificationStatus::Rejected => {
            Destination::RegistrationStatus(RegistrationState::Rejected)
        }
    }
}

/// Where to go once enrollment succeeds. Heads land on the faculty pages.
#[must_use]
pub const fn enrollment_destination(role: Role) -> Destination {
    match role {
        Role::Student => Destination::Dashboard(Area::Student),
        Role::Faculty | Role::Head => Destination::Dashboard(Area::Faculty),
        Role::Admin => Destination::Dashboard(Area::Admin),
    }
}

/// Outcome of checking a session against an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Render the page.
    Allow,
    /// Redirect without touching the session.
    Redirect(Destination),
    /// Clear the stored session, then go to the landing page.
    SignOut,
}

/// Decide whether `session` may open a page in `area`.
#[must_use]
pub fn gate(session: Option<&UserResponse>, area: Area) -> Gate {
    let Some(user) = session else {
        return Gate::Redirect(Destination::Landing);
    };
    if user.verification_status != VerificationStatus::Verified {
        return Gate::SignOut;
    }
    if !user.face_registered {
        return Gate::Redirect(Destination::FaceEnrollment);
    }
    if !area.admits(user.role) {
        return Gate::Redirect(Destination::Landing);
    }
    Gate::Allow
}

/// "First Last" when both parts are present, otherwise "User".
#[must_use]
pub fn display_name(user: Option<&UserResponse>) -> String {
    user.and_then(|user| {
        let first = user.first_name.trim();
        let last = user.last_name.trim();
        (!first.is_empty() && !last.is_empty()).then(|| format!("{first} {last}"))
    })
    .unwrap_or_else(|| "User".to_string())
}

/// Generated initials avatar for `name`.
#[must_use]
pub fn avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_SERVICE}?name={}&background={AVATAR_BACKGROUND}&color=fff",
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, status: VerificationStatus, face: bool) -> UserResponse {
        UserResponse {
            id: 1,
            email: "ana@tup.edu.ph".into(),
            first_name: "Ana".into(),
            last_name: "Cruz".into(),
            middle_name: None,
            role,
            tupm_id: "TUPM-22-0001".into(),
            department_id: None,
            program_id: None,
            department_name: None,
            program_name: None,
            face_registered: face,
            verification_status: status,
            year_level: None,
            section: None,
            created_at: None,
            last_active: None,
        }
    }

    #[test]
    fn verified_users_route_to_role_dashboard() {
        let cases = [
            (Role::Admin, paths::ADMIN_DASHBOARD),
            (Role::Student, paths::STUDENT_DASHBOARD),
            (Role::Faculty, paths::FACULTY_DASHBOARD),
            (Role::Head, paths::DEPT_HEAD_DASHBOARD),
        ];
        for (role, path) in cases {
            let destination = login_destination(&user(role, VerificationStatus::Verified, true));
            assert_eq!(destination.path(), path);
        }
    }

    #[test]
    fn unverified_users_route_to_status_page() {
        assert_eq!(
            login_destination(&user(Role::Student, VerificationStatus::Pending, false)).path(),
            "/registration-status/pending"
        );
        assert_eq!(
            login_destination(&user(Role::Faculty, VerificationStatus::Rejected, false)),
            Destination::RegistrationStatus(RegistrationState::Rejected)
        );
    }

    #[test]
    fn gate_applies_checks_in_order() {
        assert_eq!(gate(None, Area::Student), Gate::Redirect(Destination::Landing));
        let pending = user(Role::Student, VerificationStatus::Pending, true);
        assert_eq!(gate(Some(&pending), Area::Student), Gate::SignOut);
        let no_face = user(Role::Student, VerificationStatus::Verified, false);
        assert_eq!(
            gate(Some(&no_face), Area::Student),
            Gate::Redirect(Destination::FaceEnrollment)
        );
        let student = user(Role::Student, VerificationStatus::Verified, true);
        assert_eq!(
            gate(Some(&student), Area::Faculty),
            Gate::Redirect(Destination::Landing)
        );
        assert_eq!(gate(Some(&student), Area::Student), Gate::Allow);
        assert_eq!(gate(Some(&student), Area::Account), Gate::Allow);
    }

    #[test]
    fn heads_may_use_faculty_pages() {
        let head = user(Role::Head, VerificationStatus::Verified, true);
        assert_eq!(gate(Some(&head), Area::Faculty), Gate::Allow);
        assert_eq!(gate(Some(&head), Area::DeptHead), Gate::Allow);
        let faculty = user(Role::Faculty, VerificationStatus::Verified, true);
        assert_eq!(
            gate(Some(&faculty), Area::DeptHead),
            Gate::Redirect(Destination::Landing)
        );
    }

    #[test]
    fn enrollment_redirect_by_role() {
        assert_eq!(
            enrollment_destination(Role::Head),
            Destination::Dashboard(Area::Faculty)
        );
        assert_eq!(
            enrollment_destination(Role::Student),
            Destination::Dashboard(Area::Student)
        );
    }

    #[test]
    fn display_name_needs_both_parts() {
        let mut ana = user(Role::Student, VerificationStatus::Verified, true);
        assert_eq!(display_name(Some(&ana)), "Ana Cruz");
        ana.last_name = String::new();
        assert_eq!(display_name(Some(&ana)), "User");
        assert_eq!(display_name(None), "User");
    }

    #[test]
    fn avatar_url_encodes_name() {
        assert_eq!(
            avatar_url("Ana Cruz"),
            "https://ui-avatars.com/api/?name=Ana%20Cruz&background=A62525&color=fff"
        );
    }
}
