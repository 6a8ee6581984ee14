//! Routing definitions for the FRAMES dashboard.
use crate::core::session::{Area, Destination};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Landing,
    #[at("/register/:role")]
    Register { role: String },
    #[at("/registration-status/:state")]
    RegistrationStatus { state: String },
    #[at("/face-enrollment")]
    FaceEnrollment,
    #[at("/student-dashboard")]
    StudentDashboard,
    #[at("/student-schedule")]
    StudentSchedule,
    #[at("/student-attendance")]
    StudentAttendance,
    #[at("/faculty-dashboard")]
    FacultyDashboard,
    #[at("/faculty-classes")]
    FacultyClasses,
    #[at("/dept-head-dashboard")]
    DeptHeadDashboard,
    #[at("/dept-head-users")]
    DeptHeadUsers,
    #[at("/dept-head-reports")]
    DeptHeadReports,
    #[at("/admin-dashboard")]
    AdminDashboard,
    #[at("/notifications")]
    Notifications,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a catalogue path; unknown paths fall through to the 404 page.
    pub(crate) fn from_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }

    /// Role area guarding this route, if any.
    pub(crate) const fn area(&self) -> Option<Area> {
        match self {
            Self::StudentDashboard | Self::StudentSchedule | Self::StudentAttendance => {
                Some(Area::Student)
            }
            Self::FacultyDashboard | Self::FacultyClasses => Some(Area::Faculty),
            Self::DeptHeadDashboard | Self::DeptHeadUsers | Self::DeptHeadReports => {
                Some(Area::DeptHead)
            }
            Self::AdminDashboard => Some(Area::Admin),
            Self::Notifications | Self::Profile => Some(Area::Account),
            Self::Landing
            | Self::Register { .. }
            | Self::RegistrationStatus { .. }
            | Self::FaceEnrollment
            | Self::NotFound => None,
        }
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        Self::from_path(&destination.path())
    }
}
