//! Navigation catalogue and header title resolution.
//!
//! # Design
//! - Paths are plain strings so the router and the pure helpers agree on one table.
//! - Titles are resolved by substring, so nested paths inherit their section title.

use crate::core::session::Area;
use frames_api_models::Role;

/// Application paths.
pub mod paths {
    /// Landing page with the login form.
    pub const LANDING: &str = "/";
    /// Registration wizard prefix (`/register/{role}`).
    pub const REGISTER: &str = "/register";
    /// Registration status prefix (`/registration-status/{state}`).
    pub const REGISTRATION_STATUS: &str = "/registration-status";
    /// Camera enrollment.
    pub const FACE_ENROLLMENT: &str = "/face-enrollment";
    /// Student home.
    pub const STUDENT_DASHBOARD: &str = "/student-dashboard";
    /// Student weekly schedule.
    pub const STUDENT_SCHEDULE: &str = "/student-schedule";
    /// Student attendance history and export.
    pub const STUDENT_ATTENDANCE: &str = "/student-attendance";
    /// Faculty home.
    pub const FACULTY_DASHBOARD: &str = "/faculty-dashboard";
    /// Faculty class list with per-class reports.
    pub const FACULTY_CLASSES: &str = "/faculty-classes";
    /// Department head home.
    pub const DEPT_HEAD_DASHBOARD: &str = "/dept-head-dashboard";
    /// Department head user management.
    pub const DEPT_HEAD_USERS: &str = "/dept-head-users";
    /// Department head reports.
    pub const DEPT_HEAD_REPORTS: &str = "/dept-head-reports";
    /// Admin home.
    pub const ADMIN_DASHBOARD: &str = "/admin-dashboard";
    /// Notification list.
    pub const NOTIFICATIONS: &str = "/notifications";
    /// Profile and password.
    pub const PROFILE: &str = "/profile";
}

/// Sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label.
    pub label: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
    /// Target path.
    pub path: &'static str,
}

const fn item(label: &'static str, icon: &'static str, path: &'static str) -> NavItem {
    NavItem { label, icon, path }
}

const TITLES: [(&str, &str); 13] = [
    (paths::STUDENT_DASHBOARD, "Dashboard"),
    (paths::STUDENT_SCHEDULE, "Schedule"),
    (paths::STUDENT_ATTENDANCE, "Attendance History"),
    (paths::FACULTY_DASHBOARD, "Dashboard"),
    (paths::FACULTY_CLASSES, "My Classes"),
    (paths::DEPT_HEAD_DASHBOARD, "Dashboard"),
    (paths::DEPT_HEAD_USERS, "User Management"),
    (paths::DEPT_HEAD_REPORTS, "Department Reports"),
    (paths::ADMIN_DASHBOARD, "Dashboard"),
    (paths::NOTIFICATIONS, "Notifications"),
    (paths::PROFILE, "My Profile"),
    (paths::FACE_ENROLLMENT, "Face Enrollment"),
    (paths::REGISTRATION_STATUS, "Registration Status"),
];

/// Header title for the current path; empty when the path has none.
#[must_use]
pub fn page_title(path: &str) -> &'static str {
    TITLES
        .iter()
        .find(|(prefix, _)| path.contains(prefix))
        .map_or("", |(_, title)| title)
}

/// Sidebar entries for an area. Department heads browsing the faculty area
/// also get a link to their department pages.
#[must_use]
pub fn nav_items(area: Area, role: Role) -> Vec<NavItem> {
    let mut items = match area {
        Area::Student => vec![
            item("Dashboard", "fas fa-th-large", paths::STUDENT_DASHBOARD),
            item("Schedule", "fas fa-calendar-alt", paths::STUDENT_SCHEDULE),
            item("Attendance History", "fas fa-history", paths::STUDENT_ATTENDANCE),
        ],
        Area::Faculty => vec![
            item("Dashboard", "fas fa-th-large", paths::FACULTY_DASHBOARD),
            item("My Classes", "fas fa-book-reader", paths::FACULTY_CLASSES),
        ],
        Area::DeptHead => vec![
            item("Dashboard", "fas fa-th-large", paths::DEPT_HEAD_DASHBOARD),
            item("User Management", "fas fa-users-cog", paths::DEPT_HEAD_USERS),
            item("Reports", "fas fa-chart-line", paths::DEPT_HEAD_REPORTS),
        ],
        Area::Admin => vec![item("Dashboard", "fas fa-th-large", paths::ADMIN_DASHBOARD)],
        Area::Account => Vec::new(),
    };
    if area == Area::Faculty && role == Role::Head {
        items.push(item("Department Mgmt", "fas fa-university", paths::DEPT_HEAD_DASHBOARD));
    }
    if area == Area::DeptHead {
        items.push(item("Teaching", "fas fa-chalkboard-teacher", paths::FACULTY_DASHBOARD));
    }
    items.push(item("Notifications", "far fa-bell", paths::NOTIFICATIONS));
    items.push(item("My Profile", "fas fa-user", paths::PROFILE));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_resolve_by_section() {
        assert_eq!(page_title("/student-attendance"), "Attendance History");
        assert_eq!(page_title("/faculty-classes"), "My Classes");
        assert_eq!(page_title("/dept-head-users"), "User Management");
        assert_eq!(page_title("/admin-dashboard"), "Dashboard");
        assert_eq!(page_title("/profile"), "My Profile");
        assert_eq!(page_title("/unknown"), "");
    }

    #[test]
    fn heads_get_department_link_in_faculty_area() {
        let faculty = nav_items(Area::Faculty, Role::Faculty);
        let head = nav_items(Area::Faculty, Role::Head);
        assert!(!faculty.iter().any(|entry| entry.path == paths::DEPT_HEAD_DASHBOARD));
        assert!(head.iter().any(|entry| entry.path == paths::DEPT_HEAD_DASHBOARD));
    }

    #[test]
    fn every_area_links_account_pages() {
        for area in [Area::Student, Area::Faculty, Area::DeptHead, Area::Admin] {
            let items = nav_items(area, Role::Admin);
            assert!(items.iter().any(|entry| entry.path == paths::PROFILE));
            assert!(items.iter().any(|entry| entry.path == paths::NOTIFICATIONS));
        }
    }
}
