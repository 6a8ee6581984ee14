//! Client-side list filtering for the user management pages.
//!
//! # Design
//! - Search is a case-insensitive substring test over whichever fields are
//!   present; a row with no present fields never matches.
//! - The directory role filter compares role strings exactly, so `FACULTY`
//!   and `Faculty` are different roles.
//! - The verification queue upper-cases the selected role before comparing
//!   and hides already-verified accounts unless a status is chosen.

use frames_api_models::VerificationStatus;

use crate::directory::UserListing;

/// Whether any present field contains `query`, ignoring case.
///
/// The query is used as typed; surrounding whitespace is part of the needle.
#[must_use]
pub fn matches_search<'a>(
    fields: impl IntoIterator<Item = Option<&'a str>>,
    query: &str,
) -> bool {
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Role selection on a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleFilter {
    /// No role restriction.
    #[default]
    All,
    /// Only entries whose role string equals this value.
    Exact(String),
}

impl RoleFilter {
    /// Interpret a dropdown value; "All", "All Roles" and blank disable filtering.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "All" | "All Roles" => Self::All,
            other => Self::Exact(other.to_string()),
        }
    }

    /// Whether `role` passes.
    #[must_use]
    pub fn matches(&self, role: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == role,
        }
    }
}

/// Verification status selection on the verification queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Everything not yet verified.
    #[default]
    Outstanding,
    /// Every status.
    Any,
    /// One status.
    Only(VerificationStatus),
}

impl StatusFilter {
    /// Interpret a dropdown value; "Status" and blank mean [`Self::Outstanding`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "Status" | "Outstanding" => Self::Outstanding,
            "All" | "Any" => Self::Any,
            other => other
                .parse::<VerificationStatus>()
                .map_or(Self::Outstanding, Self::Only),
        }
    }

    /// Whether `status` passes.
    #[must_use]
    pub fn matches(self, status: VerificationStatus) -> bool {
        match self {
            Self::Outstanding => status != VerificationStatus::Verified,
            Self::Any => true,
            Self::Only(expected) => expected == status,
        }
    }
}

/// Directory tab filter: search plus exact role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    /// Free-text query.
    pub search: String,
    /// Role restriction.
    pub role: RoleFilter,
}

impl DirectoryFilter {
    /// Entries passing both the role and search tests, in input order.
    #[must_use]
    pub fn apply<'a>(&self, users: &'a [UserListing]) -> Vec<&'a UserListing> {
        users
            .iter()
            .filter(|user| self.role.matches(&user.role))
            .filter(|user| matches_search(user.search_fields(), &self.search))
            .collect()
    }
}

/// Verification tab filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationFilter {
    /// Free-text query.
    pub search: String,
    /// Role restriction; values are upper-cased when parsed.
    pub role: RoleFilter,
    /// Status restriction.
    pub status: StatusFilter,
}

impl VerificationFilter {
    /// Build from raw dropdown values.
    #[must_use]
    pub fn new(search: &str, role: &str, status: &str) -> Self {
        let role = match RoleFilter::parse(role) {
            RoleFilter::Exact(value) => RoleFilter::Exact(value.to_uppercase()),
            RoleFilter::All => RoleFilter::All,
        };
        Self {
            search: search.to_string(),
            role,
            status: StatusFilter::parse(status),
        }
    }

    /// Entries passing every test, in input order.
    #[must_use]
    pub fn apply<'a>(&self, users: &'a [UserListing]) -> Vec<&'a UserListing> {
        users
            .iter()
            .filter(|user| self.role.matches(&user.role))
            .filter(|user| self.status.matches(user.verification))
            .filter(|user| matches_search(user.search_fields(), &self.search))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::user;
    use frames_api_models::Role;

    fn listings() -> Vec<UserListing> {
        vec![
            user(1, "Ana", Role::Faculty, VerificationStatus::Verified),
            user(2, "Ben", Role::Student, VerificationStatus::Pending),
            user(3, "Cy", Role::Faculty, VerificationStatus::Rejected),
        ]
        .iter()
        .map(UserListing::from)
        .collect()
    }

    #[test]
    fn search_is_case_insensitive_over_present_fields() {
        assert!(matches_search([Some("Ana Santos"), None], "SANT"));
        assert!(!matches_search([Some("Ana Santos"), None], "reyes"));
        assert!(matches_search([Some("x")], ""));
        assert!(!matches_search([None, None], ""));
    }

    #[test]
    fn search_keeps_whitespace_in_the_query() {
        assert!(!matches_search([Some("Santos")], " "));
        assert!(matches_search([Some("Ana Santos")], " "));
        assert!(!matches_search([Some("Ana Santos")], " ana"));
    }

    #[test]
    fn directory_role_filter_is_case_sensitive() {
        let users = listings();
        let upper = DirectoryFilter {
            search: String::new(),
            role: RoleFilter::parse("FACULTY"),
        };
        let ids: Vec<i64> = upper.apply(&users).iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let mixed = DirectoryFilter {
            search: String::new(),
            role: RoleFilter::parse("Faculty"),
        };
        assert!(mixed.apply(&users).is_empty());

        let all = DirectoryFilter {
            search: "ben@".into(),
            role: RoleFilter::parse("All Roles"),
        };
        assert_eq!(all.apply(&users).len(), 1);
    }

    #[test]
    fn verification_queue_hides_verified_by_default() {
        let users = listings();
        let outstanding = VerificationFilter::new("", "All", "Status");
        let ids: Vec<i64> = outstanding.apply(&users).iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let faculty_rejected = VerificationFilter::new("", "faculty", "Rejected");
        let ids: Vec<i64> = faculty_rejected
            .apply(&users)
            .iter()
            .map(|user| user.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }
}
