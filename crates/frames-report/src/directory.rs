//! User directory view model shared by the management pages and the CLI.

use frames_api_models::{Role, UserResponse, VerificationStatus};
use serde::Serialize;

/// Face enrollment state shown next to each account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaceStatus {
    /// A face template is stored.
    Registered,
    /// Verified but never enrolled.
    NoFace,
    /// Not yet verified.
    Pending,
}

impl FaceStatus {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Registered => "Registered",
            Self::NoFace => "No Face",
            Self::Pending => "Pending",
        }
    }
}

/// Flattened account row used by directory and verification listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListing {
    /// Account id.
    pub id: i64,
    /// "First Last", falling back to the e-mail.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Upper-case role string as delivered by the API.
    pub role: String,
    /// Department, program, or "N/A".
    pub department: String,
    /// TUPM ID.
    pub tupm_id: String,
    /// Verification state.
    pub verification: VerificationStatus,
    /// Face enrollment state.
    pub face: FaceStatus,
}

impl From<&UserResponse> for UserListing {
    fn from(user: &UserResponse) -> Self {
        let name = user.full_name();
        let face = if user.face_registered {
            FaceStatus::Registered
        } else if user.verification_status == VerificationStatus::Verified {
            FaceStatus::NoFace
        } else {
            FaceStatus::Pending
        };
        Self {
            id: user.id,
            name: if name.is_empty() {
                user.email.clone()
            } else {
                name
            },
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            department: user
                .department_name
                .clone()
                .or_else(|| user.program_name.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            tupm_id: user.tupm_id.clone(),
            verification: user.verification_status,
            face,
        }
    }
}

impl UserListing {
    /// Fields matched by free-text search.
    #[must_use]
    pub fn search_fields(&self) -> [Option<&str>; 3] {
        [
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            Some(self.department.as_str()),
        ]
    }
}

/// Head counts for dashboard summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    /// Students.
    pub students: usize,
    /// Faculty, including department heads.
    pub faculty: usize,
    /// Department heads.
    pub heads: usize,
    /// Administrators.
    pub admins: usize,
    /// Accounts awaiting verification.
    pub pending: usize,
}

impl RoleCounts {
    /// Tally a user list.
    #[must_use]
    pub fn tally<'a>(users: impl IntoIterator<Item = &'a UserResponse>) -> Self {
        users.into_iter().fold(Self::default(), |mut counts, user| {
            match user.role {
                Role::Student => counts.students += 1,
                Role::Faculty => counts.faculty += 1,
                Role::Head => {
                    counts.faculty += 1;
                    counts.heads += 1;
                }
                Role::Admin => counts.admins += 1,
            }
            if user.verification_status == VerificationStatus::Pending {
                counts.pending += 1;
            }
            counts
        })
    }

    /// All accounts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.students + self.faculty + self.admins
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use frames_api_models::{Role, UserResponse, VerificationStatus};

    pub(crate) fn user(id: i64, first: &str, role: Role, status: VerificationStatus) -> UserResponse {
        UserResponse {
            id,
            email: format!("{}@tup.edu.ph", first.to_lowercase()),
            first_name: first.to_string(),
            last_name: "Santos".to_string(),
            middle_name: None,
            role,
            tupm_id: format!("TUPM-22-{id:04}"),
            department_id: None,
            program_id: None,
            department_name: Some("Computer Studies".to_string()),
            program_name: None,
            face_registered: false,
            verification_status: status,
            year_level: None,
            section: None,
            created_at: None,
            last_active: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::user;
    use super::*;

    #[test]
    fn listing_derives_face_status_and_department() {
        let mut verified = user(1, "Ana", Role::Student, VerificationStatus::Verified);
        verified.department_name = None;
        verified.program_name = Some("BSCS".into());
        let listing = UserListing::from(&verified);
        assert_eq!(listing.face, FaceStatus::NoFace);
        assert_eq!(listing.department, "BSCS");
        assert_eq!(listing.role, "STUDENT");

        verified.face_registered = true;
        assert_eq!(UserListing::from(&verified).face, FaceStatus::Registered);

        let pending = user(2, "Ben", Role::Faculty, VerificationStatus::Pending);
        assert_eq!(UserListing::from(&pending).face, FaceStatus::Pending);
    }

    #[test]
    fn counts_treat_heads_as_faculty() {
        let users = vec![
            user(1, "Ana", Role::Student, VerificationStatus::Pending),
            user(2, "Ben", Role::Head, VerificationStatus::Verified),
            user(3, "Cy", Role::Faculty, VerificationStatus::Verified),
            user(4, "Di", Role::Admin, VerificationStatus::Verified),
        ];
        let counts = RoleCounts::tally(&users);
        assert_eq!(counts.faculty, 2);
        assert_eq!(counts.heads, 1);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.total(), 4);
    }
}
