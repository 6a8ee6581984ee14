//! Profile form diffing and password rules.

use frames_api_models::{Role, UserResponse, UserUpdate};
use thiserror::Error;

use crate::core::wizard::MIN_PASSWORD_LEN;

/// Editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Given name.
    pub first_name: String,
    /// Middle name; blank clears nothing.
    pub middle_name: String,
    /// Family name.
    pub last_name: String,
    /// Student year level.
    pub year_level: String,
    /// Student section.
    pub section: String,
}

fn changed(edited: &str, current: Option<&str>) -> Option<String> {
    let edited = edited.trim();
    (!edited.is_empty() && Some(edited) != current.map(str::trim)).then(|| edited.to_string())
}

impl ProfileForm {
    /// Seed the form from the stored account.
    #[must_use]
    pub fn from_user(user: &UserResponse) -> Self {
        Self {
            first_name: user.first_name.clone(),
            middle_name: user.middle_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone(),
            year_level: user.year_level.clone().unwrap_or_default(),
            section: user.section.clone().unwrap_or_default(),
        }
    }

    /// Update carrying only the fields that differ from `user`, or `None` when nothing changed.
    ///
    /// Year level and section are only sent for students.
    #[must_use]
    pub fn diff(&self, user: &UserResponse) -> Option<UserUpdate> {
        let student = user.role == Role::Student;
        let update = UserUpdate {
            first_name: changed(&self.first_name, Some(&user.first_name)),
            last_name: changed(&self.last_name, Some(&user.last_name)),
            middle_name: changed(&self.middle_name, user.middle_name.as_deref()),
            year_level: student
                .then(|| changed(&self.year_level, user.year_level.as_deref()))
                .flatten(),
            section: student
                .then(|| changed(&self.section, user.section.as_deref()))
                .flatten(),
        };
        (update != UserUpdate::default()).then_some(update)
    }
}

/// Password dialog step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStep {
    /// Confirm the current password.
    Verify,
    /// Enter and confirm the new one.
    Choose,
}

/// Rejected new password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordRuleError {
    /// Confirmation differs.
    #[error("Passwords do not match")]
    Mismatch,
    /// Below [`MIN_PASSWORD_LEN`].
    #[error("Password must be at least 6 characters")]
    TooShort,
}

/// Check a new password against its confirmation.
///
/// # Errors
///
/// Returns the first rule the pair breaks.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), PasswordRuleError> {
    if password != confirm {
        return Err(PasswordRuleError::Mismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordRuleError::TooShort);
    }
    Ok(())
}

/// Fallback shown when the current password is refused.
pub const INCORRECT_PASSWORD: &str = "Incorrect Password";

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserResponse {
        serde_json::from_value(serde_json::json!({
            "id": 4,
            "email": "ana@tup.edu.ph",
            "first_name": "Ana",
            "last_name": "Cruz",
            "role": role,
            "tupm_id": "TUPM-22-0004",
            "face_registered": true,
            "verification_status": "Verified",
            "year_level": "2",
            "section": "A"
        }))
        .expect("user")
    }

    #[test]
    fn untouched_form_has_no_update() {
        let account = user("STUDENT");
        assert_eq!(ProfileForm::from_user(&account).diff(&account), None);
    }

    #[test]
    fn only_changed_fields_are_sent() {
        let account = user("STUDENT");
        let mut form = ProfileForm::from_user(&account);
        form.last_name = " Reyes ".into();
        form.section = "B".into();
        let update = form.diff(&account).expect("changed");
        assert_eq!(update.last_name.as_deref(), Some("Reyes"));
        assert_eq!(update.section.as_deref(), Some("B"));
        assert_eq!(update.first_name, None);
    }

    #[test]
    fn faculty_never_send_student_fields() {
        let account = user("FACULTY");
        let mut form = ProfileForm::from_user(&account);
        form.year_level = "4".into();
        assert_eq!(form.diff(&account), None);
    }

    #[test]
    fn password_rules_check_match_before_length() {
        assert_eq!(validate_new_password("abc", "abd"), Err(PasswordRuleError::Mismatch));
        assert_eq!(validate_new_password("abc", "abc"), Err(PasswordRuleError::TooShort));
        assert_eq!(validate_new_password("secret1", "secret1"), Ok(()));
    }
}
