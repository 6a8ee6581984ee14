//! Three-step registration wizard state machine.
//!
//! # Design
//! - Steps advance only when every required field of the current step is filled.
//! - Required fields depend on the applicant role; there is no other branching.
//! - The wizard is plain data so the view just renders it and forwards input.

use frames_api_models::{RegisterRequest, Role};
use thiserror::Error;

use crate::core::errors::ApiError;

/// Minimum password length accepted at the final step.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Role an applicant may register as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationRole {
    /// Student applicant.
    Student,
    /// Faculty applicant.
    Faculty,
}

impl RegistrationRole {
    /// Parse the `/register/{role}` segment.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "faculty" => Some(Self::Faculty),
            _ => None,
        }
    }

    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
        }
    }

    /// Account role requested from the backend.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Student => Role::Student,
            Self::Faculty => Role::Faculty,
        }
    }
}

/// Wizard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Names, e-mail and TUPM ID parts.
    Personal,
    /// Program and section, or department.
    Program,
    /// Summary and password.
    Review,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [Self; 3] = [Self::Personal, Self::Program, Self::Review];

    /// Step heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Program => "Program Details",
            Self::Review => "Review & Password",
        }
    }

    /// One-based position for the step indicator.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Personal => 1,
            Self::Program => 2,
            Self::Review => 3,
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Program),
            Self::Program => Some(Self::Review),
            Self::Review => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Program => Some(Self::Personal),
            Self::Review => Some(Self::Program),
        }
    }
}

/// Form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Given name.
    FirstName,
    /// Middle name (optional).
    MiddleName,
    /// Family name.
    LastName,
    /// Login e-mail.
    Email,
    /// Two-digit year part of the TUPM ID.
    TupmYear,
    /// Serial part of the TUPM ID.
    TupmSerial,
    /// Student program.
    Program,
    /// Student year level.
    YearLevel,
    /// Student section.
    Section,
    /// Faculty department.
    Department,
    /// Chosen password.
    Password,
    /// Password confirmation.
    ConfirmPassword,
}

impl Field {
    /// Input label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::TupmYear => "TUPM Year",
            Self::TupmSerial => "TUPM Serial",
            Self::Program => "Program",
            Self::YearLevel => "Year Level",
            Self::Section => "Section",
            Self::Department => "Department",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Digit budget of the TUPM id parts; `None` for free-text fields.
    #[must_use]
    pub const fn max_digits(self) -> Option<usize> {
        match self {
            Self::TupmYear => Some(2),
            Self::TupmSerial => Some(4),
            _ => None,
        }
    }
}

/// Raw wizard input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    first_name: String,
    middle_name: String,
    last_name: String,
    email: String,
    tupm_year: String,
    tupm_serial: String,
    program: String,
    year_level: String,
    section: String,
    department: String,
    password: String,
    confirm_password: String,
}

impl RegistrationForm {
    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::TupmYear => &self.tupm_year,
            Field::TupmSerial => &self.tupm_serial,
            Field::Program => &self.program,
            Field::YearLevel => &self.year_level,
            Field::Section => &self.section,
            Field::Department => &self.department,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Store `value`; TUPM parts reject non-digit or over-long input and keep
    /// their old value. Returns whether the value was accepted.
    pub fn set(&mut self, field: Field, value: &str) -> bool {
        let rejected = field.max_digits().is_some_and(|limit| {
            value.len() > limit || !value.chars().all(|ch| ch.is_ascii_digit())
        });
        if rejected {
            return false;
        }
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::TupmYear => &mut self.tupm_year,
            Field::TupmSerial => &mut self.tupm_serial,
            Field::Program => &mut self.program,
            Field::YearLevel => &mut self.year_level,
            Field::Section => &mut self.section,
            Field::Department => &mut self.department,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.to_string();
        true
    }

    /// Assembled `TUPM-<year>-<serial>` identifier.
    #[must_use]
    pub fn tupm_id(&self) -> String {
        format!("TUPM-{}-{}", self.tupm_year.trim(), self.tupm_serial.trim())
    }

    fn missing(&self, fields: &[Field]) -> Vec<Field> {
        fields
            .iter()
            .copied()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    fn optional(value: &str) -> Option<String> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Reasons the wizard refuses to move forward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// A required field of the current step is empty.
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<Field>),
    /// Password too short or not confirmed.
    #[error("Passwords must match and be at least 6 characters long.")]
    PasswordMismatch,
}

/// Result of pressing "Back".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Moved to the previous step.
    Moved,
    /// Already on the first step; leave the wizard.
    Exit,
}

/// Registration wizard for one applicant role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    /// Applicant role.
    pub role: RegistrationRole,
    /// Visible step.
    pub step: WizardStep,
    /// Entered values.
    pub form: RegistrationForm,
}

impl Wizard {
    /// Start on the first step with an empty form.
    #[must_use]
    pub fn new(role: RegistrationRole) -> Self {
        Self {
            role,
            step: WizardStep::Personal,
            form: RegistrationForm::default(),
        }
    }

    /// Fields the given step requires for this applicant.
    #[must_use]
    pub fn required(&self, step: WizardStep) -> &'static [Field] {
        match (step, self.role) {
            (WizardStep::Personal, _) => &[
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::TupmYear,
                Field::TupmSerial,
            ],
            (WizardStep::Program, RegistrationRole::Student) => {
                &[Field::Program, Field::YearLevel, Field::Section]
            }
            (WizardStep::Program, RegistrationRole::Faculty) => &[Field::Department],
            (WizardStep::Review, _) => &[Field::Password, Field::ConfirmPassword],
        }
    }

    /// Inputs shown on the given step.
    #[must_use]
    pub fn fields(&self, step: WizardStep) -> &'static [Field] {
        match (step, self.role) {
            (WizardStep::Personal, _) => &[
                Field::FirstName,
                Field::MiddleName,
                Field::LastName,
                Field::Email,
                Field::TupmYear,
                Field::TupmSerial,
            ],
            (WizardStep::Review, _) => &[Field::Password, Field::ConfirmPassword],
            (WizardStep::Program, _) => self.required(step),
        }
    }

    /// Advance one step when the current step is complete.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::MissingFields`] listing the empty required fields.
    pub fn next(&mut self) -> Result<(), WizardError> {
        let missing = self.form.missing(self.required(self.step));
        if !missing.is_empty() {
            return Err(WizardError::MissingFields(missing));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    /// Step back, or signal that the wizard should be left.
    pub fn back(&mut self) -> BackOutcome {
        self.step.previous().map_or(BackOutcome::Exit, |previous| {
            self.step = previous;
            BackOutcome::Moved
        })
    }

    /// Validate the final step and assemble the registration payload.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::MissingFields`] when any step is incomplete and
    /// [`WizardError::PasswordMismatch`] when the password is short or unconfirmed.
    pub fn build_request(&self) -> Result<RegisterRequest, WizardError> {
        let missing: Vec<Field> = WizardStep::ALL
            .iter()
            .flat_map(|step| self.form.missing(self.required(*step)))
            .filter(|field| !matches!(field, Field::Password | Field::ConfirmPassword))
            .collect();
        if !missing.is_empty() {
            return Err(WizardError::MissingFields(missing));
        }
        let form = &self.form;
        if form.password.chars().count() < MIN_PASSWORD_LEN
            || form.password != form.confirm_password
        {
            return Err(WizardError::PasswordMismatch);
        }
        let student = self.role == RegistrationRole::Student;
        Ok(RegisterRequest {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            tupm_id: form.tupm_id(),
            role: self.role.role(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            middle_name: RegistrationForm::optional(&form.middle_name),
            department_id: None,
            program_id: None,
            department_name: if student {
                None
            } else {
                RegistrationForm::optional(&form.department)
            },
            program_name: if student {
                RegistrationForm::optional(&form.program)
            } else {
                None
            },
            year_level: if student {
                RegistrationForm::optional(&form.year_level)
            } else {
                None
            },
            section: if student {
                RegistrationForm::optional(&form.section)
            } else {
                None
            },
        })
    }
}

/// Message shown when the register call fails.
#[must_use]
pub fn registration_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if message.to_ascii_lowercase().contains("already exists") => {
            "Email or TUPM ID already exists.".to_string()
        }
        other => other.user_message("Registration failed. Please try again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_personal(wizard: &mut Wizard) {
        for (field, value) in [
            (Field::FirstName, "Ana"),
            (Field::LastName, "Cruz"),
            (Field::Email, "ana@tup.edu.ph"),
            (Field::TupmYear, "22"),
            (Field::TupmSerial, "0417"),
        ] {
            assert!(wizard.form.set(field, value));
        }
    }

    #[test]
    fn empty_required_field_blocks_advance() {
        let mut wizard = Wizard::new(RegistrationRole::Student);
        filled_personal(&mut wizard);
        wizard.form.set(Field::Email, "  ");
        assert_eq!(
            wizard.next(),
            Err(WizardError::MissingFields(vec![Field::Email]))
        );
        assert_eq!(wizard.step, WizardStep::Personal);

        wizard.form.set(Field::Email, "ana@tup.edu.ph");
        assert_eq!(wizard.next(), Ok(()));
        assert_eq!(wizard.step, WizardStep::Program);
    }

    #[test]
    fn tupm_parts_accept_digits_only() {
        let mut form = RegistrationForm::default();
        assert!(form.set(Field::TupmYear, "22"));
        assert!(!form.set(Field::TupmYear, "2a"));
        assert_eq!(form.get(Field::TupmYear), "22");
        assert!(form.set(Field::TupmSerial, ""));
    }

    #[test]
    fn tupm_parts_cap_their_length() {
        let mut form = RegistrationForm::default();
        assert!(form.set(Field::TupmYear, "22"));
        assert!(!form.set(Field::TupmYear, "221"));
        assert_eq!(form.get(Field::TupmYear), "22");
        assert!(form.set(Field::TupmSerial, "0042"));
        assert!(!form.set(Field::TupmSerial, "00421"));
        assert_eq!(form.get(Field::TupmSerial), "0042");
        assert_eq!(Field::Email.max_digits(), None);
    }

    #[test]
    fn program_step_depends_on_role() {
        let student = Wizard::new(RegistrationRole::Student);
        let faculty = Wizard::new(RegistrationRole::Faculty);
        assert_eq!(
            student.required(WizardStep::Program),
            &[Field::Program, Field::YearLevel, Field::Section]
        );
        assert_eq!(faculty.required(WizardStep::Program), &[Field::Department]);
    }

    #[test]
    fn back_from_first_step_exits() {
        let mut wizard = Wizard::new(RegistrationRole::Faculty);
        assert_eq!(wizard.back(), BackOutcome::Exit);
        filled_personal(&mut wizard);
        wizard.next().expect("advance");
        assert_eq!(wizard.back(), BackOutcome::Moved);
        assert_eq!(wizard.step, WizardStep::Personal);
    }

    #[test]
    fn request_requires_matching_long_password() {
        let mut wizard = Wizard::new(RegistrationRole::Faculty);
        filled_personal(&mut wizard);
        wizard.form.set(Field::Department, "Computer Studies");
        wizard.form.set(Field::Password, "abc12");
        wizard.form.set(Field::ConfirmPassword, "abc12");
        assert_eq!(wizard.build_request(), Err(WizardError::PasswordMismatch));

        wizard.form.set(Field::Password, "abc123");
        wizard.form.set(Field::ConfirmPassword, "abc124");
        assert_eq!(wizard.build_request(), Err(WizardError::PasswordMismatch));

        wizard.form.set(Field::ConfirmPassword, "abc123");
        let request = wizard.build_request().expect("request");
        assert_eq!(request.tupm_id, "TUPM-22-0417");
        assert_eq!(request.role, Role::Faculty);
        assert_eq!(request.middle_name, None);
        assert_eq!(request.department_name.as_deref(), Some("Computer Studies"));
        assert_eq!(request.section, None);
    }

    #[test]
    fn student_request_carries_program_details() {
        let mut wizard = Wizard::new(RegistrationRole::Student);
        filled_personal(&mut wizard);
        wizard.form.set(Field::MiddleName, "Reyes");
        wizard.form.set(Field::Program, "BSIT");
        wizard.form.set(Field::YearLevel, "3");
        wizard.form.set(Field::Section, "A");
        wizard.form.set(Field::Password, "secret1");
        wizard.form.set(Field::ConfirmPassword, "secret1");
        let request = wizard.build_request().expect("request");
        let body = serde_json::to_value(&request).expect("json");
        assert_eq!(body["role"], "STUDENT");
        assert_eq!(body["middle_name"], "Reyes");
        assert_eq!(body["program_name"], "BSIT");
        assert!(body.get("department_name").is_none());
    }

    #[test]
    fn only_student_and_faculty_register() {
        assert_eq!(RegistrationRole::parse("Student"), Some(RegistrationRole::Student));
        assert_eq!(RegistrationRole::parse("admin"), None);
    }

    #[test]
    fn duplicate_account_message_is_friendly() {
        let err = ApiError::Http {
            status: 400,
            message: "User already exists".into(),
        };
        assert_eq!(registration_error_message(&err), "Email or TUPM ID already exists.");
        assert_eq!(
            registration_error_message(&ApiError::Network("offline".into())),
            "Registration failed. Please try again."
        );
    }
}
