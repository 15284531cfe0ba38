use crate::board::domain::{AccountType, NewAccount, NewVacancy, Resume};

use super::rules::{
    is_blank, is_valid_email, is_valid_name, is_valid_password, is_valid_phone, normalize_phone,
    passwords_match, DEFAULT_PASSWORD_MIN_LENGTH,
};

/// Human-readable reason a form cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must be at least 2 letters (Latin or Cyrillic, spaces, apostrophes, hyphens)")]
    InvalidName,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("phone number must contain at least 9 digits")]
    InvalidPhone,
    #[error("password must be at least {min_length} characters")]
    PasswordTooShort { min_length: usize },
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("terms must be accepted before registering")]
    TermsNotAccepted,
    #[error("{field} is required")]
    Required { field: &'static str },
}

/// Knobs for the registration gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    pub password_min_length: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}

/// Raw registration input as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: AccountType,
    pub agreed_to_terms: bool,
}

impl RegistrationForm {
    /// Checks fields in screen order and returns the first problem, or the
    /// store input with the phone normalized.
    pub fn validate(&self, policy: &RegistrationPolicy) -> Result<NewAccount, ValidationError> {
        if !is_valid_name(&self.username) {
            return Err(ValidationError::InvalidName);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !is_valid_password(&self.password, policy.password_min_length) {
            return Err(ValidationError::PasswordTooShort {
                min_length: policy.password_min_length,
            });
        }
        if !passwords_match(&self.password, &self.confirm_password) {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.agreed_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(NewAccount {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: normalize_phone(&self.phone),
            password: self.password.clone(),
            account_type: self.account_type,
        })
    }

    /// Whether the submit button should be enabled.
    pub fn is_submittable(&self, policy: &RegistrationPolicy) -> bool {
        self.validate(policy).is_ok()
    }
}

/// Employer's new-vacancy form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacancyDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub is_remote: bool,
}

impl VacancyDraft {
    pub fn validate(&self) -> Result<NewVacancy, ValidationError> {
        require("title", &self.title)?;
        require("company", &self.company)?;
        require("location", &self.location)?;

        Ok(NewVacancy {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            is_remote: self.is_remote,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeDraft {
    pub full_name: String,
    pub about: String,
    pub skills: String,
}

impl ResumeDraft {
    pub fn validate(&self) -> Result<Resume, ValidationError> {
        require("full name", &self.full_name)?;
        Ok(Resume {
            full_name: self.full_name.trim().to_string(),
            about: self.about.clone(),
            skills: self.skills.clone(),
        })
    }
}

/// An application needs something to say to the employer.
pub fn validate_application_message(message: &str) -> Result<&str, ValidationError> {
    require("message", message)?;
    Ok(message.trim())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}
