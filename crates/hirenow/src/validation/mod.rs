//! Input checks used by front ends before they call into the store. The
//! store itself accepts whatever it is given.

mod form;
pub mod rules;


pub use form::{
    validate_application_message, RegistrationForm, RegistrationPolicy, ResumeDraft,
    ValidationError, VacancyDraft,
};
pub use rules::{
    is_valid_email, is_valid_name, is_valid_password, is_valid_phone, normalize_phone,
    passwords_match,
};
