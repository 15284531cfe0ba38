//! Core of the HireNow job board: a local, file-backed store for accounts,
//! vacancies, resumes and applications, plus the input validation used by
//! the registration and posting flows.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod validation;

pub use board::{
    Account, AccountType, Application, ApplicationId, JobBoardStore, JsonFileStorage, Language,
    NewAccount, NewVacancy, Resume, Vacancy, VacancyId,
};
