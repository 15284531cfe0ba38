//! Accounts, vacancies, resumes and applications held in memory and written
//! through to one JSON file per collection.

pub mod domain;
pub mod events;
pub mod session;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    normalize_email, Account, AccountType, Application, ApplicationId, NewAccount, NewVacancy,
    Resume, UnknownAccountType, Vacancy, VacancyId,
};
pub use events::{Listener, StoreEvent, StoreSnapshot, SubscriptionId};
pub use session::{AccountKey, Language, Session, SessionError, UnknownLanguage};
pub use storage::{Collection, CollectionStorage, JsonFileStorage, StorageError};
pub use store::{JobBoardStore, RegistrationError};
