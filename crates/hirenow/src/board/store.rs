use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{
    normalize_email, Account, AccountType, Application, ApplicationId, NewAccount, NewVacancy,
    Resume, Vacancy, VacancyId,
};
use super::events::{Listeners, StoreEvent, StoreSnapshot, SubscriptionId};
use super::session::{self, AccountKey, Language, Session, SessionError};
use super::storage::{encode, load_or_default, Collection, CollectionStorage};

/// Authoritative in-memory copy of the board, written through to `storage`
/// after every mutation.
///
/// Write failures are logged and swallowed: the in-memory state is kept even
/// when it never reached disk, so a restart after a failed write loses that
/// mutation.
#[derive(Debug)]
pub struct JobBoardStore<S> {
    storage: S,
    accounts: Vec<Account>,
    vacancies: Vec<Vacancy>,
    resumes: BTreeMap<String, Resume>,
    applications: Vec<Application>,
    session: Session,
    listeners: Listeners,
}

/// Error returned when registration is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("{account_type} account for {email} already exists")]
    Conflict {
        email: String,
        account_type: AccountType,
    },
}

impl<S: CollectionStorage> JobBoardStore<S> {
    /// Loads every collection from `storage`, falling back to empty
    /// collections, and activates the first registered account.
    pub fn open(storage: S) -> Self {
        Self::open_with_language(storage, Language::default())
    }

    pub fn open_with_language(storage: S, language: Language) -> Self {
        let accounts: Vec<Account> = load_or_default(&storage, Collection::Accounts);
        let vacancies: Vec<Vacancy> = load_or_default(&storage, Collection::Vacancies);
        let resumes: BTreeMap<String, Resume> = load_or_default(&storage, Collection::Resumes);
        let applications: Vec<Application> =
            load_or_default(&storage, Collection::Applications);
        let session = Session::restore(&accounts, language);

        info!(
            accounts = accounts.len(),
            vacancies = vacancies.len(),
            resumes = resumes.len(),
            applications = applications.len(),
            "job board store opened"
        );

        Self {
            storage,
            accounts,
            vacancies,
            resumes,
            applications,
            session,
            listeners: Listeners::default(),
        }
    }

    /// Creates an account and makes it the active identity.
    ///
    /// The email is trimmed and lowercased first; a second account with the
    /// same email and type is refused.
    pub fn register_account(
        &mut self,
        new_account: NewAccount,
    ) -> Result<&Account, RegistrationError> {
        let NewAccount {
            username,
            email,
            phone,
            password,
            account_type,
        } = new_account;
        let email = normalize_email(&email);

        if self
            .accounts
            .iter()
            .any(|account| account.email == email && account.account_type == account_type)
        {
            info!(%email, %account_type, "registration refused, account exists");
            return Err(RegistrationError::Conflict {
                email,
                account_type,
            });
        }

        let account = Account {
            username,
            email: email.clone(),
            phone,
            password,
            account_type,
        };
        self.session.select(&account);
        let index = self.accounts.len();
        self.accounts.push(account);
        self.persist(Collection::Accounts);

        info!(%email, %account_type, "account registered");
        self.publish(StoreEvent::AccountRegistered {
            email,
            account_type,
        });
        Ok(&self.accounts[index])
    }

    /// Activates the first account of `account_type`. The active account is
    /// unchanged when none exists. Selecting the account that is already
    /// active publishes nothing.
    pub fn switch_active_account(
        &mut self,
        account_type: AccountType,
    ) -> Result<&Account, SessionError> {
        let previous = self.session.active_key().cloned();
        let email = self
            .session
            .switch_to(&self.accounts, account_type)?
            .email
            .clone();
        self.announce_active(previous, email, account_type)
    }

    /// Flips between the job seeker and employer identities; both must exist.
    pub fn toggle_active_account(&mut self) -> Result<&Account, SessionError> {
        let previous = self.session.active_key().cloned();
        let switched = self.session.toggle(&self.accounts)?;
        let (email, account_type) = (switched.email.clone(), switched.account_type);
        self.announce_active(previous, email, account_type)
    }

    fn announce_active(
        &mut self,
        previous: Option<AccountKey>,
        email: String,
        account_type: AccountType,
    ) -> Result<&Account, SessionError> {
        let unchanged = previous
            .as_ref()
            .is_some_and(|key| key.email == email && key.account_type == account_type);
        if unchanged {
            debug!(%email, %account_type, "account already active");
        } else {
            info!(%email, %account_type, "active account switched");
            self.publish(StoreEvent::ActiveAccountChanged {
                email,
                account_type,
            });
        }
        self.session
            .resolve(&self.accounts)
            .ok_or(SessionError::NoAccountOfType(account_type))
    }

    /// Posts a vacancy at the head of the listing.
    pub fn add_vacancy(&mut self, new_vacancy: NewVacancy) -> &Vacancy {
        let NewVacancy {
            title,
            company,
            location,
            is_remote,
        } = new_vacancy;
        let vacancy = Vacancy {
            id: VacancyId::generate(),
            title,
            company,
            location,
            is_remote,
            created_at: Utc::now(),
        };
        let id = vacancy.id.clone();

        self.vacancies.insert(0, vacancy);
        self.persist(Collection::Vacancies);

        info!(vacancy_id = %id, "vacancy added");
        self.publish(StoreEvent::VacancyAdded(id));
        &self.vacancies[0]
    }

    /// Stores `resume` for the active account's email, replacing any
    /// previous one. Returns `None` without touching anything when no
    /// account is active.
    pub fn upsert_resume(&mut self, resume: Resume) -> Option<&Resume> {
        let Some(email) = self.active_email() else {
            debug!("resume not saved, no active account");
            return None;
        };

        self.resumes.insert(email.clone(), resume);
        self.persist(Collection::Resumes);

        info!(%email, "resume saved");
        self.publish(StoreEvent::ResumeSaved {
            email: email.clone(),
        });
        self.resumes.get(&email)
    }

    /// Records an application from the active account at the head of the
    /// list. Neither the vacancy's existence nor the applicant's account type
    /// is checked. Returns `None` without touching anything when no account
    /// is active.
    pub fn submit_application(
        &mut self,
        vacancy_id: &VacancyId,
        message: impl Into<String>,
    ) -> Option<&Application> {
        let Some(email) = self.active_email() else {
            debug!(%vacancy_id, "application not submitted, no active account");
            return None;
        };

        let application = Application {
            id: ApplicationId::generate(),
            vacancy_id: vacancy_id.clone(),
            applicant_email: email,
            message: message.into(),
            created_at: Utc::now(),
        };
        let event = StoreEvent::ApplicationSubmitted {
            id: application.id.clone(),
            vacancy_id: vacancy_id.clone(),
        };

        self.applications.insert(0, application);
        self.persist(Collection::Applications);

        info!(%vacancy_id, "application submitted");
        self.publish(event);
        self.applications.first()
    }

    pub fn set_language(&mut self, language: Language) {
        if self.session.language() == language {
            return;
        }
        self.session.set_language(language);
        self.publish(StoreEvent::LanguageChanged(language));
    }

    pub fn has_account(&self, account_type: AccountType) -> bool {
        session::first_of_type(&self.accounts, account_type).is_some()
    }

    pub fn can_switch_accounts(&self) -> bool {
        session::can_switch(&self.accounts)
    }

    pub fn active_account(&self) -> Option<&Account> {
        self.session.resolve(&self.accounts)
    }

    pub fn current_resume(&self) -> Option<&Resume> {
        let account = self.active_account()?;
        self.resumes.get(&account.email)
    }

    pub fn language(&self) -> Language {
        self.session.language()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Newest first.
    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    pub fn vacancy(&self, id: &VacancyId) -> Option<&Vacancy> {
        self.vacancies.iter().find(|vacancy| &vacancy.id == id)
    }

    /// Case-insensitive substring match over title, company and location.
    /// A blank query returns every vacancy.
    pub fn search_vacancies(&self, query: &str) -> Vec<&Vacancy> {
        let needle = query.trim().to_lowercase();
        self.vacancies
            .iter()
            .filter(|vacancy| needle.is_empty() || vacancy.matches(&needle))
            .collect()
    }

    pub fn resumes(&self) -> &BTreeMap<String, Resume> {
        &self.resumes
    }

    /// Newest first.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn applications_for_vacancy(&self, vacancy_id: &VacancyId) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| &application.vacancy_id == vacancy_id)
            .collect()
    }

    /// Whether the active account already applied to `vacancy_id`.
    pub fn has_applied(&self, vacancy_id: &VacancyId) -> bool {
        let Some(account) = self.active_account() else {
            return false;
        };
        self.applications.iter().any(|application| {
            &application.vacancy_id == vacancy_id && application.applicant_email == account.email
        })
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            accounts: &self.accounts,
            active_account: self.session.resolve(&self.accounts),
            vacancies: &self.vacancies,
            resumes: &self.resumes,
            applications: &self.applications,
            language: self.session.language(),
        }
    }

    /// Registers a listener invoked after every mutation with the event and
    /// the resulting snapshot.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &StoreSnapshot<'_>) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    fn active_email(&self) -> Option<String> {
        self.active_account().map(|account| account.email.clone())
    }

    fn persist(&self, collection: Collection) {
        let encoded = match collection {
            Collection::Accounts => encode(collection, &self.accounts),
            Collection::Vacancies => encode(collection, &self.vacancies),
            Collection::Resumes => encode(collection, &self.resumes),
            Collection::Applications => encode(collection, &self.applications),
        };

        match encoded.and_then(|contents| self.storage.write(collection, &contents)) {
            Ok(()) => debug!(collection = collection.name(), "collection written"),
            Err(err) => warn!(
                collection = collection.name(),
                error = %err,
                "write-through failed, keeping in-memory state"
            ),
        }
    }

    fn publish(&mut self, event: StoreEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = StoreSnapshot {
            accounts: &self.accounts,
            active_account: self.session.resolve(&self.accounts),
            vacancies: &self.vacancies,
            resumes: &self.resumes,
            applications: &self.applications,
            language: self.session.language(),
        };
        self.listeners.publish(&event, &snapshot);
    }
}
