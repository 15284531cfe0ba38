use hirenow::board::{StoreEvent, StoreSnapshot};
use hirenow::config::AppConfig;
use hirenow::error::AppError;
use hirenow::{AccountType, JobBoardStore, JsonFileStorage, Language};
use tracing::debug;

pub(crate) type Store = JobBoardStore<JsonFileStorage>;

/// Opens the store over the configured data directory and logs every change
/// it publishes.
pub(crate) fn open_store(config: &AppConfig) -> Store {
    let storage = JsonFileStorage::new(&config.storage.data_dir);
    let mut store = JobBoardStore::open_with_language(storage, config.language);
    store.subscribe(log_store_event);
    store
}

/// Opens the store and, when `acting_as` is given, activates the first
/// account of that type before any command runs.
pub(crate) fn open_store_as(
    config: &AppConfig,
    acting_as: Option<AccountType>,
) -> Result<Store, AppError> {
    let mut store = open_store(config);
    if let Some(account_type) = acting_as {
        store.switch_active_account(account_type)?;
    }
    Ok(store)
}

fn log_store_event(event: &StoreEvent, snapshot: &StoreSnapshot<'_>) {
    debug!(
        ?event,
        accounts = snapshot.accounts.len(),
        vacancies = snapshot.vacancies.len(),
        resumes = snapshot.resumes.len(),
        applications = snapshot.applications.len(),
        "store changed"
    );
}

pub(crate) fn parse_account_type(raw: &str) -> Result<AccountType, String> {
    raw.parse::<AccountType>().map_err(|err| err.to_string())
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>().map_err(|err| err.to_string())
}

/// Labels of the `status` screen in the two supported languages. Command
/// confirmations and errors stay in English.
pub(crate) struct Labels {
    pub(crate) accounts: &'static str,
    pub(crate) active: &'static str,
    pub(crate) language: &'static str,
    pub(crate) none: &'static str,
    pub(crate) vacancies: &'static str,
    pub(crate) resumes: &'static str,
    pub(crate) applications: &'static str,
    pub(crate) toggle_hint: &'static str,
}

pub(crate) fn labels(language: Language) -> Labels {
    match language {
        Language::Ukrainian => Labels {
            accounts: "Акаунти",
            active: "Активний акаунт",
            language: "Мова",
            none: "немає",
            vacancies: "Вакансії",
            resumes: "Резюме",
            applications: "Відгуки",
            toggle_hint: "Зареєстровано обидва типи акаунтів; `hirenow switch --toggle` перемикає між ними",
        },
        Language::English => Labels {
            accounts: "Accounts",
            active: "Active account",
            language: "Language",
            none: "none",
            vacancies: "Vacancies",
            resumes: "Resumes",
            applications: "Applications",
            toggle_hint: "Both account types registered; `hirenow switch --toggle` flips between them",
        },
    }
}
