use std::collections::BTreeMap;

use super::domain::{Account, AccountType, Application, ApplicationId, Resume, Vacancy, VacancyId};
use super::session::Language;

/// What changed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    AccountRegistered {
        email: String,
        account_type: AccountType,
    },
    ActiveAccountChanged {
        email: String,
        account_type: AccountType,
    },
    VacancyAdded(VacancyId),
    ResumeSaved {
        email: String,
    },
    ApplicationSubmitted {
        id: ApplicationId,
        vacancy_id: VacancyId,
    },
    LanguageChanged(Language),
}

/// Borrowed view of every collection as it stands after a mutation.
#[derive(Debug, Clone, Copy)]
pub struct StoreSnapshot<'a> {
    pub accounts: &'a [Account],
    pub active_account: Option<&'a Account>,
    pub vacancies: &'a [Vacancy],
    pub resumes: &'a BTreeMap<String, Resume>,
    pub applications: &'a [Application],
    pub language: Language,
}

/// Handle returned by `subscribe`, used to detach a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&StoreEvent, &StoreSnapshot<'_>)>;

/// Listener registry. Single-threaded; listeners run synchronously in
/// registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn publish(&mut self, event: &StoreEvent, snapshot: &StoreSnapshot<'_>) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event, snapshot);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
