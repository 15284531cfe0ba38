use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::board::domain::{AccountType, NewAccount, NewVacancy, Resume};
use crate::board::storage::{Collection, CollectionStorage, StorageError};
use crate::board::store::JobBoardStore;

/// In-memory storage double. Clones share contents so a second store can be
/// opened over what the first one wrote.
#[derive(Debug, Default, Clone)]
pub(super) struct MemoryStorage {
    files: Rc<RefCell<HashMap<Collection, String>>>,
    fail_writes: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub(super) fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub(super) fn writes(&self) -> usize {
        self.writes.get()
    }

    pub(super) fn contents(&self, collection: Collection) -> Option<String> {
        self.files.borrow().get(&collection).cloned()
    }

    pub(super) fn put(&self, collection: Collection, contents: &str) {
        self.files
            .borrow_mut()
            .insert(collection, contents.to_string());
    }
}

impl CollectionStorage for MemoryStorage {
    fn read(&self, collection: Collection) -> Result<Option<String>, StorageError> {
        Ok(self.files.borrow().get(&collection).cloned())
    }

    fn write(&self, collection: Collection, contents: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("disk full".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(collection, contents.to_string());
        Ok(())
    }
}

pub(super) fn empty_store() -> (JobBoardStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::default();
    (JobBoardStore::open(storage.clone()), storage)
}

pub(super) fn account(email: &str, account_type: AccountType) -> NewAccount {
    NewAccount {
        username: "Oksana Petrenko".to_string(),
        email: email.to_string(),
        phone: "+380671234567".to_string(),
        password: "pw123456".to_string(),
        account_type,
    }
}

pub(super) fn seeker(email: &str) -> NewAccount {
    account(email, AccountType::JobSeeker)
}

pub(super) fn employer(email: &str) -> NewAccount {
    account(email, AccountType::Employer)
}

pub(super) fn vacancy(title: &str) -> NewVacancy {
    NewVacancy {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        is_remote: true,
    }
}

pub(super) fn resume(full_name: &str, skills: &str) -> Resume {
    Resume {
        full_name: full_name.to_string(),
        about: "Backend developer".to_string(),
        skills: skills.to_string(),
    }
}
