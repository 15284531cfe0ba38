use serde_json::Value;

use super::common::*;
use crate::board::domain::AccountType;
use crate::board::storage::Collection;
use crate::board::store::JobBoardStore;

#[test]
fn every_collection_round_trips_through_storage() {
    let (mut store, storage) = empty_store();
    store.register_account(seeker("a@x.com")).expect("registered");
    store.register_account(employer("b@x.com")).expect("registered");
    store.switch_active_account(AccountType::JobSeeker).expect("switched");
    store.upsert_resume(resume("Anna", "go")).expect("saved");
    let first = store.add_vacancy(vacancy("First")).id.clone();
    let second = store.add_vacancy(vacancy("Second")).id.clone();
    store.submit_application(&first, "one").expect("applied");
    store.submit_application(&second, "two").expect("applied");

    let reopened = JobBoardStore::open(storage.clone());

    assert_eq!(reopened.accounts(), store.accounts());
    assert_eq!(reopened.vacancies(), store.vacancies());
    assert_eq!(reopened.resumes(), store.resumes());
    assert_eq!(reopened.applications(), store.applications());
}

#[test]
fn reopening_activates_the_first_account() {
    let (mut store, storage) = empty_store();
    store.register_account(seeker("first@x.com")).expect("registered");
    store.register_account(employer("second@x.com")).expect("registered");
    assert_eq!(
        store.active_account().map(|a| a.email.as_str()),
        Some("second@x.com")
    );

    let reopened = JobBoardStore::open(storage);
    assert_eq!(
        reopened.active_account().map(|a| a.email.as_str()),
        Some("first@x.com")
    );
}

#[test]
fn missing_storage_opens_empty() {
    let (store, _) = empty_store();

    assert!(store.accounts().is_empty());
    assert!(store.vacancies().is_empty());
    assert!(store.resumes().is_empty());
    assert!(store.applications().is_empty());
    assert!(store.active_account().is_none());
}

#[test]
fn corrupt_collection_is_treated_as_empty() {
    let (mut store, storage) = empty_store();
    store.register_account(seeker("kept@x.com")).expect("registered");
    store.add_vacancy(vacancy("Lost"));
    storage.put(Collection::Vacancies, "[{\"id\": 42, \"title\":");

    let reopened = JobBoardStore::open(storage);

    assert!(reopened.vacancies().is_empty());
    assert_eq!(reopened.accounts().len(), 1);
}

#[test]
fn record_shape_mismatch_is_treated_as_empty() {
    let storage = MemoryStorage::default();
    storage.put(Collection::Accounts, r#"[{"name": "legacy"}]"#);
    storage.put(Collection::Resumes, "[]");

    let store = JobBoardStore::open(storage);

    assert!(store.accounts().is_empty());
    assert!(store.resumes().is_empty());
}

#[test]
fn each_mutation_writes_only_its_collection() {
    let (mut store, storage) = empty_store();

    store.add_vacancy(vacancy("Only vacancies"));

    assert!(storage.contents(Collection::Vacancies).is_some());
    assert!(storage.contents(Collection::Accounts).is_none());
    assert!(storage.contents(Collection::Resumes).is_none());
    assert!(storage.contents(Collection::Applications).is_none());
    assert_eq!(storage.writes(), 1);
}

#[test]
fn resumes_are_stored_as_object_keyed_by_email() {
    let (mut store, storage) = empty_store();
    store.register_account(seeker("Key@X.com")).expect("registered");
    store.upsert_resume(resume("Keyed", "json")).expect("saved");

    let raw = storage.contents(Collection::Resumes).expect("resumes written");
    let value: Value = serde_json::from_str(&raw).expect("valid json");

    assert_eq!(value["key@x.com"]["fullName"], "Keyed");
    assert_eq!(value["key@x.com"]["skills"], "json");
}

#[test]
fn failed_write_keeps_in_memory_state() {
    let (mut store, storage) = empty_store();
    storage.fail_writes(true);

    store.register_account(seeker("volatile@x.com")).expect("registered");
    store.add_vacancy(vacancy("Unsaved"));

    assert_eq!(store.accounts().len(), 1);
    assert_eq!(store.vacancies().len(), 1);
    assert_eq!(
        store.active_account().map(|a| a.email.as_str()),
        Some("volatile@x.com")
    );

    storage.fail_writes(false);
    let reopened = JobBoardStore::open(storage);
    assert!(reopened.accounts().is_empty());
    assert!(reopened.vacancies().is_empty());
}
