use super::common::*;
use crate::board::domain::AccountType;
use crate::board::session::{Language, SessionError};
use crate::board::store::JobBoardStore;

#[test]
fn switching_selects_first_account_of_type() {
    let (mut store, _) = empty_store();
    store.register_account(employer("boss@x.com")).expect("registered");
    store.register_account(seeker("one@x.com")).expect("registered");
    store.register_account(seeker("two@x.com")).expect("registered");
    store.register_account(employer("other@x.com")).expect("registered");

    let active = store
        .switch_active_account(AccountType::JobSeeker)
        .expect("job seeker exists");
    assert_eq!(active.email, "one@x.com");

    let active = store
        .switch_active_account(AccountType::Employer)
        .expect("employer exists");
    assert_eq!(active.email, "boss@x.com");
}

#[test]
fn switching_to_missing_type_errors_and_keeps_active() {
    let (mut store, _) = empty_store();
    store.register_account(seeker("solo@x.com")).expect("registered");

    assert_eq!(
        store.switch_active_account(AccountType::Employer),
        Err(SessionError::NoAccountOfType(AccountType::Employer))
    );
    let active = store.active_account().expect("still active");
    assert_eq!(active.email, "solo@x.com");
    assert_eq!(active.account_type, AccountType::JobSeeker);
}

#[test]
fn switching_on_empty_store_errors() {
    let (mut store, _) = empty_store();

    assert!(store.switch_active_account(AccountType::JobSeeker).is_err());
    assert!(store.active_account().is_none());
}

#[test]
fn toggle_requires_both_identities() {
    let (mut store, _) = empty_store();
    store.register_account(seeker("dual@x.com")).expect("registered");

    assert_eq!(
        store.toggle_active_account(),
        Err(SessionError::CannotToggle)
    );

    store.register_account(employer("dual@x.com")).expect("registered");
    let flipped = store.toggle_active_account().expect("toggle works");
    assert_eq!(flipped.account_type, AccountType::JobSeeker);
    let flipped = store.toggle_active_account().expect("toggle works");
    assert_eq!(flipped.account_type, AccountType::Employer);
}

#[test]
fn applications_follow_the_switched_identity() {
    let (mut store, _) = empty_store();
    store.register_account(seeker("seeker@x.com")).expect("registered");
    store.register_account(employer("hr@x.com")).expect("registered");
    let vacancy_id = store.add_vacancy(vacancy("Support")).id.clone();

    store
        .switch_active_account(AccountType::JobSeeker)
        .expect("switched");
    let application = store
        .submit_application(&vacancy_id, "Hi")
        .expect("recorded");

    assert_eq!(application.applicant_email, "seeker@x.com");
}

#[test]
fn language_is_configurable_but_not_persisted() {
    let (mut store, storage) = empty_store();
    assert_eq!(store.language(), Language::Ukrainian);

    store.set_language(Language::English);
    assert_eq!(store.language(), Language::English);
    assert_eq!(storage.writes(), 0);

    let reopened = JobBoardStore::open_with_language(storage, Language::Ukrainian);
    assert_eq!(reopened.language(), Language::Ukrainian);
}

#[test]
fn language_parses_codes_and_names() {
    assert_eq!("EN".parse::<Language>(), Ok(Language::English));
    assert_eq!("ukrainian".parse::<Language>(), Ok(Language::Ukrainian));
    assert!("fr".parse::<Language>().is_err());
}
