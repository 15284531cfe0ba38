use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{Account, AccountType};

/// Interface language. The board ships a fixed pair and no translation
/// machinery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ukrainian => "uk",
            Language::English => "en",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Ukrainian => "Українська",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}' (expected uk or en)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uk" | "ua" | "ukrainian" => Ok(Language::Ukrainian),
            "en" | "english" => Ok(Language::English),
            _ => Err(UnknownLanguage(value.to_string())),
        }
    }
}

/// Identity of an account inside the accounts collection. Email plus type is
/// unique, so the key survives reloads and never owns the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountKey {
    pub email: String,
    pub account_type: AccountType,
}

impl AccountKey {
    pub fn of(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            account_type: account.account_type,
        }
    }

    fn matches(&self, account: &Account) -> bool {
        account.account_type == self.account_type && account.email == self.email
    }
}

/// Raised when an account switch cannot be honored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no {0} account has been registered")]
    NoAccountOfType(AccountType),
    #[error("switching requires both a job seeker and an employer account")]
    CannotToggle,
}

/// Per-run selection state: which account acts, and in which language the
/// front end renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    active: Option<AccountKey>,
    language: Language,
}

impl Session {
    /// Starts a session on the first registered account, if any.
    pub fn restore(accounts: &[Account], language: Language) -> Self {
        Self {
            active: accounts.first().map(AccountKey::of),
            language,
        }
    }

    pub fn active_key(&self) -> Option<&AccountKey> {
        self.active.as_ref()
    }

    pub fn resolve<'a>(&self, accounts: &'a [Account]) -> Option<&'a Account> {
        let key = self.active.as_ref()?;
        accounts.iter().find(|account| key.matches(account))
    }

    pub fn select(&mut self, account: &Account) {
        self.active = Some(AccountKey::of(account));
    }

    /// Moves the session onto the first account of `account_type`, leaving
    /// it untouched when none exists.
    pub fn switch_to<'a>(
        &mut self,
        accounts: &'a [Account],
        account_type: AccountType,
    ) -> Result<&'a Account, SessionError> {
        let account = first_of_type(accounts, account_type)
            .ok_or(SessionError::NoAccountOfType(account_type))?;
        self.select(account);
        Ok(account)
    }

    /// Flips between the job seeker and employer identity.
    pub fn toggle<'a>(&mut self, accounts: &'a [Account]) -> Result<&'a Account, SessionError> {
        if !can_switch(accounts) {
            return Err(SessionError::CannotToggle);
        }
        let current = self
            .active
            .as_ref()
            .map(|key| key.account_type)
            .unwrap_or(AccountType::Employer);
        self.switch_to(accounts, current.counterpart())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}

pub fn first_of_type(accounts: &[Account], account_type: AccountType) -> Option<&Account> {
    accounts
        .iter()
        .find(|account| account.account_type == account_type)
}

/// Both identities exist, so the profile screen offers switching.
pub fn can_switch(accounts: &[Account]) -> bool {
    AccountType::ALL
        .iter()
        .all(|kind| first_of_type(accounts, *kind).is_some())
}
