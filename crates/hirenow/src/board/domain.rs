use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the board an account acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    JobSeeker,
    Employer,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::JobSeeker, AccountType::Employer];

    pub fn label(self) -> &'static str {
        match self {
            AccountType::JobSeeker => "Job Seeker",
            AccountType::Employer => "Employer",
        }
    }

    /// The other account type, used when flipping between identities.
    pub fn counterpart(self) -> Self {
        match self {
            AccountType::JobSeeker => AccountType::Employer,
            AccountType::Employer => AccountType::JobSeeker,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account type '{0}' (expected job-seeker or employer)")]
pub struct UnknownAccountType(pub String);

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "job-seeker" | "jobseeker" | "seeker" => Ok(AccountType::JobSeeker),
            "employer" => Ok(AccountType::Employer),
            _ => Err(UnknownAccountType(value.to_string())),
        }
    }
}

/// Registered identity. Passwords are kept verbatim; the board performs no
/// authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Registration input before the store normalizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub account_type: AccountType,
}

/// Trims and lowercases an email so lookups are case-insensitive.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Identifier wrapper for posted vacancies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacancyId(pub String);

impl VacancyId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for VacancyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub id: VacancyId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub is_remote: bool,
    pub created_at: DateTime<Utc>,
}

impl Vacancy {
    /// One-line summary in the `company • location • Remote` shape the
    /// listing screens use.
    pub fn headline(&self) -> String {
        let mut line = format!("{} • {}", self.company, self.location);
        if self.is_remote {
            line.push_str(" • Remote");
        }
        line
    }

    pub(crate) fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.company, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Employer input for a new posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVacancy {
    pub title: String,
    pub company: String,
    pub location: String,
    pub is_remote: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub full_name: String,
    pub about: String,
    pub skills: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub vacancy_id: VacancyId,
    pub applicant_email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn account_type_parses_cli_spellings() {
        assert_eq!("job-seeker".parse::<AccountType>(), Ok(AccountType::JobSeeker));
        assert_eq!("Job_Seeker".parse::<AccountType>(), Ok(AccountType::JobSeeker));
        assert_eq!(" employer ".parse::<AccountType>(), Ok(AccountType::Employer));
        assert!("landlord".parse::<AccountType>().is_err());
    }

    #[test]
    fn vacancy_serializes_with_camel_case_fields() {
        let vacancy = Vacancy {
            id: VacancyId("v-1".to_string()),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Kyiv".to_string(),
            is_remote: true,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
        };

        let value = serde_json::to_value(&vacancy).expect("vacancy serializes");
        assert_eq!(
            value,
            json!({
                "id": "v-1",
                "title": "Engineer",
                "company": "Acme",
                "location": "Kyiv",
                "isRemote": true,
                "createdAt": "2025-03-01T09:30:00Z",
            })
        );
        assert_eq!(vacancy.headline(), "Acme • Kyiv • Remote");
    }

    #[test]
    fn account_type_field_is_named_type() {
        let account = Account {
            username: "Olena".to_string(),
            email: "olena@example.com".to_string(),
            phone: "+380501112233".to_string(),
            password: "secret123".to_string(),
            account_type: AccountType::Employer,
        };

        let value = serde_json::to_value(&account).expect("account serializes");
        assert_eq!(value["type"], "employer");
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  A@X.Com \n"), "a@x.com");
    }
}
