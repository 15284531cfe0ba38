use crate::infra::{labels, parse_account_type, Store};
use clap::Args;
use hirenow::config::AppConfig;
use hirenow::error::AppError;
use hirenow::validation::{
    validate_application_message, RegistrationForm, ResumeDraft, VacancyDraft,
};
use hirenow::{AccountType, Application, Vacancy, VacancyId};

#[derive(Args, Debug)]
pub(crate) struct RegisterArgs {
    /// Display name (Latin or Cyrillic letters)
    #[arg(long)]
    pub(crate) username: String,
    /// Email address; stored trimmed and lowercased
    #[arg(long)]
    pub(crate) email: String,
    /// Phone number, at least 9 digits
    #[arg(long)]
    pub(crate) phone: String,
    #[arg(long)]
    pub(crate) password: String,
    #[arg(long)]
    pub(crate) confirm_password: String,
    /// job-seeker or employer
    #[arg(long, value_parser = parse_account_type)]
    pub(crate) account_type: AccountType,
    /// Accept the terms of use
    #[arg(long)]
    pub(crate) agree_terms: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SwitchArgs {
    /// Account type to activate
    #[arg(value_parser = parse_account_type, required_unless_present = "toggle")]
    pub(crate) account_type: Option<AccountType>,
    /// Flip between the job seeker and employer identity
    #[arg(long, conflicts_with = "account_type")]
    pub(crate) toggle: bool,
}

#[derive(Args, Debug)]
pub(crate) struct VacancyAddArgs {
    #[arg(long)]
    pub(crate) title: String,
    #[arg(long)]
    pub(crate) company: String,
    #[arg(long)]
    pub(crate) location: String,
    /// Mark the position as remote
    #[arg(long)]
    pub(crate) remote: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct VacancyListArgs {
    /// Only show vacancies whose title, company or location contains this text
    #[arg(long)]
    pub(crate) search: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ResumeSetArgs {
    #[arg(long)]
    pub(crate) full_name: String,
    #[arg(long, default_value = "")]
    pub(crate) about: String,
    #[arg(long, default_value = "")]
    pub(crate) skills: String,
}

#[derive(Args, Debug)]
pub(crate) struct ApplyArgs {
    /// Identifier printed by `vacancy list`
    #[arg(long)]
    pub(crate) vacancy: String,
    /// Message to the employer
    #[arg(long)]
    pub(crate) message: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ApplicationsArgs {
    /// Only show applications for this vacancy
    #[arg(long)]
    pub(crate) vacancy: Option<String>,
    /// Print the raw records as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_status(store: &Store) -> Result<(), AppError> {
    let labels = labels(store.language());

    println!("{}: {}", labels.accounts, store.accounts().len());
    for account in store.accounts() {
        println!(
            "- {} <{}> ({})",
            account.username, account.email, account.account_type
        );
    }
    match store.active_account() {
        Some(account) => println!(
            "{}: {} ({})",
            labels.active, account.email, account.account_type
        ),
        None => println!("{}: {}", labels.active, labels.none),
    }
    println!("{}: {}", labels.language, store.language());
    if store.can_switch_accounts() {
        println!("{}", labels.toggle_hint);
    }
    println!(
        "{}: {} | {}: {} | {}: {}",
        labels.vacancies,
        store.vacancies().len(),
        labels.resumes,
        store.resumes().len(),
        labels.applications,
        store.applications().len()
    );
    Ok(())
}

pub(crate) fn run_register(
    store: &mut Store,
    config: &AppConfig,
    args: RegisterArgs,
) -> Result<(), AppError> {
    let form = RegistrationForm {
        username: args.username,
        email: args.email,
        phone: args.phone,
        password: args.password,
        confirm_password: args.confirm_password,
        account_type: args.account_type,
        agreed_to_terms: args.agree_terms,
    };
    let new_account = form.validate(&config.registration)?;
    let account = store.register_account(new_account)?;

    println!(
        "Registered {} account for {}",
        account.account_type, account.email
    );
    Ok(())
}

pub(crate) fn run_switch(store: &mut Store, args: SwitchArgs) -> Result<(), AppError> {
    let account = match (args.toggle, args.account_type) {
        (true, _) => store.toggle_active_account()?,
        (false, Some(account_type)) => store.switch_active_account(account_type)?,
        (false, None) => return Ok(()),
    };

    println!(
        "Active account: {} ({})",
        account.email, account.account_type
    );
    Ok(())
}

pub(crate) fn run_vacancy_add(store: &mut Store, args: VacancyAddArgs) -> Result<(), AppError> {
    require_active(store, AccountType::Employer)?;

    let draft = VacancyDraft {
        title: args.title,
        company: args.company,
        location: args.location,
        is_remote: args.remote,
    };
    let vacancy = store.add_vacancy(draft.validate()?);

    println!("Posted vacancy {}", vacancy.id);
    print_vacancy(vacancy);
    Ok(())
}

pub(crate) fn run_vacancy_list(store: &Store, args: VacancyListArgs) -> Result<(), AppError> {
    let vacancies = store.search_vacancies(args.search.as_deref().unwrap_or_default());
    if vacancies.is_empty() {
        println!("No vacancies found");
        return Ok(());
    }

    for vacancy in vacancies {
        print_vacancy(vacancy);
        if store.has_applied(&vacancy.id) {
            println!("  (applied)");
        }
    }
    Ok(())
}

pub(crate) fn run_resume_set(store: &mut Store, args: ResumeSetArgs) -> Result<(), AppError> {
    let draft = ResumeDraft {
        full_name: args.full_name,
        about: args.about,
        skills: args.skills,
    };
    let resume = draft.validate()?;
    let saved = store
        .upsert_resume(resume)
        .ok_or(AppError::NoActiveAccount)?;

    println!("Saved resume for {}", saved.full_name);
    Ok(())
}

pub(crate) fn run_resume_show(store: &Store) -> Result<(), AppError> {
    if store.active_account().is_none() {
        return Err(AppError::NoActiveAccount);
    }

    match store.current_resume() {
        Some(resume) => {
            println!("{}", resume.full_name);
            if !resume.about.is_empty() {
                println!("About: {}", resume.about);
            }
            if !resume.skills.is_empty() {
                println!("Skills: {}", resume.skills);
            }
        }
        None => println!("No resume saved yet"),
    }
    Ok(())
}

pub(crate) fn run_apply(store: &mut Store, args: ApplyArgs) -> Result<(), AppError> {
    require_active(store, AccountType::JobSeeker)?;

    let vacancy_id = VacancyId(args.vacancy.trim().to_string());
    if store.vacancy(&vacancy_id).is_none() {
        return Err(AppError::UnknownVacancy(vacancy_id.0));
    }
    if store.has_applied(&vacancy_id) {
        println!("Already applied to {}", vacancy_id);
        return Ok(());
    }

    let message = validate_application_message(&args.message)?.to_string();
    let application = store
        .submit_application(&vacancy_id, message)
        .ok_or(AppError::NoActiveAccount)?;

    println!(
        "Applied to {} as {} (application {})",
        application.vacancy_id, application.applicant_email, application.id
    );
    Ok(())
}

pub(crate) fn run_applications(store: &Store, args: ApplicationsArgs) -> Result<(), AppError> {
    let applications: Vec<&Application> = match args.vacancy {
        Some(raw) => store.applications_for_vacancy(&VacancyId(raw.trim().to_string())),
        None => store.applications().iter().collect(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&applications)
            .map_err(|err| AppError::Io(err.into()))?;
        println!("{json}");
        return Ok(());
    }

    if applications.is_empty() {
        println!("No applications yet");
        return Ok(());
    }
    for application in applications {
        let title = store
            .vacancy(&application.vacancy_id)
            .map(|vacancy| vacancy.title.as_str())
            .unwrap_or("(removed vacancy)");
        println!(
            "- {} -> {} [{}] {}",
            application.applicant_email,
            title,
            application.created_at.format("%Y-%m-%d %H:%M"),
            application.message
        );
    }
    Ok(())
}

fn require_active(store: &Store, required: AccountType) -> Result<(), AppError> {
    match store.active_account() {
        None => Err(AppError::NoActiveAccount),
        Some(account) if account.account_type != required => {
            Err(AppError::WrongAccountType { required })
        }
        Some(_) => Ok(()),
    }
}

pub(crate) fn print_vacancy(vacancy: &Vacancy) {
    println!("{} [{}]", vacancy.title, vacancy.id);
    println!(
        "  {} | posted {}",
        vacancy.headline(),
        vacancy.created_at.format("%Y-%m-%d")
    );
}
