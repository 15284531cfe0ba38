use crate::commands::print_vacancy;
use crate::infra::open_store;
use clap::Args;
use hirenow::config::AppConfig;
use hirenow::error::AppError;
use hirenow::validation::{RegistrationForm, ResumeDraft, VacancyDraft};
use hirenow::{AccountType, JobBoardStore, JsonFileStorage};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write into the configured data directory instead of a scratch one
    #[arg(long)]
    pub(crate) persist: bool,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let scratch = if args.persist {
        None
    } else {
        Some(tempfile::tempdir()?)
    };
    let mut config = config.clone();
    if let Some(dir) = &scratch {
        config.storage.data_dir = dir.path().to_path_buf();
    }

    println!("HireNow walkthrough");
    println!("Data directory: {}", config.storage.data_dir.display());
    let mut store = open_store(&config);

    let seeker = RegistrationForm {
        username: "Anna Kovalenko".to_string(),
        email: "a@x.com".to_string(),
        phone: "+380 67 123 45 67".to_string(),
        password: "pw123456".to_string(),
        confirm_password: "pw123456".to_string(),
        account_type: AccountType::JobSeeker,
        agreed_to_terms: true,
    };
    let employer = RegistrationForm {
        username: "Acme Hiring".to_string(),
        email: "hr@acme.example".to_string(),
        account_type: AccountType::Employer,
        ..seeker.clone()
    };

    for form in [seeker.clone(), employer] {
        let new_account = form.validate(&config.registration)?;
        match store.register_account(new_account) {
            Ok(account) => println!(
                "- registered {} ({})",
                account.email, account.account_type
            ),
            Err(err) => println!("- skipped registration: {err}"),
        }
    }

    println!("\nDuplicate registration is refused");
    let duplicate = seeker.validate(&config.registration)?;
    if let Err(err) = store.register_account(duplicate) {
        println!("- {err}");
    }

    store.switch_active_account(AccountType::Employer)?;
    let draft = VacancyDraft {
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        is_remote: true,
    };
    let vacancy_id = store.add_vacancy(draft.validate()?).id.clone();
    println!("\nEmployer posted");
    if let Some(vacancy) = store.vacancy(&vacancy_id) {
        print_vacancy(vacancy);
    }

    store.switch_active_account(AccountType::JobSeeker)?;
    let resume = ResumeDraft {
        full_name: "Anna Kovalenko".to_string(),
        about: "Backend developer".to_string(),
        skills: "Rust, SQL".to_string(),
    }
    .validate()?;
    store.upsert_resume(resume);

    let application = store
        .submit_application(&vacancy_id, "Interested")
        .ok_or(AppError::NoActiveAccount)?;
    println!("\nJob seeker applied");
    println!(
        "- {} -> {} : {}",
        application.applicant_email, application.vacancy_id, application.message
    );

    let reopened = JobBoardStore::open(JsonFileStorage::new(&config.storage.data_dir));
    println!("\nReloaded from disk");
    println!(
        "- accounts {} | vacancies {} | resumes {} | applications {}",
        reopened.accounts().len(),
        reopened.vacancies().len(),
        reopened.resumes().len(),
        reopened.applications().len()
    );
    if let Some(active) = reopened.active_account() {
        println!(
            "- active after reload: {} ({})",
            active.email, active.account_type
        );
    }

    Ok(())
}
