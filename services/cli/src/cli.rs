use crate::commands::{
    run_applications, run_apply, run_register, run_resume_set, run_resume_show, run_status,
    run_switch, run_vacancy_add, run_vacancy_list, ApplicationsArgs, ApplyArgs, RegisterArgs,
    ResumeSetArgs, SwitchArgs, VacancyAddArgs, VacancyListArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::{open_store_as, parse_account_type, parse_language};
use clap::{Parser, Subcommand};
use hirenow::config::AppConfig;
use hirenow::error::AppError;
use hirenow::telemetry;
use hirenow::{AccountType, Language};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "hirenow",
    about = "Browse, post and apply to vacancies stored on this machine",
    version
)]
struct Cli {
    /// Override the configured data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Override the interface language (uk or en)
    #[arg(long, global = true, value_parser = parse_language)]
    language: Option<Language>,
    /// Act as the first account of this type (job-seeker or employer)
    #[arg(long = "as", global = true, value_parser = parse_account_type)]
    acting_as: Option<AccountType>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show accounts, the active identity and collection sizes (default command)
    Status,
    /// Create a job seeker or employer account and make it active
    Register(RegisterArgs),
    /// Switch the active account for this invocation
    Switch(SwitchArgs),
    /// Post or browse vacancies
    Vacancy {
        #[command(subcommand)]
        command: VacancyCommand,
    },
    /// Edit or show the active account's resume
    Resume {
        #[command(subcommand)]
        command: ResumeCommand,
    },
    /// Apply to a vacancy as the active job seeker
    Apply(ApplyArgs),
    /// List submitted applications
    Applications(ApplicationsArgs),
    /// Run the register / post / apply walkthrough against a scratch directory
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum VacancyCommand {
    /// Post a new vacancy as the active employer
    Add(VacancyAddArgs),
    /// List vacancies, newest first
    List(VacancyListArgs),
}

#[derive(Subcommand, Debug)]
enum ResumeCommand {
    /// Create or replace the resume of the active account
    Set(ResumeSetArgs),
    /// Print the resume of the active account
    Show,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }

    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        data_dir = %config.storage.data_dir.display(),
        language = %config.language,
        "configuration loaded"
    );

    let command = cli.command.unwrap_or(Command::Status);
    if let Command::Demo(args) = command {
        return run_demo(args, &config);
    }

    let mut store = open_store_as(&config, cli.acting_as)?;

    match command {
        Command::Status => run_status(&store),
        Command::Register(args) => run_register(&mut store, &config, args),
        Command::Switch(args) => run_switch(&mut store, args),
        Command::Vacancy {
            command: VacancyCommand::Add(args),
        } => run_vacancy_add(&mut store, args),
        Command::Vacancy {
            command: VacancyCommand::List(args),
        } => run_vacancy_list(&store, args),
        Command::Resume {
            command: ResumeCommand::Set(args),
        } => run_resume_set(&mut store, args),
        Command::Resume {
            command: ResumeCommand::Show,
        } => run_resume_show(&store),
        Command::Apply(args) => run_apply(&mut store, args),
        Command::Applications(args) => run_applications(&store, args),
        Command::Demo(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hirenow",
            "vacancy",
            "list",
            "--search",
            "rust",
            "--as",
            "employer",
            "--language",
            "en",
        ])
        .expect("arguments parse");

        assert_eq!(cli.acting_as, Some(AccountType::Employer));
        assert_eq!(cli.language, Some(Language::English));
        assert!(matches!(
            cli.command,
            Some(Command::Vacancy {
                command: VacancyCommand::List(_)
            })
        ));
    }

    #[test]
    fn register_requires_account_type() {
        let result = Cli::try_parse_from([
            "hirenow",
            "register",
            "--username",
            "Ann",
            "--email",
            "a@x.com",
            "--phone",
            "123456789",
            "--password",
            "pw123456",
            "--confirm-password",
            "pw123456",
        ]);

        assert!(result.is_err());
    }
}
