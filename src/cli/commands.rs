//! Command dispatch

use std::io::{self, IsTerminal};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::seed_bank;
use crate::application::services::{QueryService, SearchOutcome};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::render::{
    bank_summary_lines, branch_line, depositor_line, outcome_lines, BRANCH_NOT_FOUND,
    DEPOSITOR_NOT_FOUND, INVALID_CATEGORY,
};
use crate::cli::shell::{Shell, ShellOptions};
use crate::cli::{output, CliError, CliResult};
use crate::config::{global_config_path, Settings};

/// Run the parsed command against the seeded bank.
pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Shell) => cmd_shell(settings),
        Some(Commands::Info) => cmd_info(settings),
        Some(Commands::Branch { term }) => cmd_branch(settings, term),
        Some(Commands::Depositor { term, months }) => cmd_depositor(settings, term, *months),
        Some(Commands::Search { category, term }) => {
            cmd_search(settings, category, term.as_deref())
        }
        Some(Commands::Config { command }) => cmd_config(settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn build_service(settings: &Settings, months: Option<u32>) -> CliResult<QueryService> {
    let bank = seed_bank(&settings.bank_name)?;
    let months = months.unwrap_or(settings.projection_months);
    debug!("projection horizon: {} months", months);
    Ok(QueryService::with_projection(bank, months))
}

#[instrument(skip(settings))]
fn cmd_shell(settings: &Settings) -> CliResult<()> {
    let service = build_service(settings, None)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let options = ShellOptions::from_settings(settings, stdout.is_terminal());
    Shell::new(&service, options, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_info(settings: &Settings) -> CliResult<()> {
    let service = build_service(settings, None)?;
    let lines = bank_summary_lines(&service.bank_summary(), &settings.currency_symbol);
    let mut lines = lines.iter();
    if let Some(title) = lines.next() {
        output::header(title);
    }
    for line in lines {
        output::info(line);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_branch(settings: &Settings, term: &str) -> CliResult<()> {
    let service = build_service(settings, None)?;
    let found = service.search_branches(term);
    if found.is_empty() {
        return Err(CliError::NotFound(BRANCH_NOT_FOUND.into()));
    }
    for branch in &found {
        output::info(&branch_line(branch, &settings.currency_symbol));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_depositor(settings: &Settings, term: &str, months: Option<u32>) -> CliResult<()> {
    let service = build_service(settings, months)?;
    let found = service.search_depositors(term)?;
    if found.is_empty() {
        return Err(CliError::NotFound(DEPOSITOR_NOT_FOUND.into()));
    }
    for deposit in &found {
        output::info(&depositor_line(
            deposit,
            service.projection_months(),
            &settings.currency_symbol,
        ));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_search(settings: &Settings, category: &str, term: Option<&str>) -> CliResult<()> {
    let service = build_service(settings, None)?;
    let outcome = service.search(category, term)?;
    if let SearchOutcome::InvalidCategory(raw) = &outcome {
        return Err(CliError::Usage(format!("{} ({})", INVALID_CATEGORY, raw)));
    }
    let lines = outcome_lines(
        &outcome,
        service.projection_months(),
        &settings.currency_symbol,
    );
    if outcome.is_not_found() {
        return Err(CliError::NotFound(lines.join(" ")));
    }
    for line in &lines {
        output::info(line);
    }
    Ok(())
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) if path.exists() => output::info(&path.display()),
            Some(path) => {
                output::info(&path.display());
                output::warning("file does not exist, compiled defaults apply");
            }
            None => {
                return Err(CliError::InvalidArgs(
                    "no config directory available on this platform".into(),
                ))
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;
    use crate::exitcode;
    use clap::Parser;
    use rstest::rstest;

    fn run(argv: &[&str]) -> CliResult<()> {
        let cli = Cli::try_parse_from(argv).unwrap();
        execute_command(&cli, &Settings::default())
    }

    #[rstest]
    #[case(&["demobank", "info"])]
    #[case(&["demobank", "branch", "север"])]
    #[case(&["demobank", "depositor", "петров", "-m", "24"])]
    #[case(&["demobank", "search", "банк"])]
    fn given_matching_query_when_executing_then_succeeds(#[case] argv: &[&str]) {
        assert!(run(argv).is_ok());
    }

    #[rstest]
    #[case(&["demobank", "branch", "южный"], BRANCH_NOT_FOUND)]
    #[case(&["demobank", "depositor", "кузнецов"], DEPOSITOR_NOT_FOUND)]
    #[case(&["demobank", "search", "вклад", "кузнецов"], DEPOSITOR_NOT_FOUND)]
    fn given_unmatched_term_when_executing_then_not_found(
        #[case] argv: &[&str],
        #[case] message: &str,
    ) {
        let err = run(argv).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::NOT_FOUND);
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn given_invalid_category_when_searching_then_usage_error() {
        let err = run(&["demobank", "search", "вопрос", "x"]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(err.exit_code(), exitcode::USAGE);
        assert!(err.to_string().contains("вопрос"));
    }

    #[test]
    fn given_astronomical_horizon_when_projecting_then_data_error() {
        let err = run(&["demobank", "depositor", "петров", "-m", "100000"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Application(ApplicationError::Domain(DomainError::ProjectionOverflow {
                months: 100000
            }))
        ));
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }
}
