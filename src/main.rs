use anyhow::Context;
use clap::Parser;
use cmpy::commands::compare;
use cmpy::config::Cli;
use cmpy::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Exit codes keep "compared, found differences" (1) apart from
    // "could not compare at all" (2).
    match run_app(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run_app(cli: Cli) -> anyhow::Result<bool> {
    let config = Config::try_from(cli).context("invalid arguments")?;
    let outcome = compare::run(config)?;
    Ok(outcome.all_matched)
}
