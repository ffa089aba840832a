use anyhow::{Context, Result};
use clap::FromArgMatches;
use media_type_sync::cli::media_types::{resolve_strict, Args, Commands};
use media_type_sync::config;
use media_type_sync::error::SyncError;
use media_type_sync::logging;
use media_type_sync::registry::MediaTypeList;
use media_type_sync::sync::{check_reference, SyncOptions, SyncOutcome};
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _guard = logging::init_logging("media-types.log");

    match run_app() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app() -> Result<ExitCode> {
    let matches = Args::build_command().get_matches();
    let args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    match args.command {
        Commands::Check { reference, source } => {
            let outcome = check_reference(
                &reference,
                |path| source.generate(path).map(|_| ()),
                SyncOptions::verify(),
            );
            report(outcome)
        }
        Commands::Update { reference, strict, lenient, source } => {
            let options = SyncOptions {
                strict: resolve_strict(strict, lenient, config::running_in_ci()),
                update: true,
            };
            let outcome = check_reference(&reference, |path| source.generate(path).map(|_| ()), options);
            report(outcome)
        }
        Commands::Lookup { media_type, reference } => {
            let list = match reference {
                Some(path) => {
                    let bytes = fs::read(&path).with_context(|| format!("Failed to read {:?}", path))?;
                    MediaTypeList::from_json(&bytes).with_context(|| format!("Invalid media type list {:?}", path))?
                }
                None => MediaTypeList::bundled().context("Bundled media type list is invalid")?,
            };

            if list.contains(&media_type) {
                println!("{} is registered", media_type);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{} is not registered", media_type);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn report(outcome: Result<SyncOutcome, SyncError>) -> Result<ExitCode> {
    match outcome {
        Ok(SyncOutcome::UpToDate) => {
            println!("Media type list is up to date");
            Ok(ExitCode::SUCCESS)
        }
        Ok(SyncOutcome::Updated) => {
            println!("Media type list was out of date and has been updated");
            Ok(ExitCode::SUCCESS)
        }
        Ok(SyncOutcome::Drifted) => {
            println!("Media type list is out of date");
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ SyncError::Stale { .. }) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Media type check failed"),
    }
}
