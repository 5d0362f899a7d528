//! bgg-ranks CLI
//!
//! Fetches catalog records for each collection file, ranks base games and
//! expansions, and writes a dated JSON snapshot per collection.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::{Level, LevelFilter};

use bgg_ranks_lib::{SettingSources, Settings, SettingsOverrides};

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let overrides = SettingsOverrides {
        base_url: cli.base_url,
        in_dir: cli.in_dir,
        out_dir: cli.out_dir,
    };

    match run(cli.command, &overrides, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, overrides: &SettingsOverrides, quiet: bool) -> Result<(), CliError> {
    match command {
        Commands::Run { only, dry_run } => {
            let (settings, _) = load_settings(overrides)?;
            commands::run::run_rank(&settings, only, dry_run, quiet)
        }
        Commands::List => commands::list::run_list(&load_settings(overrides)?.0),
        Commands::Hot { save, limit } => {
            let (settings, _) = load_settings(overrides)?;
            commands::hot::run_hot(&settings, save, limit, quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (settings, sources) = load_settings(overrides)?;
                commands::config::run_config_show(&settings, &sources);
                Ok(())
            }
            // Printed even when the settings file itself is broken.
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

fn load_settings(overrides: &SettingsOverrides) -> Result<(Settings, SettingSources), CliError> {
    let (settings, sources) = Settings::load(overrides)?;
    log::debug!("Settings: {settings:?}");
    Ok((settings, sources))
}

/// Route `log` output to stdout.
///
/// Normal mode prints info messages bare so they read as program output;
/// `--verbose` adds timestamps and debug messages from this workspace.
/// Without either flag `RUST_LOG` is honoured.
fn init_logging(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stdout);

    if verbose {
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("bgg_ranks", LevelFilter::Debug)
            .format_timestamp_millis();
    } else {
        builder
            .filter_level(if quiet {
                LevelFilter::Warn
            } else {
                LevelFilter::Info
            })
            .format(|buf, record| match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                level => writeln!(
                    buf,
                    "{}: {}",
                    level.as_str().to_lowercase(),
                    record.args()
                ),
            });
        if !quiet {
            if let Ok(filters) = std::env::var("RUST_LOG") {
                builder.parse_filters(&filters);
            }
        }
    }

    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_overrides() -> SettingsOverrides {
        SettingsOverrides {
            base_url: Some(String::new()),
            ..SettingsOverrides::default()
        }
    }

    #[test]
    fn config_path_does_not_load_settings() {
        let command = Commands::Config {
            action: ConfigAction::Path,
        };
        assert!(run(command, &invalid_overrides(), true).is_ok());
    }

    #[test]
    fn config_show_reports_invalid_settings() {
        let command = Commands::Config {
            action: ConfigAction::Show,
        };
        assert!(matches!(
            run(command, &invalid_overrides(), true),
            Err(CliError::Settings(_))
        ));
    }
}
