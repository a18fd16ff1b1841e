//! # Hog CLI Library
//!
//! Command-line front end for the Hog dice game: loads the layered
//! configuration, runs the strategy experiments and prints their results.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the requested actions.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["hog", "--run_experiments", "--seed", "42"];
//! let code = hog_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Flags
//!
//! - `-r`, `--run_experiments`: run the experiments enabled in the configuration
//! - `--seed N`: seed the dice
//! - `--samples N`: Monte Carlo samples per estimate
//! - `--json`: print the experiment report as JSON
//! - `--show-config`: print the resolved configuration with value sources

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::HogCli;
use commands::{handle_cfg_command, handle_experiments_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`], or [`exit_code::ERROR`] for argument,
/// configuration and simulation errors. Running with no flags does nothing
/// and succeeds.
///
/// # Example
///
/// ```
/// use std::io;
/// let mut out = Vec::new();
/// let code = hog_cli::run(vec!["hog", "--version"], &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("hog"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HogCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    let _ = writeln!(err, "\nFor full help, run: hog --help");
                    exit_code::ERROR
                }
            };
        }
    };

    match execute(&cli, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn execute(cli: &HogCli, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    if !cli.run_experiments && !cli.show_config {
        return Ok(());
    }

    let mut resolved = config::load_with_sources()?;
    resolved.apply_cli(cli.seed, cli.samples)?;

    if cli.show_config {
        handle_cfg_command(&resolved, out)?;
    }
    if cli.run_experiments {
        let seed = resolved.config.seed.unwrap_or_else(rand::random);
        handle_experiments_command(&resolved.config, seed, cli.json, out, err)?;
    }
    Ok(())
}
