use std::io::{stdin, stdout, Write};
use std::process::ExitCode;

use itertools::Itertools;
use log::{debug, warn};

use adjust_core::config::Config;
use adjust_core::error::{Error, Result};
use adjust_core::execution::{CommandRunner, DryRunRunner, ShellRunner};
use adjust_core::file_handling;
use adjust_core::session::{run_loop, AdjustmentSession};

use crate::cli_args::{Args, Invocation};
use crate::terminal::TerminalGuard;

mod cli_args;
mod terminal;

fn list_adjustments(config: &Config) -> Result<()> {
    let adjustments = file_handling::read_adjustments(&config.config_path)?;

    for name in adjustments.iter().map(|adjustment| &adjustment.name).unique() {
        println!("{name}");
    }

    Ok(())
}

/// Pick the starting value, honoring `--resume`
fn starting_value(args: &Args, config: &Config, name: &str, initial: f64) -> Result<f64> {
    if !args.resume {
        return Ok(initial);
    }

    let last_values = file_handling::get_last_values(&config.last_values_path)?;
    match last_values.get(name) {
        Some(last_value) => {
            debug!("Resuming `{name}` at {last_value}");
            Ok(*last_value)
        }
        None => {
            debug!("No last value stored for `{name}`, starting at {initial}");
            Ok(initial)
        }
    }
}

fn adjust(args: &Args, config: &Config, attribute: &str) -> Result<()> {
    // Released on every return below, including when nothing is found
    let _terminal_guard = TerminalGuard::acquire()?;

    let Some(adjustment) = file_handling::find_adjustment(attribute, &config.config_path)? else {
        debug!(
            "No adjustment named `{attribute}` in `{}`",
            config.config_path
        );
        return Ok(());
    };

    let start = starting_value(args, config, &adjustment.name, adjustment.initial)?;
    let mut session = AdjustmentSession::with_value(adjustment, start);

    let mut runner: Box<dyn CommandRunner> = if args.dry_run {
        Box::new(DryRunRunner::new(stdout()))
    } else {
        Box::new(ShellRunner::new(config.shell.as_str()))
    };

    let value = run_loop(&mut session, stdin().lock(), &mut stdout(), runner.as_mut())?;

    if args.save_value {
        // A failed save does not fail the session
        if let Err(e) = file_handling::store_last_value(&config.last_values_path, attribute, value) {
            warn!("Could not save the last value of `{attribute}`: {e}");
        }
    }

    Ok(())
}

fn execute(invocation: Invocation) -> Result<ExitCode> {
    match invocation {
        Invocation::Adjust(args, attribute) => {
            let config = Config::resolve(&args.config_path, &args.last_values_path);
            debug!("Config path: `{}`", config.config_path);
            adjust(&args, &config, &attribute)?;
            Ok(ExitCode::SUCCESS)
        }
        Invocation::List(args) => {
            let config = Config::resolve(&args.config_path, &args.last_values_path);
            debug!("Config path: `{}`", config.config_path);
            list_adjustments(&config)?;
            Ok(ExitCode::SUCCESS)
        }
        Invocation::Usage => {
            let mut stdout = stdout();
            stdout
                .write_all(Args::usage().as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(Error::Stdio)?;
            Ok(ExitCode::FAILURE)
        }
        Invocation::Informational(e) => {
            e.print().map_err(Error::Stdio)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute(Args::invocation_from(std::env::args_os())) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
