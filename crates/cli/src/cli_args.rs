//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and decides what a given command line asks for.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

const KEYS_AND_CONFIG: &str = "\
Keys:
    left / right cursor keys    decrement / increment the value
    q                           quit

After every key the command of the adjustment is run with the first `%`
replaced by the current value. Its error output is discarded.

Adjustments file (default ~/.adjustments), two lines per adjustment:

    <name> <low> <high> <step> <initial>
    <command, may contain %>

Example:

    gamma 0.1 0.9 0.1 0.5
    xgamma -gamma %
    brightness 15 95 5 20
    echo % > /sys/class/backlight/nvidia_0/brightness

Commands may only contain letters, digits, spaces and the characters - % / _ < >";

/// Command-line arguments for the adjust CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use adjust_cli::cli_args::Args;
///
/// let args = Args::parse_from(["adjust", "gamma"]);
/// assert_eq!(args.attribute.as_deref(), Some("gamma"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "adjust",
    version,
    about = "A tiny utility for adjusting attributes in the terminal.",
    long_about = "A tiny utility for adjusting attributes in the terminal.\n\n\
        Permits easy dynamic adjustment of system parameters such as brightness or gamma.",
    after_long_help = KEYS_AND_CONFIG
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Name of the adjustment to run, as written in the adjustments file.
    pub attribute: Option<String>,

    /// Path to the adjustments file.
    ///
    /// If not provided, defaults to `~/.adjustments`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Path to the file that stores the last value of each adjustment.
    ///
    /// If not provided, defaults to `~/.adjust/last_values.yml`.
    #[arg(long, short = 'l')]
    pub last_values_path: Option<String>,

    /// Print each command instead of running it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Start from the last stored value instead of the initial value.
    #[arg(long, short = 'r', action)]
    pub resume: bool,

    /// Store the final value as the last value of the adjustment.
    ///
    /// A value that cannot be stored is logged and otherwise ignored.
    #[arg(long, short = 's', action)]
    pub save_value: bool,

    /// List the names of the adjustments in the adjustments file.
    #[arg(long, action, conflicts_with = "attribute")]
    pub list: bool,
}

/// What a command line asks the tool to do.
#[derive(Debug)]
pub enum Invocation {
    /// Run the adjustment loop for the named attribute.
    Adjust(Args, String),
    /// List the available adjustments.
    List(Args),
    /// Print the full usage to standard output and fail.
    Usage,
    /// `--help` or `--version`, already rendered by clap.
    Informational(clap::Error),
}

impl Args {
    /// Classifies a command line.
    ///
    /// Anything other than exactly one attribute (or `--list`) is a usage
    /// error, including arguments clap itself rejects.
    pub fn invocation_from<I, T>(arguments: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = match Self::try_parse_from(arguments) {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                return Invocation::Informational(e);
            }
            Err(_) => return Invocation::Usage,
        };

        if args.list {
            return Invocation::List(args);
        }

        match args.attribute.clone() {
            Some(attribute) => Invocation::Adjust(args, attribute),
            None => Invocation::Usage,
        }
    }

    /// The full help text printed for usage errors.
    pub fn usage() -> String {
        Self::command().render_long_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["adjust"]);

        assert!(args.attribute.is_none());
        assert!(args.config_path.is_none());
        assert!(args.last_values_path.is_none());
        assert!(!args.dry_run);
        assert!(!args.resume);
        assert!(!args.save_value);
        assert!(!args.list);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "adjust",
            "-c",
            "/custom/adjustments",
            "-l",
            "/custom/last.yml",
            "-d",
            "-r",
            "-s",
            "gamma",
        ]);

        assert_eq!(args.attribute, Some("gamma".to_string()));
        assert_eq!(args.config_path, Some("/custom/adjustments".to_string()));
        assert_eq!(args.last_values_path, Some("/custom/last.yml".to_string()));
        assert!(args.dry_run);
        assert!(args.resume);
        assert!(args.save_value);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "adjust",
            "--config-path",
            "/custom/adjustments",
            "--last-values-path",
            "/custom/last.yml",
            "--dry-run",
            "--resume",
            "--save-value",
            "brightness",
        ]);

        assert_eq!(args.attribute, Some("brightness".to_string()));
        assert_eq!(args.config_path, Some("/custom/adjustments".to_string()));
        assert_eq!(args.last_values_path, Some("/custom/last.yml".to_string()));
        assert!(args.dry_run);
        assert!(args.resume);
        assert!(args.save_value);
    }

    #[test]
    fn test_args_list_conflicts_with_attribute() {
        let result = Args::try_parse_from(["adjust", "--list", "gamma"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_mentions_keys_and_config_format() {
        let usage = Args::usage();
        assert!(usage.contains("Usage: adjust"));
        assert!(usage.contains("q                           quit"));
        assert!(usage.contains("xgamma -gamma %"));
        assert!(usage.contains("--config-path"));
    }
}
