use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Runs the command line built for each adjustment step.
pub trait CommandRunner {
    /// Runs `command_line` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be started or exited with a
    /// non-zero status.
    fn run(&mut self, command_line: &str) -> Result<()>;
}

/// Runs command lines through `<shell> -c`.
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command_line: &str) -> Result<()> {
        let mut command = Command::new(&self.shell);
        command.args(["-c", command_line]);

        execute_command(command)
    }
}

/// Writes each command line to `output` instead of running it.
pub struct DryRunRunner<W: Write> {
    output: W,
}

impl<W: Write> DryRunRunner<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> CommandRunner for DryRunRunner<W> {
    fn run(&mut self, command_line: &str) -> Result<()> {
        // Raw mode turns off newline translation, so return the carriage too.
        write!(self.output, "\r\n{command_line}\r\n").map_err(Error::Stdio)?;
        self.output.flush().map_err(Error::Stdio)
    }
}

/// Executes a command, waiting for it to finish.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command(mut command: Command) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!("Executing {:?}", command);

    let subprocess_exit_success = command.spawn()?.wait()?.success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}
