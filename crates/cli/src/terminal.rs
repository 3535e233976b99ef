//! Terminal input mode for the adjustment loop.
//!
//! crossterm's raw mode does more than switch off line buffering and echo. It
//! also disables output post-processing, so a `\n` written by an adjustment
//! command is not turned into `\r\n` and its lines step right across the
//! terminal. Signal keys are off as well: Ctrl-C arrives as byte 3 and quits
//! the loop, while `Ctrl-Z` and `Ctrl-\` do nothing. Commands meant for
//! `adjust` are expected to be quiet on standard output.

use std::io::{stdin, stdout, IsTerminal, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, queue};
use log::debug;

use adjust_core::error::{Error, Result};

/// Keeps the terminal in raw mode, so keys arrive one byte at a time and are
/// not echoed. Dropping the guard clears the status line and restores the
/// terminal.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Switches the terminal to raw mode.
    ///
    /// Returns `None` without touching anything when standard input is not a
    /// terminal, e.g. when keys are piped in.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled.
    pub fn acquire() -> Result<Option<Self>> {
        if !stdin().is_terminal() {
            debug!("Standard input is not a terminal, leaving the input mode alone");
            return Ok(None);
        }

        enable_raw_mode().map_err(Error::Terminal)?;
        Ok(Some(Self { _private: () }))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = stdout();
        let _ = queue!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        );
        let _ = stdout.flush();
        let _ = disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_only_for_terminal_input() {
        let guard = TerminalGuard::acquire().unwrap();
        assert_eq!(guard.is_some(), stdin().is_terminal());
    }
}
