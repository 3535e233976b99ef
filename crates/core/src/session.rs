//! The interactive adjustment loop.
//!
//! Input is consumed one byte at a time. Cursor keys arrive as `ESC [ <code>`;
//! the escape byte and the byte after it are dropped and the final code byte
//! is then read as a key of its own. Every key other than quit re-runs the
//! command, whether or not the value changed.

use std::io::{Read, Write};

use log::{debug, info, warn};

use crate::adjustment::AdjustmentSpec;
use crate::error::{Error, Result};
use crate::execution::CommandRunner;
use crate::interpolation::build_command_line;

pub const QUIT_KEY: u8 = b'q';
/// Ctrl-C. Raw mode stops the terminal from turning it into a signal.
pub const INTERRUPT_KEY: u8 = 0x03;
pub const ESCAPE_KEY: u8 = 0x1b;

/// Meaning of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    Interrupt,
    Escape,
    Up,
    Down,
    Right,
    Left,
    Other(u8),
}

impl From<u8> for Key {
    fn from(byte: u8) -> Self {
        match byte {
            QUIT_KEY => Key::Quit,
            INTERRUPT_KEY => Key::Interrupt,
            ESCAPE_KEY => Key::Escape,
            // Final bytes of the ANSI cursor key sequences
            b'A' => Key::Up,
            b'B' => Key::Down,
            b'C' => Key::Right,
            b'D' => Key::Left,
            other => Key::Other(other),
        }
    }
}

/// Current state of one adjustment while the loop runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentSession {
    spec: AdjustmentSpec,
    value: f64,
}

impl AdjustmentSession {
    /// Starts a session at the adjustment's initial value.
    pub fn new(spec: AdjustmentSpec) -> Self {
        let initial = spec.initial;
        Self::with_value(spec, initial)
    }

    /// Starts a session at `value`. The value is not clamped until the first
    /// adjustment.
    pub fn with_value(spec: AdjustmentSpec, value: f64) -> Self {
        if !spec.is_well_formed() {
            warn!("Adjustment `{}` has an unusable range or step", spec);
        }

        Self { spec, value }
    }

    pub fn spec(&self) -> &AdjustmentSpec {
        &self.spec
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn decrease(&mut self) {
        self.value = (self.value - self.spec.step)
            .max(self.spec.low)
            .min(self.spec.high);
    }

    pub fn increase(&mut self) {
        self.value = (self.value + self.spec.step)
            .min(self.spec.high)
            .max(self.spec.low);
    }

    /// Applies a key to the value. Only left and right change it.
    pub fn apply(&mut self, key: Key) {
        match key {
            Key::Left => self.decrease(),
            Key::Right => self.increase(),
            _ => {}
        }
    }

    /// The shell command line for the current value.
    pub fn command_line(&self) -> String {
        build_command_line(&self.spec.command_template, self.value)
    }

    /// The status shown to the user, redrawn in place on every refresh.
    pub fn status_line(&self) -> String {
        format!("{} : {:.6}\r", self.spec.name, self.value)
    }
}

fn refresh<W, C>(session: &AdjustmentSession, display: &mut W, runner: &mut C) -> Result<()>
where
    W: Write,
    C: CommandRunner + ?Sized,
{
    let command_line = session.command_line();

    display
        .write_all(session.status_line().as_bytes())
        .map_err(Error::Stdio)?;
    display.flush().map_err(Error::Stdio)?;

    if let Err(e) = runner.run(&command_line) {
        debug!("`{command_line}` did not succeed: {e}");
    }

    Ok(())
}

/// Runs the adjustment loop until the quit key or the end of `input`.
///
/// The command is run once for the starting value before any input is read,
/// then once for every key except quit and escape sequence prefixes.
///
/// # Returns
///
/// The value when the loop stopped.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `display` fails. Failures of
/// the command itself are logged and otherwise ignored.
pub fn run_loop<R, W, C>(
    session: &mut AdjustmentSession,
    input: R,
    display: &mut W,
    runner: &mut C,
) -> Result<f64>
where
    R: Read,
    W: Write,
    C: CommandRunner + ?Sized,
{
    refresh(session, display, runner)?;

    let mut bytes = input.bytes();

    while let Some(byte) = bytes.next() {
        let key = Key::from(byte.map_err(Error::Stdio)?);

        match key {
            Key::Quit | Key::Interrupt => {
                info!("Stopped `{}` at {}", session.spec().name, session.value());
                return Ok(session.value());
            }
            Key::Escape => {
                // Assumed to be the `[` of a CSI sequence, it is not checked.
                if let Some(prefix) = bytes.next() {
                    let prefix = prefix.map_err(Error::Stdio)?;
                    debug!("Skipped escape sequence prefix {prefix:#04x}");
                }
            }
            key => {
                session.apply(key);
                refresh(session, display, runner)?;
            }
        }
    }

    info!("Input ended for `{}` at {}", session.spec().name, session.value());
    Ok(session.value())
}
