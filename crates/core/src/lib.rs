//! Adjust Core Library
//!
//! This crate provides the core functionality for adjust, a tiny terminal tool
//! that nudges a numeric system setting (gamma, backlight brightness, volume)
//! up and down with the cursor keys, re-running a configured shell command
//! with the new value after every keystroke.
//!
//! # Key Features
//!
//! - **Adjustment Definitions**: Read named ranges and command templates from `~/.adjustments`
//! - **Value Substitution**: Render the current value into the command template
//! - **Adjustment Loop**: Byte-at-a-time key handling with clamped stepping
//! - **Command Execution**: Pluggable runners for the shell and for dry runs
//! - **Last Values**: Remember where each adjustment was left
//!
//! # Examples
//!
//! Running an adjustment against scripted input:
//!
//! ```
//! use adjust_core::execution::DryRunRunner;
//! use adjust_core::file_handling::find_in_reader;
//! use adjust_core::session::{run_loop, AdjustmentSession};
//! use std::io::{sink, Cursor};
//!
//! let config = "brightness 15 95 5 20\necho %\n";
//! let brightness = find_in_reader("brightness", Cursor::new(config))?.unwrap();
//!
//! let mut session = AdjustmentSession::new(brightness);
//! let mut runner = DryRunRunner::new(sink());
//! let value = run_loop(&mut session, &b"\x1b[C\x1b[Cq"[..], &mut sink(), &mut runner)?;
//!
//! assert_eq!(value, 30.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adjustment;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod interpolation;
pub mod session;
