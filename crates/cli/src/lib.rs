//! Adjust CLI Library
//!
//! This crate provides the command-line interface for adjust: argument
//! handling, terminal input mode, and wiring the adjustments file, the
//! adjustment loop and the command runner together.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and usage handling
//! - [`terminal`]: Raw mode guard for the adjustment loop
//!
//! # Examples
//!
//! ```bash
//! # Adjust the gamma defined in ~/.adjustments
//! adjust gamma
//!
//! # Remember where brightness was left, and pick up from there next time
//! adjust --save-value brightness
//! adjust --resume --save-value brightness
//!
//! # See what would be run, without running it
//! adjust --dry-run gamma
//!
//! # List the available adjustments
//! adjust --list
//! ```

pub mod cli_args;
pub mod terminal;
