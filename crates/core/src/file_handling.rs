//! Reading adjustment definitions and storing last values.
//!
//! The adjustments file holds two lines per adjustment:
//!
//! ```text
//! gamma 0.1 0.9 0.1 0.5
//! xgamma -gamma %
//! ```
//!
//! The first line is `<name> <low> <high> <step> <initial>`, the second the
//! command template. Records that do not parse are skipped without complaint
//! so one broken entry never hides the others.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Lines};
use std::iter::Enumerate;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::adjustment::AdjustmentSpec;
use crate::error::{Error, RecordError, Result};

/// Last value of each adjustment, keyed by adjustment name.
pub type LastValues = IndexMap<String, f64>;

/// Characters a command template may contain. The template ends at the first
/// character outside this set.
fn is_template_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '%' | '/' | ' ' | '_' | '>' | '<')
}

struct Header {
    name: String,
    low: f64,
    high: f64,
    step: f64,
    initial: f64,
}

impl Header {
    fn into_spec(self, command_template: String) -> AdjustmentSpec {
        AdjustmentSpec {
            name: self.name,
            low: self.low,
            high: self.high,
            step: self.step,
            initial: self.initial,
            command_template,
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> std::result::Result<f64, RecordError> {
    value.parse().map_err(|_| RecordError::NotANumber {
        field,
        value: value.to_string(),
    })
}

fn parse_header(line: &str) -> std::result::Result<Header, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let [name, low, high, step, initial] = fields[..] else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    Ok(Header {
        name: name.to_string(),
        low: parse_number("low", low)?,
        high: parse_number("high", high)?,
        step: parse_number("step", step)?,
        initial: parse_number("initial", initial)?,
    })
}

fn parse_command_template(name: &str, line: &str) -> std::result::Result<String, RecordError> {
    let line = line.trim_start();
    let end = line.find(|c: char| !is_template_char(c)).unwrap_or(line.len());
    let (template, rest) = line.split_at(end);

    if template.is_empty() {
        return Err(RecordError::EmptyCommand {
            name: name.to_string(),
            line: line.to_string(),
        });
    }

    if !rest.is_empty() {
        debug!("Ignoring `{rest}` after the command template of `{name}`");
    }

    Ok(template.to_string())
}

/// Iterator over the well-formed records of an adjustments file.
///
/// Only I/O failures are yielded as errors; malformed records are logged at
/// debug level and skipped.
pub struct AdjustmentRecords<R> {
    lines: Enumerate<Lines<R>>,
}

/// Reads adjustment records from `reader` in file order.
pub fn records<R: BufRead>(reader: R) -> AdjustmentRecords<R> {
    AdjustmentRecords {
        lines: reader.lines().enumerate(),
    }
}

impl<R: BufRead> AdjustmentRecords<R> {
    fn next_non_blank(&mut self) -> Option<io::Result<(usize, String)>> {
        for (index, line) in self.lines.by_ref() {
            match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok((index + 1, line))),
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

impl<R: BufRead> Iterator for AdjustmentRecords<R> {
    type Item = io::Result<AdjustmentSpec>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (line_number, line) = match self.next_non_blank()? {
                Ok(numbered_line) => numbered_line,
                Err(e) => return Some(Err(e)),
            };

            let header = match parse_header(&line) {
                Ok(header) => header,
                Err(e) => {
                    debug!("Skipping line {line_number}: {e}");
                    continue;
                }
            };

            let (template_line_number, template_line) = match self.next_non_blank() {
                Some(Ok(numbered_line)) => numbered_line,
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    debug!(
                        "Skipping line {line_number}: {}",
                        RecordError::MissingCommand(header.name)
                    );
                    return None;
                }
            };

            match parse_command_template(&header.name, &template_line) {
                Ok(template) => return Some(Ok(header.into_spec(template))),
                Err(e) => {
                    debug!("Skipping lines {line_number}-{template_line_number}: {e}");
                }
            }
        }
    }
}

/// Finds the first record named `name` in `reader`, reading no further.
///
/// # Errors
///
/// Returns an error only if reading fails.
pub fn find_in_reader<R: BufRead>(name: &str, reader: R) -> io::Result<Option<AdjustmentSpec>> {
    for record in records(reader) {
        let adjustment = record?;
        if adjustment.name == name {
            return Ok(Some(adjustment));
        }
    }

    Ok(None)
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn get_config_reader(config_path: &str) -> Result<Option<BufReader<File>>> {
    if !Path::exists(Path::new(config_path)) {
        debug!("No adjustments file at `{config_path}`");
        return Ok(None);
    }

    Ok(Some(BufReader::new(get_reader("adjustments", config_path)?)))
}

/// Looks up the adjustment called `name` in the adjustments file.
///
/// A missing file is treated like a file without the adjustment.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
///
/// # Examples
///
/// ```no_run
/// use adjust_core::file_handling::find_adjustment;
///
/// if let Some(gamma) = find_adjustment("gamma", "/home/me/.adjustments")? {
///     println!("{gamma}");
/// }
/// # Ok::<(), adjust_core::error::Error>(())
/// ```
pub fn find_adjustment(name: &str, config_path: &str) -> Result<Option<AdjustmentSpec>> {
    let Some(reader) = get_config_reader(config_path)? else {
        return Ok(None);
    };

    find_in_reader(name, reader)
        .map_err(|e| Error::io_error("adjustments".to_string(), config_path.to_string(), e))
}

/// Reads every well-formed adjustment from the adjustments file, in order.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_adjustments(config_path: &str) -> Result<Vec<AdjustmentSpec>> {
    let Some(reader) = get_config_reader(config_path)? else {
        return Ok(Vec::new());
    };

    records(reader)
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| Error::io_error("adjustments".to_string(), config_path.to_string(), e))
}

/// Reads the stored last values. A missing or empty file gives no values.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not a YAML
/// map of names to numbers.
pub fn get_last_values(last_values_path: &str) -> Result<LastValues> {
    if !Path::exists(Path::new(last_values_path)) {
        return Ok(LastValues::new());
    }

    let content = fs::read_to_string(last_values_path).map_err(|e| {
        Error::io_error("last values".to_string(), last_values_path.to_string(), e)
    })?;

    if content.trim().is_empty() {
        return Ok(LastValues::new());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "last values".to_string(),
            last_values_path.to_string(),
            e,
        )
    })
}

/// Writes the last values, creating the parent directory when needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or
/// serialization fails.
pub fn write_last_values(path: &str, last_values: &LastValues) -> Result<()> {
    let io_error = |e| Error::io_error("last values".to_string(), path.to_string(), e);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let f = File::create(path).map_err(io_error)?;

    serde_yaml::to_writer(f, last_values).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "last values".to_string(),
            path.to_string(),
            e,
        )
    })
}

/// Records `value` as the last value of `name`, keeping the other entries.
///
/// # Errors
///
/// Returns an error if the existing values cannot be read or the new ones
/// cannot be written.
pub fn store_last_value(path: &str, name: &str, value: f64) -> Result<()> {
    let mut last_values = get_last_values(path)?;
    last_values.insert(name.to_string(), value);
    write_last_values(path, &last_values)
}
