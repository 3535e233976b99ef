//! Substitution of the current value into a command template.
//!
//! The value handed to the command is rendered in "general" notation: six
//! significant digits with trailing zeros dropped, switching to an exponent
//! form for very large or very small magnitudes. Repeated steps such as
//! `0.1 + 0.1 + 0.1` therefore reach the command as `0.3`, not as the full
//! binary expansion.

use crate::adjustment::PLACEHOLDER;

/// Appended to every command line so the command's error output never lands
/// on the adjustment display.
pub const STDERR_SUFFIX: &str = " 2>/dev/null";

const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a value with six significant digits, trimming trailing zeros.
///
/// # Examples
///
/// ```
/// use adjust_core::interpolation::format_general;
///
/// assert_eq!(format_general(0.4), "0.4");
/// assert_eq!(format_general(20.0), "20");
/// assert_eq!(format_general(0.1 + 0.1 + 0.1), "0.3");
/// assert_eq!(format_general(1_000_000.0), "1e+06");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent has to come from the rounded representation, so 999999.5
    // is treated as 1e+06 rather than as a six digit integer.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Replaces the first placeholder in `template` with `value`.
///
/// Without a placeholder the template comes back unchanged. Any further `%`
/// characters after the first are left as they are.
pub fn substitute_value(template: &str, value: f64) -> String {
    match template.split_once(PLACEHOLDER) {
        Some((before, after)) => format!("{before}{}{after}", format_general(value)),
        None => template.to_string(),
    }
}

/// Builds the full shell command line for one run of an adjustment command.
pub fn build_command_line(template: &str, value: f64) -> String {
    let mut command_line = substitute_value(template, value);
    command_line.push_str(STDERR_SUFFIX);
    command_line
}
