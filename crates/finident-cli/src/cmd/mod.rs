/// Subcommand implementations.
///
/// Every checking subcommand turns each input value into a
/// [`Report`](crate::format::Report) and hands it to [`check_all`], which
/// writes the reports, the summary, and derives the exit status.
pub mod account;
pub mod card;
pub mod countries;
pub mod routing;
pub mod swift;

use std::io::Write;

use tracing::info;

use crate::PathOrStdin;
use crate::cli::InputArgs;
use crate::error::CliError;
use crate::format::{FormatterConfig, Report, Tally, write_report, write_summary};
use crate::io::read_values;

/// Expands the positional values and `--input` into the list to check.
///
/// A positional `-` is replaced by the lines read from stdin.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) if an input source cannot be read.
pub fn collect_values(input: &InputArgs, max_size: u64) -> Result<Vec<String>, CliError> {
    if let Some(source) = &input.input {
        return read_values(source, max_size);
    }
    let mut values = Vec::with_capacity(input.values.len());
    for value in &input.values {
        if value == "-" {
            values.extend(read_values(&PathOrStdin::Stdin, max_size)?);
        } else {
            values.push(value.clone());
        }
    }
    Ok(values)
}

/// Checks every value with `check`, writing reports to `out` and the
/// summary to `err`.
///
/// # Errors
///
/// Returns [`CliError::InvalidIdentifiers`] if any value failed, or
/// [`CliError::IoError`] if writing fails.
pub fn check_all<O, E, F>(
    values: &[String],
    config: &FormatterConfig,
    out: &mut O,
    err: &mut E,
    check: F,
) -> Result<(), CliError>
where
    O: Write,
    E: Write,
    F: Fn(&str) -> Report,
{
    let mut tally = Tally::default();
    for value in values {
        let report = check(value);
        tally.record(&report);
        write_report(out, &report, config).map_err(|e| write_error("stdout", &e))?;
    }
    out.flush().map_err(|e| write_error("stdout", &e))?;
    info!(
        total = tally.total(),
        valid = tally.valid,
        invalid = tally.invalid,
        "values checked"
    );
    write_summary(err, tally, config).map_err(|e| write_error("stderr", &e))?;

    if tally.invalid > 0 {
        return Err(CliError::InvalidIdentifiers {
            invalid: tally.invalid,
            total: tally.total(),
        });
    }
    Ok(())
}

fn write_error(target: &str, e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: target.to_owned(),
        detail: e.to_string(),
    }
}
