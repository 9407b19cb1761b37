/// Report formatting: human-readable and JSON (NDJSON) modes.
///
/// One [`Report`] is written per checked value, to stdout:
///
/// - **Human mode** (default): `✔ <kind> <normalized>` for a valid value;
///   `✘ <input>` followed by one indented line per error otherwise. Colors
///   are disabled when `--no-color` is set, the `NO_COLOR` environment
///   variable is present (per <https://no-color.org>), or stdout is not a TTY.
/// - **JSON mode**: each report is a single-line JSON object.
///
/// The summary goes to stderr and is suppressed by `--quiet`.
use std::io::{IsTerminal as _, Write};

use finident_core::ValidationResult;
use serde_json::json;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

const MARK_VALID: &str = "✔";
const MARK_INVALID: &str = "✘";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the report formatter, derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct FormatterConfig {
    /// Output format of the per-value reports and the summary.
    pub format: OutputFormat,
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress the summary.
    pub quiet: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    ///
    /// Color detection also checks the `NO_COLOR` env var and the stdout
    /// TTY state.
    pub fn from_flags(format: OutputFormat, no_color_flag: bool, quiet: bool) -> Self {
        Self {
            format,
            colors: colors_enabled(no_color_flag),
            quiet,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Outcome of checking one input value.
#[derive(Debug, Clone)]
pub struct Report {
    /// The value as read from the command line or input file.
    pub input: String,
    /// Short label of the identifier kind, e.g. `"iban"` or `"visa"`.
    pub kind: &'static str,
    /// Canonical form; `Some` iff the value is valid.
    pub normalized: Option<String>,
    /// Findings of the validation pipeline.
    pub result: ValidationResult,
}

impl Report {
    /// Returns `true` if the value passed validation.
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}

/// Running totals for the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Values that passed.
    pub valid: usize,
    /// Values that failed.
    pub invalid: usize,
}

impl Tally {
    /// Counts `report`.
    pub fn record(&mut self, report: &Report) {
        if report.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }

    /// Total number of values recorded.
    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

// ---------------------------------------------------------------------------
// Human-mode formatting
// ---------------------------------------------------------------------------

/// Writes `report` in human-readable form.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report_human<W: Write>(
    writer: &mut W,
    report: &Report,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match (&report.normalized, config.colors) {
        (Some(normalized), true) => writeln!(
            writer,
            "{ANSI_GREEN}{MARK_VALID}{ANSI_RESET} {} {normalized}",
            report.kind
        ),
        (Some(normalized), false) => {
            writeln!(writer, "{MARK_VALID} {} {normalized}", report.kind)
        }
        (None, colors) => {
            if colors {
                writeln!(writer, "{ANSI_RED}{MARK_INVALID}{ANSI_RESET} {}", report.input)?;
            } else {
                writeln!(writer, "{MARK_INVALID} {}", report.input)?;
            }
            for error in report.result.errors() {
                writeln!(writer, "    {error}")?;
            }
            Ok(())
        }
    }
}

/// Writes the human summary line: `3 values checked: 2 valid, 1 invalid`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    tally: Tally,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{} {} checked: {} valid, {} invalid",
        tally.total(),
        pluralize(tally.total(), "value", "values"),
        tally.valid,
        tally.invalid,
    )
}

// ---------------------------------------------------------------------------
// JSON-mode formatting (NDJSON)
// ---------------------------------------------------------------------------

/// Writes `report` as one NDJSON line:
///
/// ```json
/// {"input":"DE89 3704 ...","kind":"iban","valid":true,"normalized":"DE89...","errors":[]}
/// ```
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report_json<W: Write>(writer: &mut W, report: &Report) -> std::io::Result<()> {
    let line = json!({
        "input": report.input,
        "kind": report.kind,
        "valid": report.is_valid(),
        "normalized": report.normalized,
        "errors": report.result,
    });
    writeln!(writer, "{line}")
}

/// Writes the JSON summary: `{"summary":{"total":3,"valid":2,"invalid":1}}`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    tally: Tally,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let line = json!({
        "summary": {
            "total": tally.total(),
            "valid": tally.valid,
            "invalid": tally.invalid,
        }
    });
    writeln!(writer, "{line}")
}

// ---------------------------------------------------------------------------
// Dispatch by format
// ---------------------------------------------------------------------------

/// Writes `report` in the configured format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.format {
        OutputFormat::Human => write_report_human(writer, report, config),
        OutputFormat::Json => write_report_json(writer, report),
    }
}

/// Writes the summary in the configured format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    tally: Tally,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.format {
        OutputFormat::Human => write_summary_human(writer, tally, config),
        OutputFormat::Json => write_summary_json(writer, tally, config),
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use finident_core::{ErrorCode, ValidationResult};

    use super::*;

    fn config(format: OutputFormat, colors: bool, quiet: bool) -> FormatterConfig {
        FormatterConfig {
            format,
            colors,
            quiet,
        }
    }

    fn valid_report() -> Report {
        Report {
            input: "de89 3704 0044 0532 0130 00".to_owned(),
            kind: "iban",
            normalized: Some("DE89370400440532013000".to_owned()),
            result: ValidationResult::ok(),
        }
    }

    fn invalid_report() -> Report {
        Report {
            input: "021000022".to_owned(),
            kind: "routing",
            normalized: None,
            result: ValidationResult::single(
                ErrorCode::InvalidChecksum,
                "check_digit",
                "checksum failed",
            ),
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec");
        String::from_utf8(buf).expect("UTF-8 output")
    }

    #[test]
    fn human_valid_line() {
        let cfg = config(OutputFormat::Human, false, false);
        let out = render(|w| write_report(w, &valid_report(), &cfg));
        assert_eq!(out, "✔ iban DE89370400440532013000\n");
    }

    #[test]
    fn human_invalid_lists_each_error() {
        let cfg = config(OutputFormat::Human, false, false);
        let out = render(|w| write_report(w, &invalid_report(), &cfg));
        assert_eq!(
            out,
            "✘ 021000022\n    [InvalidChecksum] check_digit: checksum failed\n"
        );
    }

    #[test]
    fn human_colors_wrap_the_mark_only() {
        let cfg = config(OutputFormat::Human, true, false);
        let out = render(|w| write_report(w, &valid_report(), &cfg));
        assert!(out.starts_with(ANSI_GREEN));
        assert!(out.contains(&format!("{ANSI_RESET} iban ")));
        let out = render(|w| write_report(w, &invalid_report(), &cfg));
        assert!(out.starts_with(ANSI_RED));
    }

    #[test]
    fn json_report_fields() {
        let cfg = config(OutputFormat::Json, false, false);
        let out = render(|w| write_report(w, &invalid_report(), &cfg));
        assert_eq!(out.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(value["input"], "021000022");
        assert_eq!(value["valid"], false);
        assert!(value["normalized"].is_null());
        assert_eq!(value["errors"][0]["code"], "InvalidChecksum");
        assert_eq!(value["errors"][0]["field_path"], "check_digit");
    }

    #[test]
    fn json_valid_report_has_empty_errors() {
        let cfg = config(OutputFormat::Json, false, false);
        let out = render(|w| write_report(w, &valid_report(), &cfg));
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(value["valid"], true);
        assert_eq!(value["normalized"], "DE89370400440532013000");
        assert_eq!(value["errors"], serde_json::json!([]));
    }

    #[test]
    fn summary_human_and_json() {
        let tally = Tally {
            valid: 2,
            invalid: 1,
        };
        let human = render(|w| write_summary(w, tally, &config(OutputFormat::Human, false, false)));
        assert_eq!(human, "3 values checked: 2 valid, 1 invalid\n");
        let json = render(|w| write_summary(w, tally, &config(OutputFormat::Json, false, false)));
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["summary"]["total"], 3);
        assert_eq!(value["summary"]["invalid"], 1);
    }

    #[test]
    fn summary_singular() {
        let tally = Tally {
            valid: 1,
            invalid: 0,
        };
        let human = render(|w| write_summary(w, tally, &config(OutputFormat::Human, false, false)));
        assert_eq!(human, "1 value checked: 1 valid, 0 invalid\n");
    }

    #[test]
    fn quiet_suppresses_summary() {
        let cfg = config(OutputFormat::Human, false, true);
        let out = render(|w| write_summary(w, Tally::default(), &cfg));
        assert!(out.is_empty());
    }

    #[test]
    fn tally_records() {
        let mut tally = Tally::default();
        tally.record(&valid_report());
        tally.record(&invalid_report());
        tally.record(&invalid_report());
        assert_eq!(tally.valid, 1);
        assert_eq!(tally.invalid, 2);
        assert_eq!(tally.total(), 3);
    }
}
