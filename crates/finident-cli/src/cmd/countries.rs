/// Implementation of `finident countries`.
///
/// Lists every IBAN jurisdiction with its total length and BBAN pattern,
/// followed by the domestic-only jurisdictions with their length bounds.
use std::io::Write;

use finident_core::CountryRules;
use serde_json::json;

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `countries` command against the built-in registry.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(format: OutputFormat) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    write_rules(&mut out, CountryRules::standard(), format).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes one line per registered jurisdiction.
///
/// Human format: `DE  iban  22  8!n10!n` and `US  bban  4-17  digits`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_rules<W: Write>(
    writer: &mut W,
    rules: &CountryRules,
    format: OutputFormat,
) -> std::io::Result<()> {
    for country in rules.iban_countries() {
        let Some(rule) = rules.iban_rule(country) else {
            continue;
        };
        match format {
            OutputFormat::Human => writeln!(
                writer,
                "{country}  iban  {:<5}  {}",
                rule.length,
                rule.notation()
            )?,
            OutputFormat::Json => writeln!(
                writer,
                "{}",
                json!({
                    "country": country,
                    "scheme": "iban",
                    "length": rule.length,
                    "bban": rule.notation(),
                })
            )?,
        }
    }
    for country in rules.bban_countries() {
        let Some(rule) = rules.bban_rule(country) else {
            continue;
        };
        match format {
            OutputFormat::Human => writeln!(
                writer,
                "{country}  bban  {:<5}  {}",
                format!("{}-{}", rule.min_length, rule.max_length),
                rule.allowed.describe()
            )?,
            OutputFormat::Json => writeln!(
                writer,
                "{}",
                json!({
                    "country": country,
                    "scheme": "bban",
                    "min_length": rule.min_length,
                    "max_length": rule.max_length,
                    "allowed": rule.allowed.describe(),
                })
            )?,
        }
    }
    writer.flush()
}
