/// Implementation of `finident routing`.
use finident_core::{CountryCode, RoutingNumber};

use crate::error::CliError;
use crate::format::{FormatterConfig, Report};

/// Checks one ABA routing number.
pub fn check(raw: &str, country: Option<CountryCode>) -> Report {
    let (result, routing) = RoutingNumber::try_create(raw, country);
    Report {
        input: raw.to_owned(),
        kind: "routing",
        normalized: routing.map(|r| r.digits().to_owned()),
        result,
    }
}

/// Runs the `routing` command over `values`.
///
/// # Errors
///
/// Returns [`CliError::InvalidIdentifiers`] if any value is invalid.
pub fn run(
    values: &[String],
    country: Option<CountryCode>,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    super::check_all(
        values,
        config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        |raw| check(raw, country),
    )
}
