/// Implementation of `finident swift`.
use finident_core::{CountryCode, SwiftCode, SwiftOptions};

use crate::error::CliError;
use crate::format::{FormatterConfig, Report};

/// Checks one SWIFT/BIC code.
pub fn check(raw: &str, country: Option<CountryCode>, options: &SwiftOptions) -> Report {
    let (result, code) = SwiftCode::try_create_with(raw, country, options);
    Report {
        input: raw.to_owned(),
        kind: "bic",
        normalized: code.map(|c| c.normalized_value().to_owned()),
        result,
    }
}

/// Runs the `swift` command over `values`.
///
/// # Errors
///
/// Returns [`CliError::InvalidIdentifiers`] if any value is invalid.
pub fn run(
    values: &[String],
    country: Option<CountryCode>,
    allow_test: bool,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let options = SwiftOptions {
        allow_test_codes: allow_test,
    };
    super::check_all(
        values,
        config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        |raw| check(raw, country, &options),
    )
}
