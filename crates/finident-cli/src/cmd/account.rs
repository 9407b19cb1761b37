/// Implementation of `finident account`.
use finident_core::{AccountIdentifier, CountryCode};

use crate::error::CliError;
use crate::format::{FormatterConfig, Report};

/// Checks one IBAN or domestic account number.
///
/// Valid values are labelled with their shape (`iban` or `bban`).
pub fn check(raw: &str, country: Option<CountryCode>) -> Report {
    let (result, account) = AccountIdentifier::try_create(raw, country);
    Report {
        input: raw.to_owned(),
        kind: account
            .as_ref()
            .map_or("account", |a| a.account_type().as_str()),
        normalized: account.map(|a| a.normalized_value().to_owned()),
        result,
    }
}

/// Runs the `account` command over `values`.
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
