/// Implementation of `finident card`.
use finident_core::{CardOptions, CreditCardNumber};

use crate::error::CliError;
use crate::format::{FormatterConfig, Report};

/// Checks one card number; valid numbers are labelled with their brand.
pub fn check(raw: &str, options: &CardOptions) -> Report {
    let (result, card) = CreditCardNumber::try_create_with(raw, None, options);
    Report {
        input: raw.to_owned(),
        kind: card.as_ref().map_or("card", |c| c.brand().as_str()),
        normalized: card.map(|c| c.digits().to_owned()),
        result,
    }
}

/// Runs the `card` command over `values`.
///
/// # Errors
///
/// Returns [`CliError::InvalidOption`] if the length bounds are out of
/// range, or [`CliError::InvalidIdentifiers`] if any value is invalid.
pub fn run(
    values: &[String],
    min_length: usize,
    max_length: usize,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let options = CardOptions::new(min_length, max_length)?;
    super::check_all(
        values,
        config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        |raw| check(raw, &options),
    )
}
