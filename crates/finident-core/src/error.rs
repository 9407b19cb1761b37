/// Errors for API misuse detected at construction time.
///
/// These are never produced by end-user input: a malformed candidate string
/// is reported through [`ValidationResult`](crate::ValidationResult).
/// [`ConfigError`] signals that the *calling code* supplied an out-of-range
/// option or an inconsistent country rule.
use thiserror::Error;

use crate::country::CountryCode;

/// Invalid configuration supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A card length bound lies outside 13..=19 or `min > max`.
    #[error("card length bounds {min}..={max} must satisfy 13 <= min <= max <= 19")]
    CardLengthOutOfRange {
        /// Requested minimum length.
        min: usize,
        /// Requested maximum length.
        max: usize,
    },

    /// An IBAN rule declares a total length outside 15..=34.
    #[error("IBAN rule for {country}: length {length} is outside 15..=34")]
    IbanLengthOutOfRange {
        /// Country of the offending rule.
        country: CountryCode,
        /// Declared length.
        length: usize,
    },

    /// An IBAN rule's BBAN segments do not add up to `length - 4`.
    #[error("IBAN rule for {country}: pattern {pattern} does not fill length {length}")]
    InconsistentBbanPattern {
        /// Country of the offending rule.
        country: CountryCode,
        /// Declared total length.
        length: usize,
        /// Pattern in registry notation.
        pattern: String,
    },

    /// A BBAN rule has `min == 0` or `min > max`.
    #[error("BBAN rule for {country}: bounds {min}..={max} are invalid")]
    InvalidBbanBounds {
        /// Country of the offending rule.
        country: CountryCode,
        /// Declared minimum.
        min: u8,
        /// Declared maximum.
        max: u8,
    },

    /// The same country appears twice across the rule entries.
    #[error("country {country} has more than one rule")]
    DuplicateCountry {
        /// The repeated country.
        country: CountryCode,
    },

    /// [`CountryCode::All`] cannot carry a rule.
    #[error("the ALL key selects permissive validation and cannot carry a rule")]
    ReservedCountry,
}
