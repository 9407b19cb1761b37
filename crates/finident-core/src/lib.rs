#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod account;
pub mod card;
pub mod check_digits;
pub mod country;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod routing;
pub mod rules;
pub mod swift;
pub mod validation;

pub use account::{AccountIdentifier, MAX_BBAN_LENGTH, MIN_BBAN_LENGTH};
pub use card::{CardBrand, CardOptions, CreditCardNumber, MAX_CARD_LENGTH, MIN_CARD_LENGTH};
pub use check_digits::{
    aba_routing, iban_check_digits, iban_mod97, is_valid_federal_reserve_symbol, luhn,
    luhn_check_digit, mod97_10,
};
pub use country::{CountryCode, UnknownCountryCode, is_iso3166_alpha2};
pub use error::ConfigError;
pub use normalize::{AccountType, normalize, strip_separators};
pub use pipeline::{Pipeline, Validator};
pub use routing::{ROUTING_NUMBER_LENGTH, RoutingNumber};
pub use rules::{
    BbanRule, CharClass, CountryRules, IbanRule, MAX_IBAN_LENGTH, MIN_IBAN_LENGTH, RuleViolation,
    Segment,
};
pub use swift::{PRIMARY_OFFICE_BRANCH, SwiftCode, SwiftOptions};
pub use validation::{ErrorCode, ValidationError, ValidationResult};

/// Returns the crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
