/// Payment card numbers (PAN).
///
/// Cards carry no jurisdiction. The pipeline checks digits only, the length
/// bounds of [`CardOptions`], the repeated-digit business rule and the Luhn
/// checksum; a repeated-digit number that also fails Luhn reports both.
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::check_digits::luhn;
use crate::country::CountryCode;
use crate::error::ConfigError;
use crate::normalize::{group, group_by, strip_separators};
use crate::pipeline::{Pipeline, Validator};
use crate::validation::{ErrorCode, ValidationResult};

/// Shortest PAN allowed by ISO/IEC 7812.
pub const MIN_CARD_LENGTH: usize = 13;
/// Longest PAN allowed by ISO/IEC 7812.
pub const MAX_CARD_LENGTH: usize = 19;

/// Length bounds for [`CreditCardNumber::try_create_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    min_length: usize,
    max_length: usize,
}

impl CardOptions {
    /// Restricts accepted card lengths to `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CardLengthOutOfRange`] unless
    /// `13 <= min <= max <= 19`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min < MIN_CARD_LENGTH || max > MAX_CARD_LENGTH || min > max {
            return Err(ConfigError::CardLengthOutOfRange { min, max });
        }
        Ok(Self {
            min_length: min,
            max_length: max,
        })
    }

    /// Minimum accepted length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum accepted length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_CARD_LENGTH,
            max_length: MAX_CARD_LENGTH,
        }
    }
}

/// Card network inferred from the issuer identification number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    /// `4`
    Visa,
    /// `51-55`, `2221-2720`
    Mastercard,
    /// `34`, `37`
    AmericanExpress,
    /// `6011`, `644-649`, `65`
    Discover,
    /// `3528-3589`
    Jcb,
    /// `300-305`, `309`, `36`, `38-39`
    DinersClub,
    /// `62`
    UnionPay,
    /// `50`, `56-58`, `6304`, `67`
    Maestro,
    /// No known prefix.
    Unknown,
}

impl CardBrand {
    /// Detects the brand from the leading digits of `digits`. The first
    /// match wins in declaration order of the arms below.
    pub fn detect(digits: &str) -> Self {
        let prefix = |n: usize| -> u32 {
            digits
                .get(..n)
                .and_then(|p| p.parse().ok())
                .unwrap_or(0)
        };
        match (prefix(1), prefix(2), prefix(3), prefix(4)) {
            (_, 34 | 37, ..) => Self::AmericanExpress,
            (_, _, 300..=305 | 309, _) | (_, 36 | 38 | 39, ..) => Self::DinersClub,
            (.., 3528..=3589) => Self::Jcb,
            (.., 6011) | (_, _, 644..=649, _) | (_, 65, ..) => Self::Discover,
            (_, 62, ..) => Self::UnionPay,
            (_, 51..=55, ..) | (.., 2221..=2720) => Self::Mastercard,
            (_, 50 | 56..=58 | 67, ..) | (.., 6304) => Self::Maestro,
            (4, ..) => Self::Visa,
            _ => Self::Unknown,
        }
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::UnionPay => "UnionPay",
            Self::Maestro => "Maestro",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) struct CardCandidate {
    digits: String,
    options: CardOptions,
}

impl CardCandidate {
    fn is_numeric(&self) -> bool {
        self.digits.bytes().all(|b| b.is_ascii_digit())
    }
}

struct CardDigits;

impl Validator<CardCandidate> for CardDigits {
    fn name(&self) -> &'static str {
        "card_digits"
    }

    fn validate(&self, value: &CardCandidate) -> ValidationResult {
        if value.is_numeric() {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidFormat,
            "card_number",
            "card number may contain only digits",
        )
    }
}

struct CardLength;

impl Validator<CardCandidate> for CardLength {
    fn name(&self) -> &'static str {
        "card_length"
    }

    fn validate(&self, value: &CardCandidate) -> ValidationResult {
        let len = value.digits.chars().count();
        let CardOptions {
            min_length,
            max_length,
        } = value.options;
        if (min_length..=max_length).contains(&len) {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidLength,
            "card_number",
            format!("card number must be {min_length} to {max_length} digits, got {len}"),
        )
    }
}

/// Rejects numbers made of a single repeated digit, whatever their Luhn
/// parity.
struct RepeatedDigits;

impl Validator<CardCandidate> for RepeatedDigits {
    fn name(&self) -> &'static str {
        "repeated_digits"
    }

    fn validate(&self, value: &CardCandidate) -> ValidationResult {
        let bytes = value.digits.as_bytes();
        let repeated = bytes.len() > 1 && value.is_numeric() && bytes.iter().all(|b| *b == bytes[0]);
        if !repeated {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidFormat,
            "card_number",
            "card number cannot consist of one repeated digit",
        )
    }
}

struct CardChecksum;

impl Validator<CardCandidate> for CardChecksum {
    fn name(&self) -> &'static str {
        "card_checksum"
    }

    fn validate(&self, value: &CardCandidate) -> ValidationResult {
        if !value.is_numeric() || luhn(&value.digits) {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidChecksum,
            "card_number",
            "card number fails the Luhn check",
        )
    }
}

static PIPELINE: LazyLock<Pipeline<CardCandidate>> = LazyLock::new(|| {
    Pipeline::new(
        "card",
        vec![
            Box::new(CardDigits),
            Box::new(CardLength),
            Box::new(RepeatedDigits),
            Box::new(CardChecksum),
        ],
    )
});

/// A validated payment card number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreditCardNumber {
    digits: String,
}

impl CreditCardNumber {
    /// Validates `raw` with the default 13..=19 digit bounds. `context` is
    /// accepted for symmetry with the other identifiers and ignored.
    ///
    /// ```
    /// use finident_core::{CardBrand, CreditCardNumber};
    ///
    /// let (result, card) = CreditCardNumber::try_create("4532 0151 1283 0366", None);
    /// assert!(result.is_valid());
    /// let card = card.unwrap();
    /// assert_eq!(card.brand(), CardBrand::Visa);
    /// assert_eq!(card.masked(), "************0366");
    /// ```
    pub fn try_create(raw: &str, context: Option<CountryCode>) -> (ValidationResult, Option<Self>) {
        Self::try_create_with(raw, context, &CardOptions::default())
    }

    /// Validates `raw` with explicit length bounds.
    pub fn try_create_with(
        raw: &str,
        _context: Option<CountryCode>,
        options: &CardOptions,
    ) -> (ValidationResult, Option<Self>) {
        let digits = strip_separators(raw);
        if digits.is_empty() {
            debug!(kind = "card", valid = false, "empty input");
            return (
                ValidationResult::single(ErrorCode::Required, "card_number", "card number is required"),
                None,
            );
        }

        let candidate = CardCandidate {
            digits,
            options: *options,
        };
        let result = PIPELINE.run_all(&candidate);
        debug!(
            kind = "card",
            valid = result.is_valid(),
            errors = result.len(),
            "card number validated"
        );
        if !result.is_valid() {
            return (result, None);
        }
        (
            result,
            Some(Self {
                digits: candidate.digits,
            }),
        )
    }

    /// The digits, without separators.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Card network by IIN prefix.
    pub fn brand(&self) -> CardBrand {
        CardBrand::detect(&self.digits)
    }

    /// The last four digits.
    pub fn last_four(&self) -> &str {
        self.digits
            .get(self.digits.len().saturating_sub(4)..)
            .unwrap_or_default()
    }

    /// Every digit but the last four replaced by `*`.
    pub fn masked(&self) -> String {
        let hidden = self.digits.len().saturating_sub(4);
        let mut out = "*".repeat(hidden);
        out.push_str(self.last_four());
        out
    }

    /// Groups of four, or 4-6-5 for American Express.
    pub fn to_formatted_string(&self) -> String {
        match self.brand() {
            CardBrand::AmericanExpress => group_by(&self.digits, [4, 6, 5], ' '),
            CardBrand::Visa
            | CardBrand::Mastercard
            | CardBrand::Discover
            | CardBrand::Jcb
            | CardBrand::DinersClub
            | CardBrand::UnionPay
            | CardBrand::Maestro
            | CardBrand::Unknown => group(&self.digits, 4),
        }
    }
}

impl fmt::Display for CreditCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl Serialize for CreditCardNumber {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.digits)
    }
}

impl<'de> Deserialize<'de> for CreditCardNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        match Self::try_create(&s, None) {
            (_, Some(card)) => Ok(card),
            (result, None) => Err(de::Error::custom(result)),
        }
    }
}
