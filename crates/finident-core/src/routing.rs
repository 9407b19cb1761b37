/// ABA routing transit numbers.
///
/// A routing number is nine digits: a two-digit Federal Reserve routing
/// symbol, a six-digit institution identifier and a check digit. The
/// weighted checksum and the symbol range are independent rules and both
/// are reported when both fail.
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::check_digits::{aba_routing, is_valid_federal_reserve_symbol};
use crate::country::CountryCode;
use crate::normalize::{group_by, strip_separators};
use crate::pipeline::{Pipeline, Validator};
use crate::validation::{ErrorCode, ValidationResult};

/// Number of digits in a routing number.
pub const ROUTING_NUMBER_LENGTH: usize = 9;

pub(crate) struct RoutingCandidate {
    digits: String,
    context: Option<CountryCode>,
}

impl RoutingCandidate {
    fn is_numeric(&self) -> bool {
        self.digits.bytes().all(|b| b.is_ascii_digit())
    }
}

struct RoutingFormat;

impl Validator<RoutingCandidate> for RoutingFormat {
    fn name(&self) -> &'static str {
        "routing_format"
    }

    fn validate(&self, value: &RoutingCandidate) -> ValidationResult {
        if value.is_numeric() {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidFormat,
            "routing_number",
            "routing number may contain only digits",
        )
    }
}

struct RoutingLength;

impl Validator<RoutingCandidate> for RoutingLength {
    fn name(&self) -> &'static str {
        "routing_length"
    }

    fn validate(&self, value: &RoutingCandidate) -> ValidationResult {
        let len = value.digits.chars().count();
        if len == ROUTING_NUMBER_LENGTH {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidLength,
            "routing_number",
            format!("routing number must be {ROUTING_NUMBER_LENGTH} digits, got {len}"),
        )
    }
}

/// Checks the leading two digits against the assigned symbol ranges.
struct FederalReserveSymbol;

impl Validator<RoutingCandidate> for FederalReserveSymbol {
    fn name(&self) -> &'static str {
        "federal_reserve_symbol"
    }

    fn validate(&self, value: &RoutingCandidate) -> ValidationResult {
        let Some(symbol) = value
            .digits
            .get(..2)
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<u8>().ok())
        else {
            return ValidationResult::ok();
        };
        if is_valid_federal_reserve_symbol(symbol) {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidFederalReserveSymbol,
            "federal_reserve_symbol",
            format!("routing symbol {symbol:02} is not assigned"),
        )
    }
}

struct RoutingChecksum;

impl Validator<RoutingCandidate> for RoutingChecksum {
    fn name(&self) -> &'static str {
        "routing_checksum"
    }

    fn validate(&self, value: &RoutingCandidate) -> ValidationResult {
        if !value.is_numeric() || value.digits.len() != ROUTING_NUMBER_LENGTH {
            return ValidationResult::ok();
        }
        if aba_routing(&value.digits) {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidChecksum,
            "check_digit",
            "routing number check digit does not match (weights 3-7-1)",
        )
    }
}

struct RoutingContext;

impl Validator<RoutingCandidate> for RoutingContext {
    fn name(&self) -> &'static str {
        "routing_context"
    }

    fn validate(&self, value: &RoutingCandidate) -> ValidationResult {
        match value.context {
            Some(cc) if cc != CountryCode::Us && !cc.is_all() => ValidationResult::single(
                ErrorCode::InvalidCountryCode,
                "country_code",
                format!("ABA routing numbers are issued only in US, not {cc}"),
            ),
            Some(_) | None => ValidationResult::ok(),
        }
    }
}

static PIPELINE: LazyLock<Pipeline<RoutingCandidate>> = LazyLock::new(|| {
    Pipeline::new(
        "routing",
        vec![
            Box::new(RoutingFormat),
            Box::new(RoutingLength),
            Box::new(FederalReserveSymbol),
            Box::new(RoutingChecksum),
            Box::new(RoutingContext),
        ],
    )
});

/// A validated nine-digit ABA routing number.
///
/// Only the digits are stored; the symbol, institution identifier and check
/// digit are sliced out on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutingNumber {
    digits: String,
}

impl RoutingNumber {
    /// Validates `raw` as a routing number.
    ///
    /// Spaces and hyphens are ignored. `context` may be `None`,
    /// [`CountryCode::All`] or [`CountryCode::Us`]; any other jurisdiction
    /// is reported as [`ErrorCode::InvalidCountryCode`].
    ///
    /// ```
    /// use finident_core::{ErrorCode, RoutingNumber};
    ///
    /// let (result, routing) = RoutingNumber::try_create("0210-0002-1", None);
    /// assert!(result.is_valid());
    /// assert_eq!(routing.unwrap().federal_reserve_symbol(), "02");
    ///
    /// let (result, _) = RoutingNumber::try_create("131000021", None);
    /// assert!(result.has_code(ErrorCode::InvalidFederalReserveSymbol));
    /// ```
    pub fn try_create(raw: &str, context: Option<CountryCode>) -> (ValidationResult, Option<Self>) {
        let digits = strip_separators(raw);
        if digits.is_empty() {
            debug!(kind = "routing", valid = false, "empty input");
            return (
                ValidationResult::single(ErrorCode::Required, "routing_number", "routing number is required"),
                None,
            );
        }

        let candidate = RoutingCandidate { digits, context };
        let result = PIPELINE.run_all(&candidate);
        debug!(
            kind = "routing",
            valid = result.is_valid(),
            errors = result.len(),
            "routing number validated"
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

    /// The nine digits.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Digits 1-2: the Federal Reserve routing symbol.
    pub fn federal_reserve_symbol(&self) -> &str {
        self.digits.get(..2).unwrap_or_default()
    }

    /// Digits 3-8: the ABA institution identifier.
    pub fn institution_identifier(&self) -> &str {
        self.digits.get(2..8).unwrap_or_default()
    }

    /// Digit 9.
    pub fn check_digit(&self) -> &str {
        self.digits.get(8..).unwrap_or_default()
    }

    /// MICR fraction grouping, e.g. `0210-0002-1`.
    pub fn to_formatted_string(&self) -> String {
        group_by(&self.digits, [4, 4, 1], '-')
    }
}

impl fmt::Display for RoutingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl Serialize for RoutingNumber {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.digits)
    }
}

impl<'de> Deserialize<'de> for RoutingNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        match Self::try_create(&s, None) {
            (_, Some(routing)) => Ok(routing),
            (result, None) => Err(de::Error::custom(result)),
        }
    }
}
