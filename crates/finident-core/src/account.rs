/// IBAN and domestic (BBAN) account identifiers.
///
/// [`AccountIdentifier::try_create`] normalizes the raw input, classifies it
/// as IBAN- or BBAN-shaped and runs the matching pipeline:
///
/// | Branch | Stages (all executed) |
/// |--------|-----------------------|
/// | IBAN | characters, country, length, structure, checksum, context |
/// | BBAN | characters, length, country rule |
///
/// An IBAN-shaped input always takes the IBAN branch, even when its prefix
/// is not a registered jurisdiction; the country stage reports that case.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::check_digits::{iban_check_digits, iban_mod97};
use crate::country::CountryCode;
use crate::normalize::{AccountType, group, normalize};
use crate::pipeline::{Pipeline, Validator};
use crate::rules::{CountryRules, RuleViolation};
use crate::validation::{ErrorCode, ValidationError, ValidationResult};

/// Shortest domestic account number accepted without a country rule.
pub const MIN_BBAN_LENGTH: usize = 4;
/// Longest domestic account number accepted without a country rule.
pub const MAX_BBAN_LENGTH: usize = 30;

/// Normalized input shared by every account stage.
pub(crate) struct AccountCandidate {
    normalized: String,
    context: Option<CountryCode>,
}

impl AccountCandidate {
    /// The explicit jurisdiction, treating [`CountryCode::All`] as none.
    fn jurisdiction(&self) -> Option<CountryCode> {
        self.context.filter(|cc| !cc.is_all())
    }

    fn is_alphanumeric(&self) -> bool {
        self.normalized
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    }

    /// Two-letter prefix of an IBAN-shaped candidate.
    fn prefix(&self) -> &str {
        self.normalized.get(..2).unwrap_or_default()
    }

    /// Everything after the four-character IBAN prefix.
    fn iban_bban(&self) -> &str {
        self.normalized.get(4..).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// IBAN stages
// ---------------------------------------------------------------------------

struct IbanCharacters;

impl Validator<AccountCandidate> for IbanCharacters {
    fn name(&self) -> &'static str {
        "iban_characters"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        if value.is_alphanumeric() {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidFormat,
            "iban",
            "IBAN may contain only letters and digits",
        )
    }
}

struct IbanCountry;

impl Validator<AccountCandidate> for IbanCountry {
    fn name(&self) -> &'static str {
        "iban_country"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        let prefix = value.prefix();
        if CountryRules::standard().iban_country_for_prefix(prefix).is_some() {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidIbanCountryCode,
            "country_code",
            format!("\"{prefix}\" is not an IBAN jurisdiction"),
        )
    }
}

struct IbanLength;

impl Validator<AccountCandidate> for IbanLength {
    fn name(&self) -> &'static str {
        "iban_length"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        let rules = CountryRules::standard();
        let country = rules.iban_country_for_prefix(value.prefix());
        match rules.check_iban_length(country, &value.normalized) {
            Some(violation) => ValidationResult::single(
                ErrorCode::InvalidIbanLength,
                "iban",
                format!("IBAN length: {violation}"),
            ),
            None => ValidationResult::ok(),
        }
    }
}

struct IbanStructure;

impl Validator<AccountCandidate> for IbanStructure {
    fn name(&self) -> &'static str {
        "iban_structure"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        let rules = CountryRules::standard();
        let Some(country) = rules.iban_country_for_prefix(value.prefix()) else {
            return ValidationResult::ok();
        };
        match rules.check_iban_structure(country, value.iban_bban()) {
            Some(RuleViolation::Character { position, expected }) => ValidationResult::single(
                ErrorCode::InvalidIbanStructure,
                "bban",
                format!(
                    "{country} BBAN character {} must be one of {}",
                    position + 1,
                    expected.describe()
                ),
            ),
            Some(other) => ValidationResult::single(
                ErrorCode::InvalidIbanStructure,
                "bban",
                format!("{country} BBAN: {other}"),
            ),
            None => ValidationResult::ok(),
        }
    }
}

struct IbanChecksum;

impl Validator<AccountCandidate> for IbanChecksum {
    fn name(&self) -> &'static str {
        "iban_checksum"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        if !value.is_alphanumeric() || iban_mod97(&value.normalized) {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidIbanChecksum,
            "check_digits",
            "IBAN check digits do not match (ISO 7064 MOD 97-10)",
        )
    }
}

struct IbanContext;

impl Validator<AccountCandidate> for IbanContext {
    fn name(&self) -> &'static str {
        "iban_context"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        match value.jurisdiction() {
            Some(expected) if expected.as_str() != value.prefix() => ValidationResult::single(
                ErrorCode::InvalidCountryCode,
                "country_code",
                format!("IBAN is issued in {}, expected {expected}", value.prefix()),
            ),
            Some(_) | None => ValidationResult::ok(),
        }
    }
}

// ---------------------------------------------------------------------------
// BBAN stages
// ---------------------------------------------------------------------------

struct BbanCharacters;

impl Validator<AccountCandidate> for BbanCharacters {
    fn name(&self) -> &'static str {
        "bban_characters"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        if value.is_alphanumeric() {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidFormat,
            "account_number",
            "account number may contain only letters and digits",
        )
    }
}

struct BbanLength;

impl Validator<AccountCandidate> for BbanLength {
    fn name(&self) -> &'static str {
        "bban_length"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        let len = value.normalized.len();
        if (MIN_BBAN_LENGTH..=MAX_BBAN_LENGTH).contains(&len) {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidLength,
            "account_number",
            format!("account number must be {MIN_BBAN_LENGTH} to {MAX_BBAN_LENGTH} characters, got {len}"),
        )
    }
}

/// Applies the jurisdiction's domestic rule when a context is given.
///
/// IBAN jurisdictions use the BBAN pattern of their IBAN rule and report
/// character errors as `InvalidBbanFormat`; BBAN-only jurisdictions report
/// them as `InvalidCountryAccountNumberFormat`. Character checks are skipped
/// when the characters stage already failed.
struct BbanCountryRule;

impl Validator<AccountCandidate> for BbanCountryRule {
    fn name(&self) -> &'static str {
        "bban_country_rule"
    }

    fn validate(&self, value: &AccountCandidate) -> ValidationResult {
        let Some(country) = value.jurisdiction() else {
            return ValidationResult::ok();
        };
        let rules = CountryRules::standard();
        let character_code = if rules.iban_rule(country).is_some() {
            ErrorCode::InvalidBbanFormat
        } else {
            ErrorCode::InvalidCountryAccountNumberFormat
        };
        let alphanumeric = value.is_alphanumeric();
        rules
            .check_bban(country, &value.normalized)
            .into_iter()
            .filter_map(|violation| match violation {
                RuleViolation::Character { position, expected } if alphanumeric => {
                    Some(ValidationError::new(
                        character_code,
                        "account_number",
                        format!(
                            "{country} account number character {} must be one of {}",
                            position + 1,
                            expected.describe()
                        ),
                    ))
                }
                RuleViolation::Character { .. } => None,
                RuleViolation::Length { .. } | RuleViolation::LengthRange { .. } => {
                    Some(ValidationError::new(
                        ErrorCode::InvalidBbanLength,
                        "account_number",
                        format!("{country} account number: {violation}"),
                    ))
                }
            })
            .collect()
    }
}

static IBAN_PIPELINE: LazyLock<Pipeline<AccountCandidate>> = LazyLock::new(|| {
    Pipeline::new(
        "iban",
        vec![
            Box::new(IbanCharacters),
            Box::new(IbanCountry),
            Box::new(IbanLength),
            Box::new(IbanStructure),
            Box::new(IbanChecksum),
            Box::new(IbanContext),
        ],
    )
});

static BBAN_PIPELINE: LazyLock<Pipeline<AccountCandidate>> = LazyLock::new(|| {
    Pipeline::new(
        "bban",
        vec![
            Box::new(BbanCharacters),
            Box::new(BbanLength),
            Box::new(BbanCountryRule),
        ],
    )
});

// ---------------------------------------------------------------------------
// AccountIdentifier
// ---------------------------------------------------------------------------

/// A validated IBAN or domestic bank account number.
///
/// Instances exist only when every stage of the matching pipeline passed.
/// Equality and hashing use the normalized value; the raw input's spacing
/// and case are irrelevant.
#[derive(Debug, Clone)]
pub struct AccountIdentifier {
    raw: String,
    normalized: String,
    account_type: AccountType,
    country: Option<CountryCode>,
}

impl AccountIdentifier {
    /// Validates `raw` as an IBAN or, failing the IBAN shape, a domestic
    /// account number.
    ///
    /// `context` is required to apply a domestic rule; `None` and
    /// [`CountryCode::All`] check a BBAN for characters and generic length
    /// only. For an IBAN the jurisdiction is taken from the prefix, and an
    /// explicit context that disagrees is reported as
    /// [`ErrorCode::InvalidCountryCode`].
    ///
    /// ```
    /// use finident_core::{AccountIdentifier, AccountType};
    ///
    /// let (result, account) = AccountIdentifier::try_create("gb29 nwbk 6016 1331 9268 19", None);
    /// assert!(result.is_valid());
    /// let account = account.unwrap();
    /// assert_eq!(account.account_type(), AccountType::Iban);
    /// assert_eq!(account.to_formatted_string(), "GB29 NWBK 6016 1331 9268 19");
    /// ```
    pub fn try_create(raw: &str, context: Option<CountryCode>) -> (ValidationResult, Option<Self>) {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            debug!(kind = "account", valid = false, "empty input");
            return (
                ValidationResult::single(ErrorCode::Required, "account_number", "account number is required"),
                None,
            );
        }

        let account_type = AccountType::classify(&normalized);
        let candidate = AccountCandidate { normalized, context };
        let pipeline = match account_type {
            AccountType::Iban => &IBAN_PIPELINE,
            AccountType::Bban | AccountType::Unknown => &BBAN_PIPELINE,
        };
        let result = pipeline.run_all(&candidate);
        debug!(
            kind = pipeline.kind(),
            valid = result.is_valid(),
            errors = result.len(),
            "account validated"
        );
        if !result.is_valid() {
            return (result, None);
        }

        let country = match account_type {
            AccountType::Iban => CountryRules::standard().iban_country_for_prefix(candidate.prefix()),
            AccountType::Bban | AccountType::Unknown => candidate.jurisdiction(),
        };
        let account = Self {
            raw: raw.to_owned(),
            normalized: candidate.normalized,
            account_type,
            country,
        };
        (result, Some(account))
    }

    /// The input exactly as given.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// Canonical form: no separators, upper case.
    pub fn normalized_value(&self) -> &str {
        &self.normalized
    }

    /// [`AccountType::Iban`] or [`AccountType::Bban`].
    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Jurisdiction of the account: the IBAN prefix, or the explicit
    /// context a BBAN was validated against.
    pub fn country_code(&self) -> Option<CountryCode> {
        self.country
    }

    /// The two IBAN check digits; `None` for a BBAN.
    pub fn check_digits(&self) -> Option<&str> {
        match self.account_type {
            AccountType::Iban => self.normalized.get(2..4),
            AccountType::Bban | AccountType::Unknown => None,
        }
    }

    /// The domestic part: everything after the IBAN prefix, or the whole
    /// value for a BBAN.
    pub fn bban(&self) -> &str {
        match self.account_type {
            AccountType::Iban => self.normalized.get(4..).unwrap_or_default(),
            AccountType::Bban | AccountType::Unknown => &self.normalized,
        }
    }

    /// Display form: IBANs in groups of four, BBANs unchanged.
    pub fn to_formatted_string(&self) -> String {
        match self.account_type {
            AccountType::Iban => group(&self.normalized, 4),
            AccountType::Bban | AccountType::Unknown => self.normalized.clone(),
        }
    }

    /// Converts a BBAN of an IBAN jurisdiction into its IBAN.
    ///
    /// Returns a clone for an IBAN, and `None` for a BBAN without a
    /// jurisdiction, of a BBAN-only jurisdiction, or whose IBAN fails
    /// validation.
    ///
    /// ```
    /// use finident_core::{AccountIdentifier, CountryCode};
    ///
    /// let (_, bban) = AccountIdentifier::try_create("370400440532013000", Some(CountryCode::De));
    /// let iban = bban.and_then(|b| b.to_iban()).unwrap();
    /// assert_eq!(iban.normalized_value(), "DE89370400440532013000");
    /// ```
    pub fn to_iban(&self) -> Option<Self> {
        if self.account_type == AccountType::Iban {
            return Some(self.clone());
        }
        let country = self.country?;
        CountryRules::standard().iban_rule(country)?;
        let check = iban_check_digits(country.as_str(), &self.normalized)?;
        let iban = format!("{}{check}{}", country.as_str(), self.normalized);
        Self::try_create(&iban, Some(country)).1
    }
}

impl PartialEq for AccountIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for AccountIdentifier {}

impl Hash for AccountIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl Serialize for AccountIdentifier {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.normalized)
    }
}

impl<'de> Deserialize<'de> for AccountIdentifier {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        match Self::try_create(&s, None) {
            (_, Some(account)) => Ok(account),
            (result, None) => Err(de::Error::custom(result)),
        }
    }
}
