/// Per-jurisdiction account-number rules.
///
/// The rules are pure data ([`IbanRule`], [`BbanRule`]) held in a read-only
/// [`CountryRules`] registry keyed by [`CountryCode`]. Adding a jurisdiction
/// is a data edit in `rules/tables.rs`; the checking functions below are
/// shared by every entry and never branch on a specific country.
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::country::CountryCode;
use crate::error::ConfigError;

mod tables;

#[cfg(test)]
mod tests;

/// Shortest IBAN in the registry (Norway).
pub const MIN_IBAN_LENGTH: usize = 15;
/// Longest IBAN permitted by ISO 13616.
pub const MAX_IBAN_LENGTH: usize = 34;

// ---------------------------------------------------------------------------
// CharClass / Segment
// ---------------------------------------------------------------------------

/// Character class of a BBAN segment, in IBAN registry notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `n`: digits `0-9`.
    Numeric,
    /// `a`: upper-case letters `A-Z`.
    Alpha,
    /// `c`: upper-case letters and digits.
    Alphanumeric,
}

impl CharClass {
    /// Returns `true` if `byte` belongs to this class.
    pub fn accepts(self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alpha => byte.is_ascii_uppercase(),
            Self::Alphanumeric => byte.is_ascii_digit() || byte.is_ascii_uppercase(),
        }
    }

    /// Registry notation letter (`n`, `a` or `c`).
    pub fn symbol(self) -> char {
        match self {
            Self::Numeric => 'n',
            Self::Alpha => 'a',
            Self::Alphanumeric => 'c',
        }
    }

    /// Plural description used in messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Numeric => "digits",
            Self::Alpha => "letters",
            Self::Alphanumeric => "letters or digits",
        }
    }
}

/// A run of `count` characters of one [`CharClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Allowed characters.
    pub class: CharClass,
    /// Number of characters.
    pub count: u8,
}

impl Segment {
    /// Constructs a segment.
    pub const fn new(class: CharClass, count: u8) -> Self {
        Self { class, count }
    }
}

// ---------------------------------------------------------------------------
// IbanRule / BbanRule
// ---------------------------------------------------------------------------

/// Structure of one jurisdiction's IBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanRule {
    /// Total IBAN length including the four-character prefix.
    pub length: u8,
    /// Ordered BBAN segments following the prefix.
    pub bban: &'static [Segment],
}

impl IbanRule {
    /// Constructs a rule. Consistency is checked by [`CountryRules::new`].
    pub const fn new(length: u8, bban: &'static [Segment]) -> Self {
        Self { length, bban }
    }

    /// Sum of the BBAN segment counts.
    pub fn bban_length(&self) -> usize {
        self.bban.iter().map(|s| usize::from(s.count)).sum()
    }

    /// Registry notation of the BBAN, e.g. `"8!n10!n"`.
    pub fn notation(&self) -> String {
        self.bban
            .iter()
            .map(|s| format!("{}!{}", s.count, s.class.symbol()))
            .collect()
    }

    /// Finds the first character of `bban` that violates its segment class.
    ///
    /// Only characters that are present are compared; a BBAN that is too
    /// short or too long is a length concern, not a structure concern.
    /// Returns the zero-based position and the expected class.
    pub fn first_mismatch(&self, bban: &str) -> Option<(usize, CharClass)> {
        let expected = self
            .bban
            .iter()
            .flat_map(|s| std::iter::repeat_n(s.class, usize::from(s.count)));
        bban.bytes()
            .zip(expected)
            .enumerate()
            .find(|(_, (byte, class))| !class.accepts(*byte))
            .map(|(pos, (_, class))| (pos, class))
    }
}

/// Domestic account-number bounds for a jurisdiction without IBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BbanRule {
    /// Minimum number of characters.
    pub min_length: u8,
    /// Maximum number of characters.
    pub max_length: u8,
    /// Characters the account number may contain.
    pub allowed: CharClass,
}

impl BbanRule {
    /// Constructs a rule. Consistency is checked by [`CountryRules::new`].
    pub const fn new(min_length: u8, max_length: u8, allowed: CharClass) -> Self {
        Self {
            min_length,
            max_length,
            allowed,
        }
    }

    /// Returns `true` if `len` is inside the inclusive bounds.
    pub fn accepts_length(&self, len: usize) -> bool {
        (usize::from(self.min_length)..=usize::from(self.max_length)).contains(&len)
    }
}

// ---------------------------------------------------------------------------
// Rule violations
// ---------------------------------------------------------------------------

/// A violated country rule, independent of how it is reported.
///
/// The identifier pipelines map each variant to an
/// [`ErrorCode`](crate::ErrorCode) and field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// Length differs from the single allowed value.
    Length {
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },
    /// Length lies outside an inclusive range.
    LengthRange {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
        /// Observed length.
        actual: usize,
    },
    /// A character does not belong to the class required at its position.
    Character {
        /// Zero-based position within the checked string.
        position: usize,
        /// Required class.
        expected: CharClass,
    },
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "expected {expected} characters, got {actual}")
            }
            Self::LengthRange { min, max, actual } if min == max => {
                write!(f, "expected {min} characters, got {actual}")
            }
            Self::LengthRange { min, max, actual } => {
                write!(f, "expected {min} to {max} characters, got {actual}")
            }
            Self::Character { position, expected } => {
                write!(
                    f,
                    "character {} must be one of {}",
                    position + 1,
                    expected.describe()
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CountryRules
// ---------------------------------------------------------------------------

/// Read-only registry from [`CountryCode`] to account-number rules.
///
/// [`CountryRules::standard`] is the process-wide table, built on first use
/// and never mutated afterwards; concurrent readers need no
/// synchronization. [`CountryRules::new`] builds an independent registry
/// from caller-supplied entries.
#[derive(Debug, Clone)]
pub struct CountryRules {
    iban: HashMap<CountryCode, IbanRule>,
    bban: HashMap<CountryCode, BbanRule>,
}

static STANDARD: LazyLock<CountryRules> = LazyLock::new(|| CountryRules {
    iban: tables::IBAN_RULES.iter().copied().collect(),
    bban: tables::BBAN_RULES.iter().copied().collect(),
});

impl CountryRules {
    /// The built-in registry (SWIFT IBAN registry plus BBAN-only entries).
    pub fn standard() -> &'static CountryRules {
        &STANDARD
    }

    /// Builds a registry from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an entry is inconsistent: an IBAN length
    /// outside 15..=34, BBAN segments that do not add up to `length - 4`,
    /// a zero-width segment, BBAN bounds with `min > max` or `min == 0`,
    /// the [`CountryCode::All`] key, or the same country listed twice.
    pub fn new(
        iban_entries: &[(CountryCode, IbanRule)],
        bban_entries: &[(CountryCode, BbanRule)],
    ) -> Result<Self, ConfigError> {
        let mut iban = HashMap::with_capacity(iban_entries.len());
        for &(country, rule) in iban_entries {
            check_iban_entry(country, &rule)?;
            if iban.insert(country, rule).is_some() {
                return Err(ConfigError::DuplicateCountry { country });
            }
        }
        let mut bban = HashMap::with_capacity(bban_entries.len());
        for &(country, rule) in bban_entries {
            check_bban_entry(country, &rule)?;
            if iban.contains_key(&country) || bban.insert(country, rule).is_some() {
                return Err(ConfigError::DuplicateCountry { country });
            }
        }
        Ok(Self { iban, bban })
    }

    /// The IBAN rule for `country`, if it issues IBANs.
    pub fn iban_rule(&self, country: CountryCode) -> Option<&IbanRule> {
        self.iban.get(&country)
    }

    /// The domestic rule for a BBAN-only `country`.
    pub fn bban_rule(&self, country: CountryCode) -> Option<&BbanRule> {
        self.bban.get(&country)
    }

    /// IBAN jurisdictions, sorted by code.
    pub fn iban_countries(&self) -> Vec<CountryCode> {
        let mut list: Vec<CountryCode> = self.iban.keys().copied().collect();
        list.sort_unstable();
        list
    }

    /// BBAN-only jurisdictions, sorted by code.
    pub fn bban_countries(&self) -> Vec<CountryCode> {
        let mut list: Vec<CountryCode> = self.bban.keys().copied().collect();
        list.sort_unstable();
        list
    }

    /// Looks up an IBAN jurisdiction by its two-letter prefix.
    pub fn iban_country_for_prefix(&self, prefix: &str) -> Option<CountryCode> {
        prefix
            .parse::<CountryCode>()
            .ok()
            .filter(|cc| self.iban.contains_key(cc))
    }

    /// Checks the total length of a normalized IBAN.
    ///
    /// Registered jurisdictions require their exact length; an unregistered
    /// `country` (`None`) only requires 15..=34 characters.
    pub fn check_iban_length(&self, country: Option<CountryCode>, iban: &str) -> Option<RuleViolation> {
        let actual = iban.len();
        match country.and_then(|cc| self.iban_rule(cc)) {
            Some(rule) => {
                let expected = usize::from(rule.length);
                (actual != expected).then_some(RuleViolation::Length { expected, actual })
            }
            None => (!(MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&actual)).then_some(
                RuleViolation::LengthRange {
                    min: MIN_IBAN_LENGTH,
                    max: MAX_IBAN_LENGTH,
                    actual,
                },
            ),
        }
    }

    /// Checks the BBAN part (everything after the prefix) of an IBAN against
    /// the jurisdiction's segment pattern. Unregistered countries pass.
    pub fn check_iban_structure(&self, country: CountryCode, bban: &str) -> Option<RuleViolation> {
        let rule = self.iban_rule(country)?;
        rule.first_mismatch(bban)
            .map(|(position, expected)| RuleViolation::Character { position, expected })
    }

    /// Checks a domestic account number against `country`'s rules.
    ///
    /// Returns every violation found: for an IBAN jurisdiction the BBAN
    /// length and pattern of its IBAN rule, for a BBAN-only jurisdiction the
    /// length range and character class. [`CountryCode::All`] and countries
    /// without an entry pass.
    pub fn check_bban(&self, country: CountryCode, bban: &str) -> Vec<RuleViolation> {
        let mut violations = Vec::new();
        if let Some(rule) = self.iban_rule(country) {
            let expected = rule.bban_length();
            if bban.len() != expected {
                violations.push(RuleViolation::Length {
                    expected,
                    actual: bban.len(),
                });
            }
            if let Some((position, class)) = rule.first_mismatch(bban) {
                violations.push(RuleViolation::Character {
                    position,
                    expected: class,
                });
            }
        } else if let Some(rule) = self.bban_rule(country) {
            if !rule.accepts_length(bban.len()) {
                violations.push(RuleViolation::LengthRange {
                    min: usize::from(rule.min_length),
                    max: usize::from(rule.max_length),
                    actual: bban.len(),
                });
            }
            if let Some(position) = bban.bytes().position(|b| !rule.allowed.accepts(b)) {
                violations.push(RuleViolation::Character {
                    position,
                    expected: rule.allowed,
                });
            }
        }
        violations
    }
}

fn check_iban_entry(country: CountryCode, rule: &IbanRule) -> Result<(), ConfigError> {
    if country.is_all() {
        return Err(ConfigError::ReservedCountry);
    }
    let length = usize::from(rule.length);
    if !(MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&length) {
        return Err(ConfigError::IbanLengthOutOfRange { country, length });
    }
    if rule.bban.iter().any(|s| s.count == 0) || rule.bban_length() + 4 != length {
        return Err(ConfigError::InconsistentBbanPattern {
            country,
            length,
            pattern: rule.notation(),
        });
    }
    Ok(())
}

fn check_bban_entry(country: CountryCode, rule: &BbanRule) -> Result<(), ConfigError> {
    if country.is_all() {
        return Err(ConfigError::ReservedCountry);
    }
    if rule.min_length == 0 || rule.min_length > rule.max_length {
        return Err(ConfigError::InvalidBbanBounds {
            country,
            min: rule.min_length,
            max: rule.max_length,
        });
    }
    Ok(())
}
