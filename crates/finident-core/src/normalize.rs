//! Input normalization and structural shape classification.
//!
//! Every factory normalizes its raw input before running a pipeline:
//! whitespace and `-` separators are removed and letters are upper-cased.
//! [`AccountType::classify`] then decides which account branch applies,
//! purely from the character layout and without consulting the country
//! tables.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Patterns are literals covered by the tests below.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| unreachable!("invalid pattern {pattern:?}: {e}"))
}

static IBAN_SHAPE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z]{2}[0-9]{2}"));
static BBAN_SHAPE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9A-Z]*$"));

/// Structural shape of a normalized account candidate.
///
/// Serializes as `"iban"`, `"bban"` or `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Two letters followed by two digits.
    Iban,
    /// Upper-case letters and digits that do not start like an IBAN.
    Bban,
    /// Contains characters no account number may contain.
    Unknown,
}

impl AccountType {
    /// Lower-case name, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iban => "iban",
            Self::Bban => "bban",
            Self::Unknown => "unknown",
        }
    }

    /// Classifies an already-normalized candidate.
    ///
    /// A string is IBAN-shaped iff its first two characters are letters and
    /// the next two are digits, whatever the rest contains. Otherwise it is
    /// BBAN-shaped when it consists only of `A-Z` and `0-9`, and unknown
    /// when anything else remains.
    ///
    /// ```
    /// use finident_core::AccountType;
    ///
    /// assert_eq!(AccountType::classify("ZZ12ABC"), AccountType::Iban);
    /// assert_eq!(AccountType::classify("021000021"), AccountType::Bban);
    /// assert_eq!(AccountType::classify("12/34"), AccountType::Unknown);
    /// ```
    pub fn classify(normalized: &str) -> Self {
        if IBAN_SHAPE.is_match(normalized) {
            Self::Iban
        } else if BBAN_SHAPE.is_match(normalized) {
            Self::Bban
        } else {
            Self::Unknown
        }
    }
}

/// Returns `true` for the separators removed by [`normalize`].
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Strips whitespace and hyphens and upper-cases every letter.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)` for every `s`.
///
/// ```
/// use finident_core::normalize;
///
/// assert_eq!(normalize(" gb29 nwbk-6016 1331 9268 19 "), "GB29NWBK60161331926819");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !is_separator(c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Strips separators and keeps the remaining characters unchanged.
///
/// Used for card and routing numbers, where case is irrelevant because only
/// digits are accepted.
pub fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|&c| !is_separator(c)).collect()
}

/// Splits `value` into groups of `width` characters joined by a space.
pub(crate) fn group(value: &str, width: usize) -> String {
    group_by(value, std::iter::repeat(width), ' ')
}

/// Splits `value` into consecutive groups of the given widths, joined by
/// `sep`. The last width repeats until the input is exhausted.
pub(crate) fn group_by(value: &str, widths: impl IntoIterator<Item = usize>, sep: char) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    let mut rest = value;
    let mut last = value.len().max(1);
    let mut widths = widths.into_iter();
    while !rest.is_empty() {
        let width = widths.next().unwrap_or(last).max(1);
        last = width;
        let cut = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(i, _)| i);
        if !out.is_empty() {
            out.push(sep);
        }
        out.push_str(&rest[..cut]);
        rest = &rest[cut..];
    }
    out
}
