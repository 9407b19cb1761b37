/// Result model shared by every identifier factory.
///
/// This module defines [`ErrorCode`], [`ValidationError`] and
/// [`ValidationResult`]: the only channel through which expected validation
/// failures are reported. A failed validation is data, never an `Err` and
/// never a panic; callers decide how to surface it.
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Machine-readable tag attached to every [`ValidationError`].
///
/// [`ErrorCode::as_str`] returns the stable name used in serialised output
/// (e.g. `"InvalidIbanChecksum"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The input was empty after normalization.
    Required,
    /// The input contains characters or a shape the identifier never allows.
    InvalidFormat,
    /// Generic length violation (routing numbers, SWIFT codes, cards).
    InvalidLength,
    /// The IBAN length does not match its jurisdiction (or 15..=34 when unknown).
    InvalidIbanLength,
    /// The domestic account number length is outside the jurisdiction's bounds.
    InvalidBbanLength,
    /// The BBAN part of an IBAN does not follow the jurisdiction's pattern.
    InvalidIbanStructure,
    /// A domestic account number of an IBAN jurisdiction does not follow its BBAN pattern.
    InvalidBbanFormat,
    /// The two-letter IBAN prefix is not a registered IBAN jurisdiction.
    InvalidIbanCountryCode,
    /// A country code is unknown or contradicts the supplied context.
    InvalidCountryCode,
    /// The IBAN fails ISO 7064 MOD 97-10.
    InvalidIbanChecksum,
    /// A weighted check digit (Luhn, ABA) does not verify.
    InvalidChecksum,
    /// The first two routing digits are not a valid Federal Reserve symbol.
    InvalidFederalReserveSymbol,
    /// A domestic account number of a BBAN-only jurisdiction uses disallowed characters.
    InvalidCountryAccountNumberFormat,
    /// The SWIFT code is a test/non-production code and those were not accepted.
    TestCode,
}

impl ErrorCode {
    /// Returns the stable name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::InvalidFormat => "InvalidFormat",
            Self::InvalidLength => "InvalidLength",
            Self::InvalidIbanLength => "InvalidIbanLength",
            Self::InvalidBbanLength => "InvalidBbanLength",
            Self::InvalidIbanStructure => "InvalidIbanStructure",
            Self::InvalidBbanFormat => "InvalidBbanFormat",
            Self::InvalidIbanCountryCode => "InvalidIbanCountryCode",
            Self::InvalidCountryCode => "InvalidCountryCode",
            Self::InvalidIbanChecksum => "InvalidIbanChecksum",
            Self::InvalidChecksum => "InvalidChecksum",
            Self::InvalidFederalReserveSymbol => "InvalidFederalReserveSymbol",
            Self::InvalidCountryAccountNumberFormat => "InvalidCountryAccountNumberFormat",
            Self::TestCode => "TestCode",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A single violated rule.
///
/// `field_path` names the input field the finding applies to (e.g. `"iban"`,
/// `"swift_code.country_code"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable explanation.
    pub message: String,
    /// Path of the offending field.
    pub field_path: String,
    /// Machine-readable tag.
    pub code: ErrorCode,
}

impl ValidationError {
    /// Constructs a new [`ValidationError`].
    pub fn new(code: ErrorCode, field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_path: field_path.into(),
            code,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.field_path, self.message)
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Ordered collection of [`ValidationError`]s; valid iff empty.
///
/// Results from independent pipeline stages are combined with
/// [`merge`][ValidationResult::merge], which concatenates and never drops an
/// earlier error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Creates a result holding exactly one error.
    pub fn single(code: ErrorCode, field_path: &str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![ValidationError::new(code, field_path, message)],
        }
    }

    /// Creates a result from a pre-built list of errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Appends one error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns `self` followed by every error of `other`, in order.
    #[must_use]
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// In-place form of [`merge`][ValidationResult::merge].
    pub fn extend_from(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Returns `true` when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors in the order they were reported.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterator over the errors carrying `code`.
    pub fn by_code(&self, code: ErrorCode) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.code == code)
    }

    /// Returns `true` if at least one error carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`is_valid`][ValidationResult::is_valid].
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("valid");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn empty_result_is_valid() {
        let r = ValidationResult::ok();
        assert!(r.is_valid());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.to_string(), "valid");
    }

    #[test]
    fn merge_preserves_order_and_keeps_earlier_errors() {
        let a = ValidationResult::single(ErrorCode::InvalidFormat, "card_number", "first");
        let b = ValidationResult::single(ErrorCode::InvalidChecksum, "card_number", "second");
        let merged = a.merge(b).merge(ValidationResult::ok());
        let codes: Vec<ErrorCode> = merged.errors().iter().map(|e| e.code).collect();
        assert_eq!(codes, [ErrorCode::InvalidFormat, ErrorCode::InvalidChecksum]);
    }

    #[test]
    fn merge_into_empty_keeps_other() {
        let merged = ValidationResult::ok().merge(ValidationResult::single(
            ErrorCode::Required,
            "iban",
            "missing",
        ));
        assert_eq!(merged.len(), 1);
        assert!(merged.has_code(ErrorCode::Required));
    }

    #[test]
    fn by_code_filters() {
        let r: ValidationResult = [
            ValidationError::new(ErrorCode::InvalidLength, "swift_code", "a"),
            ValidationError::new(ErrorCode::TestCode, "swift_code", "b"),
            ValidationError::new(ErrorCode::InvalidLength, "swift_code", "c"),
        ]
        .into_iter()
        .collect();
        assert_eq!(r.by_code(ErrorCode::InvalidLength).count(), 2);
        assert!(!r.has_code(ErrorCode::InvalidChecksum));
    }

    #[test]
    fn error_display_includes_code_and_field() {
        let e = ValidationError::new(ErrorCode::InvalidIbanChecksum, "iban", "bad check digits");
        assert_eq!(e.to_string(), "[InvalidIbanChecksum] iban: bad check digits");
    }

    #[test]
    fn result_display_one_line_per_error() {
        let r = ValidationResult::single(ErrorCode::InvalidLength, "routing_number", "x")
            .merge(ValidationResult::single(ErrorCode::InvalidFormat, "routing_number", "y"));
        assert_eq!(r.to_string().lines().count(), 2);
    }

    #[test]
    fn serializes_as_array_of_errors() {
        let r = ValidationResult::single(ErrorCode::TestCode, "swift_code.location_code", "test");
        let json = serde_json::to_value(&r).expect("serialize");
        assert_eq!(json[0]["code"], "TestCode");
        assert_eq!(json[0]["field_path"], "swift_code.location_code");
    }

    #[test]
    fn every_code_name_matches_serde_name() {
        for code in [
            ErrorCode::Required,
            ErrorCode::InvalidFormat,
            ErrorCode::InvalidLength,
            ErrorCode::InvalidIbanLength,
            ErrorCode::InvalidBbanLength,
            ErrorCode::InvalidIbanStructure,
            ErrorCode::InvalidBbanFormat,
            ErrorCode::InvalidIbanCountryCode,
            ErrorCode::InvalidCountryCode,
            ErrorCode::InvalidIbanChecksum,
            ErrorCode::InvalidChecksum,
            ErrorCode::InvalidFederalReserveSymbol,
            ErrorCode::InvalidCountryAccountNumberFormat,
            ErrorCode::TestCode,
        ] {
            let json = serde_json::to_value(code).expect("serialize");
            assert_eq!(json, code.as_str());
        }
    }
}
