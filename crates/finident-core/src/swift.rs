/// SWIFT/BIC business identifier codes (ISO 9362).
///
/// A BIC is 8 or 11 characters at fixed offsets:
///
/// ```text
/// DEUT DE FF 500
/// |    |  |  +-- branch code (3 alphanumeric, optional)
/// |    |  +----- location code (2 alphanumeric)
/// |    +-------- country code (ISO 3166-1 alpha-2)
/// +------------- institution code (4 letters)
/// ```
///
/// A location code whose second character is `0` marks a test BIC. The
/// 8-character form and its 11-character form with branch `XXX` identify the
/// same institution and compare equal.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::country::{CountryCode, is_iso3166_alpha2};
use crate::normalize::normalize;
use crate::pipeline::{Pipeline, Validator};
use crate::validation::{ErrorCode, ValidationResult};

/// Branch code of a primary office.
pub const PRIMARY_OFFICE_BRANCH: &str = "XXX";

const INSTITUTION: Range<usize> = 0..4;
const COUNTRY: Range<usize> = 4..6;
const LOCATION: Range<usize> = 6..8;
const BRANCH: Range<usize> = 8..11;

/// Options for [`SwiftCode::try_create_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwiftOptions {
    /// Accept test BICs (second location character `0`) without a
    /// [`ErrorCode::TestCode`] finding. Default: `false`.
    pub allow_test_codes: bool,
}

pub(crate) struct SwiftCandidate {
    normalized: String,
    context: Option<CountryCode>,
    options: SwiftOptions,
}

impl SwiftCandidate {
    /// Bytes of `range` that are present in the candidate; `None` when the
    /// segment is missing entirely.
    fn segment(&self, range: Range<usize>) -> Option<&[u8]> {
        let bytes = self.normalized.as_bytes();
        if range.start >= bytes.len() {
            return None;
        }
        bytes.get(range.start..range.end.min(bytes.len()))
    }
}

/// Reports `code` when a present segment contains a byte outside `accepts`.
fn check_segment(
    value: &SwiftCandidate,
    range: Range<usize>,
    accepts: fn(&u8) -> bool,
    field: &str,
    what: &str,
) -> ValidationResult {
    match value.segment(range) {
        Some(bytes) if !bytes.iter().all(accepts) => {
            ValidationResult::single(ErrorCode::InvalidFormat, field, format!("{field} must be {what}"))
        }
        Some(_) | None => ValidationResult::ok(),
    }
}

fn is_alphanumeric(b: &u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

struct SwiftLength;

impl Validator<SwiftCandidate> for SwiftLength {
    fn name(&self) -> &'static str {
        "swift_length"
    }

    fn validate(&self, value: &SwiftCandidate) -> ValidationResult {
        let len = value.normalized.chars().count();
        if len == 8 || len == 11 {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidLength,
            "swift_code",
            format!("SWIFT code must be 8 or 11 characters, got {len}"),
        )
    }
}

struct InstitutionCode;

impl Validator<SwiftCandidate> for InstitutionCode {
    fn name(&self) -> &'static str {
        "institution_code"
    }

    fn validate(&self, value: &SwiftCandidate) -> ValidationResult {
        check_segment(value, INSTITUTION, u8::is_ascii_uppercase, "institution_code", "4 letters")
    }
}

struct SwiftCountry;

impl Validator<SwiftCandidate> for SwiftCountry {
    fn name(&self) -> &'static str {
        "swift_country"
    }

    fn validate(&self, value: &SwiftCandidate) -> ValidationResult {
        let Some(bytes) = value.segment(COUNTRY) else {
            return ValidationResult::ok();
        };
        let code = String::from_utf8_lossy(bytes);
        if is_iso3166_alpha2(&code) {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::InvalidCountryCode,
            "country_code",
            format!("\"{code}\" is not an ISO 3166-1 alpha-2 country code"),
        )
    }
}

struct LocationCode;

impl Validator<SwiftCandidate> for LocationCode {
    fn name(&self) -> &'static str {
        "location_code"
    }

    fn validate(&self, value: &SwiftCandidate) -> ValidationResult {
        check_segment(value, LOCATION, is_alphanumeric, "location_code", "2 letters or digits")
    }
}

struct BranchCode;

impl Validator<SwiftCandidate> for BranchCode {
    fn name(&self) -> &'static str {
        "branch_code"
    }

    fn validate(&self, value: &SwiftCandidate) -> ValidationResult {
        check_segment(value, BRANCH, is_alphanumeric, "branch_code", "3 letters or digits")
    }
}

struct TestCode;

impl Validator<SwiftCandidate> for TestCode {
    fn name(&self) -> &'static str {
        "test_code"
    }

    fn validate(&self, value: &SwiftCandidate) -> ValidationResult {
        if value.options.allow_test_codes || value.normalized.as_bytes().get(7) != Some(&b'0') {
            return ValidationResult::ok();
        }
        ValidationResult::single(
            ErrorCode::TestCode,
            "location_code",
            "location code ending in 0 denotes a test BIC",
        )
    }
}

struct SwiftContext;

impl Validator<SwiftCandidate> for SwiftContext {
    fn name(&self) -> &'static str {
        "swift_context"
    }

    fn validate(&self, value: &SwiftCandidate) -> ValidationResult {
        let Some(expected) = value.context.filter(|cc| !cc.is_all()) else {
            return ValidationResult::ok();
        };
        match value.segment(COUNTRY) {
            Some(bytes) if bytes != expected.as_str().as_bytes() => ValidationResult::single(
                ErrorCode::InvalidCountryCode,
                "country_code",
                format!(
                    "SWIFT code is registered in {}, expected {expected}",
                    String::from_utf8_lossy(bytes)
                ),
            ),
            Some(_) | None => ValidationResult::ok(),
        }
    }
}

static PIPELINE: LazyLock<Pipeline<SwiftCandidate>> = LazyLock::new(|| {
    Pipeline::new(
        "swift",
        vec![
            Box::new(SwiftLength),
            Box::new(InstitutionCode),
            Box::new(SwiftCountry),
            Box::new(LocationCode),
            Box::new(BranchCode),
            Box::new(TestCode),
            Box::new(SwiftContext),
        ],
    )
});

/// A validated SWIFT/BIC code.
///
/// Equality and hashing use [`to_full_format`](SwiftCode::to_full_format),
/// so `DEUTDEFF` equals `DEUTDEFFXXX`.
#[derive(Debug, Clone)]
pub struct SwiftCode {
    normalized: String,
}

impl SwiftCode {
    /// Validates `raw` with default [`SwiftOptions`] (test BICs rejected).
    ///
    /// ```
    /// use finident_core::SwiftCode;
    ///
    /// let short = SwiftCode::try_create("DEUTDEFF", None).1.unwrap();
    /// let long = SwiftCode::try_create("deut de ff xxx", None).1.unwrap();
    /// assert_eq!(short, long);
    /// assert_eq!(short.to_full_format(), "DEUTDEFFXXX");
    /// ```
    pub fn try_create(raw: &str, context: Option<CountryCode>) -> (ValidationResult, Option<Self>) {
        Self::try_create_with(raw, context, &SwiftOptions::default())
    }

    /// Validates `raw` as a BIC.
    ///
    /// An explicit `context` other than [`CountryCode::All`] must match the
    /// embedded country code.
    pub fn try_create_with(
        raw: &str,
        context: Option<CountryCode>,
        options: &SwiftOptions,
    ) -> (ValidationResult, Option<Self>) {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            debug!(kind = "swift", valid = false, "empty input");
            return (
                ValidationResult::single(ErrorCode::Required, "swift_code", "SWIFT code is required"),
                None,
            );
        }

        let candidate = SwiftCandidate {
            normalized,
            context,
            options: *options,
        };
        let result = PIPELINE.run_all(&candidate);
        debug!(
            kind = "swift",
            valid = result.is_valid(),
            errors = result.len(),
            "SWIFT code validated"
        );
        if !result.is_valid() {
            return (result, None);
        }
        (
            result,
            Some(Self {
                normalized: candidate.normalized,
            }),
        )
    }

    fn part(&self, range: Range<usize>) -> &str {
        self.normalized.get(range).unwrap_or_default()
    }

    /// Normalized code as given: 8 or 11 characters.
    pub fn normalized_value(&self) -> &str {
        &self.normalized
    }

    /// Characters 1-4.
    pub fn institution_code(&self) -> &str {
        self.part(INSTITUTION)
    }

    /// Characters 5-6.
    pub fn country_code(&self) -> &str {
        self.part(COUNTRY)
    }

    /// Characters 7-8.
    pub fn location_code(&self) -> &str {
        self.part(LOCATION)
    }

    /// Characters 9-11, absent in the 8-character form.
    pub fn branch_code(&self) -> Option<&str> {
        self.normalized.get(BRANCH)
    }

    /// `true` if the location code ends in `0`.
    pub fn is_test_code(&self) -> bool {
        self.location_code().ends_with('0')
    }

    /// `true` for the 8-character form or branch `XXX`.
    pub fn is_primary_office(&self) -> bool {
        self.branch_code().is_none_or(|b| b == PRIMARY_OFFICE_BRANCH)
    }

    /// The 11-character form, appending `XXX` to an 8-character code.
    pub fn to_full_format(&self) -> String {
        match self.branch_code() {
            Some(_) => self.normalized.clone(),
            None => format!("{}{PRIMARY_OFFICE_BRANCH}", self.normalized),
        }
    }

    /// Space-separated parts, e.g. `DEUT DE FF 500`.
    pub fn to_formatted_string(&self) -> String {
        let mut out = format!(
            "{} {} {}",
            self.institution_code(),
            self.country_code(),
            self.location_code()
        );
        if let Some(branch) = self.branch_code() {
            out.push(' ');
            out.push_str(branch);
        }
        out
    }
}

impl PartialEq for SwiftCode {
    fn eq(&self, other: &Self) -> bool {
        self.to_full_format() == other.to_full_format()
    }
}

impl Eq for SwiftCode {}

impl Hash for SwiftCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_full_format().hash(state);
    }
}

impl fmt::Display for SwiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl Serialize for SwiftCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.normalized)
    }
}

impl<'de> Deserialize<'de> for SwiftCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        match Self::try_create(&s, None) {
            (_, Some(code)) => Ok(code),
            (result, None) => Err(de::Error::custom(result)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::collections::HashSet;

    use super::*;

    fn codes(raw: &str) -> Vec<ErrorCode> {
        SwiftCode::try_create(raw, None)
            .0
            .errors()
            .iter()
            .map(|e| e.code)
            .collect()
    }

    fn swift(raw: &str) -> SwiftCode {
        SwiftCode::try_create(raw, None).1.expect("valid BIC")
    }

    #[test]
    fn eleven_character_fields() {
        let code = swift("DEUTDEFF500");
        assert_eq!(code.institution_code(), "DEUT");
        assert_eq!(code.country_code(), "DE");
        assert_eq!(code.location_code(), "FF");
        assert_eq!(code.branch_code(), Some("500"));
        assert!(!code.is_primary_office());
        assert!(!code.is_test_code());
        assert_eq!(code.to_full_format(), "DEUTDEFF500");
        assert_eq!(code.to_formatted_string(), "DEUT DE FF 500");
    }

    #[test]
    fn eight_character_form() {
        let code = swift("nwbk gb 2l");
        assert_eq!(code.normalized_value(), "NWBKGB2L");
        assert_eq!(code.branch_code(), None);
        assert!(code.is_primary_office());
        assert_eq!(code.to_full_format(), "NWBKGB2LXXX");
        assert_eq!(code.to_formatted_string(), "NWBK GB 2L");
    }

    #[test]
    fn bic8_equals_bic11_with_xxx() {
        let short = swift("DEUTDEFF");
        let long = swift("DEUTDEFFXXX");
        assert_eq!(short, long);
        assert_eq!(short.to_full_format(), "DEUTDEFFXXX");
        assert_eq!(long.to_full_format(), "DEUTDEFFXXX");
        let set: HashSet<SwiftCode> = [short, long].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(swift("DEUTDEFF"), swift("DEUTDEFF500"));
    }

    #[test]
    fn wrong_length() {
        assert_eq!(codes("DEUTDEF"), [ErrorCode::InvalidLength]);
        assert_eq!(codes("DEUTDEFF5"), [ErrorCode::InvalidLength]);
        assert_eq!(codes(""), [ErrorCode::Required]);
    }

    #[test]
    fn digits_in_institution_code() {
        assert_eq!(codes("DEU1DEFF"), [ErrorCode::InvalidFormat]);
    }

    #[test]
    fn unknown_country() {
        assert_eq!(codes("DEUTZZFF"), [ErrorCode::InvalidCountryCode]);
        assert!(SwiftCode::try_create("TESTXKPR", None).0.is_valid());
    }

    #[test]
    fn several_violations_reported_together() {
        let result = SwiftCode::try_create("D3UTZZF!", None).0;
        let codes: Vec<ErrorCode> = result.errors().iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            [ErrorCode::InvalidFormat, ErrorCode::InvalidCountryCode, ErrorCode::InvalidFormat]
        );
        assert_eq!(result.errors()[2].field_path, "location_code");
    }

    #[test]
    fn bad_branch_characters() {
        assert_eq!(codes("DEUTDEFF5_0"), [ErrorCode::InvalidFormat]);
    }

    #[test]
    fn test_codes_rejected_by_default() {
        assert_eq!(codes("DEUTDEF0"), [ErrorCode::TestCode]);
        let options = SwiftOptions {
            allow_test_codes: true,
        };
        let (result, code) = SwiftCode::try_create_with("DEUTDEF0", None, &options);
        assert!(result.is_valid());
        assert!(code.expect("accepted").is_test_code());
    }

    #[test]
    fn context_must_match_embedded_country() {
        assert!(SwiftCode::try_create("DEUTDEFF", Some(CountryCode::De)).0.is_valid());
        assert!(SwiftCode::try_create("DEUTDEFF", Some(CountryCode::All)).0.is_valid());
        let result = SwiftCode::try_create("DEUTDEFF", Some(CountryCode::Gb)).0;
        assert!(result.has_code(ErrorCode::InvalidCountryCode));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn serde_round_trip() {
        let code = swift("BOFAUS3N");
        let json = serde_json::to_string(&code).expect("serialize");
        assert_eq!(json, "\"BOFAUS3N\"");
        let back: SwiftCode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, code);
        assert!(serde_json::from_str::<SwiftCode>("\"BOFAUS3\"").is_err());
    }
}
