//! Pure check-digit verification functions for financial identifiers.
//!
//! These functions are called by the identifier pipelines after the format
//! stage confirms the input has the right shape. All of them are exact
//! integer arithmetic over the bytes of the input: no floating point, no
//! big-integer allocation, and no overflow regardless of input length.
//!
//! # References
//!
//! - ISO 7064 MOD 97-10 for IBAN (ISO 13616)
//! - Luhn (ISO/IEC 7812-1 Annex B) for payment card numbers
//! - ABA routing number check digit, weights 3-7-1

/// Reduces an alphanumeric string modulo 97, reading it left to right.
///
/// Each character is converted to its numeric value:
/// - Digits `0`–`9` map to 0–9.
/// - Letters `A`–`Z` map to 10–35.
///
/// The resulting decimal expansion is reduced incrementally: for each
/// character, `remainder = (remainder * base + value) % 97`, where `base` is
/// 10 for a one-digit expansion (digits) and 100 for a two-digit expansion
/// (letters). The running remainder never exceeds 96, so the intermediate
/// product fits a `u32` for inputs of any length.
///
/// Bytes outside `[0-9A-Z]` are skipped.
///
/// # Examples
///
/// ```
/// use finident_core::check_digits::mod97_10;
///
/// // DE89370400440532013000 with its first four characters moved to the end.
/// assert_eq!(mod97_10("370400440532013000DE89"), 1);
/// ```
pub fn mod97_10(value: &str) -> u32 {
    mod97_bytes(0, value.as_bytes())
}

/// Continues a running MOD 97 reduction over `bytes`.
fn mod97_bytes(start: u32, bytes: &[u8]) -> u32 {
    let mut remainder = start;
    for byte in bytes {
        match byte {
            b'0'..=b'9' => {
                let digit = u32::from(byte - b'0');
                remainder = (remainder * 10 + digit) % 97;
            }
            b'A'..=b'Z' => {
                let value = u32::from(byte - b'A') + 10;
                remainder = (remainder * 100 + value) % 97;
            }
            _ => {}
        }
    }
    remainder
}

/// Verifies the ISO 7064 MOD 97-10 checksum of a normalized IBAN.
///
/// **Pre-condition:** `iban` is upper-case and free of separators. The
/// first four characters (country code and check digits) are moved to the
/// end without building the rotated string: the reduction simply runs over
/// `iban[4..]` and then continues over `iban[..4]`.
///
/// Returns `false` for inputs shorter than five characters.
///
/// # Examples
///
/// ```
/// use finident_core::check_digits::iban_mod97;
///
/// assert!(iban_mod97("DE89370400440532013000"));
/// assert!(!iban_mod97("DE89370400440532013001"));
/// ```
pub fn iban_mod97(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    if bytes.len() < 5 {
        return false;
    }
    let (prefix, bban) = bytes.split_at(4);
    mod97_bytes(mod97_bytes(0, bban), prefix) == 1
}

/// Computes the two IBAN check digits for `country` and `bban`.
///
/// The check digits are `98 - (bban ‖ country ‖ "00") mod 97`, rendered as
/// two decimal digits. Returns `None` when `country` is not two upper-case
/// ASCII letters or `bban` contains anything besides `[0-9A-Z]`.
///
/// # Examples
///
/// ```
/// use finident_core::check_digits::iban_check_digits;
///
/// assert_eq!(iban_check_digits("DE", "370400440532013000").as_deref(), Some("89"));
/// ```
pub fn iban_check_digits(country: &str, bban: &str) -> Option<String> {
    let country_ok = country.len() == 2 && country.bytes().all(|b| b.is_ascii_uppercase());
    let bban_ok = !bban.is_empty()
        && bban
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase());
    if !country_ok || !bban_ok {
        return None;
    }
    let remainder = mod97_bytes(mod97_bytes(mod97_bytes(0, bban.as_bytes()), country.as_bytes()), b"00");
    Some(format!("{:02}", 98 - remainder))
}

/// Verifies the Luhn checksum of a digit string.
///
/// **Pre-condition:** the caller has confirmed `digits` is non-empty and
/// all ASCII digits; any other byte makes the function return `false`.
///
/// # Algorithm
///
/// From the rightmost digit moving left, every second digit is doubled; a
/// doubled value above 9 has 9 subtracted. The number is valid iff the sum
/// of all resulting digits is a multiple of 10.
///
/// # Examples
///
/// ```
/// use finident_core::check_digits::luhn;
///
/// assert!(luhn("4532015112830366"));
/// assert!(!luhn("4532015112830367"));
/// ```
pub fn luhn(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum: u32 = 0;
    for (i, byte) in digits.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let mut digit = u32::from(byte - b'0');
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Computes the Luhn check digit to append to `payload`.
///
/// Returns `None` when `payload` is empty or not all ASCII digits.
///
/// # Examples
///
/// ```
/// use finident_core::check_digits::luhn_check_digit;
///
/// assert_eq!(luhn_check_digit("453201511283036"), Some(6));
/// ```
pub fn luhn_check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut sum: u32 = 0;
    // With the check digit appended, the payload's last digit is doubled.
    for (i, byte) in payload.bytes().rev().enumerate() {
        let mut digit = u32::from(byte - b'0');
        if i % 2 == 0 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    u8::try_from((10 - sum % 10) % 10).ok()
}

/// Position weights of the ABA routing number checksum.
const ABA_WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

/// Verifies the weighted ABA routing number checksum.
///
/// The nine digits are multiplied by `3 7 1 3 7 1 3 7 1` left to right; the
/// number is valid iff the sum of products is a multiple of 10. Returns
/// `false` unless `digits` is exactly nine ASCII digits.
///
/// The Federal Reserve symbol range is a separate rule; see
/// [`is_valid_federal_reserve_symbol`].
///
/// # Examples
///
/// ```
/// use finident_core::check_digits::aba_routing;
///
/// assert!(aba_routing("021000021"));
/// assert!(!aba_routing("021000020"));
/// ```
pub fn aba_routing(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    if bytes.len() != 9 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let sum: u32 = bytes
        .iter()
        .zip(ABA_WEIGHTS)
        .map(|(byte, weight)| u32::from(byte - b'0') * weight)
        .sum();
    sum % 10 == 0
}

/// Returns `true` if `symbol` (the first two routing digits) is assigned.
///
/// Valid ranges: 00 (U.S. Government), 01–12 (Federal Reserve districts),
/// 21–32 (thrift institutions), 61–72 (electronic transactions) and 80
/// (traveler's cheques).
pub fn is_valid_federal_reserve_symbol(symbol: u8) -> bool {
    matches!(symbol, 0..=12 | 21..=32 | 61..=72 | 80)
}
