//! Property-based tests for normalization and the identifier factories.
//!
//! Valid identifiers are synthesized from the country rules and the
//! check-digit functions, so every registered jurisdiction is exercised
//! without a fixed corpus.
#![allow(clippy::expect_used)]

use finident_core::{
    AccountIdentifier, CharClass, CountryCode, CountryRules, CreditCardNumber, ErrorCode,
    RoutingNumber, SwiftCode, iban_check_digits, is_valid_federal_reserve_symbol, luhn,
    luhn_check_digit, normalize,
};
use proptest::prelude::*;

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALNUM: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn pick(class: CharClass, seed: u8) -> char {
    let set = match class {
        CharClass::Numeric => DIGITS,
        CharClass::Alpha => LETTERS,
        CharClass::Alphanumeric => ALNUM,
    };
    char::from(set[usize::from(seed) % set.len()])
}

/// Builds a structurally valid IBAN for the `index`-th registered country.
fn synth_iban(index: usize, seeds: &[u8]) -> String {
    let rules = CountryRules::standard();
    let countries = rules.iban_countries();
    let country = countries[index % countries.len()];
    let rule = rules.iban_rule(country).expect("registered");
    let classes = rule
        .bban
        .iter()
        .flat_map(|s| std::iter::repeat_n(s.class, usize::from(s.count)));
    let bban: String = classes
        .zip(seeds.iter().cycle())
        .map(|(class, &seed)| pick(class, seed))
        .collect();
    let check = iban_check_digits(country.as_str(), &bban).expect("valid parts");
    format!("{}{check}{bban}", country.as_str())
}

/// Appends the ABA check digit to eight digits.
fn synth_routing(first_eight: &str) -> String {
    let sum: u32 = first_eight
        .bytes()
        .zip([3u32, 7, 1, 3, 7, 1, 3, 7])
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    format!("{first_eight}{}", (10 - sum % 10) % 10)
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[a-zA-Z0-9 \\-\t]{0,40}|\\PC{0,24}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn instance_exists_iff_result_is_valid(raw in "[A-Z0-9 ]{0,36}|\\PC{0,40}") {
        let (result, account) = AccountIdentifier::try_create(&raw, None);
        prop_assert_eq!(result.is_valid(), account.is_some());
        let (result, account) = AccountIdentifier::try_create(&raw, Some(CountryCode::De));
        prop_assert_eq!(result.is_valid(), account.is_some());
        let (result, routing) = RoutingNumber::try_create(&raw, None);
        prop_assert_eq!(result.is_valid(), routing.is_some());
        let (result, swift) = SwiftCode::try_create(&raw, None);
        prop_assert_eq!(result.is_valid(), swift.is_some());
        let (result, card) = CreditCardNumber::try_create(&raw, None);
        prop_assert_eq!(result.is_valid(), card.is_some());
    }

    #[test]
    fn synthesized_ibans_validate(index in 0usize..200, seeds in prop::collection::vec(any::<u8>(), 1..32)) {
        let iban = synth_iban(index, &seeds);
        let (result, account) = AccountIdentifier::try_create(&iban, None);
        prop_assert!(result.is_valid(), "{}: {}", iban, result);
        let account = account.expect("valid");
        prop_assert_eq!(account.normalized_value(), iban.as_str());
    }

    #[test]
    fn iban_display_round_trip(index in 0usize..200, seeds in prop::collection::vec(any::<u8>(), 1..32)) {
        let iban = synth_iban(index, &seeds);
        let account = AccountIdentifier::try_create(&iban, None).1.expect("valid");
        let shown = account.to_formatted_string();
        let (result, again) = AccountIdentifier::try_create(&shown.to_lowercase(), None);
        prop_assert!(result.is_valid());
        let again = again.expect("valid");
        prop_assert_eq!(again.normalized_value(), account.normalized_value());
        prop_assert_eq!(again, account);
    }

    #[test]
    fn swapping_adjacent_distinct_characters_is_detected(
        index in 0usize..200,
        seeds in prop::collection::vec(any::<u8>(), 1..32),
        at in 4usize..34,
    ) {
        let iban = synth_iban(index, &seeds);
        let mut bytes = iban.clone().into_bytes();
        let at = at.min(bytes.len() - 2);
        prop_assume!(bytes[at] != bytes[at + 1]);
        prop_assume!(bytes[at].is_ascii_digit() && bytes[at + 1].is_ascii_digit());
        bytes.swap(at, at + 1);
        let swapped = String::from_utf8(bytes).expect("ASCII");
        prop_assert!(!AccountIdentifier::try_create(&swapped, None).0.is_valid());
    }

    #[test]
    fn repeated_digit_cards_always_fail(digit in 0u8..10, len in 13usize..=19) {
        let raw = char::from(b'0' + digit).to_string().repeat(len);
        let (result, card) = CreditCardNumber::try_create(&raw, None);
        prop_assert!(card.is_none());
        prop_assert!(result.has_code(ErrorCode::InvalidFormat));
        prop_assert_eq!(result.has_code(ErrorCode::InvalidChecksum), !luhn(&raw));
    }

    #[test]
    fn luhn_completed_cards_validate(payload in "[1-9][0-9]{11,17}") {
        let check = luhn_check_digit(&payload).expect("digits");
        let pan = format!("{payload}{check}");
        let repeated = pan.bytes().all(|b| b == pan.as_bytes()[0]);
        let (result, card) = CreditCardNumber::try_create(&pan, None);
        prop_assert_eq!(result.is_valid(), !repeated, "{}: {}", pan, result);
        if let Some(card) = card {
            prop_assert_eq!(card.last_four(), &pan[pan.len() - 4..]);
        }
    }

    #[test]
    fn routing_checksum_and_symbol_are_independent(body in "[0-9]{8}") {
        let routing = synth_routing(&body);
        let symbol: u8 = routing[..2].parse().expect("two digits");
        let (result, number) = RoutingNumber::try_create(&routing, None);
        prop_assert!(!result.has_code(ErrorCode::InvalidChecksum));
        prop_assert_eq!(
            result.has_code(ErrorCode::InvalidFederalReserveSymbol),
            !is_valid_federal_reserve_symbol(symbol)
        );
        prop_assert_eq!(number.is_some(), is_valid_federal_reserve_symbol(symbol));
    }

    #[test]
    fn bic8_equals_bic11_primary_office(
        institution in "[A-Z]{4}",
        country in prop::sample::select(vec!["DE", "GB", "US", "FR", "JP", "CH", "XK"]),
        location in "[A-Z2-9][A-Z1-9]",
    ) {
        let short = format!("{institution}{country}{location}");
        let long = format!("{short}XXX");
        let a = SwiftCode::try_create(&short, None).1.expect("valid BIC8");
        let b = SwiftCode::try_create(&long, None).1.expect("valid BIC11");
        prop_assert_eq!(a.to_full_format(), long.clone());
        prop_assert_eq!(b.to_full_format(), long);
        prop_assert_eq!(a, b);
    }
}
