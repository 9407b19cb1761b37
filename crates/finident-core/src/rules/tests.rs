#![allow(clippy::expect_used)]

use super::tables::{BBAN_RULES, IBAN_RULES};
use super::*;

const DE_SEGMENTS: &[Segment] = &[
    Segment::new(CharClass::Numeric, 8),
    Segment::new(CharClass::Numeric, 10),
];

/// A fictional jurisdiction used to extend the registry.
const EXTRA_RULE: IbanRule = IbanRule::new(
    20,
    &[
        Segment::new(CharClass::Alpha, 4),
        Segment::new(CharClass::Numeric, 12),
    ],
);

/// One registry example per jurisdiction used by the independence check.
const VECTORS: &[(CountryCode, &str)] = &[
    (CountryCode::De, "DE89370400440532013000"),
    (CountryCode::Gb, "GB29NWBK60161331926819"),
    (CountryCode::Fr, "FR1420041010050500013M02606"),
    (CountryCode::No, "NO9386011117947"),
    (CountryCode::Mu, "MU17BOMM0101101030300200000MUR"),
    (CountryCode::Br, "BR1800360305000010009795493C1"),
];

fn outcome(rules: &CountryRules, country: CountryCode, iban: &str) -> (Option<RuleViolation>, Option<RuleViolation>) {
    (
        rules.check_iban_length(Some(country), iban),
        rules.check_iban_structure(country, &iban[4..]),
    )
}

#[test]
fn standard_tables_pass_entry_validation() {
    let rebuilt = CountryRules::new(IBAN_RULES, BBAN_RULES).expect("standard tables are consistent");
    assert_eq!(rebuilt.iban_countries(), CountryRules::standard().iban_countries());
    assert_eq!(rebuilt.bban_countries(), CountryRules::standard().bban_countries());
}

#[test]
fn standard_table_sizes() {
    assert_eq!(CountryRules::standard().iban_countries().len(), 87);
    assert_eq!(CountryRules::standard().bban_countries().len(), 22);
}

#[test]
fn tables_are_sorted_by_country() {
    assert!(IBAN_RULES.windows(2).all(|w| w[0].0 < w[1].0));
    assert!(BBAN_RULES.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn every_enum_jurisdiction_has_exactly_one_rule() {
    let rules = CountryRules::standard();
    for &cc in CountryCode::JURISDICTIONS {
        let iban = rules.iban_rule(cc).is_some();
        let bban = rules.bban_rule(cc).is_some();
        assert!(iban ^ bban, "{cc} must be in exactly one table");
    }
    assert!(rules.iban_rule(CountryCode::All).is_none());
    assert!(rules.bban_rule(CountryCode::All).is_none());
}

#[test]
fn adding_a_jurisdiction_leaves_existing_outcomes_unchanged() {
    let mut extended: Vec<(CountryCode, IbanRule)> = IBAN_RULES.to_vec();
    extended.retain(|(cc, _)| *cc != CountryCode::Xk);
    let reduced = CountryRules::new(&extended, BBAN_RULES).expect("reduced registry");
    extended.push((CountryCode::Xk, EXTRA_RULE));
    let with_extra = CountryRules::new(&extended, BBAN_RULES).expect("extended registry");

    for &(country, iban) in VECTORS {
        assert_eq!(
            outcome(&reduced, country, iban),
            outcome(&with_extra, country, iban),
            "{country} changed after adding a jurisdiction"
        );
        assert_eq!(outcome(&with_extra, country, iban), (None, None));
    }
}

#[test]
fn new_rejects_bad_iban_length() {
    let err = CountryRules::new(&[(CountryCode::De, IbanRule::new(40, DE_SEGMENTS))], &[])
        .expect_err("length 40 is out of range");
    assert_eq!(
        err,
        ConfigError::IbanLengthOutOfRange {
            country: CountryCode::De,
            length: 40
        }
    );
}

#[test]
fn new_rejects_pattern_not_filling_length() {
    let err = CountryRules::new(&[(CountryCode::De, IbanRule::new(23, DE_SEGMENTS))], &[])
        .expect_err("18 + 4 != 23");
    assert!(matches!(err, ConfigError::InconsistentBbanPattern { .. }));
    assert!(err.to_string().contains("8!n10!n"));
}

#[test]
fn new_rejects_duplicates_across_tables() {
    let err = CountryRules::new(
        &[(CountryCode::De, IbanRule::new(22, DE_SEGMENTS))],
        &[(CountryCode::De, BbanRule::new(5, 10, CharClass::Numeric))],
    )
    .expect_err("DE listed twice");
    assert_eq!(err, ConfigError::DuplicateCountry { country: CountryCode::De });
}

#[test]
fn new_rejects_inverted_bban_bounds_and_all_key() {
    assert!(matches!(
        CountryRules::new(&[], &[(CountryCode::Us, BbanRule::new(10, 4, CharClass::Numeric))]),
        Err(ConfigError::InvalidBbanBounds { .. })
    ));
    assert_eq!(
        CountryRules::new(&[], &[(CountryCode::All, BbanRule::new(1, 4, CharClass::Numeric))])
            .expect_err("ALL is reserved"),
        ConfigError::ReservedCountry
    );
}

#[test]
fn notation_matches_registry_format() {
    let rules = CountryRules::standard();
    let de = rules.iban_rule(CountryCode::De).expect("DE rule");
    assert_eq!(de.notation(), "8!n10!n");
    let br = rules.iban_rule(CountryCode::Br).expect("BR rule");
    assert_eq!(br.notation(), "8!n5!n10!n1!a1!c");
}

#[test]
fn first_mismatch_reports_position_and_class() {
    let gb = CountryRules::standard().iban_rule(CountryCode::Gb).expect("GB rule");
    assert_eq!(gb.first_mismatch("NWBK60161331926819"), None);
    assert_eq!(gb.first_mismatch("NW1K60161331926819"), Some((2, CharClass::Alpha)));
    assert_eq!(gb.first_mismatch("NWBK6016133192681X"), Some((17, CharClass::Numeric)));
    // Short input: only present characters are compared.
    assert_eq!(gb.first_mismatch("NWBK"), None);
}

#[test]
fn iban_length_for_registered_and_unknown_country() {
    let rules = CountryRules::standard();
    assert_eq!(rules.check_iban_length(Some(CountryCode::De), "DE89370400440532013000"), None);
    assert_eq!(
        rules.check_iban_length(Some(CountryCode::De), "DE8937040044053201300"),
        Some(RuleViolation::Length {
            expected: 22,
            actual: 21
        })
    );
    assert_eq!(rules.check_iban_length(None, "ZZ12345678901234"), None);
    assert_eq!(
        rules.check_iban_length(None, "ZZ1234"),
        Some(RuleViolation::LengthRange {
            min: 15,
            max: 34,
            actual: 6
        })
    );
}

#[test]
fn check_bban_for_iban_jurisdiction_uses_its_pattern() {
    let rules = CountryRules::standard();
    assert!(rules.check_bban(CountryCode::De, "370400440532013000").is_empty());
    let violations = rules.check_bban(CountryCode::De, "37040044053201300A1");
    assert_eq!(violations.len(), 2);
    assert!(matches!(violations[0], RuleViolation::Length { expected: 18, actual: 19 }));
    assert!(matches!(violations[1], RuleViolation::Character { position: 17, .. }));
}

#[test]
fn check_bban_for_bban_only_jurisdiction_uses_range() {
    let rules = CountryRules::standard();
    assert!(rules.check_bban(CountryCode::Us, "123456789").is_empty());
    assert_eq!(
        rules.check_bban(CountryCode::Us, "123"),
        vec![RuleViolation::LengthRange {
            min: 4,
            max: 17,
            actual: 3
        }]
    );
    assert_eq!(
        rules.check_bban(CountryCode::Jp, "12345A7"),
        vec![RuleViolation::Character {
            position: 5,
            expected: CharClass::Numeric
        }]
    );
}

#[test]
fn check_bban_is_permissive_for_all() {
    let rules = CountryRules::standard();
    assert!(rules.check_bban(CountryCode::All, "ANYTHING123").is_empty());
}

#[test]
fn prefix_lookup_only_finds_iban_jurisdictions() {
    let rules = CountryRules::standard();
    assert_eq!(rules.iban_country_for_prefix("DE"), Some(CountryCode::De));
    assert_eq!(rules.iban_country_for_prefix("US"), None);
    assert_eq!(rules.iban_country_for_prefix("ZZ"), None);
}

#[test]
fn violation_messages() {
    assert_eq!(
        RuleViolation::Length {
            expected: 22,
            actual: 21
        }
        .to_string(),
        "expected 22 characters, got 21"
    );
    assert_eq!(
        RuleViolation::LengthRange {
            min: 7,
            max: 7,
            actual: 6
        }
        .to_string(),
        "expected 7 characters, got 6"
    );
    assert_eq!(
        RuleViolation::Character {
            position: 0,
            expected: CharClass::Alpha
        }
        .to_string(),
        "character 1 must be one of letters"
    );
}
