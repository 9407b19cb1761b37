//! Deterministic generators of valid identifiers.
//!
//! Every value is assembled from the registered country rules and completed
//! with the check-digit functions of `finident-core`, so it passes the
//! matching factory. The same seed always yields the same corpus.

use finident_core::{
    CharClass, CountryRules, aba_routing, iban_check_digits, is_valid_federal_reserve_symbol,
    luhn_check_digit,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Second location character; `0` would make a test BIC.
const LOCATION_TAIL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789";

/// Issuer prefixes with the number length issued under them.
const CARD_PREFIXES: &[(&str, usize)] = &[
    ("4", 16),
    ("4", 13),
    ("51", 16),
    ("55", 16),
    ("2221", 16),
    ("34", 15),
    ("37", 15),
    ("6011", 16),
    ("65", 16),
    ("3530", 16),
    ("36", 14),
    ("62", 19),
];

/// Predefined corpus sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 values.
    Small,
    /// 10 000 values.
    Medium,
    /// 100 000 values.
    Large,
}

impl SizeTier {
    /// Number of values generated for this tier.
    pub fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Medium => 10_000,
            Self::Large => 100_000,
        }
    }
}

fn pick(rng: &mut StdRng, set: &[u8]) -> char {
    char::from(set[rng.gen_range(0..set.len())])
}

fn class_chars(class: CharClass) -> &'static [u8] {
    match class {
        CharClass::Numeric => DIGITS,
        CharClass::Alpha => LETTERS,
        CharClass::Alphanumeric => ALPHANUM,
    }
}

/// Splits `value` into space-separated groups of four, as IBANs are printed.
fn group4(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generates `count` valid IBANs across every registered jurisdiction.
///
/// Roughly half are printed in groups of four so the normalizer has work
/// to do.
pub fn generate_ibans(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rules = CountryRules::standard();
    let countries = rules.iban_countries();
    let mut out = Vec::with_capacity(count);

    while out.len() < count {
        let Some(&country) = countries.choose(&mut rng) else {
            break;
        };
        let Some(rule) = rules.iban_rule(country) else {
            continue;
        };
        let bban: String = rule
            .bban
            .iter()
            .flat_map(|s| std::iter::repeat_n(s.class, usize::from(s.count)))
            .map(|class| pick(&mut rng, class_chars(class)))
            .collect();
        let Some(check) = iban_check_digits(country.as_str(), &bban) else {
            continue;
        };
        let iban = format!("{country}{check}{bban}");
        if rng.gen_bool(0.5) {
            out.push(group4(&iban));
        } else {
            out.push(iban);
        }
    }
    out
}

/// Generates `count` valid card numbers over the common issuer prefixes.
pub fn generate_cards(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);

    while out.len() < count {
        let Some(&(prefix, len)) = CARD_PREFIXES.choose(&mut rng) else {
            break;
        };
        let mut payload = prefix.to_owned();
        while payload.len() < len - 1 {
            payload.push(pick(&mut rng, DIGITS));
        }
        let Some(check) = luhn_check_digit(&payload) else {
            continue;
        };
        let pan = format!("{payload}{check}");
        // A single repeated digit is rejected even with a valid checksum.
        if pan.bytes().all(|b| b == pan.as_bytes()[0]) {
            continue;
        }
        out.push(pan);
    }
    out
}

/// Generates `count` valid ABA routing numbers.
///
/// The Federal Reserve symbol is drawn from the assigned ranges and the
/// ninth digit is the one that satisfies the 3-7-1 checksum.
pub fn generate_routing_numbers(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let symbols: Vec<u8> = (0u8..100)
        .filter(|&s| is_valid_federal_reserve_symbol(s))
        .collect();
    let mut out = Vec::with_capacity(count);

    while out.len() < count {
        let Some(&symbol) = symbols.choose(&mut rng) else {
            break;
        };
        let mut body = format!("{symbol:02}");
        for _ in 0..6 {
            body.push(pick(&mut rng, DIGITS));
        }
        let Some(routing) = (0..10u8)
            .map(|d| format!("{body}{d}"))
            .find(|candidate| aba_routing(candidate))
        else {
            continue;
        };
        out.push(routing);
    }
    out
}

/// Generates `count` valid production BICs, mixing 8- and 11-character
/// forms.
pub fn generate_bics(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rules = CountryRules::standard();
    let mut countries = rules.iban_countries();
    countries.extend(rules.bban_countries());
    let mut out = Vec::with_capacity(count);

    while out.len() < count {
        let Some(&country) = countries.choose(&mut rng) else {
            break;
        };
        let mut bic: String = (0..4).map(|_| pick(&mut rng, LETTERS)).collect();
        bic.push_str(country.as_str());
        bic.push(pick(&mut rng, ALPHANUM));
        bic.push(pick(&mut rng, LOCATION_TAIL));
        match rng.gen_range(0..4) {
            0 => bic.push_str("XXX"),
            1 => {
                for _ in 0..3 {
                    bic.push(pick(&mut rng, ALPHANUM));
                }
            }
            _ => {}
        }
        out.push(bic);
    }
    out
}

/// Returns a copy of `values` with one digit of each value replaced by a
/// different digit.
///
/// MOD 97-10, Luhn and the ABA checksum all detect a single substituted
/// digit, so corrupted IBANs, card numbers and routing numbers are invalid.
/// Values without digits are returned unchanged.
pub fn corrupt(values: &[String], seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    values
        .iter()
        .map(|value| {
            let positions: Vec<usize> = value
                .bytes()
                .enumerate()
                .filter(|(_, b)| b.is_ascii_digit())
                .map(|(i, _)| i)
                .collect();
            let Some(&at) = positions.choose(&mut rng) else {
                return value.clone();
            };
            let mut bytes = value.clone().into_bytes();
            let old = bytes[at] - b'0';
            let new = (old + rng.gen_range(1..10)) % 10;
            bytes[at] = b'0' + new;
            String::from_utf8(bytes).unwrap_or_else(|_| value.clone())
        })
        .collect()
}
