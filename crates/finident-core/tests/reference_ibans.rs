//! Registry example IBANs, one per supported jurisdiction.
//!
//! Every example must validate with no findings, expose its own country, and
//! survive the display round trip. Substituting any single character with
//! another of the same class (digit for digit, letter for letter) must be
//! caught by the MOD 97-10 check.
#![allow(clippy::expect_used)]

use finident_core::{AccountIdentifier, AccountType, CountryCode, CountryRules, iban_mod97};

const REFERENCE_IBANS: &[(CountryCode, &str)] = &[
    (CountryCode::Ad, "AD1200012030200359100100"),
    (CountryCode::Ae, "AE070331234567890123456"),
    (CountryCode::Al, "AL47212110090000000235698741"),
    (CountryCode::At, "AT611904300234573201"),
    (CountryCode::Az, "AZ21NABZ00000000137010001944"),
    (CountryCode::Ba, "BA391290079401028494"),
    (CountryCode::Be, "BE68539007547034"),
    (CountryCode::Bg, "BG80BNBG96611020345678"),
    (CountryCode::Bh, "BH67BMAG00001299123456"),
    (CountryCode::Bi, "BI4210000100010000332045181"),
    (CountryCode::Br, "BR1800360305000010009795493C1"),
    (CountryCode::By, "BY13NBRB3600900000002Z00AB00"),
    (CountryCode::Ch, "CH9300762011623852957"),
    (CountryCode::Cr, "CR05015202001026284066"),
    (CountryCode::Cy, "CY17002001280000001200527600"),
    (CountryCode::Cz, "CZ6508000000192000145399"),
    (CountryCode::De, "DE89370400440532013000"),
    (CountryCode::Dj, "DJ2100010000000154000100186"),
    (CountryCode::Dk, "DK5000400440116243"),
    (CountryCode::Do, "DO28BAGR00000001212453611324"),
    (CountryCode::Ee, "EE382200221020145685"),
    (CountryCode::Eg, "EG380019000500000000263180002"),
    (CountryCode::Es, "ES9121000418450200051332"),
    (CountryCode::Fi, "FI2112345600000785"),
    (CountryCode::Fk, "FK88SC123456789012"),
    (CountryCode::Fo, "FO6264600001631634"),
    (CountryCode::Fr, "FR1420041010050500013M02606"),
    (CountryCode::Gb, "GB29NWBK60161331926819"),
    (CountryCode::Ge, "GE29NB0000000101904917"),
    (CountryCode::Gi, "GI75NWBK000000007099453"),
    (CountryCode::Gl, "GL8964710001000206"),
    (CountryCode::Gr, "GR1601101250000000012300695"),
    (CountryCode::Gt, "GT82TRAJ01020000001210029690"),
    (CountryCode::Hr, "HR1210010051863000160"),
    (CountryCode::Hu, "HU42117730161111101800000000"),
    (CountryCode::Ie, "IE29AIBK93115212345678"),
    (CountryCode::Il, "IL620108000000099999999"),
    (CountryCode::Iq, "IQ98NBIQ850123456789012"),
    (CountryCode::Is, "IS140159260076545510730339"),
    (CountryCode::It, "IT60X0542811101000000123456"),
    (CountryCode::Jo, "JO94CBJO0010000000000131000302"),
    (CountryCode::Kw, "KW81CBKU0000000000001234560101"),
    (CountryCode::Kz, "KZ86125KZT5004100100"),
    (CountryCode::Lb, "LB62099900000001001901229114"),
    (CountryCode::Lc, "LC55HEMM000100010012001200023015"),
    (CountryCode::Li, "LI21088100002324013AA"),
    (CountryCode::Lt, "LT121000011101001000"),
    (CountryCode::Lu, "LU280019400644750000"),
    (CountryCode::Lv, "LV80BANK0000435195001"),
    (CountryCode::Ly, "LY83002048000020100120361"),
    (CountryCode::Mc, "MC5811222000010123456789030"),
    (CountryCode::Md, "MD24AG000225100013104168"),
    (CountryCode::Me, "ME25505000012345678951"),
    (CountryCode::Mk, "MK07250120000058984"),
    (CountryCode::Mn, "MN121234123456789123"),
    (CountryCode::Mr, "MR1300020001010000123456753"),
    (CountryCode::Mt, "MT84MALT011000012345MTLCAST001S"),
    (CountryCode::Mu, "MU17BOMM0101101030300200000MUR"),
    (CountryCode::Ni, "NI45BAPR00000013000003558124"),
    (CountryCode::Nl, "NL91ABNA0417164300"),
    (CountryCode::No, "NO9386011117947"),
    (CountryCode::Om, "OM810180000001299123456"),
    (CountryCode::Pk, "PK36SCBL0000001123456702"),
    (CountryCode::Pl, "PL61109010140000071219812874"),
    (CountryCode::Ps, "PS92PALS000000000400123456702"),
    (CountryCode::Pt, "PT50000201231234567890154"),
    (CountryCode::Qa, "QA58DOHB00001234567890ABCDEFG"),
    (CountryCode::Ro, "RO49AAAA1B31007593840000"),
    (CountryCode::Rs, "RS35260005601001611379"),
    (CountryCode::Ru, "RU0304452522540817810538091310419"),
    (CountryCode::Sa, "SA0380000000608010167519"),
    (CountryCode::Sc, "SC18SSCB11010000000000001497USD"),
    (CountryCode::Sd, "SD2129010501234001"),
    (CountryCode::Se, "SE4550000000058398257466"),
    (CountryCode::Si, "SI56263300012039086"),
    (CountryCode::Sk, "SK3112000000198742637541"),
    (CountryCode::Sm, "SM86U0322509800000000270100"),
    (CountryCode::So, "SO211000001001000100141"),
    (CountryCode::St, "ST68000100010051845310112"),
    (CountryCode::Sv, "SV62CENR00000000000000700025"),
    (CountryCode::Tl, "TL380080012345678910157"),
    (CountryCode::Tn, "TN5910006035183598478831"),
    (CountryCode::Tr, "TR330006100519786457841326"),
    (CountryCode::Ua, "UA213223130000026007233566001"),
    (CountryCode::Va, "VA59001123000012345678"),
    (CountryCode::Vg, "VG96VPVG0000012345678901"),
    (CountryCode::Xk, "XK051212012345678906"),
];

#[test]
fn corpus_covers_every_registered_jurisdiction() {
    let mut covered: Vec<CountryCode> = REFERENCE_IBANS.iter().map(|(cc, _)| *cc).collect();
    covered.sort_unstable();
    covered.dedup();
    assert_eq!(covered, CountryRules::standard().iban_countries());
}

#[test]
fn every_reference_iban_is_valid() {
    for &(country, iban) in REFERENCE_IBANS {
        let (result, account) = AccountIdentifier::try_create(iban, None);
        assert!(result.is_valid(), "{iban}: {result}");
        let account = account.expect("valid IBAN yields an instance");
        assert_eq!(account.account_type(), AccountType::Iban);
        assert_eq!(account.country_code(), Some(country), "{iban}");
        assert_eq!(account.normalized_value(), iban);
    }
}

#[test]
fn every_reference_iban_matches_its_context() {
    for &(country, iban) in REFERENCE_IBANS {
        let (result, _) = AccountIdentifier::try_create(iban, Some(country));
        assert!(result.is_valid(), "{iban}: {result}");
    }
}

#[test]
fn reference_bbans_convert_back_to_their_iban() {
    for &(country, iban) in REFERENCE_IBANS {
        let bban = &iban[4..];
        // A BBAN starting with two letters and two digits takes the IBAN branch.
        if AccountType::classify(bban) != AccountType::Bban {
            continue;
        }
        let (result, account) = AccountIdentifier::try_create(bban, Some(country));
        assert!(result.is_valid(), "{iban}: {result}");
        let rebuilt = account.and_then(|a| a.to_iban()).expect("IBAN jurisdiction");
        assert_eq!(rebuilt.normalized_value(), iban);
    }
}

#[test]
fn display_round_trip_preserves_value() {
    for &(_, iban) in REFERENCE_IBANS {
        let account = AccountIdentifier::try_create(iban, None)
            .1
            .expect("valid");
        let shown = account.to_formatted_string();
        assert!(shown.split(' ').all(|g| g.len() <= 4), "{shown}");
        let (result, again) = AccountIdentifier::try_create(&shown, None);
        assert!(result.is_valid(), "{shown}: {result}");
        assert_eq!(again.expect("valid"), account);
    }
}

#[test]
fn single_character_substitution_fails_checksum() {
    for &(_, iban) in REFERENCE_IBANS {
        let bytes = iban.as_bytes();
        for (pos, &original) in bytes.iter().enumerate() {
            let alphabet: &[u8] = if original.is_ascii_digit() {
                b"0123456789"
            } else {
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZ"
            };
            for &replacement in alphabet.iter().filter(|&&c| c != original) {
                let mut flipped = bytes.to_vec();
                flipped[pos] = replacement;
                let flipped = String::from_utf8(flipped).expect("ASCII");
                assert!(!iban_mod97(&flipped), "{iban} -> {flipped} passed MOD 97-10");
                let (result, account) = AccountIdentifier::try_create(&flipped, None);
                assert!(!result.is_valid(), "{flipped} accepted");
                assert!(account.is_none());
            }
        }
    }
}
