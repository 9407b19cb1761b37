//! Static country rule data.
//!
//! IBAN entries follow the SWIFT IBAN registry: total length and the BBAN
//! structure that follows the four-character prefix, written in the
//! registry's `<count><class>` notation (`n` digits, `a` upper-case letters,
//! `c` upper-case alphanumerics).
//!
//! BBAN-only entries cover jurisdictions without an IBAN. Their domestic
//! formats have no international grammar, so only a length range and a
//! character class are recorded.
use super::{BbanRule, CharClass, IbanRule, Segment};
use crate::country::CountryCode;

const fn n(count: u8) -> Segment {
    Segment::new(CharClass::Numeric, count)
}

const fn a(count: u8) -> Segment {
    Segment::new(CharClass::Alpha, count)
}

const fn c(count: u8) -> Segment {
    Segment::new(CharClass::Alphanumeric, count)
}

/// IBAN jurisdictions, sorted by country code.
pub(super) static IBAN_RULES: &[(CountryCode, IbanRule)] = &[
    (CountryCode::Ad, IbanRule::new(24, &[n(4), n(4), c(12)])),
    (CountryCode::Ae, IbanRule::new(23, &[n(3), n(16)])),
    (CountryCode::Al, IbanRule::new(28, &[n(8), c(16)])),
    (CountryCode::At, IbanRule::new(20, &[n(5), n(11)])),
    (CountryCode::Az, IbanRule::new(28, &[a(4), c(20)])),
    (CountryCode::Ba, IbanRule::new(20, &[n(3), n(3), n(8), n(2)])),
    (CountryCode::Be, IbanRule::new(16, &[n(3), n(7), n(2)])),
    (CountryCode::Bg, IbanRule::new(22, &[a(4), n(4), n(2), c(8)])),
    (CountryCode::Bh, IbanRule::new(22, &[a(4), c(14)])),
    (CountryCode::Bi, IbanRule::new(27, &[n(5), n(5), n(11), n(2)])),
    (CountryCode::Br, IbanRule::new(29, &[n(8), n(5), n(10), a(1), c(1)])),
    (CountryCode::By, IbanRule::new(28, &[c(4), n(4), c(16)])),
    (CountryCode::Ch, IbanRule::new(21, &[n(5), c(12)])),
    (CountryCode::Cr, IbanRule::new(22, &[n(4), n(14)])),
    (CountryCode::Cy, IbanRule::new(28, &[n(3), n(5), c(16)])),
    (CountryCode::Cz, IbanRule::new(24, &[n(4), n(6), n(10)])),
    (CountryCode::De, IbanRule::new(22, &[n(8), n(10)])),
    (CountryCode::Dj, IbanRule::new(27, &[n(5), n(5), n(11), n(2)])),
    (CountryCode::Dk, IbanRule::new(18, &[n(4), n(9), n(1)])),
    (CountryCode::Do, IbanRule::new(28, &[c(4), n(20)])),
    (CountryCode::Ee, IbanRule::new(20, &[n(2), n(2), n(11), n(1)])),
    (CountryCode::Eg, IbanRule::new(29, &[n(4), n(4), n(17)])),
    (CountryCode::Es, IbanRule::new(24, &[n(4), n(4), n(1), n(1), n(10)])),
    (CountryCode::Fi, IbanRule::new(18, &[n(3), n(11)])),
    (CountryCode::Fk, IbanRule::new(18, &[a(2), n(12)])),
    (CountryCode::Fo, IbanRule::new(18, &[n(4), n(9), n(1)])),
    (CountryCode::Fr, IbanRule::new(27, &[n(5), n(5), c(11), n(2)])),
    (CountryCode::Gb, IbanRule::new(22, &[a(4), n(6), n(8)])),
    (CountryCode::Ge, IbanRule::new(22, &[a(2), n(16)])),
    (CountryCode::Gi, IbanRule::new(23, &[a(4), c(15)])),
    (CountryCode::Gl, IbanRule::new(18, &[n(4), n(9), n(1)])),
    (CountryCode::Gr, IbanRule::new(27, &[n(3), n(4), c(16)])),
    (CountryCode::Gt, IbanRule::new(28, &[c(4), c(20)])),
    (CountryCode::Hr, IbanRule::new(21, &[n(7), n(10)])),
    (CountryCode::Hu, IbanRule::new(28, &[n(3), n(4), n(1), n(15), n(1)])),
    (CountryCode::Ie, IbanRule::new(22, &[a(4), n(6), n(8)])),
    (CountryCode::Il, IbanRule::new(23, &[n(3), n(3), n(13)])),
    (CountryCode::Iq, IbanRule::new(23, &[a(4), n(3), n(12)])),
    (CountryCode::Is, IbanRule::new(26, &[n(4), n(2), n(6), n(10)])),
    (CountryCode::It, IbanRule::new(27, &[a(1), n(5), n(5), c(12)])),
    (CountryCode::Jo, IbanRule::new(30, &[a(4), n(4), c(18)])),
    (CountryCode::Kw, IbanRule::new(30, &[a(4), c(22)])),
    (CountryCode::Kz, IbanRule::new(20, &[n(3), c(13)])),
    (CountryCode::Lb, IbanRule::new(28, &[n(4), c(20)])),
    (CountryCode::Lc, IbanRule::new(32, &[a(4), c(24)])),
    (CountryCode::Li, IbanRule::new(21, &[n(5), c(12)])),
    (CountryCode::Lt, IbanRule::new(20, &[n(5), n(11)])),
    (CountryCode::Lu, IbanRule::new(20, &[n(3), c(13)])),
    (CountryCode::Lv, IbanRule::new(21, &[a(4), c(13)])),
    (CountryCode::Ly, IbanRule::new(25, &[n(3), n(3), n(15)])),
    (CountryCode::Mc, IbanRule::new(27, &[n(5), n(5), c(11), n(2)])),
    (CountryCode::Md, IbanRule::new(24, &[c(2), c(18)])),
    (CountryCode::Me, IbanRule::new(22, &[n(3), n(13), n(2)])),
    (CountryCode::Mk, IbanRule::new(19, &[n(3), c(10), n(2)])),
    (CountryCode::Mn, IbanRule::new(20, &[n(4), n(12)])),
    (CountryCode::Mr, IbanRule::new(27, &[n(5), n(5), n(11), n(2)])),
    (CountryCode::Mt, IbanRule::new(31, &[a(4), n(5), c(18)])),
    (CountryCode::Mu, IbanRule::new(30, &[a(4), n(2), n(2), n(12), n(3), a(3)])),
    (CountryCode::Ni, IbanRule::new(28, &[a(4), n(20)])),
    (CountryCode::Nl, IbanRule::new(18, &[a(4), n(10)])),
    (CountryCode::No, IbanRule::new(15, &[n(4), n(6), n(1)])),
    (CountryCode::Om, IbanRule::new(23, &[n(3), c(16)])),
    (CountryCode::Pk, IbanRule::new(24, &[a(4), c(16)])),
    (CountryCode::Pl, IbanRule::new(28, &[n(8), n(16)])),
    (CountryCode::Ps, IbanRule::new(29, &[a(4), c(21)])),
    (CountryCode::Pt, IbanRule::new(25, &[n(4), n(4), n(11), n(2)])),
    (CountryCode::Qa, IbanRule::new(29, &[a(4), c(21)])),
    (CountryCode::Ro, IbanRule::new(24, &[a(4), c(16)])),
    (CountryCode::Rs, IbanRule::new(22, &[n(3), n(13), n(2)])),
    (CountryCode::Ru, IbanRule::new(33, &[n(9), n(5), c(15)])),
    (CountryCode::Sa, IbanRule::new(24, &[n(2), c(18)])),
    (CountryCode::Sc, IbanRule::new(31, &[a(4), n(2), n(2), n(16), a(3)])),
    (CountryCode::Sd, IbanRule::new(18, &[n(2), n(12)])),
    (CountryCode::Se, IbanRule::new(24, &[n(3), n(16), n(1)])),
    (CountryCode::Si, IbanRule::new(19, &[n(5), n(8), n(2)])),
    (CountryCode::Sk, IbanRule::new(24, &[n(4), n(6), n(10)])),
    (CountryCode::Sm, IbanRule::new(27, &[a(1), n(5), n(5), c(12)])),
    (CountryCode::So, IbanRule::new(23, &[n(4), n(3), n(12)])),
    (CountryCode::St, IbanRule::new(25, &[n(8), n(11), n(2)])),
    (CountryCode::Sv, IbanRule::new(28, &[a(4), n(20)])),
    (CountryCode::Tl, IbanRule::new(23, &[n(3), n(14), n(2)])),
    (CountryCode::Tn, IbanRule::new(24, &[n(2), n(3), n(13), n(2)])),
    (CountryCode::Tr, IbanRule::new(26, &[n(5), n(1), c(16)])),
    (CountryCode::Ua, IbanRule::new(29, &[n(6), c(19)])),
    (CountryCode::Va, IbanRule::new(22, &[n(3), n(15)])),
    (CountryCode::Vg, IbanRule::new(24, &[a(4), n(16)])),
    (CountryCode::Xk, IbanRule::new(20, &[n(4), n(10), n(2)])),
];

/// Jurisdictions without an IBAN, sorted by country code.
///
/// Ranges describe the account-number part as customers write it, without
/// bank, branch or transit codes that travel in separate fields.
pub(super) static BBAN_RULES: &[(CountryCode, BbanRule)] = &[
    (CountryCode::Ar, BbanRule::new(22, 22, CharClass::Numeric)),
    (CountryCode::Au, BbanRule::new(6, 10, CharClass::Numeric)),
    (CountryCode::Ca, BbanRule::new(7, 12, CharClass::Numeric)),
    (CountryCode::Cl, BbanRule::new(8, 12, CharClass::Numeric)),
    (CountryCode::Cn, BbanRule::new(16, 19, CharClass::Numeric)),
    (CountryCode::Co, BbanRule::new(10, 16, CharClass::Numeric)),
    (CountryCode::Hk, BbanRule::new(9, 12, CharClass::Numeric)),
    (CountryCode::Id, BbanRule::new(10, 16, CharClass::Numeric)),
    (CountryCode::In, BbanRule::new(9, 18, CharClass::Numeric)),
    (CountryCode::Jp, BbanRule::new(7, 7, CharClass::Numeric)),
    (CountryCode::Ke, BbanRule::new(10, 16, CharClass::Numeric)),
    (CountryCode::Kr, BbanRule::new(10, 14, CharClass::Numeric)),
    (CountryCode::Mx, BbanRule::new(18, 18, CharClass::Numeric)),
    (CountryCode::My, BbanRule::new(10, 16, CharClass::Numeric)),
    (CountryCode::Ng, BbanRule::new(10, 10, CharClass::Numeric)),
    (CountryCode::Nz, BbanRule::new(15, 16, CharClass::Numeric)),
    (CountryCode::Ph, BbanRule::new(10, 16, CharClass::Numeric)),
    (CountryCode::Sg, BbanRule::new(7, 11, CharClass::Numeric)),
    (CountryCode::Th, BbanRule::new(10, 10, CharClass::Numeric)),
    (CountryCode::Tw, BbanRule::new(12, 16, CharClass::Numeric)),
    (CountryCode::Us, BbanRule::new(4, 17, CharClass::Numeric)),
    (CountryCode::Za, BbanRule::new(9, 11, CharClass::Numeric)),
];
