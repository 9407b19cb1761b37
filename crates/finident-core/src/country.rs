/// Jurisdiction keys and the ISO 3166-1 alpha-2 table.
///
/// [`CountryCode`] is a closed enumeration used only as a lookup key into the
/// country rule tables; it carries no validation behaviour of its own. It
/// covers every IBAN jurisdiction of the SWIFT IBAN registry, the BBAN-only
/// jurisdictions with a domestic account-number rule, and the explicit
/// [`CountryCode::All`] key that selects permissive validation.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Jurisdiction key for country rule lookup.
///
/// Serializes to its upper-case ISO 3166-1 alpha-2 code (`"ALL"` for
/// [`CountryCode::All`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CountryCode {
    /// No particular jurisdiction: account numbers are checked only for
    /// format and checksum.
    All,
    /// Andorra.
    Ad,
    /// United Arab Emirates.
    Ae,
    /// Albania.
    Al,
    /// Argentina.
    Ar,
    /// Austria.
    At,
    /// Australia.
    Au,
    /// Azerbaijan.
    Az,
    /// Bosnia and Herzegovina.
    Ba,
    /// Belgium.
    Be,
    /// Bulgaria.
    Bg,
    /// Bahrain.
    Bh,
    /// Burundi.
    Bi,
    /// Brazil.
    Br,
    /// Belarus.
    By,
    /// Canada.
    Ca,
    /// Switzerland.
    Ch,
    /// Chile.
    Cl,
    /// China.
    Cn,
    /// Colombia.
    Co,
    /// Costa Rica.
    Cr,
    /// Cyprus.
    Cy,
    /// Czechia.
    Cz,
    /// Germany.
    De,
    /// Djibouti.
    Dj,
    /// Denmark.
    Dk,
    /// Dominican Republic.
    Do,
    /// Estonia.
    Ee,
    /// Egypt.
    Eg,
    /// Spain.
    Es,
    /// Finland.
    Fi,
    /// Falkland Islands.
    Fk,
    /// Faroe Islands.
    Fo,
    /// France.
    Fr,
    /// United Kingdom.
    Gb,
    /// Georgia.
    Ge,
    /// Gibraltar.
    Gi,
    /// Greenland.
    Gl,
    /// Greece.
    Gr,
    /// Guatemala.
    Gt,
    /// Hong Kong.
    Hk,
    /// Croatia.
    Hr,
    /// Hungary.
    Hu,
    /// Indonesia.
    Id,
    /// Ireland.
    Ie,
    /// Israel.
    Il,
    /// India.
    In,
    /// Iraq.
    Iq,
    /// Iceland.
    Is,
    /// Italy.
    It,
    /// Jordan.
    Jo,
    /// Japan.
    Jp,
    /// Kenya.
    Ke,
    /// South Korea.
    Kr,
    /// Kuwait.
    Kw,
    /// Kazakhstan.
    Kz,
    /// Lebanon.
    Lb,
    /// Saint Lucia.
    Lc,
    /// Liechtenstein.
    Li,
    /// Lithuania.
    Lt,
    /// Luxembourg.
    Lu,
    /// Latvia.
    Lv,
    /// Libya.
    Ly,
    /// Monaco.
    Mc,
    /// Moldova.
    Md,
    /// Montenegro.
    Me,
    /// North Macedonia.
    Mk,
    /// Mongolia.
    Mn,
    /// Mauritania.
    Mr,
    /// Malta.
    Mt,
    /// Mauritius.
    Mu,
    /// Mexico.
    Mx,
    /// Malaysia.
    My,
    /// Nigeria.
    Ng,
    /// Nicaragua.
    Ni,
    /// Netherlands.
    Nl,
    /// Norway.
    No,
    /// New Zealand.
    Nz,
    /// Oman.
    Om,
    /// Philippines.
    Ph,
    /// Pakistan.
    Pk,
    /// Poland.
    Pl,
    /// Palestine.
    Ps,
    /// Portugal.
    Pt,
    /// Qatar.
    Qa,
    /// Romania.
    Ro,
    /// Serbia.
    Rs,
    /// Russia.
    Ru,
    /// Saudi Arabia.
    Sa,
    /// Seychelles.
    Sc,
    /// Sudan.
    Sd,
    /// Sweden.
    Se,
    /// Singapore.
    Sg,
    /// Slovenia.
    Si,
    /// Slovakia.
    Sk,
    /// San Marino.
    Sm,
    /// Somalia.
    So,
    /// Sao Tome and Principe.
    St,
    /// El Salvador.
    Sv,
    /// Thailand.
    Th,
    /// Timor Leste.
    Tl,
    /// Tunisia.
    Tn,
    /// Turkey.
    Tr,
    /// Taiwan.
    Tw,
    /// Ukraine.
    Ua,
    /// United States.
    Us,
    /// Vatican City.
    Va,
    /// British Virgin Islands.
    Vg,
    /// Kosovo.
    Xk,
    /// South Africa.
    Za,
}

impl CountryCode {
    /// Every concrete jurisdiction, sorted by code. Excludes [`CountryCode::All`].
    pub const JURISDICTIONS: &'static [Self] = &[
        Self::Ad, Self::Ae, Self::Al, Self::Ar, Self::At, Self::Au, Self::Az, Self::Ba, Self::Be,
        Self::Bg, Self::Bh, Self::Bi, Self::Br, Self::By, Self::Ca, Self::Ch, Self::Cl, Self::Cn,
        Self::Co, Self::Cr, Self::Cy, Self::Cz, Self::De, Self::Dj, Self::Dk, Self::Do, Self::Ee,
        Self::Eg, Self::Es, Self::Fi, Self::Fk, Self::Fo, Self::Fr, Self::Gb, Self::Ge, Self::Gi,
        Self::Gl, Self::Gr, Self::Gt, Self::Hk, Self::Hr, Self::Hu, Self::Id, Self::Ie, Self::Il,
        Self::In, Self::Iq, Self::Is, Self::It, Self::Jo, Self::Jp, Self::Ke, Self::Kr, Self::Kw,
        Self::Kz, Self::Lb, Self::Lc, Self::Li, Self::Lt, Self::Lu, Self::Lv, Self::Ly, Self::Mc,
        Self::Md, Self::Me, Self::Mk, Self::Mn, Self::Mr, Self::Mt, Self::Mu, Self::Mx, Self::My,
        Self::Ng, Self::Ni, Self::Nl, Self::No, Self::Nz, Self::Om, Self::Ph, Self::Pk, Self::Pl,
        Self::Ps, Self::Pt, Self::Qa, Self::Ro, Self::Rs, Self::Ru, Self::Sa, Self::Sc, Self::Sd,
        Self::Se, Self::Sg, Self::Si, Self::Sk, Self::Sm, Self::So, Self::St, Self::Sv, Self::Th,
        Self::Tl, Self::Tn, Self::Tr, Self::Tw, Self::Ua, Self::Us, Self::Va, Self::Vg, Self::Xk,
        Self::Za,
    ];

    /// Returns the upper-case alpha-2 code (`"ALL"` for [`CountryCode::All`]).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Ad => "AD",
            Self::Ae => "AE",
            Self::Al => "AL",
            Self::Ar => "AR",
            Self::At => "AT",
            Self::Au => "AU",
            Self::Az => "AZ",
            Self::Ba => "BA",
            Self::Be => "BE",
            Self::Bg => "BG",
            Self::Bh => "BH",
            Self::Bi => "BI",
            Self::Br => "BR",
            Self::By => "BY",
            Self::Ca => "CA",
            Self::Ch => "CH",
            Self::Cl => "CL",
            Self::Cn => "CN",
            Self::Co => "CO",
            Self::Cr => "CR",
            Self::Cy => "CY",
            Self::Cz => "CZ",
            Self::De => "DE",
            Self::Dj => "DJ",
            Self::Dk => "DK",
            Self::Do => "DO",
            Self::Ee => "EE",
            Self::Eg => "EG",
            Self::Es => "ES",
            Self::Fi => "FI",
            Self::Fk => "FK",
            Self::Fo => "FO",
            Self::Fr => "FR",
            Self::Gb => "GB",
            Self::Ge => "GE",
            Self::Gi => "GI",
            Self::Gl => "GL",
            Self::Gr => "GR",
            Self::Gt => "GT",
            Self::Hk => "HK",
            Self::Hr => "HR",
            Self::Hu => "HU",
            Self::Id => "ID",
            Self::Ie => "IE",
            Self::Il => "IL",
            Self::In => "IN",
            Self::Iq => "IQ",
            Self::Is => "IS",
            Self::It => "IT",
            Self::Jo => "JO",
            Self::Jp => "JP",
            Self::Ke => "KE",
            Self::Kr => "KR",
            Self::Kw => "KW",
            Self::Kz => "KZ",
            Self::Lb => "LB",
            Self::Lc => "LC",
            Self::Li => "LI",
            Self::Lt => "LT",
            Self::Lu => "LU",
            Self::Lv => "LV",
            Self::Ly => "LY",
            Self::Mc => "MC",
            Self::Md => "MD",
            Self::Me => "ME",
            Self::Mk => "MK",
            Self::Mn => "MN",
            Self::Mr => "MR",
            Self::Mt => "MT",
            Self::Mu => "MU",
            Self::Mx => "MX",
            Self::My => "MY",
            Self::Ng => "NG",
            Self::Ni => "NI",
            Self::Nl => "NL",
            Self::No => "NO",
            Self::Nz => "NZ",
            Self::Om => "OM",
            Self::Ph => "PH",
            Self::Pk => "PK",
            Self::Pl => "PL",
            Self::Ps => "PS",
            Self::Pt => "PT",
            Self::Qa => "QA",
            Self::Ro => "RO",
            Self::Rs => "RS",
            Self::Ru => "RU",
            Self::Sa => "SA",
            Self::Sc => "SC",
            Self::Sd => "SD",
            Self::Se => "SE",
            Self::Sg => "SG",
            Self::Si => "SI",
            Self::Sk => "SK",
            Self::Sm => "SM",
            Self::So => "SO",
            Self::St => "ST",
            Self::Sv => "SV",
            Self::Th => "TH",
            Self::Tl => "TL",
            Self::Tn => "TN",
            Self::Tr => "TR",
            Self::Tw => "TW",
            Self::Ua => "UA",
            Self::Us => "US",
            Self::Va => "VA",
            Self::Vg => "VG",
            Self::Xk => "XK",
            Self::Za => "ZA",
        }
    }

    /// Returns `true` for [`CountryCode::All`].
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    /// Parses an upper-case alpha-2 code. `"ALL"` and `"*"` yield
    /// [`CountryCode::All`]. Returns `None` for anything else.
    fn from_upper(code: &str) -> Option<Self> {
        match code {
            "ALL" | "*" => Some(Self::All),
            "AD" => Some(Self::Ad),
            "AE" => Some(Self::Ae),
            "AL" => Some(Self::Al),
            "AR" => Some(Self::Ar),
            "AT" => Some(Self::At),
            "AU" => Some(Self::Au),
            "AZ" => Some(Self::Az),
            "BA" => Some(Self::Ba),
            "BE" => Some(Self::Be),
            "BG" => Some(Self::Bg),
            "BH" => Some(Self::Bh),
            "BI" => Some(Self::Bi),
            "BR" => Some(Self::Br),
            "BY" => Some(Self::By),
            "CA" => Some(Self::Ca),
            "CH" => Some(Self::Ch),
            "CL" => Some(Self::Cl),
            "CN" => Some(Self::Cn),
            "CO" => Some(Self::Co),
            "CR" => Some(Self::Cr),
            "CY" => Some(Self::Cy),
            "CZ" => Some(Self::Cz),
            "DE" => Some(Self::De),
            "DJ" => Some(Self::Dj),
            "DK" => Some(Self::Dk),
            "DO" => Some(Self::Do),
            "EE" => Some(Self::Ee),
            "EG" => Some(Self::Eg),
            "ES" => Some(Self::Es),
            "FI" => Some(Self::Fi),
            "FK" => Some(Self::Fk),
            "FO" => Some(Self::Fo),
            "FR" => Some(Self::Fr),
            "GB" => Some(Self::Gb),
            "GE" => Some(Self::Ge),
            "GI" => Some(Self::Gi),
            "GL" => Some(Self::Gl),
            "GR" => Some(Self::Gr),
            "GT" => Some(Self::Gt),
            "HK" => Some(Self::Hk),
            "HR" => Some(Self::Hr),
            "HU" => Some(Self::Hu),
            "ID" => Some(Self::Id),
            "IE" => Some(Self::Ie),
            "IL" => Some(Self::Il),
            "IN" => Some(Self::In),
            "IQ" => Some(Self::Iq),
            "IS" => Some(Self::Is),
            "IT" => Some(Self::It),
            "JO" => Some(Self::Jo),
            "JP" => Some(Self::Jp),
            "KE" => Some(Self::Ke),
            "KR" => Some(Self::Kr),
            "KW" => Some(Self::Kw),
            "KZ" => Some(Self::Kz),
            "LB" => Some(Self::Lb),
            "LC" => Some(Self::Lc),
            "LI" => Some(Self::Li),
            "LT" => Some(Self::Lt),
            "LU" => Some(Self::Lu),
            "LV" => Some(Self::Lv),
            "LY" => Some(Self::Ly),
            "MC" => Some(Self::Mc),
            "MD" => Some(Self::Md),
            "ME" => Some(Self::Me),
            "MK" => Some(Self::Mk),
            "MN" => Some(Self::Mn),
            "MR" => Some(Self::Mr),
            "MT" => Some(Self::Mt),
            "MU" => Some(Self::Mu),
            "MX" => Some(Self::Mx),
            "MY" => Some(Self::My),
            "NG" => Some(Self::Ng),
            "NI" => Some(Self::Ni),
            "NL" => Some(Self::Nl),
            "NO" => Some(Self::No),
            "NZ" => Some(Self::Nz),
            "OM" => Some(Self::Om),
            "PH" => Some(Self::Ph),
            "PK" => Some(Self::Pk),
            "PL" => Some(Self::Pl),
            "PS" => Some(Self::Ps),
            "PT" => Some(Self::Pt),
            "QA" => Some(Self::Qa),
            "RO" => Some(Self::Ro),
            "RS" => Some(Self::Rs),
            "RU" => Some(Self::Ru),
            "SA" => Some(Self::Sa),
            "SC" => Some(Self::Sc),
            "SD" => Some(Self::Sd),
            "SE" => Some(Self::Se),
            "SG" => Some(Self::Sg),
            "SI" => Some(Self::Si),
            "SK" => Some(Self::Sk),
            "SM" => Some(Self::Sm),
            "SO" => Some(Self::So),
            "ST" => Some(Self::St),
            "SV" => Some(Self::Sv),
            "TH" => Some(Self::Th),
            "TL" => Some(Self::Tl),
            "TN" => Some(Self::Tn),
            "TR" => Some(Self::Tr),
            "TW" => Some(Self::Tw),
            "UA" => Some(Self::Ua),
            "US" => Some(Self::Us),
            "VA" => Some(Self::Va),
            "VG" => Some(Self::Vg),
            "XK" => Some(Self::Xk),
            "ZA" => Some(Self::Za),
            _ => None,
        }
    }
}

/// Error returned when a string is not a registered jurisdiction key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country code {0:?}")]
pub struct UnknownCountryCode(pub String);

impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    /// Case-insensitive parse of an alpha-2 code, `"ALL"` or `"*"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::from_upper(&upper).ok_or_else(|| UnknownCountryCode(s.to_owned()))
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = UnknownCountryCode;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Static ISO 3166-1 alpha-2 country code table
//
// Source: ISO 3166-1 alpha-2 list (249 codes as of 2026-01-01), plus the
// user-assigned `XK` that SWIFT issues BICs under for Kosovo.
// ---------------------------------------------------------------------------

/// Returns `true` if `code` is an ISO 3166-1 alpha-2 code recognised in BICs.
///
/// Expects upper-case input; lower-case codes are rejected.
pub fn is_iso3166_alpha2(code: &str) -> bool {
    // Sorted; membership tested via binary search below.
    const CODES: &[&str] = &[
        "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
        "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
        "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
        "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
        "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
        "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
        "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
        "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
        "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
        "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
        "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
        "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
        "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
        "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
        "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
        "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
        "VN", "VU", "WF", "WS", "XK", "YE", "YT", "ZA", "ZM", "ZW",
    ];
    CODES.binary_search(&code).is_ok()
}
