//! ISO 3166-1 alpha-2 country codes accepted as CONCAT nationality.

use std::fmt;
use std::sync::LazyLock;

use crate::lookup::TokenSet;
use crate::text::to_upper_simple;

#[rustfmt::skip]
pub const COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU",
    "AW", "AX", "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL",
    "BM", "BN", "BO", "BQ", "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC",
    "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN", "CO", "CR", "CU", "CV",
    "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE", "EG",
    "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD",
    "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT",
    "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM",
    "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH",
    "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK",
    "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH",
    "MK", "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW",
    "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR",
    "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM", "PN", "PR",
    "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL",
    "TM", "TN", "TO", "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY",
    "UZ", "VA", "VC", "VE", "VG", "VI", "VN", "VU", "WF", "WS", "YE", "YT", "ZA",
    "ZM", "ZW",
];

static COUNTRY_SET: LazyLock<TokenSet> = LazyLock::new(|| TokenSet::new(COUNTRY_CODES));

pub fn country_codes() -> &'static TokenSet {
    &COUNTRY_SET
}

/// Case-insensitive membership test against [`COUNTRY_CODES`].
pub fn is_valid_country_code(code: &str) -> bool {
    COUNTRY_SET.contains_ignore_case(code)
}

/// A country code known to be in [`COUNTRY_CODES`], stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(code: &str) -> Option<Self> {
        let upper = to_upper_simple(code);
        COUNTRY_SET.contains(&upper).then_some(Self(upper))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_codes_in_any_case() {
        assert!(is_valid_country_code("NO"));
        assert!(is_valid_country_code("no"));
        assert!(is_valid_country_code("gB"));
        assert_eq!(CountryCode::parse("ie").map(|c| c.to_string()).as_deref(), Some("IE"));
    }

    #[test]
    fn rejects_unknown_codes() {
        for code in ["NX", "NOK", "UK", "", "N", " NO"] {
            assert!(!is_valid_country_code(code), "{code} should be rejected");
            assert!(CountryCode::parse(code).is_none());
        }
    }

    #[test]
    fn table_has_no_duplicates() {
        assert_eq!(country_codes().len(), COUNTRY_CODES.len());
        assert!(COUNTRY_CODES.iter().all(|code| code.len() == 2));
    }
}
