use std::fmt;

use serde::Serialize;

use crate::date::BirthDate;
use crate::name::{NAME_PART_LEN, NamePart};

/// Total length of a CONCAT.
pub const CONCAT_LEN: usize = 2 + BirthDate::LEN + 2 * NAME_PART_LEN;

/// A complete 20-character CONCAT.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConcatCode(String);

impl ConcatCode {
    /// Joins the already validated fields and uppercases the result.
    ///
    /// `country` must be one of the two-letter codes from the country table.
    pub fn assemble(
        country: &str,
        birth_date: &BirthDate,
        first_name: &NamePart,
        last_name: &NamePart,
    ) -> Self {
        let mut code = String::with_capacity(CONCAT_LEN);
        code.push_str(country);
        code.push_str(birth_date.as_str());
        code.push_str(first_name.as_str());
        code.push_str(last_name.as_str());
        code.make_ascii_uppercase();
        debug_assert_eq!(code.len(), CONCAT_LEN);
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country(&self) -> &str {
        &self.0[..2]
    }

    pub fn birth_date(&self) -> &str {
        &self.0[2..2 + BirthDate::LEN]
    }

    pub fn first_name(&self) -> &str {
        let start = 2 + BirthDate::LEN;
        &self.0[start..start + NAME_PART_LEN]
    }

    pub fn last_name(&self) -> &str {
        &self.0[CONCAT_LEN - NAME_PART_LEN..]
    }
}

impl AsRef<str> for ConcatCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConcatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConcatCode {
        let date = BirthDate::parse("19801224").expect("valid date");
        ConcatCode::assemble("NO", &date, &NamePart::fit("JON"), &NamePart::fit("SNOW"))
    }

    #[test]
    fn assembles_fields_in_order() {
        let code = sample();
        assert_eq!(code.as_str(), "NO19801224JON##SNOW#");
        assert_eq!(code.as_str().len(), CONCAT_LEN);
    }

    #[test]
    fn exposes_field_slices() {
        let code = sample();
        assert_eq!(code.country(), "NO");
        assert_eq!(code.birth_date(), "19801224");
        assert_eq!(code.first_name(), "JON##");
        assert_eq!(code.last_name(), "SNOW#");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&sample()).expect("serialize code");
        assert_eq!(json, "\"NO19801224JON##SNOW#\"");
    }
}
