//! Birth dates in the compact `YYYYMMDD` form used by the CONCAT.

use std::fmt;

use chrono::NaiveDate;

use crate::error::DateError;

/// A validated birth date.
///
/// Keeps the original eight digits, which are copied verbatim into the
/// CONCAT, next to the parsed calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthDate {
    text: String,
    date: NaiveDate,
}

impl BirthDate {
    /// Number of characters in a `YYYYMMDD` date.
    pub const LEN: usize = 8;

    /// Parses `YYYYMMDD`, rejecting anything that is not exactly eight digits
    /// forming a real calendar date (`19800230` fails).
    pub fn parse(value: &str) -> Result<Self, DateError> {
        if value.len() != Self::LEN {
            return Err(DateError::WrongLength {
                length: value.chars().count(),
            });
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::NonDigit);
        }
        let year: i32 = value[0..4].parse().map_err(|_| DateError::NonDigit)?;
        let month: u32 = value[4..6].parse().map_err(|_| DateError::NonDigit)?;
        let day: u32 = value[6..8].parse().map_err(|_| DateError::NonDigit)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::OutOfRange)?;
        Ok(Self {
            text: value.to_string(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
