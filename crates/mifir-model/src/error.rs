use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Reasons a birth date is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected 8 characters (YYYYMMDD), got {length}")]
    WrongLength { length: usize },
    #[error("expected digits only (YYYYMMDD)")]
    NonDigit,
    #[error("not a calendar date")]
    OutOfRange,
}

/// Errors returned when a CONCAT cannot be built.
///
/// Only the first violated condition is reported, checked in the order the
/// variants are declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConcatError {
    #[error("first and last name must not be empty")]
    EmptyName,
    #[error("invalid country code '{code}'")]
    InvalidCountryCode { code: String },
    #[error("invalid birth date '{value}': {reason}")]
    InvalidDate { value: String, reason: DateError },
}

impl ConcatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName => ErrorKind::EmptyName,
            Self::InvalidCountryCode { .. } => ErrorKind::InvalidCountryCode,
            Self::InvalidDate { .. } => ErrorKind::InvalidDate,
        }
    }
}

/// Field-free classification of a [`ConcatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyName,
    InvalidCountryCode,
    InvalidDate,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::InvalidCountryCode => "invalid_country_code",
            Self::InvalidDate => "invalid_date",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, ConcatError>;
