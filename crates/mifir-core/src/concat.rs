//! Validation and assembly of the CONCAT.

use mifir_model::{BirthDate, ConcatCode, ConcatError, Result};
use mifir_standards::CountryCode;
use tracing::debug;

use crate::normalize::{NameRole, NameTrace, normalize_name, trace_name};

/// Every intermediate value behind one CONCAT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatExplanation {
    pub country: CountryCode,
    pub birth_date: BirthDate,
    pub first_name: NameTrace,
    pub last_name: NameTrace,
    pub code: ConcatCode,
}

/// Builds the 20-character CONCAT for one client.
///
/// Inputs are checked in a fixed order and the first failure is returned:
/// empty names ([`ConcatError::EmptyName`], measured before trimming), then
/// the country code, then the birth date.
///
/// # Errors
///
/// Returns the [`ConcatError`] for the first invalid input.
pub fn compute_concat(
    country_code: &str,
    birth_date: &str,
    first_name: &str,
    last_name: &str,
) -> Result<ConcatCode> {
    let (country, birth_date) = validate(country_code, birth_date, first_name, last_name)?;
    let first = normalize_name(first_name, NameRole::First);
    let last = normalize_name(last_name, NameRole::Last);
    if first.is_blank() || last.is_blank() {
        debug!(
            first_blank = first.is_blank(),
            last_blank = last.is_blank(),
            "name normalized to padding only"
        );
    }
    let code = ConcatCode::assemble(country.as_str(), &birth_date, &first, &last);
    debug!(country = %country, "concat computed");
    Ok(code)
}

/// Same as [`compute_concat`] but keeps every normalization step.
///
/// # Errors
///
/// Returns the [`ConcatError`] for the first invalid input.
pub fn explain_concat(
    country_code: &str,
    birth_date: &str,
    first_name: &str,
    last_name: &str,
) -> Result<ConcatExplanation> {
    let (country, birth_date) = validate(country_code, birth_date, first_name, last_name)?;
    let first = trace_name(first_name, NameRole::First);
    let last = trace_name(last_name, NameRole::Last);
    let code = ConcatCode::assemble(country.as_str(), &birth_date, &first.part, &last.part);
    Ok(ConcatExplanation {
        country,
        birth_date,
        first_name: first,
        last_name: last,
        code,
    })
}

fn validate(
    country_code: &str,
    birth_date: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(CountryCode, BirthDate)> {
    if first_name.is_empty() || last_name.is_empty() {
        debug!("concat rejected: empty name");
        return Err(ConcatError::EmptyName);
    }
    let country = CountryCode::parse(country_code).ok_or_else(|| {
        debug!(code = country_code, "concat rejected: unknown country code");
        ConcatError::InvalidCountryCode {
            code: country_code.to_string(),
        }
    })?;
    let birth_date = BirthDate::parse(birth_date).map_err(|reason| {
        debug!(%reason, "concat rejected: invalid birth date");
        ConcatError::InvalidDate {
            value: birth_date.to_string(),
            reason,
        }
    })?;
    Ok((country, birth_date))
}
