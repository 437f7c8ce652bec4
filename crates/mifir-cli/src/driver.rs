//! Line-oriented batch driver.
//!
//! Each input line is one record, `COUNTRY|BIRTHDATE|FIRSTNAME|LASTNAME`.
//! Every non-empty line produces exactly one output line, in input order.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use mifir_core::compute_concat;
use mifir_model::{ConcatCode, ConcatError};

use crate::logging::redact_value;

/// Written in place of a CONCAT for any failed record in plain output.
pub const FAIL_MARKER: &str = "***FAIL***";

pub const FIELD_SEPARATOR: char = '|';

/// Fields per record: country, birth date, first name, last name.
pub const FIELD_COUNT: usize = 4;

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The CONCAT or [`FAIL_MARKER`], one per line.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Why a record produced no CONCAT.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields separated by '|', found {found}", expected = FIELD_COUNT)]
    FieldCount { found: usize },
    #[error(transparent)]
    Concat(#[from] ConcatError),
}

impl RecordError {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::FieldCount { .. } => "field_count",
            Self::Concat(error) => error.kind().as_str(),
        }
    }
}

/// Counts gathered over one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub records: usize,
    pub succeeded: usize,
    pub skipped: usize,
    /// Failed records keyed by [`RecordError::kind_label`].
    pub failures: BTreeMap<&'static str, usize>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }

    fn record(&mut self, outcome: &Result<ConcatCode, RecordError>) {
        self.records += 1;
        match outcome {
            Ok(_) => self.succeeded += 1,
            Err(error) => *self.failures.entry(error.kind_label()).or_default() += 1,
        }
    }
}

/// Splits one record (without its line terminator) and computes its CONCAT.
///
/// # Errors
///
/// [`RecordError::FieldCount`] when the line does not hold exactly four
/// fields, otherwise the error from [`compute_concat`].
pub fn process_record(line: &str) -> Result<ConcatCode, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [country, birth_date, first_name, last_name] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    };
    Ok(compute_concat(country, birth_date, first_name, last_name)?)
}

/// Reads records until end of input and writes one result per record.
///
/// Empty lines are skipped. A last line without a terminator is still
/// processed. Bytes that are not UTF-8 are decoded lossily; the replacement
/// characters have no fold entry and are dropped from names.
///
/// # Errors
///
/// Returns the first read or write error; records before it have already
/// been written.
pub fn run_batch<R, W>(
    mut reader: R,
    writer: &mut W,
    format: OutputFormat,
) -> io::Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let span = info_span!("batch", ?format);
    let _guard = span.enter();
    info!("reading records");

    let mut summary = BatchSummary::default();
    let mut buffer = Vec::new();
    let mut line_number = 0usize;
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;
        let decoded = String::from_utf8_lossy(&buffer);
        let line = strip_line_terminator(&decoded);
        if line.is_empty() {
            summary.skipped += 1;
            continue;
        }

        let outcome = process_record(line);
        match &outcome {
            Ok(_) => debug!(line = line_number, "record converted"),
            Err(error @ RecordError::FieldCount { .. }) => warn!(
                line = line_number,
                record = redact_value(line),
                %error,
                "malformed record"
            ),
            Err(error) => debug!(
                line = line_number,
                kind = error.kind_label(),
                record = redact_value(line),
                "record rejected"
            ),
        }
        write_outcome(writer, format, line_number, &outcome)?;
        summary.record(&outcome);
    }
    writer.flush()?;

    info!(
        records = summary.records,
        succeeded = summary.succeeded,
        failed = summary.failed(),
        skipped = summary.skipped,
        "batch finished"
    );
    Ok(summary)
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonRecord<'a> {
    Ok {
        line: usize,
        concat: &'a str,
    },
    Fail {
        line: usize,
        kind: &'static str,
        message: String,
    },
}

fn write_outcome<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    line: usize,
    outcome: &Result<ConcatCode, RecordError>,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => match outcome {
            Ok(code) => writeln!(writer, "{code}"),
            Err(_) => writeln!(writer, "{FAIL_MARKER}"),
        },
        OutputFormat::Json => {
            let record = match outcome {
                Ok(code) => JsonRecord::Ok {
                    line,
                    concat: code.as_str(),
                },
                Err(error) => JsonRecord::Fail {
                    line,
                    kind: error.kind_label(),
                    message: error.to_string(),
                },
            };
            serde_json::to_writer(&mut *writer, &record)?;
            writeln!(writer)
        }
    }
}

#[cfg(test)]
mod tests {
    use mifir_model::ErrorKind;

    use super::*;

    #[test]
    fn record_with_four_fields_is_converted() {
        let code = process_record("NO|19801224|Jon|Snow").expect("valid record");
        assert_eq!(code.as_str(), "NO19801224JON##SNOW#");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert_eq!(
            process_record("NO|19801224|Jon"),
            Err(RecordError::FieldCount { found: 3 })
        );
        assert_eq!(
            process_record("NO|19801224|Jon|Snow|Extra"),
            Err(RecordError::FieldCount { found: 5 })
        );
        assert_eq!(
            process_record("   "),
            Err(RecordError::FieldCount { found: 1 })
        );
    }

    #[test]
    fn core_errors_pass_through() {
        let error = process_record("NO|19801224||Snow").unwrap_err();
        assert_eq!(error, RecordError::Concat(ConcatError::EmptyName));
        assert_eq!(error.kind_label(), ErrorKind::EmptyName.as_str());
    }

    #[test]
    fn line_terminators_are_removed() {
        assert_eq!(strip_line_terminator("a|b\r\n"), "a|b");
        assert_eq!(strip_line_terminator("a|b\n"), "a|b");
        assert_eq!(strip_line_terminator("a|b"), "a|b");
        assert_eq!(strip_line_terminator("\r\n"), "");
    }

    #[test]
    fn field_count_message_names_separator() {
        let error = RecordError::FieldCount { found: 2 };
        assert_eq!(
            error.to_string(),
            "expected 4 fields separated by '|', found 2"
        );
    }
}
