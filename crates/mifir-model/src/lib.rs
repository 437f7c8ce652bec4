//! Value types shared by the CONCAT builder and its drivers.
//!
//! A CONCAT is the 20-character national client identifier used in MiFIR
//! transaction reports when no national identifier is available:
//!
//! | Field      | Width | Example    |
//! |------------|-------|------------|
//! | country    | 2     | `NO`       |
//! | birth date | 8     | `19801224` |
//! | first name | 5     | `JON##`    |
//! | last name  | 5     | `SNOW#`    |

pub mod code;
pub mod date;
pub mod error;
pub mod name;

pub use code::{CONCAT_LEN, ConcatCode};
pub use date::BirthDate;
pub use error::{ConcatError, DateError, ErrorKind, Result};
pub use name::{NAME_PART_LEN, NamePart, PAD_CHAR};
