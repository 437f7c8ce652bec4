//! Reference data behind the CONCAT algorithm.
//!
//! Every table here is a `const` literal turned into a lookup structure on
//! first use. Nothing is mutated afterwards, so the accessors can be called
//! from any thread.

pub mod country;
pub mod fold;
pub mod lookup;
pub mod names;
pub mod text;

pub use country::{COUNTRY_CODES, CountryCode, country_codes, is_valid_country_code};
pub use fold::{FOLD_TABLE, fold_character};
pub use lookup::TokenSet;
pub use names::{PREFIXES, TITLES, prefixes, titles};
pub use text::to_upper_simple;
