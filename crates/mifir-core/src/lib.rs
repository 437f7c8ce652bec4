//! CONCAT computation.
//!
//! [`compute_concat`] validates the country code and birth date, runs both
//! names through the [`normalize`] pipeline and joins the fixed-width fields.
//!
//! ```
//! use mifir_core::compute_concat;
//!
//! let code = compute_concat("NO", "19760315", "Eli", "Ødegård").unwrap();
//! assert_eq!(code.as_str(), "NO19760315ELI##ODEGA");
//! ```

pub mod concat;
pub mod normalize;

pub use concat::{ConcatExplanation, compute_concat, explain_concat};
pub use normalize::{NameRole, NameTrace, normalize_name, trace_name};
