//! Library components of the `mifir-concat` command-line tool.

pub mod driver;
pub mod logging;
