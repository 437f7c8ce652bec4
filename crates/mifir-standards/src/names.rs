//! Name components removed before a name is encoded.

use std::sync::LazyLock;

use crate::lookup::TokenSet;

/// Nobiliary and locative particles. Only these are removed from the start of
/// a name; multi-word entries are matched as one unit.
#[rustfmt::skip]
pub const PREFIXES: &[&str] = &[
    "AM", "AUF", "AUF DEM", "AUS DER", "D", "DA", "DE", "DE L’", "DEL", "DE LA",
    "DE LE", "DI", "DO", "DOS", "DU", "IM", "LA", "LE", "MAC", "MC", "MHAC",
    "MHÍC", "MHIC GIOLLA", "MIC", "NI", "NÍ", "NÍC", "O", "Ó", "UA", "UI", "UÍ",
    "VAN", "VAN DE", "VAN DEN", "VAN DER", "VOM", "VON", "VON DEM", "DEN",
    "VON DER",
];

/// Titles and honorifics. The regulation lists these as examples rather than
/// an exhaustive set.
#[rustfmt::skip]
pub const TITLES: &[&str] = &[
    "ATTY", "COACH", "DAME", "DR", "FR", "GOV", "HONORABLE", "MADAM", "MADAME",
    "MAID", "MASTER", "MISS", "MONSIEUR", "MR", "MRS", "MS", "MX", "OFC", "PH.D",
    "PRES", "PROF", "REV", "SIR",
];

static PREFIX_SET: LazyLock<TokenSet> = LazyLock::new(|| TokenSet::new(PREFIXES));
static TITLE_SET: LazyLock<TokenSet> = LazyLock::new(|| TokenSet::new(TITLES));

pub fn prefixes() -> &'static TokenSet {
    &PREFIX_SET
}

pub fn titles() -> &'static TokenSet {
    &TITLE_SET
}
