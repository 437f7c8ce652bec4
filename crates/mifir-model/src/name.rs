//! Fixed-width name fields.

use std::fmt;

/// Width of each name field in a CONCAT.
pub const NAME_PART_LEN: usize = 5;

/// Fill character for names shorter than [`NAME_PART_LEN`].
pub const PAD_CHAR: char = '#';

/// A folded name cut or padded to exactly [`NAME_PART_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePart(String);

impl NamePart {
    /// Keeps the first five characters of `folded`, right-padding with `#`
    /// when it is shorter. No attention is paid to word boundaries.
    pub fn fit(folded: &str) -> Self {
        let mut part: String = folded.chars().take(NAME_PART_LEN).collect();
        let filled = part.chars().count();
        part.extend(std::iter::repeat_n(PAD_CHAR, NAME_PART_LEN - filled));
        Self(part)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no character of the name survived normalization.
    pub fn is_blank(&self) -> bool {
        self.0.chars().all(|c| c == PAD_CHAR)
    }
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
