//! Name normalization.
//!
//! A raw name goes through these steps, in this order:
//!
//! 1. trim surrounding whitespace
//! 2. drop `.`, `,` and `;` anywhere (so `Dr.` becomes the title `DR`)
//! 3. strip a leading title
//! 4. strip a leading prefix
//! 5. first names only: keep the text before the first space
//! 6. fold to `A`–`z`, dropping characters with no fold entry
//! 7. cut or pad to five characters
//!
//! Reordering the steps changes the output.

use mifir_model::NamePart;
use mifir_standards::{TokenSet, fold_character, prefixes, titles, to_upper_simple};

const PUNCTUATION: [char; 3] = ['.', ',', ';'];

/// Which name field is being normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    First,
    Last,
}

impl NameRole {
    /// Column heading used when showing a trace.
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "First name",
            Self::Last => "Last name",
        }
    }
}

/// Intermediate values of every normalization step for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTrace {
    pub role: NameRole,
    pub trimmed: String,
    pub without_punctuation: String,
    pub without_title: String,
    pub without_prefix: String,
    /// Set for first names only.
    pub given_name: Option<String>,
    pub folded: String,
    pub part: NamePart,
}

/// Runs the full pipeline and records each step.
pub fn trace_name(raw: &str, role: NameRole) -> NameTrace {
    let trimmed = raw.trim().to_string();
    let without_punctuation = remove_punctuation(&trimmed);
    let without_title = strip_title(&without_punctuation);
    let without_prefix = strip_name_prefix(&without_title);
    let given_name = match role {
        NameRole::First => Some(first_given_name(&without_prefix).to_string()),
        NameRole::Last => None,
    };
    let folded = fold_name(given_name.as_deref().unwrap_or(&without_prefix));
    let part = NamePart::fit(&folded);
    NameTrace {
        role,
        trimmed,
        without_punctuation,
        without_title,
        without_prefix,
        given_name,
        folded,
        part,
    }
}

/// Normalizes a raw name into its five-character field.
pub fn normalize_name(raw: &str, role: NameRole) -> NamePart {
    trace_name(raw, role).part
}

pub fn remove_punctuation(value: &str) -> String {
    value.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Removes a leading token found in `tokens` and uppercases the rest.
///
/// Space positions are tried from the rightmost one towards the start; the
/// first position whose left-hand text is in `tokens` wins and everything
/// after that space is returned. This lets multi-word entries such as
/// `VAN DER` match as one unit ahead of `VAN`. A space at index 0 is never
/// considered, and a token with nothing after it is never removed: `SIR`
/// stays `SIR`. Without a match the uppercased input is returned trimmed.
pub fn strip_leading_token(value: &str, tokens: &TokenSet) -> String {
    let upper = to_upper_simple(value);
    let mut boundary = upper.rfind(' ');
    while let Some(index) = boundary.filter(|&index| index > 0) {
        if tokens.contains(&upper[..index]) {
            return upper[index + 1..].to_string();
        }
        boundary = upper[..index].rfind(' ');
    }
    upper.trim().to_string()
}

pub fn strip_title(value: &str) -> String {
    strip_leading_token(value, titles())
}

pub fn strip_name_prefix(value: &str) -> String {
    strip_leading_token(value, prefixes())
}

/// Text before the first space. Further given names are ignored.
pub fn first_given_name(value: &str) -> &str {
    value.split_once(' ').map_or(value, |(head, _)| head)
}

/// Keeps characters in `'A'..='z'`, folds decorated letters and drops the rest.
pub fn fold_name(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| {
            if ('A'..='z').contains(&c) {
                Some(c)
            } else {
                fold_character(c)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_name_the_field() {
        assert_eq!(NameRole::First.label(), "First name");
        assert_eq!(trace_name("Jon", NameRole::Last).role.label(), "Last name");
    }

    #[test]
    fn punctuation_is_removed_everywhere() {
        assert_eq!(remove_punctuation("Dr. J.R.R; Tolkien,"), "Dr JRR Tolkien");
        assert_eq!(remove_punctuation("O'Brian-Smith"), "O'Brian-Smith");
    }

    #[test]
    fn strips_leading_title() {
        assert_eq!(strip_title("Sir Jon"), "JON");
        assert_eq!(strip_title("Dr Robert"), "ROBERT");
        assert_eq!(strip_title("jon"), "JON");
    }

    #[test]
    fn lone_token_is_not_stripped() {
        assert_eq!(strip_title("Sir"), "SIR");
        assert_eq!(strip_name_prefix("Van"), "VAN");
        assert_eq!(strip_name_prefix("  de  "), "DE");
    }

    #[test]
    fn only_leading_tokens_are_stripped() {
        assert_eq!(strip_title("Jon Sir"), "JON SIR");
        assert_eq!(strip_name_prefix("Rohe van der"), "ROHE VAN DER");
    }

    #[test]
    fn longest_multi_word_prefix_wins() {
        assert_eq!(strip_name_prefix("Van der Rohe"), "ROHE");
        assert_eq!(strip_name_prefix("van den Berg"), "BERG");
        assert_eq!(strip_name_prefix("Van Halen"), "HALEN");
        assert_eq!(strip_name_prefix("Mhic Giolla Bhrighde"), "BHRIGHDE");
    }

    #[test]
    fn rightmost_match_takes_everything_before_it() {
        // "DE LA" is tried before "DE" because its space is further right.
        assert_eq!(strip_name_prefix("de la Cruz"), "CRUZ");
        // "VON DER LEYEN" is tried first and is not a listed particle.
        assert_eq!(strip_name_prefix("von der Leyen Albrecht"), "LEYEN ALBRECHT");
    }

    #[test]
    fn title_then_prefix() {
        let trace = trace_name("Dr. Van Halen", NameRole::Last);
        assert_eq!(trace.without_punctuation, "Dr Van Halen");
        assert_eq!(trace.without_title, "VAN HALEN");
        assert_eq!(trace.without_prefix, "HALEN");
        assert_eq!(trace.part.as_str(), "HALEN");
    }

    #[test]
    fn first_name_keeps_first_token() {
        assert_eq!(first_given_name("PIERRE MARIE"), "PIERRE");
        assert_eq!(first_given_name("JON"), "JON");
        assert_eq!(first_given_name(" X"), "");
        assert_eq!(normalize_name("Erwin Rudolf Josef", NameRole::First).as_str(), "ERWIN");
        assert_eq!(normalize_name("Jon Ian", NameRole::Last).as_str(), "JONIA");
    }

    #[test]
    fn folding_drops_unmappable_characters() {
        assert_eq!(fold_name("O'BRIAN"), "OBRIAN");
        assert_eq!(fold_name("AMY-ALLY"), "AMYALLY");
        assert_eq!(fold_name("GARÇÃO DE"), "GARCAODE");
        assert_eq!(fold_name("ЖУКОВ"), "");
        assert_eq!(fold_name("R2D2"), "RD");
    }

    #[test]
    fn folding_keeps_ascii_range_symbols() {
        assert_eq!(fold_name("A_B^C"), "A_B^C");
    }

    #[test]
    fn sharp_s_folds_to_single_s() {
        assert_eq!(normalize_name("Voß", NameRole::Last).as_str(), "VOS##");
        assert_eq!(normalize_name("Voẞ", NameRole::Last).as_str(), "VOS##");
    }

    #[test]
    fn short_results_are_padded() {
        assert_eq!(normalize_name("   ", NameRole::Last).as_str(), "#####");
        assert_eq!(normalize_name("...", NameRole::First).as_str(), "#####");
        assert_eq!(normalize_name("Mr ", NameRole::Last).as_str(), "MR###");
    }

    #[test]
    fn trace_given_name_only_for_first_names() {
        assert_eq!(
            trace_name("Jon Ian", NameRole::First).given_name.as_deref(),
            Some("JON")
        );
        assert_eq!(trace_name("Jon Ian", NameRole::Last).given_name, None);
    }
}
