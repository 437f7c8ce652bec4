use std::collections::HashSet;

use crate::text::to_upper_simple;

/// A set of uppercase tokens.
///
/// Entries are uppercased when the set is built; [`TokenSet::contains`]
/// expects an already uppercased probe and [`TokenSet::contains_ignore_case`]
/// uppercases it first.
#[derive(Debug, Clone)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|token| to_upper_simple(token.as_ref()))
            .collect();
        Self { tokens }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn contains_ignore_case(&self, token: &str) -> bool {
        self.tokens.contains(&to_upper_simple(token))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in ascending order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.tokens.iter().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_and_uppercases() {
        let set = TokenSet::new(["von", "VON", "van der"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("VON"));
        assert!(set.contains("VAN DER"));
        assert!(!set.contains("von"));
    }

    #[test]
    fn ignore_case_probe() {
        let set = TokenSet::new(["NO", "GB"]);
        assert!(set.contains_ignore_case("no"));
        assert!(set.contains_ignore_case("Gb"));
        assert!(!set.contains_ignore_case("uk"));
    }

    #[test]
    fn sorted_is_ascending() {
        let set = TokenSet::new(["MR", "DR", "SIR"]);
        assert_eq!(set.sorted(), vec!["DR", "MR", "SIR"]);
        assert!(!set.is_empty());
    }
}
