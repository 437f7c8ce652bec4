/// Uppercases each character on its own.
///
/// Characters whose uppercase form is longer than one character (`ß`,
/// `ŉ`, ligatures) are kept as they are, so the fold table still sees them.
pub fn to_upper_simple(value: &str) -> String {
    value.chars().map(upper_char).collect()
}

fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_latin_letters() {
        assert_eq!(to_upper_simple("van der Rohe"), "VAN DER ROHE");
        assert_eq!(to_upper_simple("ødegård"), "ØDEGÅRD");
        assert_eq!(to_upper_simple("mhíc"), "MHÍC");
    }

    #[test]
    fn keeps_characters_without_single_uppercase() {
        assert_eq!(to_upper_simple("voß"), "VOß");
        assert_eq!(to_upper_simple("ẞ"), "ẞ");
    }

    #[test]
    fn leaves_symbols_alone() {
        assert_eq!(to_upper_simple("o'brian-1"), "O'BRIAN-1");
    }
}
