//! Folding of decorated Latin letters to plain `A`–`Z`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Decorated code point to ASCII base letter. Upper and lower case forms map
/// to the same uppercase target.
#[rustfmt::skip]
pub const FOLD_TABLE: &[(char, char)] = &[
    // A
    ('\u{00C4}', 'A'), ('\u{00E4}', 'A'), ('\u{00C0}', 'A'), ('\u{00E0}', 'A'),
    ('\u{00C1}', 'A'), ('\u{00E1}', 'A'), ('\u{00C2}', 'A'), ('\u{00E2}', 'A'),
    ('\u{00C3}', 'A'), ('\u{00E3}', 'A'), ('\u{00C5}', 'A'), ('\u{00E5}', 'A'),
    ('\u{01CD}', 'A'), ('\u{01CE}', 'A'), ('\u{0104}', 'A'), ('\u{0105}', 'A'),
    ('\u{0102}', 'A'), ('\u{0103}', 'A'), ('\u{00C6}', 'A'), ('\u{00E6}', 'A'),
    // C
    ('\u{00C7}', 'C'), ('\u{00E7}', 'C'), ('\u{0106}', 'C'), ('\u{0107}', 'C'),
    ('\u{0108}', 'C'), ('\u{0109}', 'C'), ('\u{010C}', 'C'), ('\u{010D}', 'C'),
    // D
    ('\u{010E}', 'D'), ('\u{0111}', 'D'), ('\u{0110}', 'D'), ('\u{010F}', 'D'),
    ('\u{00F0}', 'D'),
    // E
    ('\u{00C8}', 'E'), ('\u{00E8}', 'E'), ('\u{00C9}', 'E'), ('\u{00E9}', 'E'),
    ('\u{00CA}', 'E'), ('\u{00EA}', 'E'), ('\u{00CB}', 'E'), ('\u{00EB}', 'E'),
    ('\u{011A}', 'E'), ('\u{011B}', 'E'), ('\u{0118}', 'E'), ('\u{0119}', 'E'),
    // G
    ('\u{011C}', 'G'), ('\u{011D}', 'G'), ('\u{0122}', 'G'), ('\u{0123}', 'G'),
    ('\u{011E}', 'G'), ('\u{011F}', 'G'),
    // H
    ('\u{0124}', 'H'), ('\u{0125}', 'H'),
    // I
    ('\u{00CC}', 'I'), ('\u{00EC}', 'I'), ('\u{00CD}', 'I'), ('\u{00ED}', 'I'),
    ('\u{00CE}', 'I'), ('\u{00EE}', 'I'), ('\u{00CF}', 'I'), ('\u{00EF}', 'I'),
    ('\u{0131}', 'I'),
    // J
    ('\u{0134}', 'J'), ('\u{0135}', 'J'),
    // K
    ('\u{0136}', 'K'), ('\u{0137}', 'K'),
    // L
    ('\u{0139}', 'L'), ('\u{013A}', 'L'), ('\u{013B}', 'L'), ('\u{013C}', 'L'),
    ('\u{0141}', 'L'), ('\u{0142}', 'L'), ('\u{013D}', 'L'), ('\u{013E}', 'L'),
    // N
    ('\u{00D1}', 'N'), ('\u{00F1}', 'N'), ('\u{0143}', 'N'), ('\u{0144}', 'N'),
    ('\u{0147}', 'N'), ('\u{0148}', 'N'),
    // O
    ('\u{00D6}', 'O'), ('\u{00F6}', 'O'), ('\u{00D2}', 'O'), ('\u{00F2}', 'O'),
    ('\u{00D3}', 'O'), ('\u{00F3}', 'O'), ('\u{00D4}', 'O'), ('\u{00F4}', 'O'),
    ('\u{00D5}', 'O'), ('\u{00F5}', 'O'), ('\u{0150}', 'O'), ('\u{0151}', 'O'),
    ('\u{00D8}', 'O'), ('\u{00F8}', 'O'), ('\u{0152}', 'O'), ('\u{0153}', 'O'),
    // R
    ('\u{0154}', 'R'), ('\u{0155}', 'R'), ('\u{0158}', 'R'), ('\u{0159}', 'R'),
    // S
    ('\u{1E9E}', 'S'), ('\u{00DF}', 'S'), ('\u{015A}', 'S'), ('\u{015B}', 'S'),
    ('\u{015C}', 'S'), ('\u{015D}', 'S'), ('\u{015E}', 'S'), ('\u{015F}', 'S'),
    ('\u{0160}', 'S'), ('\u{0161}', 'S'), ('\u{0218}', 'S'), ('\u{0219}', 'S'),
    // T
    ('\u{0164}', 'T'), ('\u{0165}', 'T'), ('\u{0162}', 'T'), ('\u{0163}', 'T'),
    ('\u{00DE}', 'T'), ('\u{00FE}', 'T'), ('\u{021A}', 'T'), ('\u{021B}', 'T'),
    // U
    ('\u{00DC}', 'U'), ('\u{00FC}', 'U'), ('\u{00D9}', 'U'), ('\u{00F9}', 'U'),
    ('\u{00DA}', 'U'), ('\u{00FA}', 'U'), ('\u{00DB}', 'U'), ('\u{00FB}', 'U'),
    ('\u{0170}', 'U'), ('\u{0171}', 'U'), ('\u{0168}', 'U'), ('\u{0169}', 'U'),
    ('\u{0172}', 'U'), ('\u{0173}', 'U'), ('\u{016E}', 'U'), ('\u{016F}', 'U'),
    // W
    ('\u{0174}', 'W'), ('\u{0175}', 'W'),
    // Y
    ('\u{00DD}', 'Y'), ('\u{00FD}', 'Y'), ('\u{0178}', 'Y'), ('\u{00FF}', 'Y'),
    ('\u{0176}', 'Y'), ('\u{0177}', 'Y'),
    // Z
    ('\u{0179}', 'Z'), ('\u{017A}', 'Z'), ('\u{017D}', 'Z'), ('\u{017E}', 'Z'),
    ('\u{017B}', 'Z'), ('\u{017C}', 'Z'),
];

static FOLD_MAP: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| FOLD_TABLE.iter().copied().collect());

/// ASCII base letter for a decorated letter, or `None` when the character has
/// no entry and should be dropped.
pub fn fold_character(c: char) -> Option<char> {
    FOLD_MAP.get(&c).copied()
}
